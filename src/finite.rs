//! A module containing [`FiniteSet`] and [`Singleton`].

use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::error::SetError;
use crate::expr::Expr;
use crate::interval::{Interval, IntervalBounds};
use crate::rel::Rel;
use crate::set::Set;
use crate::union::Union;
use crate::utils::cmp_or_equal;

/// A finite enumerated set of distinct symbolic values.
///
/// Never empty and never a single concrete number: the
/// [`FiniteSet::new`] factory collapses those shapes to [`Set::Empty`]
/// and [`Singleton`]. Elements are deduplicated by structural
/// equality, and element order does not affect equality.
///
/// # Examples
/// ```
/// use symset::{Expr, FiniteSet, Set, Singleton};
///
/// assert_eq!(FiniteSet::new([1, 1, 2]), FiniteSet::new([2, 1]));
/// assert_eq!(FiniteSet::new(Vec::<Expr>::new()), Set::Empty);
/// assert_eq!(FiniteSet::new([7]), Singleton::new(7).into());
/// ```
#[derive(Debug, Clone)]
pub struct FiniteSet {
	elements: SmallVec<[Expr; 4]>,
}

impl FiniteSet {
	/// Creates the set of the given values, coerced and deduplicated.
	///
	/// No values make [`Set::Empty`] and a single concrete number
	/// makes a [`Singleton`]; a single symbolic element stays a
	/// `FiniteSet`.
	pub fn new<I>(elements: I) -> Set
	where
		I: IntoIterator,
		I::Item: Into<Expr>,
	{
		let mut seen: HashSet<Expr> = HashSet::new();
		let mut distinct: SmallVec<[Expr; 4]> = SmallVec::new();
		for element in elements {
			let element = element.into();
			if seen.insert(element.clone()) {
				distinct.push(element);
			}
		}

		if distinct.is_empty() {
			return Set::Empty;
		}
		if distinct.len() == 1 && distinct[0].is_number() {
			return Singleton::new(distinct.remove(0)).into();
		}
		Set::Finite(FiniteSet { elements: distinct })
	}

	/// The number of elements.
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	/// Iterates over the elements in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &Expr> {
		self.elements.iter()
	}

	/// The elements in insertion order.
	pub fn elements(&self) -> &[Expr] {
		&self.elements
	}

	/// Membership by structural equality.
	pub fn contains(&self, value: &Expr) -> bool {
		self.elements.contains(value)
	}

	/// The elements in display order: sorted by value when every
	/// element is concrete, insertion order otherwise.
	fn ordered(&self) -> Vec<&Expr> {
		if self.elements.iter().all(Expr::is_number) {
			self.elements
				.iter()
				.sorted_by(|a, b| cmp_or_equal(a, b))
				.collect()
		} else {
			self.elements.iter().collect()
		}
	}

	/// The exact element-level union with another finite set. Unlike
	/// the generic union this always stays a finite collection.
	pub fn union_finite(&self, other: &FiniteSet) -> Set {
		FiniteSet::new(self.iter().chain(other.iter()).cloned())
	}

	/// The element-level intersection with another finite set.
	pub fn intersect_finite(&self, other: &FiniteSet) -> Set {
		FiniteSet::new(
			self.iter().filter(|element| other.contains(element)).cloned(),
		)
	}

	/// Keeps the elements that are members of `other`.
	///
	/// # Errors
	///
	/// Returns [`SetError::IndeterminateMembership`] if a membership
	/// test stays symbolic.
	pub(crate) fn filter_contained(&self, other: &Set) -> Result<Set, SetError> {
		let mut kept = Vec::new();
		for element in self.iter() {
			if other.contains_point(element)? {
				kept.push(element.clone());
			}
		}
		Ok(FiniteSet::new(kept))
	}

	/// The set of reals that are not elements: the open intervals
	/// between consecutive elements plus the two unbounded ends.
	///
	/// # Errors
	///
	/// Returns [`SetError::NonNumericElements`] unless every element
	/// is concrete, since building the gaps needs a total order.
	///
	/// # Examples
	/// ```
	/// use symset::interval::{ee, eu, ue};
	/// use symset::{FiniteSet, Union};
	///
	/// assert_eq!(
	/// 	FiniteSet::new([1, 2, 3]).complement(),
	/// 	Ok(Union::new([ue(1), ee(1, 2), ee(2, 3), eu(3)])),
	/// );
	/// ```
	pub fn complement(&self) -> Result<Set, SetError> {
		if !self.elements.iter().all(Expr::is_number) {
			return Err(SetError::NonNumericElements);
		}

		let sorted = self.ordered();
		let mut gaps = Vec::with_capacity(sorted.len() + 1);
		gaps.push(Interval::of_real(
			Expr::NegInfinity,
			sorted[0].clone(),
			true,
			true,
		));
		for (a, b) in sorted.iter().tuple_windows() {
			gaps.push(Interval::of_real(
				(*a).clone(),
				(*b).clone(),
				true,
				true,
			));
		}
		gaps.push(Interval::of_real(
			sorted[sorted.len() - 1].clone(),
			Expr::Infinity,
			true,
			true,
		));
		Ok(Union::new(gaps))
	}

	/// The least element, symbolic when the order is partly unknown.
	pub fn inf(&self) -> Expr {
		Expr::min(self.elements.iter().cloned())
	}

	/// The greatest element, symbolic when the order is partly
	/// unknown.
	pub fn sup(&self) -> Expr {
		Expr::max(self.elements.iter().cloned())
	}

	/// Rewrites membership as a disjunction of equalities against
	/// `symbol`.
	pub fn as_relational(&self, symbol: &Expr) -> Rel {
		Rel::or(
			self.ordered()
				.into_iter()
				.map(|element| Rel::eq(symbol.clone(), element.clone())),
		)
	}
}

impl PartialEq for FiniteSet {
	fn eq(&self, other: &Self) -> bool {
		self.elements.len() == other.elements.len()
			&& self.elements.iter().all(|element| other.contains(element))
	}
}

impl Eq for FiniteSet {}

impl From<FiniteSet> for Set {
	fn from(finite: FiniteSet) -> Set {
		Set::Finite(finite)
	}
}

impl fmt::Display for FiniteSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{{{}}}", self.ordered().iter().format(", "))
	}
}

/// A one-element set, where the interval and finite shapes meet.
///
/// `Singleton::new(v)` is at once the degenerate closed interval
/// `[v, v]` and the one-element collection `{v}`, and it answers both
/// kinds of queries: it implements [`IntervalBounds`] with both sides
/// closed and zero measure, and it offers finite-style membership and
/// iteration.
///
/// # Examples
/// ```
/// use symset::interval::ii;
/// use symset::{Expr, IntervalBounds, Singleton};
///
/// let point = Singleton::new(2);
/// assert_eq!(point.start(), &Expr::from(2));
/// assert_eq!(point.left_open(), false);
/// assert!(point.contains(&Expr::from(2)));
/// assert_eq!(ii(2, 2), point.into());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Singleton {
	value: Expr,
}

impl Singleton {
	/// Creates the one-element set `{value}`.
	pub fn new(value: impl Into<Expr>) -> Singleton {
		Singleton {
			value: value.into(),
		}
	}

	/// The single element.
	pub fn value(&self) -> &Expr {
		&self.value
	}

	/// Membership by structural equality.
	pub fn contains(&self, value: &Expr) -> bool {
		self.value == *value
	}

	/// Iterates over the single element.
	pub fn iter(&self) -> impl Iterator<Item = &Expr> {
		std::iter::once(&self.value)
	}

	/// Everything except this point: two unbounded open intervals
	/// meeting at the value.
	///
	/// # Errors
	///
	/// Returns [`SetError::NonNumericElements`] if the value is
	/// symbolic.
	pub fn complement(&self) -> Result<Set, SetError> {
		if !self.value.is_number() {
			return Err(SetError::NonNumericElements);
		}
		let below = Interval::of_real(
			Expr::NegInfinity,
			self.value.clone(),
			true,
			true,
		);
		let above = Interval::of_real(
			self.value.clone(),
			Expr::Infinity,
			true,
			true,
		);
		Ok(Union::new([below, above]))
	}

	/// Rewrites membership as `symbol == value`.
	pub fn as_relational(&self, symbol: &Expr) -> Rel {
		Rel::eq(symbol.clone(), self.value.clone())
	}
}

impl IntervalBounds for Singleton {
	fn start(&self) -> &Expr {
		&self.value
	}

	fn end(&self) -> &Expr {
		&self.value
	}

	fn left_open(&self) -> bool {
		false
	}

	fn right_open(&self) -> bool {
		false
	}
}

impl From<Singleton> for Set {
	fn from(singleton: Singleton) -> Set {
		Set::Singleton(singleton)
	}
}

impl fmt::Display for Singleton {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{{{}}}", self.value)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::interval::{ee, eu, ii, ue};

	#[test]
	fn duplicate_elements_collapse() {
		assert_eq!(FiniteSet::new([1, 1, 2]), FiniteSet::new([1, 2]));
	}

	#[test]
	fn equality_ignores_element_order() {
		assert_eq!(FiniteSet::new([1, 2, 3]), FiniteSet::new([3, 1, 2]));
		assert_ne!(FiniteSet::new([1, 2]), FiniteSet::new([1, 3]));
	}

	#[test]
	fn degenerate_shapes_change_type() {
		assert_eq!(FiniteSet::new(Vec::<Expr>::new()), Set::Empty);
		assert_eq!(FiniteSet::new([7]), Singleton::new(7).into());
		// a single symbolic element stays a finite set
		let x = Expr::symbol("x");
		let kept = FiniteSet::new([x.clone()]);
		assert!(matches!(kept, Set::Finite(_)));
		assert_eq!(kept, FiniteSet::new([x]));
	}

	#[test]
	fn singleton_equals_one_element_finite_set() {
		let x = Expr::real_symbol("x");
		let as_interval = ii(x.clone(), x.clone());
		assert!(matches!(as_interval, Set::Singleton(_)));
		assert_eq!(as_interval, FiniteSet::new([x]));
	}

	#[test]
	fn membership() {
		let set = FiniteSet::new([1, 2]);
		assert_eq!(set.contains_point(&Expr::from(1)), Ok(true));
		assert_eq!(set.contains_point(&Expr::from(5)), Ok(false));
		// symbols are matched structurally, not solved for
		let x = Expr::symbol("x");
		let symbolic = FiniteSet::new([x.clone(), Expr::from(1)]);
		assert_eq!(symbolic.contains_point(&x), Ok(true));
		assert_eq!(symbolic.contains_point(&Expr::symbol("y")), Ok(false));
	}

	#[test]
	fn finite_union_stays_finite() {
		assert_eq!(
			FiniteSet::new([0, 1]).union(&FiniteSet::new([2, 3])),
			FiniteSet::new([0, 1, 2, 3])
		);
		let x = Expr::symbol("x");
		assert_eq!(
			FiniteSet::new([x.clone(), Expr::from(1), Expr::from(2)])
				.union(&FiniteSet::new([2, 3])),
			FiniteSet::new([x, Expr::from(1), Expr::from(2), Expr::from(3)])
		);
	}

	#[test]
	fn finite_intersection() {
		assert_eq!(
			FiniteSet::new([1, 2, 3]).intersect(&FiniteSet::new([2, 3, 4])),
			Ok(FiniteSet::new([2, 3]))
		);
		assert_eq!(
			FiniteSet::new([1, 2]).intersect(&FiniteSet::new([3, 4])),
			Ok(Set::Empty)
		);
		// a single surviving number collapses to a singleton
		assert_eq!(
			FiniteSet::new([1, 2]).intersect(&FiniteSet::new([2, 3])),
			Ok(Singleton::new(2).into())
		);
	}

	#[test]
	fn intersection_with_interval_filters_elements() {
		assert_eq!(
			FiniteSet::new([0, 1, 5]).intersect(&ii(0, 2)),
			Ok(FiniteSet::new([0, 1]))
		);
		assert_eq!(
			ii(0, 2).intersect(&FiniteSet::new([0, 1, 5])),
			Ok(FiniteSet::new([0, 1]))
		);
	}

	#[test]
	fn indeterminate_membership_surfaces() {
		let a = Expr::real_symbol("a");
		let interval = Interval::new(0, a, false, false).unwrap();
		let result = FiniteSet::new([1, 2]).intersect(&interval);
		assert!(matches!(
			result,
			Err(SetError::IndeterminateMembership(_))
		));
	}

	#[test]
	fn complement_builds_gap_intervals() {
		assert_eq!(
			FiniteSet::new([1, 2, 3]).complement(),
			Ok(Union::new([ue(1), ee(1, 2), ee(2, 3), eu(3)]))
		);
	}

	#[test]
	fn complement_requires_numbers() {
		let x = Expr::real_symbol("x");
		assert_eq!(
			FiniteSet::new([x, Expr::from(1)]).complement(),
			Err(SetError::NonNumericElements)
		);
	}

	#[test]
	fn singleton_interval_accessors() {
		let point = Singleton::new(2);
		assert_eq!(point.start(), &Expr::from(2));
		assert_eq!(point.end(), &Expr::from(2));
		assert!(!point.left_open());
		assert!(!point.right_open());
		assert_eq!(Set::from(point).measure(), Expr::zero());
	}

	#[test]
	fn singleton_complement() {
		assert_eq!(
			Singleton::new(0).complement(),
			Ok(ue(0) + eu(0))
		);
	}

	#[test]
	fn bounds_of_finite_sets() {
		let set = FiniteSet::new([3, 1, 2]);
		assert_eq!(set.inf(), Ok(Expr::from(1)));
		assert_eq!(set.sup(), Ok(Expr::from(3)));
		let x = Expr::real_symbol("x");
		let symbolic = FiniteSet::new([x.clone(), Expr::from(1)]);
		assert_eq!(
			symbolic.inf(),
			Ok(Expr::Min(vec![x.clone(), Expr::from(1)]))
		);
		assert_eq!(symbolic.sup(), Ok(Expr::Max(vec![x, Expr::from(1)])));
	}

	#[test]
	fn relational_form() {
		let x = Expr::real_symbol("x");
		assert_eq!(
			FiniteSet::new([1, 2]).as_relational(&x),
			Rel::Or(vec![
				Rel::Eq(x.clone(), Expr::from(1)),
				Rel::Eq(x.clone(), Expr::from(2)),
			])
		);
		assert_eq!(
			Set::from(Singleton::new(3)).as_relational(&x),
			Rel::Eq(x, Expr::from(3))
		);
	}

	#[test]
	fn display_sorts_numeric_elements() {
		assert_eq!(FiniteSet::new([3, 1, 2]).to_string(), "{1, 2, 3}");
		let x = Expr::symbol("x");
		assert_eq!(
			FiniteSet::new([x, Expr::from(1)]).to_string(),
			"{x, 1}"
		);
		assert_eq!(Singleton::new(2).to_string(), "{2}");
	}
}
