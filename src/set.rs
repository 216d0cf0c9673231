//! A module containing [`Set`], the sum of every set shape and the
//! home of the shared operation surface.

use std::fmt;
use std::ops::{Add, Neg, Not, Sub};

use crate::error::SetError;
use crate::expr::Expr;
use crate::finite::{FiniteSet, Singleton};
use crate::interval::{uu, Interval, IntervalBounds};
use crate::rel::Rel;
use crate::union::Union;

/// Any set of real numbers this crate can represent.
///
/// Every factory returns a `Set` rather than the shape it was asked
/// for, because normalization may change the shape: a reversed
/// interval is [`Set::Empty`], a one-point interval is a
/// [`Singleton`], a one-component union is that component. Once
/// built, a set is an immutable value; operations return new sets.
///
/// # Examples
/// ```
/// use symset::interval::{ei, ii};
/// use symset::{Expr, Set};
///
/// let set = ii(0, 1) + ii(2, 3);
/// assert_eq!(set.measure(), Expr::from(2));
/// assert_eq!(set.contains_point(&Expr::from(0.5)), Ok(true));
/// assert_eq!(set.contains_point(&Expr::from(1.5)), Ok(false));
///
/// // set difference via the `-` operator
/// assert_eq!(ii(0, 2) - ii(0, 1), Ok(ei(1, 2)));
/// ```
#[derive(Debug, Clone)]
pub enum Set {
	/// The set with no elements.
	Empty,
	/// A one-element set.
	Singleton(Singleton),
	/// A continuous range spanning more than one point.
	Interval(Interval),
	/// A finite collection of discrete values.
	Finite(FiniteSet),
	/// A canonical combination of disjoint components.
	Union(Union),
}

impl Set {
	/// Returns `true` if this is the empty set.
	pub fn is_empty(&self) -> bool {
		matches!(self, Set::Empty)
	}

	/// The union of two sets.
	///
	/// Two finite collections merge exactly at the element level;
	/// every other pairing goes through the canonicalizing
	/// [`Union::new`].
	///
	/// # Examples
	/// ```
	/// use symset::interval::ii;
	///
	/// let union = ii(0, 1).union(&ii(2, 3));
	/// assert_eq!(union.to_string(), "Union([0, 1], [2, 3])");
	/// assert_eq!(ii(1, 2).union(&ii(2, 3)), ii(1, 3));
	/// ```
	pub fn union(&self, other: &Set) -> Set {
		match (self, other) {
			(Set::Finite(a), Set::Finite(b)) => a.union_finite(b),
			(Set::Finite(a), Set::Singleton(b)) => FiniteSet::new(
				a.iter().chain(std::iter::once(b.value())).cloned(),
			),
			(Set::Singleton(a), Set::Finite(b)) => FiniteSet::new(
				std::iter::once(a.value()).chain(b.iter()).cloned(),
			),
			(Set::Singleton(a), Set::Singleton(b)) => {
				FiniteSet::new([a.value().clone(), b.value().clone()])
			}
			_ => Union::new([self.clone(), other.clone()]),
		}
	}

	/// The intersection of two sets.
	///
	/// Dispatches on the pair of shapes: the empty set absorbs,
	/// finite collections filter their elements by membership, unions
	/// distribute over their components, and intervals overlap. A
	/// pairing implemented on one side only is delegated to that side
	/// with the operands swapped, once.
	///
	/// # Errors
	///
	/// Returns [`SetError::SymbolicEndpoints`] when interval overlap
	/// is undecidable and [`SetError::IndeterminateMembership`] when
	/// an element filter is.
	///
	/// # Examples
	/// ```
	/// use symset::interval::ii;
	///
	/// assert_eq!(ii(1, 3).intersect(&ii(1, 2)), Ok(ii(1, 2)));
	/// ```
	pub fn intersect(&self, other: &Set) -> Result<Set, SetError> {
		match (self, other) {
			(Set::Empty, _) | (_, Set::Empty) => Ok(Set::Empty),
			(Set::Interval(a), Set::Interval(b)) => a.intersect_interval(b),
			(Set::Finite(a), Set::Finite(b)) => Ok(a.intersect_finite(b)),
			(Set::Finite(a), _) => a.filter_contained(other),
			(Set::Singleton(a), _) => {
				if other.contains_point(a.value())? {
					Ok(self.clone())
				} else {
					Ok(Set::Empty)
				}
			}
			(_, Set::Finite(_) | Set::Singleton(_)) => other.intersect(self),
			(Set::Union(a), Set::Interval(_)) => a.intersect_each(other),
			(Set::Union(_), Set::Union(b)) => {
				let mut pieces = Vec::with_capacity(b.components().len());
				for component in b.components() {
					pieces.push(self.intersect(component)?);
				}
				Ok(Union::new(pieces))
			}
			(Set::Interval(_), Set::Union(_)) => other.intersect(self),
		}
	}

	/// The set of reals not in this set.
	///
	/// # Errors
	///
	/// Returns [`SetError::NonNumericElements`] when a finite
	/// component holds symbolic elements, and propagates
	/// [`SetError::SymbolicEndpoints`] from the interval
	/// intersections behind a union complement.
	///
	/// # Examples
	/// ```
	/// use symset::interval::{eu, ii, ue};
	///
	/// assert_eq!(ii(0, 1).complement(), Ok(ue(0) + eu(1)));
	/// ```
	pub fn complement(&self) -> Result<Set, SetError> {
		match self {
			Set::Empty => Ok(uu()),
			Set::Interval(interval) => Ok(interval.complement()),
			Set::Singleton(singleton) => singleton.complement(),
			Set::Finite(finite) => finite.complement(),
			Set::Union(union) => union.complement(),
		}
	}

	/// The elements of this set that are not in `other`.
	///
	/// Finite collections filter their elements directly, which works
	/// even against sets whose complement is unrepresentable;
	/// everything else intersects with the complement of `other`.
	///
	/// # Examples
	/// ```
	/// use symset::interval::ii;
	/// use symset::FiniteSet;
	///
	/// let set = ii(1, 3).difference(&FiniteSet::new([2])).unwrap();
	/// assert_eq!(set.to_string(), "Union([1, 2), (2, 3])");
	/// ```
	pub fn difference(&self, other: &Set) -> Result<Set, SetError> {
		match self {
			Set::Finite(finite) => {
				let mut kept = Vec::new();
				for element in finite.iter() {
					if !other.contains_point(element)? {
						kept.push(element.clone());
					}
				}
				Ok(FiniteSet::new(kept))
			}
			Set::Singleton(singleton) => {
				if other.contains_point(singleton.value())? {
					Ok(Set::Empty)
				} else {
					Ok(self.clone())
				}
			}
			_ => self.intersect(&other.complement()?),
		}
	}

	/// The membership condition for `value`.
	///
	/// With concrete operands this is [`Rel::True`] or
	/// [`Rel::False`]; with symbolic ones it is the condition under
	/// which `value` lies in the set. Finite collections always
	/// answer concretely, by structural equality.
	///
	/// # Examples
	/// ```
	/// use symset::interval::ii;
	/// use symset::{Expr, Rel};
	///
	/// assert_eq!(ii(0, 1).contains(&Expr::from(0.5)), Rel::True);
	///
	/// let x = Expr::real_symbol("x");
	/// assert_eq!(ii(0, 1).contains(&x).to_string(), "And(0 <= x, x <= 1)");
	/// ```
	pub fn contains(&self, value: &Expr) -> Rel {
		match self {
			Set::Empty => Rel::False,
			Set::Interval(interval) => interval.contains(value),
			Set::Singleton(singleton) => {
				if singleton.contains(value) {
					Rel::True
				} else {
					Rel::False
				}
			}
			Set::Finite(finite) => {
				if finite.contains(value) {
					Rel::True
				} else {
					Rel::False
				}
			}
			Set::Union(union) => union.contains(value),
		}
	}

	/// Membership as a plain boolean.
	///
	/// # Errors
	///
	/// Returns [`SetError::IndeterminateMembership`] if the condition
	/// from [`Set::contains`] stays symbolic.
	pub fn contains_point(&self, value: &Expr) -> Result<bool, SetError> {
		let condition = self.contains(value);
		condition
			.as_bool()
			.ok_or(SetError::IndeterminateMembership(condition))
	}

	/// Returns `true` if `other` is a subset of this set, decided by
	/// intersecting: `other ⊆ self` exactly when `self ∩ other`
	/// gives back `other`.
	///
	/// # Errors
	///
	/// Propagates the errors of [`Set::intersect`].
	pub fn subset(&self, other: &Set) -> Result<bool, SetError> {
		Ok(self.intersect(other)? == *other)
	}

	/// The total length of the set.
	///
	/// Finite collections and single points have measure zero. For a
	/// union this is the plain sum of component measures, which the
	/// canonical form keeps free of double counting.
	pub fn measure(&self) -> Expr {
		match self {
			Set::Empty => Expr::zero(),
			Set::Singleton(_) | Set::Finite(_) => Expr::zero(),
			Set::Interval(interval) => interval.measure(),
			Set::Union(union) => union.measure(),
		}
	}

	/// The greatest lower bound, symbolic when endpoints are.
	///
	/// # Errors
	///
	/// Returns [`SetError::UndefinedInfimum`] for the empty set.
	pub fn inf(&self) -> Result<Expr, SetError> {
		match self {
			Set::Empty => Err(SetError::UndefinedInfimum),
			Set::Interval(interval) => Ok(interval.start().clone()),
			Set::Singleton(singleton) => Ok(singleton.value().clone()),
			Set::Finite(finite) => Ok(finite.inf()),
			Set::Union(union) => {
				let mut bounds = Vec::with_capacity(union.components().len());
				for component in union.components() {
					bounds.push(component.inf()?);
				}
				Ok(Expr::min(bounds))
			}
		}
	}

	/// The least upper bound, symbolic when endpoints are.
	///
	/// # Errors
	///
	/// Returns [`SetError::UndefinedSupremum`] for the empty set.
	pub fn sup(&self) -> Result<Expr, SetError> {
		match self {
			Set::Empty => Err(SetError::UndefinedSupremum),
			Set::Interval(interval) => Ok(interval.end().clone()),
			Set::Singleton(singleton) => Ok(singleton.value().clone()),
			Set::Finite(finite) => Ok(finite.sup()),
			Set::Union(union) => {
				let mut bounds = Vec::with_capacity(union.components().len());
				for component in union.components() {
					bounds.push(component.sup()?);
				}
				Ok(Expr::max(bounds))
			}
		}
	}

	/// Rewrites membership in the set as equalities and inequalities
	/// against the free variable `symbol`.
	///
	/// # Examples
	/// ```
	/// use symset::interval::ii;
	/// use symset::{Expr, FiniteSet};
	///
	/// let x = Expr::real_symbol("x");
	/// let set = ii(0, 1) + FiniteSet::new([3]);
	/// assert_eq!(
	/// 	set.as_relational(&x).to_string(),
	/// 	"Or(And(0 <= x, x <= 1), x == 3)",
	/// );
	/// ```
	pub fn as_relational(&self, symbol: &Expr) -> Rel {
		match self {
			Set::Empty => Rel::False,
			Set::Interval(interval) => interval.as_relational(symbol),
			Set::Singleton(singleton) => singleton.as_relational(symbol),
			Set::Finite(finite) => finite.as_relational(symbol),
			Set::Union(union) => union.as_relational(symbol),
		}
	}
}

impl PartialEq for Set {
	/// Structural equality, with one cross-shape case: a [`Singleton`]
	/// equals a one-element [`FiniteSet`] holding the same value, as
	/// both denote the same collection.
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Set::Empty, Set::Empty) => true,
			(Set::Interval(a), Set::Interval(b)) => a == b,
			(Set::Singleton(a), Set::Singleton(b)) => a == b,
			(Set::Finite(a), Set::Finite(b)) => a == b,
			(Set::Union(a), Set::Union(b)) => a == b,
			(Set::Singleton(a), Set::Finite(b))
			| (Set::Finite(b), Set::Singleton(a)) => {
				b.len() == 1 && b.contains(a.value())
			}
			_ => false,
		}
	}
}

impl Eq for Set {}

// Operator Sugar ==========================

impl Add for Set {
	type Output = Set;

	/// `a + b` is the union.
	fn add(self, other: Set) -> Set {
		self.union(&other)
	}
}

impl Sub for Set {
	type Output = Result<Set, SetError>;

	/// `a - b` is the set difference.
	fn sub(self, other: Set) -> Result<Set, SetError> {
		self.difference(&other)
	}
}

impl Neg for Set {
	type Output = Result<Set, SetError>;

	/// `-a` is the complement.
	fn neg(self) -> Result<Set, SetError> {
		self.complement()
	}
}

impl Not for Set {
	type Output = Result<Set, SetError>;

	/// `!a` is the complement.
	fn not(self) -> Result<Set, SetError> {
		self.complement()
	}
}

impl fmt::Display for Set {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Set::Empty => write!(f, "EmptySet"),
			Set::Interval(interval) => interval.fmt(f),
			Set::Singleton(singleton) => singleton.fmt(f),
			Set::Finite(finite) => finite.fmt(f),
			Set::Union(union) => union.fmt(f),
		}
	}
}

// Serde ==========================

#[cfg(feature = "serde")]
mod serde {
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::error::SetError;
	use crate::expr::Expr;
	use crate::finite::{FiniteSet, Singleton};
	use crate::interval::{Interval, IntervalBounds};
	use crate::set::Set;
	use crate::union::Union;

	/// The raw constructor data of a set. Deserialization rebuilds
	/// through the factories, so canonical form is re-established no
	/// matter what the wire carried.
	#[derive(Serialize, Deserialize)]
	enum RawSet {
		Empty,
		Singleton(Expr),
		Interval {
			start: Expr,
			end: Expr,
			left_open: bool,
			right_open: bool,
		},
		Finite(Vec<Expr>),
		Union(Vec<RawSet>),
	}

	impl From<&Set> for RawSet {
		fn from(set: &Set) -> RawSet {
			match set {
				Set::Empty => RawSet::Empty,
				Set::Singleton(singleton) => {
					RawSet::Singleton(singleton.value().clone())
				}
				Set::Interval(interval) => RawSet::Interval {
					start: interval.start().clone(),
					end: interval.end().clone(),
					left_open: interval.left_open(),
					right_open: interval.right_open(),
				},
				Set::Finite(finite) => {
					RawSet::Finite(finite.elements().to_vec())
				}
				Set::Union(union) => RawSet::Union(
					union.components().iter().map(RawSet::from).collect(),
				),
			}
		}
	}

	fn build(raw: RawSet) -> Result<Set, SetError> {
		Ok(match raw {
			RawSet::Empty => Set::Empty,
			RawSet::Singleton(value) => Singleton::new(value).into(),
			RawSet::Interval {
				start,
				end,
				left_open,
				right_open,
			} => Interval::new(start, end, left_open, right_open)?,
			RawSet::Finite(elements) => FiniteSet::new(elements),
			RawSet::Union(parts) => {
				let mut sets = Vec::with_capacity(parts.len());
				for part in parts {
					sets.push(build(part)?);
				}
				Union::new(sets)
			}
		})
	}

	impl Serialize for Set {
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			RawSet::from(self).serialize(serializer)
		}
	}

	impl<'de> Deserialize<'de> for Set {
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			let raw = RawSet::deserialize(deserializer)?;
			build(raw).map_err(::serde::de::Error::custom)
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::interval::{ee, ei, eu, ie, ii, iu, ue, uu};

	#[test]
	fn operator_sugar() {
		assert_eq!(ii(0, 1) + ii(2, 3), ii(0, 1).union(&ii(2, 3)));
		assert_eq!(ii(0, 2) - ii(0, 1), Ok(ei(1, 2)));
		assert_eq!(-ii(0, 1), ii(0, 1).complement());
		assert_eq!(!ii(0, 1), ii(0, 1).complement());
	}

	#[test]
	fn difference_of_intervals() {
		assert_eq!(ii(0, 2) - ii(0, 1), Ok(ei(1, 2)));
		assert_eq!(ii(0, 1) - ii(0, 1), Ok(Set::Empty));
		assert_eq!(
			ii(1, 3) - FiniteSet::new([2]),
			Ok(ie(1, 2) + ei(2, 3))
		);
	}

	#[test]
	fn difference_of_finite_sets() {
		let x = Expr::symbol("x");
		assert_eq!(
			FiniteSet::new([x.clone(), Expr::from(1), Expr::from(2)])
				- FiniteSet::new([2, 3]),
			Ok(FiniteSet::new([x, Expr::from(1)]))
		);
		assert_eq!(
			FiniteSet::new([1, 2]) - ii(0, 5),
			Ok(Set::Empty)
		);
		assert_eq!(
			Set::from(Singleton::new(7)) - ii(0, 5),
			Ok(Singleton::new(7).into())
		);
	}

	#[test]
	fn empty_set_behavior() {
		assert_eq!(ii(1, 2).intersect(&Set::Empty), Ok(Set::Empty));
		assert_eq!(Set::Empty.intersect(&ii(1, 2)), Ok(Set::Empty));
		assert_eq!(Set::Empty + ii(1, 2), ii(1, 2));
		assert_eq!(Set::Empty.complement(), Ok(uu()));
		assert_eq!(Set::Empty.measure(), Expr::zero());
		assert_eq!(Set::Empty.contains(&Expr::from(1)), Rel::False);
		assert_eq!(
			Set::Empty.as_relational(&Expr::real_symbol("x")),
			Rel::False
		);
	}

	#[test]
	fn empty_set_has_no_bounds() {
		assert_eq!(Set::Empty.inf(), Err(SetError::UndefinedInfimum));
		assert_eq!(Set::Empty.sup(), Err(SetError::UndefinedSupremum));
	}

	#[test]
	fn subsets() {
		assert_eq!(ii(0, 3).subset(&ii(1, 2)), Ok(true));
		assert_eq!(ii(0, 3).subset(&ii(1, 5)), Ok(false));
		assert_eq!(ii(0, 3).subset(&Set::Empty), Ok(true));
		assert_eq!(
			ii(0, 3).subset(&FiniteSet::new([1, 2])),
			Ok(true)
		);
		assert_eq!(
			ee(0, 3).subset(&FiniteSet::new([0, 1])),
			Ok(false)
		);
	}

	#[test]
	fn subset_implies_membership() {
		let inner = FiniteSet::new([1, 2]);
		let outer = ii(0, 3);
		assert_eq!(outer.subset(&inner), Ok(true));
		for element in [1, 2] {
			let value = Expr::from(element);
			assert_eq!(inner.contains_point(&value), Ok(true));
			assert_eq!(outer.contains_point(&value), Ok(true));
		}
	}

	#[test]
	fn boolean_membership_enforced() {
		let x = Expr::real_symbol("x");
		let result = ii(0, 1).contains_point(&x);
		assert!(matches!(
			result,
			Err(SetError::IndeterminateMembership(_))
		));
		assert_eq!(ii(0, 1).contains_point(&Expr::from(0.5)), Ok(true));
		assert_eq!(
			FiniteSet::new([1, 2]).contains_point(&Expr::from(5)),
			Ok(false)
		);
	}

	#[test]
	fn intersection_measure_bound() {
		let pairs = [(ii(0, 2), ii(1, 3)), (ii(0, 4), ii(1, 2))];
		for (a, b) in pairs {
			let overlap = a.intersect(&b).unwrap();
			let bound =
				Expr::min([a.measure(), b.measure()]);
			// overlap measure never exceeds either operand
			assert_eq!(
				Expr::min([overlap.measure(), bound.clone()]),
				overlap.measure()
			);
		}
	}

	#[test]
	fn display_forms() {
		assert_eq!(Set::Empty.to_string(), "EmptySet");
		assert_eq!(ii(0, 1).to_string(), "[0, 1]");
		assert_eq!(
			(ii(0, 1) + FiniteSet::new([3])).to_string(),
			"Union([0, 1], {3})"
		);
	}

	#[test]
	fn shared_across_threads() {
		let set = ii(0, 1) + FiniteSet::new([3]);
		let handle = std::thread::spawn({
			let set = set.clone();
			move || set.measure()
		});
		assert_eq!(handle.join().unwrap(), set.measure());
	}

	#[test]
	fn infinite_interval_sugar() {
		assert_eq!(iu(0).complement(), Ok(ue(0)));
		assert_eq!(eu(0) + iu(1), eu(0));
	}

	#[cfg(feature = "serde")]
	mod serde_roundtrip {
		use super::*;

		#[test]
		fn canonical_sets_roundtrip() {
			let sets = [
				Set::Empty,
				ii(0, 1),
				ee(0, 1) + FiniteSet::new([5]),
				FiniteSet::new([Expr::symbol("x"), Expr::from(1)]),
				Singleton::new(2).into(),
			];
			for set in sets {
				let encoded = serde_json::to_string(&set).unwrap();
				let decoded: Set = serde_json::from_str(&encoded).unwrap();
				assert_eq!(decoded, set);
			}
		}
	}
}
