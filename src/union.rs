//! A module containing [`Union`] and its canonicalizing constructor.

use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;

use crate::error::SetError;
use crate::expr::Expr;
use crate::finite::FiniteSet;
use crate::interval::{Interval, IntervalBounds};
use crate::rel::Rel;
use crate::set::Set;
use crate::utils::{arrangement, cmp_or_equal, Arrangement};

/// A canonical combination of disjoint component sets.
///
/// [`Union::new`] does all the work: it flattens nested unions, drops
/// empty members, merges every pair of comparable intervals that
/// overlap or touch with a closed side, absorbs finite-set points that
/// fall on open interval boundaries, and hands back the single
/// remaining component instead of a one-member union. A constructed
/// `Union` therefore always has at least two components, none of them
/// empty, none of them a union, and at most one of them a finite
/// leftover.
///
/// # Examples
/// ```
/// use symset::interval::ii;
/// use symset::Union;
///
/// // overlapping intervals merge, disjoint ones stay apart
/// assert_eq!(Union::new([ii(1, 2), ii(2, 3)]), ii(1, 3));
/// assert_eq!(
/// 	Union::new([ii(0, 1), ii(2, 3)]).to_string(),
/// 	"Union([0, 1], [2, 3])",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Union {
	components: Vec<Set>,
}

impl Union {
	/// Builds the union of the given sets in canonical form.
	///
	/// The result is not necessarily a [`Set::Union`]: no surviving
	/// components make [`Set::Empty`], and a single surviving
	/// component is returned as itself.
	pub fn new(sets: impl IntoIterator<Item = Set>) -> Set {
		let mut intervals: Vec<Interval> = Vec::new();
		let mut elements: Vec<Expr> = Vec::new();
		let mut others: Vec<Set> = Vec::new();

		// flatten, dropping empty members and pooling finite elements
		let mut pending: Vec<Set> = sets.into_iter().collect();
		let mut index = 0;
		while index < pending.len() {
			let set = std::mem::replace(&mut pending[index], Set::Empty);
			index += 1;
			match set {
				Set::Empty => {}
				Set::Union(union) => pending.extend(union.components),
				Set::Interval(interval) => intervals.push(interval),
				Set::Singleton(singleton) => {
					let value = singleton.value().clone();
					if !elements.contains(&value) {
						elements.push(value);
					}
				}
				Set::Finite(finite) => {
					for element in finite.iter() {
						if !elements.contains(element) {
							elements.push(element.clone());
						}
					}
				}
			}
		}
		let pooled_elements = !elements.is_empty();

		if intervals.is_empty() && elements.is_empty() {
			return Set::Empty;
		}

		// order by start with a stable insertion pass; unknown symbolic
		// order compares as equal and keeps the input order
		let mut sorted: Vec<Interval> = Vec::with_capacity(intervals.len());
		for interval in intervals {
			let mut at = sorted.len();
			while at > 0
				&& cmp_or_equal(sorted[at - 1].start(), interval.start())
					== Ordering::Greater
			{
				at -= 1;
			}
			sorted.insert(at, interval);
		}
		let mut intervals = sorted;

		// one left-to-right pass merging comparable neighbours
		let mut index = 0;
		while index + 1 < intervals.len() {
			let merge = {
				let cur = &intervals[index];
				let next = &intervals[index + 1];
				cur.is_comparable_with(next)
					&& match arrangement(cur, next) {
						Arrangement::Overlapping => true,
						// a touch closes unless both sides are open
						Arrangement::Touching => {
							!(next.left_open() && cur.right_open())
						}
						Arrangement::Apart => false,
					}
			};
			if !merge {
				index += 1;
				continue;
			}

			let next = intervals.remove(index + 1);
			let cur = intervals[index].clone();
			let left_open = if cur.start() == next.start() {
				cur.left_open() && next.left_open()
			} else {
				cur.left_open()
			};
			let (end, right_open) = match cur.end().compare(next.end()) {
				Some(Ordering::Less) => (next.end().clone(), next.right_open()),
				Some(Ordering::Greater) => {
					(cur.end().clone(), cur.right_open())
				}
				_ => {
					(cur.end().clone(), cur.right_open() && next.right_open())
				}
			};
			intervals[index] = Interval::unchecked(
				cur.start().clone(),
				end,
				left_open,
				right_open,
			);
		}

		if pooled_elements {
			// close open boundaries that the element pool covers
			for interval in &mut intervals {
				let close_left = interval.left_open()
					&& elements.contains(interval.start());
				let close_right = interval.right_open()
					&& elements.contains(interval.end());
				if close_left || close_right {
					*interval = Interval::unchecked(
						interval.start().clone(),
						interval.end().clone(),
						interval.left_open() && !close_left,
						interval.right_open() && !close_right,
					);
				}
			}

			// whatever no interval provably covers stays enumerated
			let residual = elements.into_iter().filter(|element| {
				!element.is_number()
					|| !intervals
						.iter()
						.any(|interval| interval.contains(element) == Rel::True)
			});
			match FiniteSet::new(residual) {
				Set::Empty => {}
				leftover => others.push(leftover),
			}
		}

		// a single surviving component is returned as itself
		if others.is_empty() && intervals.len() == 1 {
			if let Some(interval) = intervals.pop() {
				return Set::Interval(interval);
			}
		}
		if intervals.is_empty() && others.len() == 1 {
			if let Some(set) = others.pop() {
				return set;
			}
		}

		let mut components: Vec<Set> =
			intervals.into_iter().map(Set::Interval).collect();
		components.extend(others);
		Set::Union(Union { components })
	}

	/// The components, intervals first, in ascending order of start
	/// where that order is known.
	pub fn components(&self) -> &[Set] {
		&self.components
	}

	/// Iterates over the components.
	pub fn iter(&self) -> impl Iterator<Item = &Set> {
		self.components.iter()
	}

	/// Distributes an intersection across every component.
	pub(crate) fn intersect_each(&self, other: &Set) -> Result<Set, SetError> {
		let mut pieces = Vec::with_capacity(self.components.len());
		for component in &self.components {
			pieces.push(component.intersect(other)?);
		}
		Ok(Union::new(pieces))
	}

	/// The complement of a union is the intersection of the component
	/// complements.
	pub fn complement(&self) -> Result<Set, SetError> {
		let mut result: Option<Set> = None;
		for component in &self.components {
			let piece = component.complement()?;
			result = Some(match result {
				None => piece,
				Some(accumulated) => accumulated.intersect(&piece)?,
			});
		}
		Ok(result.unwrap_or(Set::Empty))
	}

	/// Membership in any component.
	pub fn contains(&self, value: &Expr) -> Rel {
		Rel::or(
			self.components
				.iter()
				.map(|component| component.contains(value)),
		)
	}

	/// The summed measure of the components.
	///
	/// Canonical form keeps intervals pairwise disjoint and finite
	/// leftovers at measure zero, so the plain sum needs no overlap
	/// correction.
	pub fn measure(&self) -> Expr {
		self.components
			.iter()
			.fold(Expr::zero(), |accumulated, component| {
				Expr::add(accumulated, component.measure())
			})
	}

	/// Rewrites membership as the disjunction of the component
	/// relational forms.
	pub fn as_relational(&self, symbol: &Expr) -> Rel {
		Rel::or(
			self.components
				.iter()
				.map(|component| component.as_relational(symbol)),
		)
	}
}

impl From<Union> for Set {
	fn from(union: Union) -> Set {
		Set::Union(union)
	}
}

impl fmt::Display for Union {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Union({})", self.components.iter().format(", "))
	}
}
