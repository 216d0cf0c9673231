use std::cmp::Ordering;

use crate::expr::Expr;
use crate::interval::{Interval, IntervalBounds};

/// Comparison that treats unknown symbolic order as equal, so that a
/// stable sort keeps such values in their original order.
pub(crate) fn cmp_or_equal(a: &Expr, b: &Expr) -> Ordering {
	a.compare(b).unwrap_or(Ordering::Equal)
}

/// How two mutually comparable intervals, sorted by start, relate.
#[derive(Debug, PartialEq)]
pub(crate) enum Arrangement {
	/// A gap of nonzero width separates the two.
	Apart,
	/// The first ends exactly where the second starts.
	Touching,
	/// The second starts strictly inside the first.
	Overlapping,
}

/// Classifies `cur` against `next`, where `cur` sorts at or before
/// `next` and all four endpoints are concrete.
pub(crate) fn arrangement(cur: &Interval, next: &Interval) -> Arrangement {
	match cmp_or_equal(next.start(), cur.end()) {
		Ordering::Less => Arrangement::Overlapping,
		Ordering::Equal => Arrangement::Touching,
		Ordering::Greater => Arrangement::Apart,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::interval::tests::raw;

	#[test]
	fn arrangement_of_sorted_pairs() {
		assert_eq!(
			arrangement(&raw(0, 1, false, false), &raw(2, 3, false, false)),
			Arrangement::Apart
		);
		assert_eq!(
			arrangement(&raw(0, 2, false, false), &raw(2, 3, false, false)),
			Arrangement::Touching
		);
		assert_eq!(
			arrangement(&raw(0, 2, false, false), &raw(1, 3, false, false)),
			Arrangement::Overlapping
		);
	}
}
