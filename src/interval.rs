//! A module containing [`Interval`] and its constructor functions.

use std::cmp::Ordering;
use std::fmt;

use crate::error::SetError;
use crate::expr::Expr;
use crate::finite::Singleton;
use crate::rel::Rel;
use crate::set::Set;
use crate::union::Union;

/// Access to the interval shape of a set: two endpoints with
/// independent open and closed sides.
///
/// Implemented by [`Interval`] and by [`Singleton`], which behaves as
/// the degenerate closed interval `[value, value]`, so code written
/// against either shape works with both.
pub trait IntervalBounds {
	/// The left endpoint.
	fn start(&self) -> &Expr;
	/// The right endpoint.
	fn end(&self) -> &Expr;
	/// `true` if the set excludes its left endpoint.
	fn left_open(&self) -> bool;
	/// `true` if the set excludes its right endpoint.
	fn right_open(&self) -> bool;
}

/// A continuous range of real numbers between two endpoints, each side
/// independently open or closed.
///
/// Values of this type always span more than one point: the
/// [`Interval::new`] factory returns [`Set::Empty`] for reversed or
/// degenerate-open bounds and a [`Singleton`] for a one-point range,
/// so those shapes are never represented as an `Interval`. Unbounded
/// sides are always open.
///
/// # Examples
/// ```
/// use symset::interval::ii;
/// use symset::{Expr, Interval, Set};
///
/// assert_eq!(Interval::new(0, 1, false, false), Ok(ii(0, 1)));
/// assert_eq!(Interval::new(2, 1, false, false), Ok(Set::Empty));
///
/// let a = Expr::real_symbol("a");
/// let upto_a = Interval::new(0, a, false, false).unwrap();
/// assert_eq!(upto_a.to_string(), "[0, a]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
	start: Expr,
	end: Expr,
	left_open: bool,
	right_open: bool,
}

impl Interval {
	/// Creates the set of real numbers between `start` and `end`.
	///
	/// For `left_open = true` the interval excludes its left endpoint,
	/// and likewise on the right. The result normalizes:
	///
	/// | request                        | result          |
	/// | ------------------------------ | --------------- |
	/// | `end < start` (order known)    | [`Set::Empty`]  |
	/// | `end == start`, any side open  | [`Set::Empty`]  |
	/// | `end == start`, both closed    | a [`Singleton`] |
	/// | an infinite endpoint           | that side open  |
	///
	/// # Errors
	///
	/// Returns [`SetError::NonRealBound`] if an endpoint is not known
	/// to be real-valued. Symbols must be created with
	/// [`Expr::real_symbol`] to qualify.
	pub fn new(
		start: impl Into<Expr>,
		end: impl Into<Expr>,
		left_open: bool,
		right_open: bool,
	) -> Result<Set, SetError> {
		let start = start.into();
		let end = end.into();

		if !start.is_real() {
			return Err(SetError::NonRealBound(start));
		}
		if !end.is_real() {
			return Err(SetError::NonRealBound(end));
		}

		if end.compare(&start) == Some(Ordering::Less) {
			return Ok(Set::Empty);
		}
		if end == start {
			if left_open || right_open {
				return Ok(Set::Empty);
			}
			return Ok(Singleton::new(end).into());
		}

		// infinite endpoints cannot be attained, so they are open
		let left_open = left_open || start == Expr::NegInfinity;
		let right_open = right_open || end == Expr::Infinity;

		Ok(Set::Interval(Interval {
			start,
			end,
			left_open,
			right_open,
		}))
	}

	/// Builds an interval whose fields are already in normal form.
	pub(crate) fn unchecked(
		start: Expr,
		end: Expr,
		left_open: bool,
		right_open: bool,
	) -> Interval {
		Interval {
			start,
			end,
			left_open,
			right_open,
		}
	}

	/// Factory for endpoints taken from an existing interval, which
	/// are real by construction.
	pub(crate) fn of_real(
		start: Expr,
		end: Expr,
		left_open: bool,
		right_open: bool,
	) -> Set {
		match Interval::new(start, end, left_open, right_open) {
			Ok(set) => set,
			Err(_) => unreachable!(),
		}
	}

	/// Returns `true` if the interval extends to negative infinity.
	pub fn is_left_unbounded(&self) -> bool {
		self.start == Expr::NegInfinity
	}

	/// Returns `true` if the interval extends to positive infinity.
	pub fn is_right_unbounded(&self) -> bool {
		self.end == Expr::Infinity
	}

	/// Returns `true` if all four endpoints of the two intervals are
	/// concrete, so every one of their order relations is known.
	pub fn is_comparable_with(&self, other: &Interval) -> bool {
		self.start.is_number()
			&& self.end.is_number()
			&& other.start.is_number()
			&& other.end.is_number()
	}

	/// Intersects two intervals.
	///
	/// The result takes the tighter bound on each side; where bounds
	/// coincide an open side wins over a closed one. A one-point
	/// result collapses to a [`Singleton`] and an empty overlap to
	/// [`Set::Empty`].
	///
	/// # Errors
	///
	/// Returns [`SetError::SymbolicEndpoints`] unless every endpoint
	/// is concrete.
	pub fn intersect_interval(
		&self,
		other: &Interval,
	) -> Result<Set, SetError> {
		if !self.is_comparable_with(other) {
			return Err(SetError::SymbolicEndpoints);
		}

		let apart = self.start.compare(&other.end) == Some(Ordering::Greater)
			|| other.start.compare(&self.end) == Some(Ordering::Greater);
		if apart {
			return Ok(Set::Empty);
		}

		let (start, left_open) = match self.start.compare(&other.start) {
			Some(Ordering::Less) => (other.start.clone(), other.left_open),
			Some(Ordering::Greater) => (self.start.clone(), self.left_open),
			_ => (self.start.clone(), self.left_open || other.left_open),
		};
		let (end, right_open) = match self.end.compare(&other.end) {
			Some(Ordering::Less) => (self.end.clone(), self.right_open),
			Some(Ordering::Greater) => (other.end.clone(), other.right_open),
			_ => (self.end.clone(), self.right_open || other.right_open),
		};

		Interval::new(start, end, left_open, right_open)
	}

	/// The set of reals outside the interval: everything below the
	/// start and everything above the end, with each boundary point
	/// kept exactly when this interval excluded it.
	pub fn complement(&self) -> Set {
		let below = Interval::of_real(
			Expr::NegInfinity,
			self.start.clone(),
			true,
			!self.left_open,
		);
		let above = Interval::of_real(
			self.end.clone(),
			Expr::Infinity,
			!self.right_open,
			true,
		);
		Union::new([below, above])
	}

	/// The membership condition for `value`, as a conjunction of the
	/// two side conditions. Stays symbolic when the order of `value`
	/// against an endpoint is unknown.
	pub fn contains(&self, value: &Expr) -> Rel {
		let left = if self.left_open {
			Rel::lt(self.start.clone(), value.clone())
		} else {
			Rel::le(self.start.clone(), value.clone())
		};
		let right = if self.right_open {
			Rel::lt(value.clone(), self.end.clone())
		} else {
			Rel::le(value.clone(), self.end.clone())
		};
		Rel::and([left, right])
	}

	/// The length of the interval, `end - start`.
	pub fn measure(&self) -> Expr {
		Expr::sub(self.end.clone(), self.start.clone())
	}

	/// Rewrites the interval as inequalities against `symbol`.
	///
	/// Unbounded sides contribute no inequality, and the interval over
	/// all of the reals rewrites to [`Rel::True`].
	pub fn as_relational(&self, symbol: &Expr) -> Rel {
		let left = || {
			if self.left_open {
				Rel::lt(self.start.clone(), symbol.clone())
			} else {
				Rel::le(self.start.clone(), symbol.clone())
			}
		};
		let right = || {
			if self.right_open {
				Rel::lt(symbol.clone(), self.end.clone())
			} else {
				Rel::le(symbol.clone(), self.end.clone())
			}
		};
		match (self.is_left_unbounded(), self.is_right_unbounded()) {
			(true, true) => Rel::True,
			(true, false) => right(),
			(false, true) => left(),
			(false, false) => Rel::and([left(), right()]),
		}
	}

	/// Evaluates both endpoints to floats, for handing the interval to
	/// numeric code.
	///
	/// # Errors
	///
	/// Returns [`SetError::SymbolicEndpoints`] if an endpoint has no
	/// numeric value.
	pub fn to_f64_bounds(&self) -> Result<(f64, f64), SetError> {
		match (self.start.eval_f64(), self.end.eval_f64()) {
			(Some(start), Some(end)) => Ok((start, end)),
			_ => Err(SetError::SymbolicEndpoints),
		}
	}
}

impl IntervalBounds for Interval {
	fn start(&self) -> &Expr {
		&self.start
	}

	fn end(&self) -> &Expr {
		&self.end
	}

	fn left_open(&self) -> bool {
		self.left_open
	}

	fn right_open(&self) -> bool {
		self.right_open
	}
}

impl From<Interval> for Set {
	fn from(interval: Interval) -> Set {
		Set::Interval(interval)
	}
}

impl fmt::Display for Interval {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let left = if self.left_open { "(" } else { "[" };
		let right = if self.right_open { ")" } else { "]" };
		write!(f, "{left}{}, {}{right}", self.start, self.end)
	}
}

// Constructor Functions ==========================

/// The closed interval `[start, end]`.
///
/// # Panics
///
/// Panics if an endpoint is not real-valued; so do the other
/// constructor functions below. Use [`Interval::new`] to handle that
/// case as an error.
pub fn ii(start: impl Into<Expr>, end: impl Into<Expr>) -> Set {
	Interval::new(start, end, false, false).unwrap()
}
/// The half-open interval `[start, end)`.
pub fn ie(start: impl Into<Expr>, end: impl Into<Expr>) -> Set {
	Interval::new(start, end, false, true).unwrap()
}
/// The half-open interval `(start, end]`.
pub fn ei(start: impl Into<Expr>, end: impl Into<Expr>) -> Set {
	Interval::new(start, end, true, false).unwrap()
}
/// The open interval `(start, end)`.
pub fn ee(start: impl Into<Expr>, end: impl Into<Expr>) -> Set {
	Interval::new(start, end, true, true).unwrap()
}
/// The interval `[start, oo)`.
pub fn iu(start: impl Into<Expr>) -> Set {
	Interval::new(start, Expr::Infinity, false, true).unwrap()
}
/// The interval `(start, oo)`.
pub fn eu(start: impl Into<Expr>) -> Set {
	Interval::new(start, Expr::Infinity, true, true).unwrap()
}
/// The interval `(-oo, end]`.
pub fn ui(end: impl Into<Expr>) -> Set {
	Interval::new(Expr::NegInfinity, end, true, false).unwrap()
}
/// The interval `(-oo, end)`.
pub fn ue(end: impl Into<Expr>) -> Set {
	Interval::new(Expr::NegInfinity, end, true, true).unwrap()
}
/// The whole real line `(-oo, oo)`.
pub fn uu() -> Set {
	Interval::new(Expr::NegInfinity, Expr::Infinity, true, true).unwrap()
}

#[cfg(test)]
pub(crate) mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::finite::FiniteSet;

	/// A bare interval, bypassing the factory, for helper tests.
	pub(crate) fn raw(
		start: i32,
		end: i32,
		left_open: bool,
		right_open: bool,
	) -> Interval {
		Interval::unchecked(
			Expr::from(start),
			Expr::from(end),
			left_open,
			right_open,
		)
	}

	#[test]
	fn factory_normalization() {
		// reversed concrete bounds collapse to the empty set
		assert_eq!(Interval::new(2, 1, false, false), Ok(Set::Empty));
		// a zero-width open interval is empty
		assert_eq!(Interval::new(1, 1, true, false), Ok(Set::Empty));
		assert_eq!(Interval::new(1, 1, false, true), Ok(Set::Empty));
		// a zero-width closed interval is a single point
		assert_eq!(
			Interval::new(1, 1, false, false),
			Ok(Singleton::new(1).into())
		);
	}

	#[test]
	fn infinite_endpoints_are_open() {
		let line = uu();
		let Set::Interval(interval) = &line else {
			panic!("expected an interval, got {line}");
		};
		assert!(interval.left_open());
		assert!(interval.right_open());
		// the float spellings of the infinities behave the same
		assert_eq!(
			Interval::new(f64::NEG_INFINITY, f64::INFINITY, false, false),
			Ok(line)
		);
	}

	#[test]
	fn non_real_bounds_are_rejected() {
		let x = Expr::symbol("x");
		assert_eq!(
			Interval::new(x.clone(), 1, false, false),
			Err(SetError::NonRealBound(x))
		);
		assert_eq!(
			Interval::new(0, f64::NAN, false, false),
			Err(SetError::NonRealBound(Expr::Nan))
		);
	}

	#[test]
	fn symbolic_bounds_are_allowed() {
		let a = Expr::real_symbol("a");
		let set = Interval::new(0, a.clone(), false, false).unwrap();
		assert_eq!(set.to_string(), "[0, a]");
		// the same symbol at both ends is a single point
		let point = Interval::new(a.clone(), a.clone(), false, false).unwrap();
		assert_eq!(point, Singleton::new(a).into());
	}

	#[test]
	fn intersect_overlapping() {
		assert_eq!(ii(1, 3).intersect(&ii(1, 2)), Ok(ii(1, 2)));
		assert_eq!(ii(0, 2).intersect(&ii(1, 3)), Ok(ii(1, 2)));
		// where bounds coincide the open side wins
		assert_eq!(ee(0, 2).intersect(&ii(0, 2)), Ok(ee(0, 2)));
		assert_eq!(ie(0, 2).intersect(&ei(0, 2)), Ok(ee(0, 2)));
	}

	#[test]
	fn intersect_disjoint_and_degenerate() {
		assert_eq!(ii(0, 1).intersect(&ii(2, 3)), Ok(Set::Empty));
		// a shared endpoint with an open side yields nothing
		assert_eq!(ii(0, 1).intersect(&ee(1, 2)), Ok(Set::Empty));
		// a shared closed endpoint yields exactly that point
		assert_eq!(
			ii(0, 1).intersect(&ii(1, 2)),
			Ok(Singleton::new(1).into())
		);
	}

	#[test]
	fn intersect_symbolic_endpoints() {
		let a = Expr::real_symbol("a");
		let symbolic = Interval::new(0, a, false, false).unwrap();
		assert_eq!(
			symbolic.intersect(&ii(0, 1)),
			Err(SetError::SymbolicEndpoints)
		);
	}

	#[test]
	fn commutativity_of_intersection() {
		let cases = [
			(ii(0, 2), ii(1, 3)),
			(ee(0, 2), ii(2, 4)),
			(ie(0, 5), ei(5, 9)),
		];
		for (a, b) in cases {
			assert_eq!(a.intersect(&b), b.intersect(&a));
		}
	}

	#[test]
	fn complement_of_bounded_interval() {
		assert_eq!(ii(0, 1).complement(), Ok(ue(0) + eu(1)));
		// an open interval keeps its endpoints in the complement
		assert_eq!(ee(0, 1).complement(), Ok(ui(0) + iu(1)));
	}

	#[test]
	fn complement_roundtrip() {
		for set in [ii(0, 1), ee(0, 1), ie(-3, 7), ui(2), eu(5)] {
			let back = set.complement().unwrap().complement().unwrap();
			assert_eq!(back, set);
		}
	}

	#[test]
	fn contains_concrete() {
		assert_eq!(ii(0, 1).contains(&Expr::from(0.5)), Rel::True);
		assert_eq!(ii(0, 1).contains(&Expr::from(0)), Rel::True);
		assert_eq!(ee(0, 1).contains(&Expr::from(0)), Rel::False);
		assert_eq!(ii(0, 1).contains(&Expr::from(2)), Rel::False);
	}

	#[test]
	fn contains_symbolic() {
		let x = Expr::real_symbol("x");
		let condition = ii(0, 1).contains(&x);
		assert_eq!(
			condition,
			Rel::And(vec![
				Rel::Le(Expr::from(0), x.clone()),
				Rel::Le(x, Expr::from(1)),
			])
		);
	}

	#[test]
	fn measure_of_intervals() {
		assert_eq!(ii(0, 1).measure(), Expr::from(1));
		assert_eq!(ee(-2, 5).measure(), Expr::from(7));
		assert_eq!(iu(0).measure(), Expr::Infinity);
		assert_eq!(uu().measure(), Expr::Infinity);
	}

	#[test]
	fn relational_form() {
		let x = Expr::real_symbol("x");
		assert_eq!(
			ie(0, 1).as_relational(&x),
			Rel::And(vec![
				Rel::Le(Expr::from(0), x.clone()),
				Rel::Lt(x.clone(), Expr::from(1)),
			])
		);
		// unbounded sides contribute no inequality
		assert_eq!(ui(3).as_relational(&x), Rel::Le(x.clone(), Expr::from(3)));
		assert_eq!(eu(3).as_relational(&x), Rel::Lt(Expr::from(3), x.clone()));
		assert_eq!(uu().as_relational(&x), Rel::True);
	}

	#[test]
	fn float_bounds() {
		let Set::Interval(interval) = ii(0, 1) else {
			panic!("expected an interval");
		};
		assert_eq!(interval.to_f64_bounds(), Ok((0.0, 1.0)));

		let a = Expr::real_symbol("a");
		let Set::Interval(symbolic) =
			Interval::new(0, a, false, false).unwrap()
		else {
			panic!("expected an interval");
		};
		assert_eq!(
			symbolic.to_f64_bounds(),
			Err(SetError::SymbolicEndpoints)
		);
	}

	#[test]
	fn constructor_functions() {
		assert_eq!(ii(0, 1).to_string(), "[0, 1]");
		assert_eq!(ie(0, 1).to_string(), "[0, 1)");
		assert_eq!(ei(0, 1).to_string(), "(0, 1]");
		assert_eq!(ee(0, 1).to_string(), "(0, 1)");
		assert_eq!(iu(0).to_string(), "[0, oo)");
		assert_eq!(ue(0).to_string(), "(-oo, 0)");
		assert_eq!(uu().to_string(), "(-oo, oo)");
	}

	#[test]
	fn union_with_finite_boundary_point() {
		// the finite set supplies 2, so the open boundary closes
		let set = ee(1, 2) + FiniteSet::new([2, 3]);
		assert_eq!(set.to_string(), "Union((1, 2], {3})");
	}
}
