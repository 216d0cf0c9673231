//! A module containing [`Rel`], the logical form of membership
//! conditions.

use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::expr::Expr;

/// A logical condition over symbolic values.
///
/// Membership queries against sets with symbolic endpoints cannot be
/// answered with a plain boolean, so they answer with a `Rel` instead:
/// a combination of equalities and orderings that evaluates itself as
/// far as the operands allow. When every operand is concrete the
/// constructors collapse the whole condition to [`Rel::True`] or
/// [`Rel::False`].
///
/// # Examples
/// ```
/// use symset::{Expr, Rel};
///
/// let x = Expr::real_symbol("x");
/// assert_eq!(Rel::lt(Expr::from(1), Expr::from(2)), Rel::True);
/// assert_eq!(
/// 	Rel::le(Expr::from(0), x.clone()).to_string(),
/// 	"0 <= x",
/// );
/// assert_eq!(Rel::and([Rel::True, Rel::eq(x.clone(), x)]), Rel::True);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rel {
	/// The condition that always holds.
	True,
	/// The condition that never holds.
	False,
	/// Equality whose truth depends on a symbol.
	Eq(Expr, Expr),
	/// Strict ordering `left < right` whose truth depends on a symbol.
	Lt(Expr, Expr),
	/// Ordering `left <= right` whose truth depends on a symbol.
	Le(Expr, Expr),
	/// A conjunction none of whose members decided the result alone.
	And(Vec<Rel>),
	/// A disjunction none of whose members decided the result alone.
	Or(Vec<Rel>),
}

impl Rel {
	/// The condition `a == b`, evaluated when the order is known.
	pub fn eq(a: Expr, b: Expr) -> Rel {
		match a.compare(&b) {
			Some(Ordering::Equal) => Rel::True,
			Some(_) => Rel::False,
			None => Rel::Eq(a, b),
		}
	}

	/// The condition `a < b`, evaluated when the order is known.
	pub fn lt(a: Expr, b: Expr) -> Rel {
		match a.compare(&b) {
			Some(Ordering::Less) => Rel::True,
			Some(_) => Rel::False,
			None => Rel::Lt(a, b),
		}
	}

	/// The condition `a <= b`, evaluated when the order is known.
	pub fn le(a: Expr, b: Expr) -> Rel {
		match a.compare(&b) {
			Some(Ordering::Greater) => Rel::False,
			Some(_) => Rel::True,
			None => Rel::Le(a, b),
		}
	}

	/// The conjunction of the given conditions.
	///
	/// Nested conjunctions flatten, `True` members drop out, and a
	/// single `False` member decides the result. An empty conjunction
	/// is `True`.
	pub fn and(parts: impl IntoIterator<Item = Rel>) -> Rel {
		let mut members = Vec::new();
		for part in parts {
			match part {
				Rel::True => {}
				Rel::False => return Rel::False,
				Rel::And(inner) => members.extend(inner),
				part => members.push(part),
			}
		}
		match members.len() {
			0 => Rel::True,
			1 => members.swap_remove(0),
			_ => Rel::And(members),
		}
	}

	/// The disjunction of the given conditions, the mirror image of
	/// [`Rel::and`].
	pub fn or(parts: impl IntoIterator<Item = Rel>) -> Rel {
		let mut members = Vec::new();
		for part in parts {
			match part {
				Rel::False => {}
				Rel::True => return Rel::True,
				Rel::Or(inner) => members.extend(inner),
				part => members.push(part),
			}
		}
		match members.len() {
			0 => Rel::False,
			1 => members.swap_remove(0),
			_ => Rel::Or(members),
		}
	}

	/// The boolean value of the condition, if it has one.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Rel::True => Some(true),
			Rel::False => Some(false),
			_ => None,
		}
	}
}

impl fmt::Display for Rel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Rel::True => write!(f, "True"),
			Rel::False => write!(f, "False"),
			Rel::Eq(a, b) => write!(f, "{a} == {b}"),
			Rel::Lt(a, b) => write!(f, "{a} < {b}"),
			Rel::Le(a, b) => write!(f, "{a} <= {b}"),
			Rel::And(members) => {
				write!(f, "And({})", members.iter().format(", "))
			}
			Rel::Or(members) => {
				write!(f, "Or({})", members.iter().format(", "))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn concrete_orderings_evaluate() {
		assert_eq!(Rel::lt(Expr::from(1), Expr::from(2)), Rel::True);
		assert_eq!(Rel::lt(Expr::from(2), Expr::from(2)), Rel::False);
		assert_eq!(Rel::le(Expr::from(2), Expr::from(2)), Rel::True);
		assert_eq!(Rel::eq(Expr::from(1), Expr::from(2)), Rel::False);
		assert_eq!(
			Rel::le(Expr::NegInfinity, Expr::real_symbol("x")),
			Rel::True
		);
	}

	#[test]
	fn symbolic_orderings_stay() {
		let x = Expr::real_symbol("x");
		assert_eq!(
			Rel::lt(Expr::from(0), x.clone()),
			Rel::Lt(Expr::from(0), x.clone())
		);
		assert_eq!(Rel::eq(x.clone(), x), Rel::True);
	}

	#[test]
	fn conjunction_folding() {
		let x = Expr::real_symbol("x");
		let open = Rel::lt(Expr::from(0), x.clone());
		assert_eq!(
			Rel::and([Rel::True, open.clone()]),
			open.clone()
		);
		assert_eq!(Rel::and([open.clone(), Rel::False]), Rel::False);
		assert_eq!(Rel::and([]), Rel::True);
		// nested conjunctions flatten
		let upper = Rel::lt(x, Expr::from(1));
		assert_eq!(
			Rel::and([Rel::and([open.clone(), upper.clone()]), Rel::True]),
			Rel::And(vec![open, upper])
		);
	}

	#[test]
	fn disjunction_folding() {
		let x = Expr::real_symbol("x");
		let member = Rel::eq(x.clone(), Expr::from(1));
		assert_eq!(Rel::or([Rel::False, member.clone()]), member.clone());
		assert_eq!(Rel::or([member, Rel::True]), Rel::True);
		assert_eq!(Rel::or([]), Rel::False);
	}

	#[test]
	fn boolean_projection() {
		assert_eq!(Rel::True.as_bool(), Some(true));
		assert_eq!(Rel::False.as_bool(), Some(false));
		let x = Expr::real_symbol("x");
		assert_eq!(Rel::lt(Expr::from(0), x).as_bool(), None);
	}
}
