//! A module containing [`Expr`], the symbolic values that bound
//! intervals and populate finite sets.

use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;
use num_rational::Rational64;
use num_traits::{ToPrimitive, Zero};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named unknown standing in for a single value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Symbol {
	/// The display name of the symbol.
	pub name: String,
	/// `true` if the symbol is declared to stand for a real number.
	pub real: bool,
}

/// A symbolic value: an exact rational number, a signed infinity, a
/// named symbol, or a small arithmetic combination of those.
///
/// `Expr` is deliberately not a general computer-algebra expression
/// type. The constructors fold every concretely-known case on the spot
/// and only keep a compound node when a symbol makes the value
/// genuinely unknown, so no separate simplification pass exists.
///
/// Structural equality doubles as numeric equality: every number has
/// exactly one representation (a reduced rational, or one of the two
/// infinity variants).
///
/// # Examples
/// ```
/// use symset::Expr;
///
/// assert_eq!(Expr::sub(Expr::from(3), Expr::from(1)), Expr::from(2));
/// assert_eq!(Expr::from(f64::INFINITY), Expr::Infinity);
///
/// let x = Expr::real_symbol("x");
/// assert_eq!(Expr::sub(x.clone(), Expr::from(1)).to_string(), "x - 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
	/// An exact rational number.
	Number(Rational64),
	/// Positive infinity, printed as `oo`.
	Infinity,
	/// Negative infinity, printed as `-oo`.
	NegInfinity,
	/// An undefined value, produced when coercing a float NaN.
	Nan,
	/// A named unknown.
	Symbol(Symbol),
	/// A sum that could not be folded to a concrete value.
	Add(Box<Expr>, Box<Expr>),
	/// A difference that could not be folded to a concrete value.
	Sub(Box<Expr>, Box<Expr>),
	/// The least of several values whose order is partly unknown.
	Min(Vec<Expr>),
	/// The greatest of several values whose order is partly unknown.
	Max(Vec<Expr>),
}

impl Expr {
	/// Creates a symbol with no assumptions attached.
	///
	/// A plain symbol is not known to be real, so it is rejected as an
	/// interval endpoint. Use [`Expr::real_symbol`] for endpoints.
	pub fn symbol(name: &str) -> Expr {
		Expr::Symbol(Symbol {
			name: name.to_owned(),
			real: false,
		})
	}

	/// Creates a symbol declared to stand for a real number.
	pub fn real_symbol(name: &str) -> Expr {
		Expr::Symbol(Symbol {
			name: name.to_owned(),
			real: true,
		})
	}

	/// The number zero.
	pub fn zero() -> Expr {
		Expr::Number(Rational64::zero())
	}

	/// Returns `true` if this is a concrete value, a number or one of
	/// the infinities, as opposed to anything containing a symbol.
	pub fn is_number(&self) -> bool {
		matches!(self, Expr::Number(_) | Expr::Infinity | Expr::NegInfinity)
	}

	/// Returns `true` if this is exactly zero.
	pub fn is_zero(&self) -> bool {
		matches!(self, Expr::Number(number) if number.is_zero())
	}

	/// Returns `true` if the value is known to be real-valued (the
	/// infinities count as the extended-real endpoints).
	pub fn is_real(&self) -> bool {
		match self {
			Expr::Number(_) | Expr::Infinity | Expr::NegInfinity => true,
			Expr::Nan => false,
			Expr::Symbol(symbol) => symbol.real,
			Expr::Add(a, b) | Expr::Sub(a, b) => a.is_real() && b.is_real(),
			Expr::Min(parts) | Expr::Max(parts) => {
				parts.iter().all(Expr::is_real)
			}
		}
	}

	/// Compares two values where their order is concretely known.
	///
	/// Structurally equal values compare equal, numbers compare
	/// numerically, and an infinity orders against every other
	/// real-valued expression. Anything else is `None`: the order
	/// depends on the value of a symbol.
	///
	/// # Examples
	/// ```
	/// use std::cmp::Ordering;
	/// use symset::Expr;
	///
	/// let x = Expr::real_symbol("x");
	/// assert_eq!(Expr::from(1).compare(&Expr::from(2)), Some(Ordering::Less));
	/// assert_eq!(Expr::NegInfinity.compare(&x), Some(Ordering::Less));
	/// assert_eq!(Expr::from(1).compare(&x), None);
	/// ```
	pub fn compare(&self, other: &Expr) -> Option<Ordering> {
		if self == other {
			return Some(Ordering::Equal);
		}
		match (self, other) {
			(Expr::Number(a), Expr::Number(b)) => Some(a.cmp(b)),
			(Expr::NegInfinity, b) if b.is_real() => Some(Ordering::Less),
			(Expr::Infinity, b) if b.is_real() => Some(Ordering::Greater),
			(a, Expr::NegInfinity) if a.is_real() => Some(Ordering::Greater),
			(a, Expr::Infinity) if a.is_real() => Some(Ordering::Less),
			_ => None,
		}
	}

	/// Adds two values, folding every concretely-known case.
	pub fn add(a: Expr, b: Expr) -> Expr {
		if a.is_zero() {
			return b;
		}
		if b.is_zero() {
			return a;
		}
		match (a, b) {
			(Expr::Number(x), Expr::Number(y)) => Expr::Number(x + y),
			(Expr::Infinity, e) | (e, Expr::Infinity)
				if e != Expr::NegInfinity =>
			{
				Expr::Infinity
			}
			(Expr::NegInfinity, e) | (e, Expr::NegInfinity)
				if e != Expr::Infinity =>
			{
				Expr::NegInfinity
			}
			(a, b) => Expr::Add(Box::new(a), Box::new(b)),
		}
	}

	/// Subtracts `b` from `a`, folding every concretely-known case.
	pub fn sub(a: Expr, b: Expr) -> Expr {
		match (a, b) {
			(Expr::Number(x), Expr::Number(y)) => Expr::Number(x - y),
			(Expr::Infinity, e) if e != Expr::Infinity => Expr::Infinity,
			(e, Expr::NegInfinity) if e != Expr::NegInfinity => Expr::Infinity,
			(Expr::NegInfinity, e) if e != Expr::NegInfinity => {
				Expr::NegInfinity
			}
			(e, Expr::Infinity) if e != Expr::Infinity => Expr::NegInfinity,
			(a, b) => Expr::Sub(Box::new(a), Box::new(b)),
		}
	}

	/// The least of the given values.
	///
	/// Values whose order against every survivor is known are folded
	/// away immediately; the rest stay inside a symbolic [`Expr::Min`].
	/// The caller must supply at least one value.
	///
	/// # Examples
	/// ```
	/// use symset::Expr;
	///
	/// let x = Expr::real_symbol("x");
	/// assert_eq!(Expr::min([Expr::from(2), Expr::from(1)]), Expr::from(1));
	/// assert_eq!(
	/// 	Expr::min([Expr::from(1), x]).to_string(),
	/// 	"Min(1, x)",
	/// );
	/// ```
	pub fn min(values: impl IntoIterator<Item = Expr>) -> Expr {
		Expr::fold_extremum(values, Ordering::Less, Expr::Min)
	}

	/// The greatest of the given values.
	///
	/// The mirror image of [`Expr::min`].
	pub fn max(values: impl IntoIterator<Item = Expr>) -> Expr {
		Expr::fold_extremum(values, Ordering::Greater, Expr::Max)
	}

	fn fold_extremum(
		values: impl IntoIterator<Item = Expr>,
		keep: Ordering,
		wrap: fn(Vec<Expr>) -> Expr,
	) -> Expr {
		let mut candidates: Vec<Expr> = Vec::new();
		for value in values {
			// flatten nested folds of the same kind
			let parts = match value {
				Expr::Min(parts) if keep == Ordering::Less => parts,
				Expr::Max(parts) if keep == Ordering::Greater => parts,
				value => vec![value],
			};
			for part in parts {
				let mut dominated = false;
				candidates.retain(|candidate| {
					match candidate.compare(&part) {
						Some(ordering)
							if ordering == keep
								|| ordering == Ordering::Equal =>
						{
							dominated = true;
							true
						}
						Some(_) => false,
						None => true,
					}
				});
				if !dominated {
					candidates.push(part);
				}
			}
		}
		if candidates.len() == 1 {
			candidates.swap_remove(0)
		} else {
			wrap(candidates)
		}
	}

	/// Evaluates a concrete value to the nearest `f64`.
	///
	/// Symbols and symbolic compounds have no numeric value and return
	/// `None`.
	pub fn eval_f64(&self) -> Option<f64> {
		match self {
			Expr::Number(number) => number.to_f64(),
			Expr::Infinity => Some(f64::INFINITY),
			Expr::NegInfinity => Some(f64::NEG_INFINITY),
			_ => None,
		}
	}
}

impl From<i32> for Expr {
	fn from(value: i32) -> Expr {
		Expr::Number(Rational64::from_integer(i64::from(value)))
	}
}

impl From<i64> for Expr {
	fn from(value: i64) -> Expr {
		Expr::Number(Rational64::from_integer(value))
	}
}

impl From<Rational64> for Expr {
	fn from(value: Rational64) -> Expr {
		Expr::Number(value)
	}
}

impl From<f64> for Expr {
	/// Coerces a float exactly, mapping the float infinities onto
	/// [`Expr::Infinity`] and [`Expr::NegInfinity`] and NaN onto
	/// [`Expr::Nan`].
	fn from(value: f64) -> Expr {
		if value.is_nan() {
			return Expr::Nan;
		}
		if value == f64::INFINITY {
			return Expr::Infinity;
		}
		if value == f64::NEG_INFINITY {
			return Expr::NegInfinity;
		}
		match Rational64::approximate_float(value) {
			Some(number) => Expr::Number(number),
			None => Expr::Nan,
		}
	}
}

impl From<Symbol> for Expr {
	fn from(symbol: Symbol) -> Expr {
		Expr::Symbol(symbol)
	}
}

impl From<&Expr> for Expr {
	fn from(value: &Expr) -> Expr {
		value.clone()
	}
}

impl fmt::Display for Expr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Expr::Number(number) => write!(f, "{number}"),
			Expr::Infinity => write!(f, "oo"),
			Expr::NegInfinity => write!(f, "-oo"),
			Expr::Nan => write!(f, "nan"),
			Expr::Symbol(symbol) => write!(f, "{}", symbol.name),
			Expr::Add(a, b) => write!(f, "{a} + {b}"),
			Expr::Sub(a, b) => write!(f, "{a} - {b}"),
			Expr::Min(parts) => {
				write!(f, "Min({})", parts.iter().format(", "))
			}
			Expr::Max(parts) => {
				write!(f, "Max({})", parts.iter().format(", "))
			}
		}
	}
}
