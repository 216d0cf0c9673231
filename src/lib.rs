//! This crate provides exact symbolic set algebra over the real line:
//! [`Interval`], [`FiniteSet`] and their [`Union`], with
//! canonicalizing constructors and symbolic endpoints.
//!
//! Sets answer the questions a computer-algebra system asks about
//! domains ("where is this defined", "solve this inequality") without
//! numeric approximation: endpoints and elements are exact rationals
//! or symbols, and every operation either computes the exact answer
//! or returns the symbolic condition it depends on.
//!
//! ## Example
//!
//! ```rust
//! use symset::interval::{ee, ii};
//! use symset::{Expr, FiniteSet};
//!
//! // disjoint pieces stay apart, touching pieces merge
//! let disjoint = ii(0, 1) + ii(2, 3);
//! assert_eq!(disjoint.to_string(), "Union([0, 1], [2, 3])");
//! assert_eq!(ii(1, 2) + ii(2, 3), ii(1, 3));
//!
//! // an open boundary closes when a finite set supplies the point
//! let set = ee(1, 2) + FiniteSet::new([2, 3]);
//! assert_eq!(set.to_string(), "Union((1, 2], {3})");
//!
//! // membership against symbolic bounds stays a condition
//! let x = Expr::real_symbol("x");
//! assert_eq!(
//! 	ii(0, 1).contains(&x).to_string(),
//! 	"And(0 <= x, x <= 1)",
//! );
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Normalizing Constructors
//!
//! Construction does all the algebra. A factory may answer with a
//! different shape than it was asked for, so every factory returns a
//! [`Set`]:
//!
//! | request                        | result           |
//! | ------------------------------ | ---------------- |
//! | `Interval::new(2, 1, ..)`      | `Set::Empty`     |
//! | `Interval::new(1, 1, open)`    | `Set::Empty`     |
//! | `Interval::new(1, 1, closed)`  | a [`Singleton`]  |
//! | `FiniteSet::new([])`           | `Set::Empty`     |
//! | `FiniteSet::new([7])`          | a [`Singleton`]  |
//! | `Union::new([a])`              | `a` itself       |
//!
//! Once built, a set upholds its shape's invariants and never
//! mutates, so sets can be shared freely, including across threads.
//!
//! ### Comparability
//!
//! Two values are comparable when their relative order is concretely
//! known. `1` and `2` are comparable; `1` and a symbol `x` are not,
//! even when `x` is declared real. Operations that need an order and
//! cannot get one either stay symbolic (membership returns a
//! [`Rel`]) or report [`SetError`] (interval intersection refuses to
//! guess).
//!
//! ### Overlap, Touching and Merging
//!
//! Two intervals overlap if a point lies in both. They touch if they
//! do not overlap and no point lies between them, like `[0, 1)` and
//! `[1, 2]`. [`Union::new`] merges touching intervals unless both
//! facing sides are open, because then the touch point itself is
//! missing from the result: `[0, 1)` and `(1, 2]` stay two pieces.
//!
//! ### The Empty Set
//!
//! There is exactly one empty set, [`Set::Empty`]. It absorbs
//! intersections, vanishes from unions, and its complement is the
//! whole real line. Asking it for an infimum or supremum is an error
//! rather than an answer.
//!
//! ## Cargo Features
//!
//! - `serde`: `Serialize` and `Deserialize` for every set shape.
//!   Deserialization rebuilds through the normalizing factories, so a
//!   decoded set is canonical even if the wire data was not.

#![allow(clippy::tabs_in_doc_comments)]

pub mod error;
pub mod expr;
pub mod finite;
pub mod interval;
pub mod rel;
pub mod set;
pub mod union;
pub(crate) mod utils;

pub use crate::error::SetError;
pub use crate::expr::{Expr, Symbol};
pub use crate::finite::{FiniteSet, Singleton};
pub use crate::interval::{Interval, IntervalBounds};
pub use crate::rel::Rel;
pub use crate::set::Set;
pub use crate::union::Union;
