//! A module containing [`SetError`].

use thiserror::Error;

use crate::expr::Expr;
use crate::rel::Rel;

/// The errors returned by set construction and set algebra.
///
/// Degenerate but well-defined inputs never error: the factories
/// normalize them silently (a reversed interval is simply empty). An
/// error always means the request itself was unrepresentable or
/// underdetermined, and it is reported at the point of the call with
/// nothing to retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetError {
	/// An interval endpoint was not a real-valued expression.
	#[error("only real values may bound an interval, got `{0}`")]
	NonRealBound(Expr),

	/// Two intervals whose relative position is unknown cannot be
	/// intersected, and an interval with symbolic endpoints cannot be
	/// evaluated numerically.
	#[error("the endpoints are symbolic, their order is unknown")]
	SymbolicEndpoints,

	/// The complement of a finite set is only defined between numeric
	/// elements, which have a total order.
	#[error("cannot complement a finite set with non-numeric elements")]
	NonNumericElements,

	/// The empty set has no infimum.
	#[error("the empty set has no infimum")]
	UndefinedInfimum,

	/// The empty set has no supremum.
	#[error("the empty set has no supremum")]
	UndefinedSupremum,

	/// A membership test had to produce a boolean but stayed symbolic.
	#[error("membership did not resolve to a boolean: `{0}`")]
	IndeterminateMembership(Rel),
}
