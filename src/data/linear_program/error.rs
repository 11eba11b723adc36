//! # Rejected input
//!
//! Problems are validated before any algorithm runs. Whatever is described here never reaches the
//! solver internals; infeasibility and unboundedness are not errors but solution statuses.
use thiserror::Error;

/// A problem description that can't be solved because it is malformed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    /// A required collection has no elements.
    ///
    /// The contained value names the collection for the end user.
    #[error("{0} can not be empty")]
    Empty(&'static str),
    /// Two collections that should have the same length don't.
    #[error("dimension mismatch in {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Description of the mismatching collection.
        what: String,
        /// Length implied by the rest of the problem.
        expected: usize,
        /// Length that was provided.
        found: usize,
    },
    /// A coefficient, right hand side or quantity is NaN or infinite.
    #[error("{0} is not a finite number")]
    NotFinite(String),
    /// A constraint with only zero coefficients; it either holds everywhere or nowhere.
    #[error("constraint {0} has only zero coefficients")]
    ZeroConstraint(usize),
    /// A solver that only works in a fixed number of dimensions got something else.
    #[error("expected {expected} decision variables, found {found}")]
    VariableCount {
        /// Number of variables the solver works with.
        expected: usize,
        /// Number of variables in the problem.
        found: usize,
    },
    /// A supply or demand quantity is below zero.
    #[error("{0} can not be negative")]
    Negative(String),
    /// The total supply or the total demand is not positive.
    #[error("total {0} must be positive")]
    NoCapacity(&'static str),
    /// A relation symbol other than `<=`, `>=` or `=`.
    #[error("unknown relation \"{0}\", expected one of <=, >=, =")]
    UnknownRelation(String),
    /// A transportation strategy name that is not known.
    #[error("unknown transportation strategy \"{0}\"")]
    UnknownStrategy(String),
}
