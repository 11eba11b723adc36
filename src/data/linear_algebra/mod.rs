//! # Linear algebra primitives
//!
//! Dense storage used as the working buffer of the solvers, and the numerical tolerance used
//! throughout.

pub mod matrix;

/// Default tolerance for comparisons with zero.
///
/// Values with an absolute value below this are treated as zero, both in the simplex tableau and
/// when deciding whether supply or demand is exhausted. Every solver can be configured with another
/// value through its `with_epsilon` method.
pub const EPSILON: f64 = 1e-10;
