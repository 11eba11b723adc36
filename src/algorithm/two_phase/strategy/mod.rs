//! # Strategies for the Simplex algorithm
//!
//! Different strategies for performing certain procedures in the Simplex method. Currently only
//! the decision on which column enters the basis.
pub mod pivot_rule;
