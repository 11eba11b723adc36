//! # JSON problem files
//!
//! A problem file holds one problem, tagged with the method that should solve it:
//!
//! ```json
//! {
//!     "kind": "simplex",
//!     "objective": {"coefficients": [3, 4], "direction": "max"},
//!     "constraints": [
//!         {"coefficients": [1, 2], "relation": "<=", "rhs": 10},
//!         {"coefficients": [2, 1], "relation": "<=", "rhs": 8}
//!     ]
//! }
//! ```
//!
//! Transportation problems have `"kind": "transportation"` with `supply`, `demand`, `costs` and an
//! optional `strategy` (`north_west`, `minimum_cost` or `vogel_approximation`).
use log::debug;

use crate::io::error::ImportError;
use crate::io::Problem;

/// Parse and check the contents of a JSON problem file.
///
/// # Errors
///
/// If the text is not a problem description, or the problem is inconsistent.
pub fn import(program: &str) -> Result<Problem, ImportError> {
    let problem: Problem = serde_json::from_str(program)?;
    problem.validate()?;
    debug!("Read a {} problem", problem.kind());

    Ok(problem)
}
