//! # Properties that hold for every solver
//!
//! Cross checks between methods, idempotence and the terminal statuses of problems without
//! optimum.
use solvex::data::linear_program::elements::{Constraint, ConstraintType, ObjectiveFunction};
use solvex::data::linear_program::problem::LinearProgram;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Linear programs in two variables with a unique, finite optimum inside the default window.
fn two_variable_problems() -> Vec<LinearProgram> {
    vec![
        LinearProgram::new(
            ObjectiveFunction::maximize(vec![3f64, 4f64]),
            vec![
                Constraint::new(vec![1f64, 2f64], ConstraintType::Less, 10f64),
                Constraint::new(vec![2f64, 1f64], ConstraintType::Less, 8f64),
            ],
        ),
        LinearProgram::new(
            ObjectiveFunction::minimize(vec![2f64, 3f64]),
            vec![
                Constraint::new(vec![1f64, 1f64], ConstraintType::Greater, 4f64),
                Constraint::new(vec![1f64, 3f64], ConstraintType::Greater, 6f64),
            ],
        ),
        LinearProgram::new(
            ObjectiveFunction::maximize(vec![1f64, 1f64]),
            vec![
                Constraint::new(vec![1f64, -1f64], ConstraintType::Equal, 1f64),
                Constraint::new(vec![1f64, 1f64], ConstraintType::Less, 7f64),
            ],
        ),
        LinearProgram::new(
            ObjectiveFunction::maximize(vec![5f64, 2f64]),
            vec![
                Constraint::new(vec![1f64, 0f64], ConstraintType::Less, 4f64),
                Constraint::new(vec![0f64, 1f64], ConstraintType::Less, 6f64),
                Constraint::new(vec![1f64, 1f64], ConstraintType::Greater, 2f64),
            ],
        ),
    ]
}
