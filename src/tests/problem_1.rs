//! Two variables, two resource constraints.
//!
//! Maximize `3 x1 + 4 x2` subject to `x1 + 2 x2 <= 10` and `2 x1 + x2 <= 8`. The optimum is at the
//! intersection of both constraint boundaries, `(2, 4)`, with value `22`.
use approx::assert_abs_diff_eq;

use crate::algorithm::{solve_graphical, solve_simplex};
use crate::data::linear_program::elements::{Constraint, ConstraintType, ObjectiveFunction};
use crate::data::linear_program::problem::LinearProgram;
use crate::data::linear_program::solution::Status;
use crate::io::json::import;
use crate::io::Problem;

pub const JSON_LITERAL_STRING: &str = r#"{
    "kind": "simplex",
    "objective": {"coefficients": [3, 4], "direction": "maximize"},
    "constraints": [
        {"coefficients": [1, 2], "relation": "<=", "rhs": 10},
        {"coefficients": [2, 1], "relation": "<=", "rhs": 8}
    ]
}"#;

pub fn linear_program() -> LinearProgram {
    LinearProgram::new(
        ObjectiveFunction::maximize(vec![3f64, 4f64]),
        vec![
            Constraint::new(vec![1f64, 2f64], ConstraintType::Less, 10f64),
            Constraint::new(vec![2f64, 1f64], ConstraintType::Less, 8f64),
        ],
    )
}

#[test]
fn conversion_pipeline() {
    let problem = match import(JSON_LITERAL_STRING) {
        Ok(Problem::Simplex(problem)) => problem,
        other => panic!("Expected a simplex problem, got {other:?}"),
    };
    assert_eq!(problem, linear_program());

    let solution = solve_simplex(problem.objective, problem.constraints).unwrap();
    assert_eq!(solution.status(), Status::Optimal);
    assert_abs_diff_eq!(solution.objective_value(), 22f64, epsilon = 1e-9);
}

#[test]
fn methods_agree() {
    let LinearProgram { objective, constraints } = linear_program();

    let graphical = solve_graphical(objective.clone(), constraints.clone()).unwrap();
    let optimum = graphical.optimum().unwrap();
    assert_eq!((optimum.point.x, optimum.point.y), (2f64, 4f64));
    assert_eq!(optimum.value, 22f64);

    let simplex = solve_simplex(objective, constraints).unwrap();
    assert_abs_diff_eq!(simplex.objective_value(), optimum.value, epsilon = 1e-9);
    assert_abs_diff_eq!(simplex.value_of("x1").unwrap(), optimum.point.x, epsilon = 1e-9);
    assert_abs_diff_eq!(simplex.value_of("x2").unwrap(), optimum.point.y, epsilon = 1e-9);

    let converted = graphical.to_solution();
    assert_eq!(converted.status(), Status::Optimal);
    assert_eq!(converted.variables(), &[("x1".to_string(), 2f64), ("x2".to_string(), 4f64)]);
}
