use std::path::Path;

use approx::assert_abs_diff_eq;

use solvex::algorithm::graphical::GraphicalSolver;
use solvex::algorithm::transportation::{Strategy, TransportationSolver};
use solvex::algorithm::two_phase::SimplexSolver;
use solvex::data::linear_program::solution::Status;
use solvex::io::error::ImportError;
use solvex::io::{import, Problem};

use super::write_problem_file;

#[test]
fn simplex_file() {
    let (_directory, path) = write_problem_file("production.json", r#"{
        "kind": "simplex",
        "objective": {"coefficients": [2, 3], "direction": "min"},
        "constraints": [
            {"coefficients": [1, 1], "relation": ">=", "rhs": 4},
            {"coefficients": [1, 3], "relation": ">=", "rhs": 6}
        ]
    }"#);

    let problem = match import(&path).unwrap() {
        Problem::Simplex(problem) => problem,
        other => panic!("Expected a simplex problem, got {other:?}"),
    };
    let solution = SimplexSolver::new().solve(&problem).unwrap();
    assert_eq!(solution.status(), Status::Optimal);
    assert_abs_diff_eq!(solution.objective_value(), 9f64, epsilon = 1e-9);
}

#[test]
fn graphical_file() {
    let (_directory, path) = write_problem_file("region.json", r#"{
        "kind": "graphical",
        "objective": {"coefficients": [3, 4], "direction": "max"},
        "constraints": [
            {"coefficients": [1, 2], "relation": "<=", "rhs": 10},
            {"coefficients": [2, 1], "relation": "<=", "rhs": 8}
        ]
    }"#);

    let problem = match import(&path).unwrap() {
        Problem::Graphical(problem) => problem,
        other => panic!("Expected a graphical problem, got {other:?}"),
    };
    let solution = GraphicalSolver::new().solve(&problem).unwrap();
    assert_eq!(solution.optimum().map(|vertex| vertex.value), Some(22f64));
    assert_eq!(solution.region().len(), 4);
}

#[test]
fn transportation_file() {
    let (_directory, path) = write_problem_file("shipping.json", r#"{
        "kind": "transportation",
        "supply": [100],
        "demand": [60, 60],
        "costs": [[1, 2]],
        "strategy": "minimum_cost"
    }"#);

    let (problem, strategy) = match import(&path).unwrap() {
        Problem::Transportation { problem, strategy } => (problem, strategy),
        other => panic!("Expected a transportation problem, got {other:?}"),
    };
    assert_eq!(strategy, Strategy::MinimumCost);

    let solution = TransportationSolver::new().solve(&problem, strategy).unwrap();
    assert!(!solution.is_balanced());
    assert_eq!(solution.allocation().nr_rows(), 1);
    assert_eq!(solution.allocation().nr_columns(), 2);
}

#[test]
fn unknown_extension() {
    let (_directory, path) = write_problem_file("problem.mps", "NAME TESTLP");
    assert!(matches!(import(&path), Err(ImportError::FileExtension(_))));

    assert!(matches!(import(Path::new("no_extension")), Err(ImportError::FileExtension(_))));
}

#[test]
fn missing_file() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("absent.json");
    assert!(matches!(import(&path), Err(ImportError::Io(_))));
}

#[test]
fn inconsistent_problem() {
    let (_directory, path) = write_problem_file("three.json", r#"{
        "kind": "graphical",
        "objective": {"coefficients": [1, 1, 1], "direction": "max"},
        "constraints": []
    }"#);
    assert!(matches!(import(&path), Err(ImportError::InvalidInput(_))));

    let (_directory, path) = write_problem_file("negative.json", r#"{
        "kind": "transportation", "supply": [-1, 2], "demand": [1], "costs": [[1], [1]]
    }"#);
    assert!(matches!(import(&path), Err(ImportError::InvalidInput(_))));
}
