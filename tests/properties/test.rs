use approx::assert_abs_diff_eq;

use solvex::algorithm::graphical::GraphicalSolver;
use solvex::algorithm::transportation::{Strategy, TransportationSolver};
use solvex::algorithm::two_phase::SimplexSolver;
use solvex::algorithm::{solve_simplex, solve_transportation};
use solvex::data::linear_program::elements::{Constraint, ConstraintType, ObjectiveFunction};
use solvex::data::linear_program::problem::TransportationProblem;
use solvex::data::linear_program::solution::Status;

use super::two_variable_problems;

const STRATEGIES: [Strategy; 3] = [Strategy::NorthWest, Strategy::MinimumCost, Strategy::VogelApproximation];

#[test]
fn graphical_and_simplex_agree() {
    for problem in two_variable_problems() {
        let graphical = GraphicalSolver::new().solve(&problem).unwrap();
        let simplex = SimplexSolver::new().solve(&problem).unwrap();

        let optimum = graphical.optimum().unwrap();
        assert_eq!(simplex.status(), Status::Optimal);
        assert_abs_diff_eq!(simplex.objective_value(), optimum.value, epsilon = 1e-6);
    }
}

#[test]
fn idempotent() {
    for problem in two_variable_problems() {
        let solver = SimplexSolver::new();
        assert_eq!(solver.solve(&problem), solver.solve(&problem));

        let solver = GraphicalSolver::new();
        assert_eq!(solver.solve(&problem), solver.solve(&problem));
    }

    let problem = TransportationProblem::new(
        vec![20f64, 30f64, 25f64],
        vec![10f64, 25f64, 15f64, 25f64],
        vec![vec![8f64, 6f64, 10f64, 9f64], vec![9f64, 12f64, 13f64, 7f64], vec![14f64, 9f64, 16f64, 5f64]],
    );
    for strategy in STRATEGIES {
        let solver = TransportationSolver::new();
        assert_eq!(solver.solve(&problem, strategy), solver.solve(&problem, strategy));
    }
}

#[test]
fn unbounded() {
    let solution = solve_simplex(
        ObjectiveFunction::maximize(vec![1f64, 1f64]),
        vec![Constraint::new(vec![0f64, 1f64], ConstraintType::Less, 3f64)],
    ).unwrap();

    assert_eq!(solution.status(), Status::Unbounded);
    assert_eq!(solution.objective_value(), f64::INFINITY);
}

#[test]
fn infeasible() {
    let objective = ObjectiveFunction::maximize(vec![1f64, 0f64]);
    let constraints = vec![
        Constraint::new(vec![1f64, 0f64], ConstraintType::Less, 1f64),
        Constraint::new(vec![1f64, 0f64], ConstraintType::Greater, 5f64),
    ];

    let simplex = solve_simplex(objective.clone(), constraints.clone()).unwrap();
    assert_eq!(simplex.status(), Status::Infeasible);

    let graphical = solvex::algorithm::solve_graphical(objective, constraints).unwrap();
    assert_eq!(graphical.status(), Status::Infeasible);
    assert!(graphical.region().is_empty());
}

#[test]
fn allocations_are_feasible() {
    let supply = vec![20f64, 30f64, 25f64];
    let demand = vec![10f64, 25f64, 15f64, 25f64];
    let costs = vec![
        vec![8f64, 6f64, 10f64, 9f64],
        vec![9f64, 12f64, 13f64, 7f64],
        vec![14f64, 9f64, 16f64, 5f64],
    ];

    for strategy in STRATEGIES {
        let solution = solve_transportation(supply.clone(), demand.clone(), costs.clone(), strategy).unwrap();
        let allocation = solution.allocation();

        for (row, &quantity) in allocation.rows().zip(&supply) {
            assert_abs_diff_eq!(row.iter().sum::<f64>(), quantity, epsilon = 1e-6);
        }
        for (j, &quantity) in demand.iter().enumerate() {
            assert_abs_diff_eq!(allocation.column(j).sum::<f64>(), quantity, epsilon = 1e-6);
        }
        assert_eq!(solution.nr_basic_cells(), supply.len() + demand.len() - 1);
        assert!(allocation.rows().flatten().all(|&value| value >= 0f64));
    }
}

#[test]
fn unbalanced_keeps_dimensions() {
    for strategy in STRATEGIES {
        let solution = solve_transportation(
            vec![100f64],
            vec![60f64, 60f64],
            vec![vec![1f64, 2f64]],
            strategy,
        ).unwrap();

        assert!(!solution.is_balanced());
        assert_eq!(solution.allocation().nr_rows(), 1);
        assert_eq!(solution.allocation().nr_columns(), 2);
        assert_eq!(solution.method(), strategy);
    }

    let solution = solve_transportation(
        vec![100f64, 100f64],
        vec![80f64, 120f64],
        vec![vec![2f64, 3f64], vec![4f64, 1f64]],
        Strategy::VogelApproximation,
    ).unwrap();
    assert!(solution.is_balanced());
    assert_abs_diff_eq!(solution.total_cost(), 320f64, epsilon = 1e-6);
}
