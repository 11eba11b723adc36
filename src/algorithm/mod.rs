//! # Algorithms
//!
//! Three independent solvers: the graphical method for problems in two variables, the two phase
//! simplex method for any linear program and initial allocations for transportation problems.
//! The functions in this module solve a problem with the default settings of each solver.
use crate::algorithm::graphical::{GraphicalSolution, GraphicalSolver};
use crate::algorithm::transportation::{Strategy, TransportationSolution, TransportationSolver};
use crate::algorithm::two_phase::SimplexSolver;
use crate::data::linear_program::elements::{Constraint, ObjectiveFunction};
use crate::data::linear_program::error::InvalidInput;
use crate::data::linear_program::problem::{LinearProgram, TransportationProblem};
use crate::data::linear_program::solution::Solution;

pub mod graphical;
pub mod transportation;
pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm. The finite optimum carries the values of the
/// decision variables.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizationResult {
    Infeasible,
    FiniteOptimum(Vec<f64>),
    Unbounded,
}

/// Solve a linear program in two variables with the graphical method.
///
/// # Errors
///
/// If the problem is inconsistent or doesn't have exactly two variables. An infeasible problem is
/// not an error, see `GraphicalSolution::status`.
pub fn solve_graphical(
    objective: ObjectiveFunction,
    constraints: Vec<Constraint>,
) -> Result<GraphicalSolution, InvalidInput> {
    GraphicalSolver::new().solve(&LinearProgram::new(objective, constraints))
}

/// Solve a linear program with the two phase simplex method.
///
/// # Errors
///
/// If the problem is inconsistent. Unbounded and infeasible problems are not errors, see
/// `Solution::status`.
pub fn solve_simplex(
    objective: ObjectiveFunction,
    constraints: Vec<Constraint>,
) -> Result<Solution, InvalidInput> {
    SimplexSolver::new().solve(&LinearProgram::new(objective, constraints))
}

/// Find an initial allocation for a transportation problem.
///
/// # Errors
///
/// If the problem is inconsistent, see `TransportationProblem::validate`.
pub fn solve_transportation(
    supply: Vec<f64>,
    demand: Vec<f64>,
    costs: Vec<Vec<f64>>,
    strategy: Strategy,
) -> Result<TransportationSolution, InvalidInput> {
    TransportationSolver::new().solve(&TransportationProblem::new(supply, demand, costs), strategy)
}
