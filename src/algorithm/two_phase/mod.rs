//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm, using
//! the two phase method: first a basic feasible solution is found by minimizing the sum of
//! artificial variables, then that solution is improved until it is optimal.
use std::marker::PhantomData;

use log::{debug, info};

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::phase_one::RankedFeasibilityResult;
use crate::algorithm::two_phase::strategy::pivot_rule::{PivotRule, SteepestDescentAlongVariable};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::EPSILON;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::error::InvalidInput;
use crate::data::linear_program::problem::LinearProgram;
use crate::data::linear_program::solution::{Solution, Status};

pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;


/// Name reported in solutions of this method.
pub const METHOD: &str = "Two-Phase Simplex";

/// Solves linear programs of any size with the two phase simplex method.
///
/// The pivot rule decides which column enters the basis, by default the one with the most negative
/// relative cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplexSolver<PR = SteepestDescentAlongVariable> {
    epsilon: f64,
    pivot_rule: PhantomData<PR>,
}

impl SimplexSolver {
    /// Solver with the default pivot rule and tolerance.
    #[must_use]
    pub fn new() -> Self {
        Self::with_pivot_rule()
    }
}

impl Default for SimplexSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<PR: PivotRule> SimplexSolver<PR> {
    /// Solver with a specific pivot rule and the default tolerance.
    #[must_use]
    pub fn with_pivot_rule() -> Self {
        Self {
            epsilon: EPSILON,
            pivot_rule: PhantomData,
        }
    }

    /// Change the tolerance used for all comparisons with zero.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Solve a linear program.
    ///
    /// # Return value
    ///
    /// A solution with variables named `x1`, `x2`, ... and slacks named `Constraint 1`, ...; the
    /// number of iterations is the total number of pivots over both phases.
    ///
    /// # Errors
    ///
    /// If the problem is not consistent, see `LinearProgram::validate`.
    pub fn solve(&self, problem: &LinearProgram) -> Result<Solution, InvalidInput> {
        problem.validate()?;

        let mut tableau = Tableau::new(problem, self.epsilon);
        debug!(
            "Solving a problem with {} variables and {} constraints in a tableau with {} columns",
            problem.nr_variables(), problem.nr_constraints(), tableau.nr_columns(),
        );

        let result = self.solve_relaxation(&mut tableau);
        let iterations = tableau.nr_pivots();
        info!("{METHOD} finished after {iterations} pivots");

        let direction = problem.objective.direction;
        let solution = match result {
            OptimizationResult::Infeasible => Solution::infeasible(METHOD),
            OptimizationResult::Unbounded => Solution::unbounded(direction, METHOD),
            OptimizationResult::FiniteOptimum(values) => {
                let status = if tableau.has_alternative_optimum() {
                    Status::Multiple
                } else {
                    Status::Optimal
                };
                let objective_value = match direction {
                    Objective::Maximize => -tableau.objective_function_value(),
                    Objective::Minimize => tableau.objective_function_value(),
                };
                let variables = values.into_iter()
                    .enumerate()
                    .map(|(j, value)| (format!("x{}", j + 1), value))
                    .collect();
                let slacks = tableau.slack_values().into_iter()
                    .enumerate()
                    .map(|(i, value)| (format!("Constraint {}", i + 1), value))
                    .collect();

                Solution::new(status, objective_value, variables, METHOD).with_slacks(slacks)
            },
        };

        Ok(solution.with_iterations(iterations))
    }

    /// Run both phases on a tableau in standard form.
    fn solve_relaxation(&self, tableau: &mut Tableau) -> OptimizationResult {
        match phase_one::primal::<PR>(tableau) {
            RankedFeasibilityResult::Feasible { rank } => {
                debug!("Found a basic feasible solution, rank: {rank:?}");
                phase_two::primal::<PR>(tableau)
            },
            RankedFeasibilityResult::Infeasible => OptimizationResult::Infeasible,
        }
    }
}
