//! # Phase two
//!
//! Improving a basic feasible solution until it is optimal.
use log::debug;

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be nonnegative (primal feasibility)
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal<PR: PivotRule>(tableau: &mut Tableau) -> OptimizationResult {
    let mut rule = PR::new();
    loop {
        match rule.select_primal_pivot_column(tableau) {
            Some((column, cost)) => match tableau.select_primal_pivot_row(column) {
                Some(row) => tableau.bring_into_basis(column, row),
                None => {
                    debug!("Column {column} with relative cost {cost} has no positive entry");
                    break OptimizationResult::Unbounded;
                },
            },
            None => break OptimizationResult::FiniteOptimum(tableau.current_bfs()),
        }
    }
}
