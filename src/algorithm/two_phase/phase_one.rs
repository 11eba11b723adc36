//! # Phase one
//!
//! Finding a basic feasible solution by minimizing the sum of the artificial variables.
use log::{debug, warn};

use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient.
#[derive(Debug, Eq, PartialEq)]
pub enum RankedFeasibilityResult {
    /// The tableau holds a basic feasible solution of the original problem.
    Feasible {
        /// Whether constraints turned out to be redundant.
        rank: Rank,
    },
    /// The problem is not feasible.
    Infeasible,
}

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (matrix row) indices is provided
/// of rows that are linear combinations of the other rows.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows are redundant.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the standard form linear program is found.
///
/// The auxiliary cost row is removed again before returning, such that the tableau can be used
/// for the second phase directly.
///
/// # Arguments
///
/// * `tableau`: Tableau in standard form; slack and artificial variables form the basis.
///
/// # Return value
///
/// Whether the problem is feasible, and if so, which rows are redundant.
pub(crate) fn primal<PR: PivotRule>(tableau: &mut Tableau) -> RankedFeasibilityResult {
    if !tableau.has_artificial_in_basis() {
        return RankedFeasibilityResult::Feasible { rank: Rank::Full };
    }

    tableau.add_auxiliary_row();
    let mut rule = PR::new();
    loop {
        match rule.select_primal_pivot_column(tableau) {
            Some((column, _)) => match tableau.select_primal_pivot_row(column) {
                Some(row) => tableau.bring_into_basis(column, row),
                // The artificial cost is bounded from below by zero, this is a numerical problem
                None => {
                    warn!("No pivot row for column {column} while minimizing the artificial cost");
                    break;
                },
            },
            None => break,
        }
    }

    let artificial_cost = tableau.objective_function_value();
    tableau.remove_auxiliary_row();
    debug!("Artificial cost after phase one: {artificial_cost} ({} pivots)", tableau.nr_pivots());

    if artificial_cost.abs() > tableau.epsilon() {
        RankedFeasibilityResult::Infeasible
    } else {
        let rows_to_remove = remove_artificial_basis_variables(tableau);
        let rank = if rows_to_remove.is_empty() {
            Rank::Full
        } else {
            Rank::Deficient(rows_to_remove)
        };

        RankedFeasibilityResult::Feasible { rank }
    }
}

/// Removes all artificial variables from the basis by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// # Arguments
///
/// * `tableau`: Tableau to change the basis for, all artificial variables at value zero.
///
/// # Return value
///
/// A `Vec` with indices of rows that are redundant. Their artificial variable stays in the basis
/// at zero, it can't leave again because artificial columns never enter. Is sorted as a side effect
/// of the algorithm.
fn remove_artificial_basis_variables(tableau: &mut Tableau) -> Vec<usize> {
    let mut rows_to_remove = Vec::new();

    for pivot_row in tableau.artificial_basis_rows() {
        let pivot_column = tableau.entering_candidates()
            .find(|&j| tableau.generate_element(pivot_row, j).abs() > tableau.epsilon());

        if let Some(pivot_column) = pivot_column {
            tableau.bring_into_basis(pivot_column, pivot_row);
        } else {
            warn!("Constraint {pivot_row} is redundant");
            rows_to_remove.push(pivot_row);
        }
    }

    debug_assert!(rows_to_remove.is_sorted());
    rows_to_remove
}
