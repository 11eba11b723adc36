//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::two_phase::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// Index of a column with negative relative cost and that cost, or `None` if there is no such
    /// column, in which case the current basis is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)>;
}

/// Simply pivot on the first column, which has a negative relative cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)> {
        let epsilon = tableau.epsilon();

        tableau.entering_candidates()
            .map(|column| (column, tableau.relative_cost(column)))
            .find(|&(_, cost)| cost < -epsilon)
    }
}

/// Simply pivot on the column, which has the most negative relative cost.
///
/// Also known as Dantzig's rule. Of several columns with the same cost, the one with the lowest
/// index is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SteepestDescentAlongVariable;
impl PivotRule for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<(usize, f64)> {
        let epsilon = tableau.epsilon();

        let mut smallest: Option<(usize, f64)> = None;
        for (j, cost) in tableau.entering_candidates()
            .map(|column| (column, tableau.relative_cost(column)))
            .filter(|&(_, cost)| cost < -epsilon) {
            if let Some((existing_j, existing_cost)) = smallest.as_mut() {
                if cost < *existing_cost {
                    *existing_j = j;
                    *existing_cost = cost;
                }
            } else { smallest = Some((j, cost)) }
        }

        smallest
    }
}
