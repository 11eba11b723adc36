//! # North-West Corner
//!
//! Start in the top left cell and move right or down, ignoring costs.
use crate::algorithm::transportation::plan::{AllocationRule, TransportPlan};

/// Always allocate to the first open row and the first open column.
///
/// Lines close in order, so this is the cell where the previous one left off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NorthWestCorner;
impl AllocationRule for NorthWestCorner {
    fn new() -> Self {
        Self
    }

    fn select_cell(&mut self, plan: &TransportPlan) -> Option<(usize, usize)> {
        Some((plan.open_rows().next()?, plan.open_columns().next()?))
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::transportation::north_west::NorthWestCorner;
    use crate::algorithm::transportation::plan::TransportPlan;
    use crate::data::linear_algebra::EPSILON;
    use crate::tests::problem_2;

    #[test]
    fn staircase() {
        let (supply, demand, costs) = problem_2::textbook_data();
        let mut plan = TransportPlan::new(costs, supply, demand, EPSILON);
        plan.fill::<NorthWestCorner>();

        let allocation = plan.allocation();
        assert_eq!(allocation.row(0), &[10f64, 10f64, 0f64, 0f64]);
        assert_eq!(allocation.row(1), &[0f64, 15f64, 15f64, 0f64]);
        // Row 1 and column 2 exhaust together, the cell below keeps the basis
        assert_eq!(allocation.row(2), &[0f64, 0f64, EPSILON, 25f64]);
        assert_eq!(plan.nr_basic_cells(), 3 + 4 - 1);
        assert!((plan.total_cost() - 640f64).abs() < 1e-6);
    }
}
