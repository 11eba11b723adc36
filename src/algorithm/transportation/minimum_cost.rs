//! # Minimum Cost
//!
//! Greedily fill the cheapest cell that is still open.
use crate::algorithm::transportation::plan::{AllocationRule, TransportPlan};

/// Allocate to the open cell with the lowest cost.
///
/// Of several cells with the same cost, the first one found scanning row by row is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimumCost;
impl AllocationRule for MinimumCost {
    fn new() -> Self {
        Self
    }

    fn select_cell(&mut self, plan: &TransportPlan) -> Option<(usize, usize)> {
        let mut cheapest: Option<((usize, usize), f64)> = None;
        for (row, column) in plan.open_cells() {
            let cost = plan.cost(row, column);
            match cheapest {
                Some((_, lowest)) if cost >= lowest => {},
                _ => cheapest = Some(((row, column), cost)),
            }
        }

        cheapest.map(|(cell, _)| cell)
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::transportation::minimum_cost::MinimumCost;
    use crate::algorithm::transportation::plan::{AllocationRule, TransportPlan};
    use crate::data::linear_algebra::EPSILON;
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::tests::problem_2;

    #[test]
    fn cheapest_first() {
        let (supply, demand, costs) = problem_2::textbook_data();
        let mut plan = TransportPlan::new(costs, supply, demand, EPSILON);

        let mut rule = <MinimumCost as AllocationRule>::new();
        assert_eq!(rule.select_cell(&plan), Some((2, 3)));

        plan.fill::<MinimumCost>();
        let allocation = plan.allocation();
        assert_eq!(allocation.row(0), &[0f64, 20f64, 0f64, 0f64]);
        assert_eq!(allocation.row(1), &[10f64, 5f64, 15f64, EPSILON]);
        assert_eq!(allocation.row(2), &[0f64, 0f64, 0f64, 25f64]);
        assert_eq!(plan.nr_basic_cells(), 3 + 4 - 1);
        assert!((plan.total_cost() - 590f64).abs() < 1e-6);
    }

    #[test]
    fn ties_pick_first_cell() {
        let costs = DenseMatrix::from_data(vec![vec![1f64, 5f64], vec![5f64, 1f64]]);
        let mut plan = TransportPlan::new(costs, vec![10f64, 20f64], vec![10f64, 20f64], EPSILON);

        let mut rule = <MinimumCost as AllocationRule>::new();
        assert_eq!(rule.select_cell(&plan), Some((0, 0)));

        plan.fill::<MinimumCost>();
        assert_eq!(plan.allocation().get_value(1, 0), EPSILON);
        assert_eq!(plan.nr_basic_cells(), 3);
    }
}
