//! Transportation problems.
//!
//! The textbook problem has three sources and four destinations; at some point the North-West
//! Corner method exhausts a source and a destination with the same allocation.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::problem::TransportationProblem;

pub fn textbook() -> TransportationProblem {
    TransportationProblem::new(
        vec![20f64, 30f64, 25f64],
        vec![10f64, 25f64, 15f64, 25f64],
        vec![
            vec![8f64, 6f64, 10f64, 9f64],
            vec![9f64, 12f64, 13f64, 7f64],
            vec![14f64, 9f64, 16f64, 5f64],
        ],
    )
}

pub fn textbook_data() -> (Vec<f64>, Vec<f64>, DenseMatrix<f64>) {
    let TransportationProblem { supply, demand, costs } = textbook();
    (supply, demand, DenseMatrix::from_data(costs))
}

/// Total supply and demand are both 200.
pub fn balanced() -> TransportationProblem {
    TransportationProblem::new(
        vec![100f64, 100f64],
        vec![80f64, 120f64],
        vec![vec![2f64, 3f64], vec![4f64, 1f64]],
    )
}

/// A dummy source of 20 is needed.
pub fn demand_excess() -> TransportationProblem {
    TransportationProblem::new(
        vec![100f64],
        vec![60f64, 60f64],
        vec![vec![1f64, 2f64]],
    )
}
