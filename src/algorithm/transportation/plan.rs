//! # Working state of an initial allocation
//!
//! Remaining quantities, open lines and the allocation built so far for a balanced problem.
use itertools::Itertools;
use log::trace;

use crate::data::linear_algebra::matrix::DenseMatrix;

/// Deciding where to allocate next.
///
/// Each heuristic is a different rule for picking a cell; the bookkeeping after the pick is
/// shared, see `TransportPlan::allocate`.
pub trait AllocationRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Pick the next cell to allocate to.
    ///
    /// # Return value
    ///
    /// A (row, column) pair of an open row and an open column, or `None` if no row or no column is
    /// open anymore.
    fn select_cell(&mut self, plan: &TransportPlan) -> Option<(usize, usize)>;
}

/// A balanced transportation problem being allocated.
///
/// A line (row or column) is open as long as it can receive allocations. Every allocation closes
/// exactly one line, until the last open row and column are closed together. This makes the
/// result have `rows + columns - 1` basic cells, cells that are degenerate receive `epsilon`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportPlan {
    costs: DenseMatrix<f64>,
    allocation: DenseMatrix<f64>,
    remaining_supply: Vec<f64>,
    remaining_demand: Vec<f64>,
    open_rows: Vec<bool>,
    open_columns: Vec<bool>,
    epsilon: f64,
}

impl TransportPlan {
    /// Start with nothing allocated.
    ///
    /// # Arguments
    ///
    /// * `costs`: Unit costs, one row per source and one column per destination.
    /// * `supply`: Capacity of each source, summing to the same total as `demand`.
    /// * `demand`: Requirement of each destination.
    /// * `epsilon`: Quantities below this are exhausted; degenerate cells receive this value.
    #[must_use]
    pub fn new(costs: DenseMatrix<f64>, supply: Vec<f64>, demand: Vec<f64>, epsilon: f64) -> Self {
        debug_assert_eq!(costs.nr_rows(), supply.len());
        debug_assert_eq!(costs.nr_columns(), demand.len());

        let (nr_rows, nr_columns) = (supply.len(), demand.len());
        Self {
            costs,
            allocation: DenseMatrix::zeros(nr_rows, nr_columns),
            remaining_supply: supply,
            remaining_demand: demand,
            open_rows: vec![true; nr_rows],
            open_columns: vec![true; nr_columns],
            epsilon,
        }
    }

    /// Allocate until no row or no column is open.
    pub fn fill<R: AllocationRule>(&mut self) {
        let mut rule = R::new();
        while let Some((row, column)) = rule.select_cell(self) {
            self.allocate(row, column);
        }
    }

    /// Ship as much as possible through a cell, then close a line.
    ///
    /// If the cell can't take anything (the row or the column has nothing left), it receives
    /// `epsilon` to keep it basic.
    pub fn allocate(&mut self, row: usize, column: usize) {
        debug_assert!(self.open_rows[row] && self.open_columns[column]);

        let quantity = self.remaining_supply[row].min(self.remaining_demand[column]).max(0f64);
        if quantity > self.epsilon {
            self.allocation.set_value(row, column, quantity);
            self.remaining_supply[row] -= quantity;
            self.remaining_demand[column] -= quantity;
        } else {
            self.allocation.set_value(row, column, self.epsilon);
        }
        trace!("Allocated {quantity} to cell ({row}, {column})");

        let row_exhausted = self.remaining_supply[row] <= self.epsilon;
        let column_exhausted = self.remaining_demand[column] <= self.epsilon;
        if row_exhausted && (!column_exhausted || self.open_rows().count() > 1) {
            self.open_rows[row] = false;
        } else if column_exhausted {
            self.open_columns[column] = false;
        } else {
            // Only on totals that don't match
            self.open_rows[row] = false;
        }
    }

    /// Indices of rows that can still receive allocations.
    pub fn open_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.open_rows.iter().positions(|&open| open)
    }

    /// Indices of columns that can still receive allocations.
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.open_columns.iter().positions(|&open| open)
    }

    /// Indices of open rows with supply left.
    pub fn live_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.open_rows().filter(|&row| self.remaining_supply[row] > self.epsilon)
    }

    /// Indices of open columns with demand left.
    ///
    /// An open column can be exhausted when it ran out together with a row; it stays open to receive
    /// a degenerate cell.
    pub fn live_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.open_columns().filter(|&column| self.remaining_demand[column] > self.epsilon)
    }

    /// All cells in both an open row and an open column, row by row.
    pub fn open_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.open_rows().cartesian_product(self.open_columns().collect::<Vec<_>>())
    }

    /// Unit cost of a cell.
    pub fn cost(&self, row: usize, column: usize) -> f64 {
        self.costs.get_value(row, column)
    }

    /// The allocation built so far.
    pub fn allocation(&self) -> &DenseMatrix<f64> {
        &self.allocation
    }

    /// Total cost of the allocation built so far.
    pub fn total_cost(&self) -> f64 {
        self.allocation.inner_product(&self.costs)
    }

    /// Number of cells with a positive allocation, degenerate ones included.
    pub fn nr_basic_cells(&self) -> usize {
        self.allocation.count_larger_than(0f64)
    }

    /// Take out the allocation.
    pub fn into_allocation(self) -> DenseMatrix<f64> {
        self.allocation
    }
}
