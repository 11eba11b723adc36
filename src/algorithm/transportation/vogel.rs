//! # Vogel's Approximation
//!
//! Allocate first where not taking the cheapest cell would cost the most.
use itertools::Itertools;
use log::trace;

use crate::algorithm::transportation::plan::{AllocationRule, TransportPlan};

/// Pick the line with the largest penalty and allocate to its cheapest cell.
///
/// Only lines with quantity left take part: the penalty of a line is the difference between its
/// two lowest costs over the cells it shares with the other remaining lines, or zero if there is
/// only one such cell. Rows win ties with columns; among rows (or columns) the first one found wins.
/// All penalties are recomputed for every allocation.
///
/// Once every quantity is shipped, the exhausted lines that are still open receive their
/// degenerate cells, chosen by the same penalties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VogelApproximation;
impl AllocationRule for VogelApproximation {
    fn new() -> Self {
        Self
    }

    fn select_cell(&mut self, plan: &TransportPlan) -> Option<(usize, usize)> {
        let live_rows = plan.live_rows().collect::<Vec<_>>();
        let live_columns = plan.live_columns().collect::<Vec<_>>();
        if !live_rows.is_empty() && !live_columns.is_empty() {
            return select_by_penalty(plan, &live_rows, &live_columns);
        }

        let open_rows = plan.open_rows().collect::<Vec<_>>();
        let open_columns = plan.open_columns().collect::<Vec<_>>();
        if !open_rows.is_empty() && !open_columns.is_empty() {
            trace!("Nothing left to ship, placing a degenerate cell");
        }
        select_by_penalty(plan, &open_rows, &open_columns)
    }
}

/// Cheapest cell of the line with the largest penalty, restricted to the given rows and columns.
fn select_by_penalty(plan: &TransportPlan, rows: &[usize], columns: &[usize]) -> Option<(usize, usize)> {
    if rows.is_empty() || columns.is_empty() {
        return None;
    }

    let (row, row_penalty) = largest_penalty(rows.iter().map(|&row| {
        (row, penalty(columns.iter().map(|&column| plan.cost(row, column))))
    }))?;
    let (column, column_penalty) = largest_penalty(columns.iter().map(|&column| {
        (column, penalty(rows.iter().map(|&row| plan.cost(row, column))))
    }))?;
    trace!("Penalties: row {row} ({row_penalty}), column {column} ({column_penalty})");

    if row_penalty >= column_penalty {
        cheapest(columns, |column| plan.cost(row, column)).map(|column| (row, column))
    } else {
        cheapest(rows, |row| plan.cost(row, column)).map(|row| (row, column))
    }
}

/// Difference between the two lowest costs, zero if there is only one.
fn penalty(costs: impl Iterator<Item = f64>) -> f64 {
    match costs.sorted_by(f64::total_cmp).take(2).collect::<Vec<_>>().as_slice() {
        &[lowest, second] => second - lowest,
        _ => 0f64,
    }
}

/// First line with the largest penalty.
fn largest_penalty(penalties: impl Iterator<Item = (usize, f64)>) -> Option<(usize, f64)> {
    let mut largest: Option<(usize, f64)> = None;
    for (line, value) in penalties {
        match largest {
            Some((_, existing)) if value <= existing => {},
            _ => largest = Some((line, value)),
        }
    }

    largest
}

/// First line with the lowest cost.
fn cheapest(lines: &[usize], cost_of: impl Fn(usize) -> f64) -> Option<usize> {
    let mut lowest: Option<(usize, f64)> = None;
    for &line in lines {
        let cost = cost_of(line);
        match lowest {
            Some((_, existing)) if cost >= existing => {},
            _ => lowest = Some((line, cost)),
        }
    }

    lowest.map(|(line, _)| line)
}
