//! # Transportation problems
//!
//! Initial basic feasible solutions for transportation problems, using one of three heuristics.
//! There is no improvement phase, so the result is feasible but not necessarily optimal.
//!
//! Unbalanced problems are first balanced with a dummy source or destination at zero cost. It is
//! removed from the allocation before it is returned.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::algorithm::transportation::minimum_cost::MinimumCost;
use crate::algorithm::transportation::north_west::NorthWestCorner;
use crate::algorithm::transportation::plan::TransportPlan;
use crate::algorithm::transportation::vogel::VogelApproximation;
use crate::data::linear_algebra::EPSILON;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::error::InvalidInput;
use crate::data::linear_program::problem::TransportationProblem;

pub mod minimum_cost;
pub mod north_west;
pub mod plan;
pub mod vogel;

/// Heuristic used to find the initial allocation.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Fill from the top left cell, see `NorthWestCorner`.
    #[default]
    #[serde(alias = "northWest")]
    NorthWest,
    /// Fill the cheapest cells first, see `MinimumCost`.
    #[serde(alias = "minCost")]
    MinimumCost,
    /// Fill by largest penalty first, see `VogelApproximation`.
    #[serde(alias = "vam", alias = "vogel")]
    VogelApproximation,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::NorthWest => "North-West Corner",
            Strategy::MinimumCost => "Minimum Cost",
            Strategy::VogelApproximation => "Vogel's Approximation",
        })
    }
}

impl FromStr for Strategy {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north_west" | "northWest" => Ok(Strategy::NorthWest),
            "minimum_cost" | "minCost" => Ok(Strategy::MinimumCost),
            "vogel_approximation" | "vogel" | "vam" => Ok(Strategy::VogelApproximation),
            other => Err(InvalidInput::UnknownStrategy(other.to_string())),
        }
    }
}

/// An initial allocation for a transportation problem.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransportationSolution {
    /// Quantity shipped from each source (row) to each destination (column), in the dimensions of
    /// the problem as provided.
    allocation: DenseMatrix<f64>,
    /// Cost of the allocation, including the degenerate cells.
    total_cost: f64,
    /// Whether total supply and total demand were equal, such that no dummy line was needed.
    balanced: bool,
    method: Strategy,
    /// Number of cells with a positive allocation before the dummy line was removed.
    nr_basic_cells: usize,
}

impl TransportationSolution {
    /// Quantities shipped, one row per source.
    pub fn allocation(&self) -> &DenseMatrix<f64> {
        &self.allocation
    }

    /// Total cost of shipping.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Whether the problem was balanced.
    pub fn is_balanced(&self) -> bool {
        self.balanced
    }

    /// Heuristic that produced this allocation.
    pub fn method(&self) -> Strategy {
        self.method
    }

    /// Basic cells in the balanced problem, always its number of rows plus columns minus one.
    pub fn nr_basic_cells(&self) -> usize {
        self.nr_basic_cells
    }
}

impl Display for TransportationSolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial allocation ({})", self.method)?;
        write!(f, "{}", self.allocation)?;
        writeln!(f, "Total cost: {:.4}", self.total_cost)?;
        writeln!(f, "Balanced: {}", if self.balanced { "yes" } else { "no" })
    }
}

/// The line added to balance a problem.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Dummy {
    /// A row, supplying the demand excess.
    Source,
    /// A column, absorbing the supply excess.
    Destination,
}

/// Computes initial allocations for transportation problems.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransportationSolver {
    epsilon: f64,
}

impl Default for TransportationSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TransportationSolver {
    /// Solver with the default tolerance.
    #[must_use]
    pub fn new() -> Self {
        Self { epsilon: EPSILON }
    }

    /// Change the tolerance; it is also the quantity placed in degenerate cells.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Find an initial allocation.
    ///
    /// # Arguments
    ///
    /// * `problem`: Supply, demand and costs; not modified.
    /// * `strategy`: Heuristic to use.
    ///
    /// # Errors
    ///
    /// If the problem is not consistent, see `TransportationProblem::validate`.
    pub fn solve(
        &self,
        problem: &TransportationProblem,
        strategy: Strategy,
    ) -> Result<TransportationSolution, InvalidInput> {
        problem.validate()?;

        let (nr_sources, nr_destinations) = (problem.supply.len(), problem.demand.len());
        let mut costs = DenseMatrix::from_data(problem.costs.clone());
        let mut supply = problem.supply.clone();
        let mut demand = problem.demand.clone();

        let difference = problem.total_supply() - problem.total_demand();
        let balanced = difference.abs() < self.epsilon;
        let dummy = if balanced {
            None
        } else if difference > 0f64 {
            demand.push(difference);
            costs.push_column(vec![0f64; nr_sources]);
            Some(Dummy::Destination)
        } else {
            supply.push(-difference);
            costs.push_row(vec![0f64; nr_destinations]);
            Some(Dummy::Source)
        };
        debug!("Allocating {nr_sources} sources to {nr_destinations} destinations, dummy: {dummy:?}");

        let mut plan = TransportPlan::new(costs, supply, demand, self.epsilon);
        match strategy {
            Strategy::NorthWest => plan.fill::<NorthWestCorner>(),
            Strategy::MinimumCost => plan.fill::<MinimumCost>(),
            Strategy::VogelApproximation => plan.fill::<VogelApproximation>(),
        }

        let total_cost = plan.total_cost();
        let nr_basic_cells = plan.nr_basic_cells();
        info!("{strategy} found an allocation of cost {total_cost} with {nr_basic_cells} basic cells");

        let mut allocation = plan.into_allocation();
        match dummy {
            Some(Dummy::Source) => allocation.remove_row(nr_sources),
            Some(Dummy::Destination) => allocation.remove_column(nr_destinations),
            None => {},
        }

        Ok(TransportationSolution {
            allocation,
            total_cost,
            balanced,
            method: strategy,
            nr_basic_cells,
        })
    }
}
