//! # Problem containers
//!
//! Plain descriptions of the problems the solvers accept, as a caller would provide them. Each can
//! be checked for consistency with its `validate` method; the solvers call it before doing any
//! work, so that `InvalidInput` is detected at the boundary.
use serde::{Deserialize, Serialize};

use crate::data::linear_program::elements::{Constraint, ObjectiveFunction};
use crate::data::linear_program::error::InvalidInput;

/// A linear program: an objective function and constraints over the same variables.
///
/// All variables are implicitly nonnegative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearProgram {
    /// What to optimize, and in which direction.
    pub objective: ObjectiveFunction,
    /// Restrictions on the variables, besides nonnegativity.
    #[serde(default)]
    pub constraints: Vec<Constraint>,
}

impl LinearProgram {
    /// Create a new linear program.
    #[must_use]
    pub fn new(objective: ObjectiveFunction, constraints: Vec<Constraint>) -> Self {
        Self { objective, constraints }
    }

    /// Number of decision variables, as determined by the objective function.
    pub fn nr_variables(&self) -> usize {
        self.objective.coefficients.len()
    }

    /// Number of constraints, excluding nonnegativity.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Check whether the dimensions and values of this problem are consistent.
    ///
    /// # Errors
    ///
    /// If the objective is empty, any number is not finite, a constraint has a different number of
    /// coefficients than the objective, or a constraint has only zero coefficients.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        let nr_variables = self.nr_variables();
        if nr_variables == 0 {
            return Err(InvalidInput::Empty("objective function"));
        }
        check_finite(self.objective.coefficients.coefficients(), || "objective coefficient".to_string())?;

        for (i, constraint) in self.constraints.iter().enumerate() {
            let number = i + 1;
            if constraint.coefficients.len() != nr_variables {
                return Err(InvalidInput::DimensionMismatch {
                    what: format!("coefficients of constraint {number}"),
                    expected: nr_variables,
                    found: constraint.coefficients.len(),
                });
            }
            check_finite(constraint.coefficients.coefficients(), || format!("coefficient of constraint {number}"))?;
            check_finite(&[constraint.rhs], || format!("right hand side of constraint {number}"))?;
            if constraint.coefficients.is_zero() {
                return Err(InvalidInput::ZeroConstraint(number));
            }
        }

        Ok(())
    }
}

/// Sources with a supply, destinations with a demand and a cost per unit shipped between each pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransportationProblem {
    /// Capacity of each source.
    pub supply: Vec<f64>,
    /// Requirement of each destination.
    pub demand: Vec<f64>,
    /// Unit cost, `supply.len()` rows of `demand.len()` values.
    pub costs: Vec<Vec<f64>>,
}

impl TransportationProblem {
    /// Create a new transportation problem.
    #[must_use]
    pub fn new(supply: Vec<f64>, demand: Vec<f64>, costs: Vec<Vec<f64>>) -> Self {
        Self { supply, demand, costs }
    }

    /// Sum of all supplies.
    pub fn total_supply(&self) -> f64 {
        self.supply.iter().sum()
    }

    /// Sum of all demands.
    pub fn total_demand(&self) -> f64 {
        self.demand.iter().sum()
    }

    /// Check whether the dimensions and values of this problem are consistent.
    ///
    /// # Errors
    ///
    /// If supply or demand is empty, the cost matrix doesn't have one row per source and one column
    /// per destination, any number is not finite, a quantity is negative or either total is not
    /// positive.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.supply.is_empty() {
            return Err(InvalidInput::Empty("supply"));
        }
        if self.demand.is_empty() {
            return Err(InvalidInput::Empty("demand"));
        }
        if self.costs.len() != self.supply.len() {
            return Err(InvalidInput::DimensionMismatch {
                what: "rows of the cost matrix".to_string(),
                expected: self.supply.len(),
                found: self.costs.len(),
            });
        }
        for (i, row) in self.costs.iter().enumerate() {
            if row.len() != self.demand.len() {
                return Err(InvalidInput::DimensionMismatch {
                    what: format!("row {} of the cost matrix", i + 1),
                    expected: self.demand.len(),
                    found: row.len(),
                });
            }
            check_finite(row, || format!("cost in row {}", i + 1))?;
        }

        check_quantities(&self.supply, "supply")?;
        check_quantities(&self.demand, "demand")?;
        if self.total_supply() <= 0f64 {
            return Err(InvalidInput::NoCapacity("supply"));
        }
        if self.total_demand() <= 0f64 {
            return Err(InvalidInput::NoCapacity("demand"));
        }

        Ok(())
    }
}

fn check_finite(values: &[f64], describe: impl Fn() -> String) -> Result<(), InvalidInput> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(InvalidInput::NotFinite(describe()))
    }
}

fn check_quantities(values: &[f64], name: &str) -> Result<(), InvalidInput> {
    for (i, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(InvalidInput::NotFinite(format!("{name} {}", i + 1)));
        }
        if value < 0f64 {
            return Err(InvalidInput::Negative(format!("{name} {}", i + 1)));
        }
    }

    Ok(())
}
