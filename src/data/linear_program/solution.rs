//! # Representation of solutions
//!
//! Every solver reports through the same structure, such that a presentation layer can render the
//! result of any method in the same way.
use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::data::linear_program::elements::Objective;

/// Outcome of solving a linear program.
///
/// These are regular outcomes, not failures: a caller branches on them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// A finite optimum was found, and it is the only optimal basic solution found.
    Optimal,
    /// The objective can be improved without bound along a feasible ray.
    Unbounded,
    /// No point satisfies all constraints.
    Infeasible,
    /// A finite optimum was found, and another basic solution attains the same value.
    Multiple,
}

impl Status {
    /// Whether a finite optimum is available.
    #[must_use]
    pub fn has_optimum(self) -> bool {
        matches!(self, Status::Optimal | Status::Multiple)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Optimal => "Optimal Solution Found",
            Status::Unbounded => "Unbounded Solution",
            Status::Infeasible => "No Feasible Solution",
            Status::Multiple => "Multiple Optimal Solutions",
        })
    }
}

/// Result of one solve call.
///
/// Constructed once, never modified afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Solution {
    status: Status,
    /// Value of the objective function for this solution.
    ///
    /// Infinite (with the sign of the direction of optimization) when unbounded, zero when
    /// infeasible.
    objective_value: f64,
    /// (variable name, solution value) tuples, empty unless there is an optimum.
    variables: Vec<(String, f64)>,
    /// (constraint name, slack) tuples, if the method computes them.
    #[serde(skip_serializing_if = "Option::is_none")]
    slacks: Option<Vec<(String, f64)>>,
    /// Name of the method that produced this solution.
    method: String,
    /// Number of iterations the method used, if it iterates.
    #[serde(skip_serializing_if = "Option::is_none")]
    iterations: Option<usize>,
}

impl Solution {
    /// Create a new `Solution` with a finite optimum.
    ///
    /// # Arguments
    ///
    /// * `status`: Either `Optimal` or `Multiple`.
    /// * `objective_value`: Value of the objective function at the optimum.
    /// * `variables`: Named values of the decision variables.
    /// * `method`: Name of the method used.
    #[must_use]
    pub fn new(
        status: Status,
        objective_value: f64,
        variables: Vec<(String, f64)>,
        method: impl Into<String>,
    ) -> Self {
        debug_assert!(status.has_optimum());

        Self {
            status,
            objective_value,
            variables,
            slacks: None,
            method: method.into(),
            iterations: None,
        }
    }

    /// A problem without finite optimum in the given direction.
    #[must_use]
    pub fn unbounded(direction: Objective, method: impl Into<String>) -> Self {
        let objective_value = match direction {
            Objective::Maximize => f64::INFINITY,
            Objective::Minimize => f64::NEG_INFINITY,
        };

        Self {
            status: Status::Unbounded,
            objective_value,
            variables: Vec::new(),
            slacks: None,
            method: method.into(),
            iterations: None,
        }
    }

    /// A problem without any feasible point.
    #[must_use]
    pub fn infeasible(method: impl Into<String>) -> Self {
        Self {
            status: Status::Infeasible,
            objective_value: 0f64,
            variables: Vec::new(),
            slacks: None,
            method: method.into(),
            iterations: None,
        }
    }

    /// Attach the slack of each constraint.
    #[must_use]
    pub fn with_slacks(mut self, slacks: Vec<(String, f64)>) -> Self {
        self.slacks = Some(slacks);
        self
    }

    /// Attach the number of iterations used.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Terminal status of the solve.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Objective function value, see the field documentation for the non optimal cases.
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Named variable values.
    pub fn variables(&self) -> &[(String, f64)] {
        &self.variables
    }

    /// Value of a variable by name.
    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.variables.iter().find(|(n, _)| n == name).map(|&(_, value)| value)
    }

    /// Named constraint slacks, if computed.
    pub fn slacks(&self) -> Option<&[(String, f64)]> {
        self.slacks.as_deref()
    }

    /// Name of the method that produced this solution.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Number of iterations, if counted.
    pub fn iterations(&self) -> Option<usize> {
        self.iterations
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.status, self.method)?;
        if !self.status.has_optimum() {
            return Ok(());
        }

        writeln!(f, "Objective value: {:.4}", self.objective_value)?;
        for (name, value) in &self.variables {
            writeln!(f, "  {name} = {value:.4}")?;
        }
        if let Some(slacks) = &self.slacks {
            writeln!(f, "Slacks:")?;
            for (name, value) in slacks {
                writeln!(f, "  {name}: {value:.4}")?;
            }
        }
        if let Some(iterations) = self.iterations {
            writeln!(f, "Iterations: {iterations}")?;
        }

        Ok(())
    }
}
