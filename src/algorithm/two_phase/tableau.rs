//! # Simplex tableau
//!
//! A dense tableau with the cost row on top. The columns are grouped by type:
//!
//! /                || Decision variables | Slack variables | Artificial variables || RHS |
//! =================||====================|=================|======================||=====|
//! Cost (row 0)     ||    c (min form)    |        0        |           0          || -z  |
//! -----------------||--------------------|-----------------|----------------------||-----|
//! Inequality (<=)  ||    coefficients    |        1        |           0          ||  b  |
//! Inequality (>=)  ||    coefficients    |       -1        |           1          ||  b  |
//! Equality   (==)  ||    coefficients    |        0        |           1          ||  b  |
//! -----------------||--------------------|-----------------|----------------------||-----|
//! Auxiliary cost   ||  only during the first phase, minimizes the sum of artificials  || -w  |
//!
//! Constraint rows keep the order in which the constraints were provided; slack and artificial
//! columns are numbered in that same order within their group.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::Range;

use cumsum::cumsum_array_owned;
use enum_map::{Enum, enum_map, EnumMap};
use log::trace;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::problem::LinearProgram;

/// Classification of the columns of the tableau, see the module documentation.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColumnType {
    /// Variables for which we want a solution.
    Decision,
    /// Slack (for `<=`) or surplus (for `>=`) of a constraint.
    Slack,
    /// Only used to find a first basic feasible solution.
    Artificial,
}

/// The working state of one simplex solve.
///
/// Owns its buffer; it is created from a problem and discarded when the solve ends.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau {
    matrix: DenseMatrix<f64>,
    /// Index of the basic column for each constraint row (`basis[i]` belongs to matrix row `i + 1`).
    basis: Vec<usize>,
    /// Exclusive end index of each column group.
    column_group_end: EnumMap<ColumnType, usize>,
    /// For each constraint, the column of its slack or surplus variable, if it has one.
    slack_columns: Vec<Option<usize>>,
    /// Whether the last row is the auxiliary cost row of the first phase.
    has_auxiliary_row: bool,
    nr_pivots: usize,
    epsilon: f64,
}

impl Tableau {
    /// Bring a linear program in standard form.
    ///
    /// Constraints with a negative right hand side are multiplied by `-1` first, such that the
    /// slack and artificial variables form a basic feasible solution with all values nonnegative.
    /// The cost row is negated for maximization problems, this tableau always minimizes.
    ///
    /// # Arguments
    ///
    /// * `problem`: A validated linear program.
    /// * `epsilon`: Values with an absolute value below this are treated as zero.
    #[must_use]
    pub fn new(problem: &LinearProgram, epsilon: f64) -> Self {
        let nr_variables = problem.nr_variables();
        let nr_constraints = problem.nr_constraints();

        // (relation, factor) of each row after making the right hand side nonnegative
        let normalized = problem.constraints.iter()
            .map(|constraint| if constraint.rhs < 0f64 {
                (!constraint.constraint_type, -1f64)
            } else {
                (constraint.constraint_type, 1f64)
            })
            .collect::<Vec<_>>();

        let mut counts = EnumMap::<ConstraintType, usize>::default();
        for &(constraint_type, _) in &normalized {
            counts[constraint_type] += 1;
        }
        let cumulative = cumsum_array_owned([
            nr_variables,
            counts[ConstraintType::Less] + counts[ConstraintType::Greater],
            counts[ConstraintType::Greater] + counts[ConstraintType::Equal],
        ]);
        let column_group_end = enum_map! {
            ColumnType::Decision   => cumulative[0],
            ColumnType::Slack      => cumulative[1],
            ColumnType::Artificial => cumulative[2],
        };
        let rhs_column = column_group_end[ColumnType::Artificial];

        let mut matrix = DenseMatrix::zeros(nr_constraints + 1, rhs_column + 1);
        let sign = match problem.objective.direction {
            Objective::Maximize => -1f64,
            Objective::Minimize => 1f64,
        };
        for (j, &cost) in problem.objective.coefficients.coefficients().iter().enumerate() {
            matrix.set_value(0, j, sign * cost);
        }

        let mut basis = Vec::with_capacity(nr_constraints);
        let mut slack_columns = Vec::with_capacity(nr_constraints);
        let mut next_slack = column_group_end[ColumnType::Decision];
        let mut next_artificial = column_group_end[ColumnType::Slack];
        for (i, (constraint, &(constraint_type, factor))) in problem.constraints.iter().zip(&normalized).enumerate() {
            let row = i + 1;
            for (j, &coefficient) in constraint.coefficients.coefficients().iter().enumerate() {
                matrix.set_value(row, j, factor * coefficient);
            }
            matrix.set_value(row, rhs_column, factor * constraint.rhs);

            match constraint_type {
                ConstraintType::Less => {
                    matrix.set_value(row, next_slack, 1f64);
                    basis.push(next_slack);
                    slack_columns.push(Some(next_slack));
                    next_slack += 1;
                },
                ConstraintType::Greater => {
                    matrix.set_value(row, next_slack, -1f64);
                    slack_columns.push(Some(next_slack));
                    next_slack += 1;
                    matrix.set_value(row, next_artificial, 1f64);
                    basis.push(next_artificial);
                    next_artificial += 1;
                },
                ConstraintType::Equal => {
                    matrix.set_value(row, next_artificial, 1f64);
                    basis.push(next_artificial);
                    slack_columns.push(None);
                    next_artificial += 1;
                },
            }
        }
        debug_assert_eq!(next_slack, column_group_end[ColumnType::Slack]);
        debug_assert_eq!(next_artificial, column_group_end[ColumnType::Artificial]);

        Self {
            matrix,
            basis,
            column_group_end,
            slack_columns,
            has_auxiliary_row: false,
            nr_pivots: 0,
            epsilon,
        }
    }

    /// Add the cost row of the first phase: minimize the sum of the artificial variables.
    ///
    /// It is expressed in terms of the non basic variables, that is, the rows in which an
    /// artificial variable is basic are subtracted from the artificial costs.
    pub(crate) fn add_auxiliary_row(&mut self) {
        debug_assert!(!self.has_auxiliary_row);

        let mut auxiliary = vec![0f64; self.rhs_column() + 1];
        for j in self.column_range(ColumnType::Artificial) {
            auxiliary[j] = 1f64;
        }
        for row in self.artificial_basis_rows() {
            for (target, value) in auxiliary.iter_mut().zip(self.matrix.row(row)) {
                *target -= value;
            }
        }

        self.matrix.push_row(auxiliary);
        self.has_auxiliary_row = true;
    }

    /// Remove the cost row of the first phase.
    pub(crate) fn remove_auxiliary_row(&mut self) {
        debug_assert!(self.has_auxiliary_row);

        self.matrix.remove_row(self.nr_rows() + 1);
        self.has_auxiliary_row = false;
    }

    /// Index of the row that currently acts as the cost row.
    fn cost_row(&self) -> usize {
        if self.has_auxiliary_row {
            self.nr_rows() + 1
        } else {
            0
        }
    }

    /// Relative cost of a column in the current cost row.
    pub fn relative_cost(&self, column: usize) -> f64 {
        self.matrix.get_value(self.cost_row(), column)
    }

    /// Value of the current cost function in the current basic solution.
    ///
    /// Always in minimization form.
    pub fn objective_function_value(&self) -> f64 {
        -self.matrix.get_value(self.cost_row(), self.rhs_column())
    }

    /// Columns that may enter the basis.
    ///
    /// Artificial variables never do.
    pub fn entering_candidates(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.column_group_end[ColumnType::Slack]).filter(move |&j| !self.is_in_basis(j))
    }

    /// Select the row that leaves the basis when `column` enters, using the minimum ratio test.
    ///
    /// Only rows with a positive entry in `column` qualify. Ties are broken by taking the first
    /// row found; there is no anti cycling rule.
    ///
    /// # Return value
    ///
    /// Matrix row index (constraint rows start at `1`), or `None` if no row qualifies, in which
    /// case the cost can decrease without bound along this column.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        let rhs_column = self.rhs_column();

        let mut min_values: Option<(usize, f64)> = None;
        for row in 1..=self.nr_rows() {
            let xij = self.matrix.get_value(row, column);
            if xij > self.epsilon {
                // Round-off can leave a basic value slightly below zero, it counts as zero
                let ratio = self.matrix.get_value(row, rhs_column).max(0f64) / xij;
                match min_values {
                    Some((_, min_ratio)) if ratio >= min_ratio => {},
                    _ => min_values = Some((row, ratio)),
                }
            }
        }

        min_values.map(|(row, _)| row)
    }

    /// Pivot `column` into the basis on matrix row `row`.
    ///
    /// The pivot row is normalized and the column is eliminated from all other rows, cost rows
    /// included, over the full row width.
    pub fn bring_into_basis(&mut self, column: usize, row: usize) {
        debug_assert!((1..=self.nr_rows()).contains(&row));
        debug_assert!(!self.is_in_basis(column));

        let pivot_value = self.matrix.get_value(row, column);
        debug_assert!(pivot_value.abs() > self.epsilon);
        trace!(
            "Pivot {}: column {column} enters, column {} leaves (row {row}, value {pivot_value})",
            self.nr_pivots + 1, self.basis[row - 1],
        );

        self.matrix.multiply_row(row, 1f64 / pivot_value);
        self.matrix.set_value(row, column, 1f64);
        for other in (0..self.matrix.nr_rows()).filter(|&other| other != row) {
            let factor = self.matrix.get_value(other, column);
            if factor != 0f64 {
                self.matrix.mul_add_rows(row, other, -factor);
                self.matrix.set_value(other, column, 0f64);
            }
        }

        self.basis[row - 1] = column;
        self.nr_pivots += 1;
    }

    /// Matrix rows in which an artificial variable is basic.
    pub fn artificial_basis_rows(&self) -> Vec<usize> {
        self.basis.iter()
            .enumerate()
            .filter(|&(_, &column)| self.column_type(column) == ColumnType::Artificial)
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Whether any artificial variable is in the basis.
    pub fn has_artificial_in_basis(&self) -> bool {
        self.basis.iter().any(|&column| self.column_type(column) == ColumnType::Artificial)
    }

    /// Value of an element of the tableau.
    pub fn generate_element(&self, row: usize, column: usize) -> f64 {
        self.matrix.get_value(row, column)
    }

    /// The row in which `column` is basic, detected from the column itself.
    ///
    /// A column is basic in a row if it has a one in that row and zeros in every other row,
    /// including the cost row.
    pub fn basic_row(&self, column: usize) -> Option<usize> {
        let mut found = None;
        for (row, value) in self.matrix.column(column).enumerate() {
            if (value - 1f64).abs() <= self.epsilon && row > 0 && found.is_none() {
                found = Some(row);
            } else if value.abs() > self.epsilon {
                return None;
            }
        }

        found
    }

    /// Value of a variable in the current basic solution; zero if it is non basic.
    pub fn variable_value(&self, column: usize) -> f64 {
        let value = self.basic_row(column)
            .map_or(0f64, |row| self.matrix.get_value(row, self.rhs_column()));

        if value.abs() < self.epsilon { 0f64 } else { value }
    }

    /// Values of the decision variables in the current basic solution.
    pub fn current_bfs(&self) -> Vec<f64> {
        self.column_range(ColumnType::Decision).map(|j| self.variable_value(j)).collect()
    }

    /// Value of the slack (or surplus) variable of each constraint; zero for equalities.
    pub fn slack_values(&self) -> Vec<f64> {
        self.slack_columns.iter()
            .map(|column| column.map_or(0f64, |j| self.variable_value(j)))
            .collect()
    }

    /// Whether another basic solution attains the same cost.
    ///
    /// That is the case when a non basic, non artificial column has a zero relative cost and could
    /// enter the basis.
    pub fn has_alternative_optimum(&self) -> bool {
        self.entering_candidates()
            .filter(|&j| self.relative_cost(j).abs() <= self.epsilon)
            .any(|j| self.select_primal_pivot_row(j).is_some())
    }

    /// Group a column belongs to.
    pub fn column_type(&self, column: usize) -> ColumnType {
        debug_assert!(column < self.rhs_column());

        if column < self.column_group_end[ColumnType::Decision] {
            ColumnType::Decision
        } else if column < self.column_group_end[ColumnType::Slack] {
            ColumnType::Slack
        } else {
            ColumnType::Artificial
        }
    }

    /// All column indices of one group.
    pub fn column_range(&self, column_type: ColumnType) -> Range<usize> {
        let start = match column_type {
            ColumnType::Decision => 0,
            ColumnType::Slack => self.column_group_end[ColumnType::Decision],
            ColumnType::Artificial => self.column_group_end[ColumnType::Slack],
        };

        start..self.column_group_end[column_type]
    }

    /// Whether a column is currently basic.
    pub fn is_in_basis(&self, column: usize) -> bool {
        self.basis.contains(&column)
    }

    /// Number of constraint rows.
    pub fn nr_rows(&self) -> usize {
        self.basis.len()
    }

    /// Number of variable columns, the right hand side excluded.
    pub fn nr_columns(&self) -> usize {
        self.rhs_column()
    }

    fn rhs_column(&self) -> usize {
        self.column_group_end[ColumnType::Artificial]
    }

    /// Number of pivots performed so far.
    pub fn nr_pivots(&self) -> usize {
        self.nr_pivots
    }

    /// Tolerance for comparisons with zero.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Display for Tableau {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Basis: {:?}", self.basis)?;
        write!(f, "{}", self.matrix)
    }
}
