//! # Dense matrices
//!
//! Working buffers for the solvers. The simplex tableau and the transportation allocation are both
//! small and dense, so a row-major `Vec<Vec<F>>` is all that is needed.
use std::fmt;
use std::fmt::{Display, Formatter};

use index_utils::remove_indices;
use itertools::Itertools;
use num_traits::Float;
use serde::{Serialize, Serializer};

/// Uses a `Vec<Vec<F>>` as underlying data structure. Indices start at `0`.
///
/// The number of columns is stored explicitly, such that a matrix without rows still has a known
/// width.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_columns: usize,
}

impl<F: Float> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// All rows should have the same length.
    #[must_use]
    pub fn from_data(data: Vec<Vec<F>>) -> Self {
        let nr_columns = data.first().map_or(0, Vec::len);
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        Self { data, nr_columns }
    }

    /// Create a dense matrix of zero's of dimension `rows` x `columns`.
    #[must_use]
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            data: vec![vec![F::zero(); columns]; rows],
            nr_columns: columns,
        }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows());

        &self.data[i]
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> impl Iterator<Item = F> + '_ {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(move |row| row[j])
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[F]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: F) {
        debug_assert!(i < self.nr_rows());

        for value in &mut self.data[i] {
            *value = *value * factor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows());
        debug_assert!(write_row < self.nr_rows());
        debug_assert_ne!(read_row, write_row);

        let read = self.data[read_row].clone();
        for (target, source) in self.data[write_row].iter_mut().zip_eq(read) {
            *target = *target + factor * source;
        }
    }

    /// Append a row at the bottom of the matrix.
    pub fn push_row(&mut self, row: Vec<F>) {
        debug_assert_eq!(row.len(), self.nr_columns);

        self.data.push(row);
    }

    /// Append a column at the right of the matrix, one value per row.
    pub fn push_column(&mut self, column: Vec<F>) {
        debug_assert_eq!(column.len(), self.nr_rows());

        for (row, value) in self.data.iter_mut().zip_eq(column) {
            row.push(value);
        }
        self.nr_columns += 1;
    }

    /// Remove row `i`, shifting the rows below it up.
    pub fn remove_row(&mut self, i: usize) {
        debug_assert!(i < self.nr_rows());

        remove_indices(&mut self.data, &[i]);
    }

    /// Remove column `j`, shifting the columns to the right of it to the left.
    pub fn remove_column(&mut self, j: usize) {
        debug_assert!(j < self.nr_columns);

        for row in &mut self.data {
            remove_indices(row, &[j]);
        }
        self.nr_columns -= 1;
    }

    /// Sum of the element wise product of two matrices of equal dimensions.
    pub fn inner_product(&self, other: &Self) -> F {
        debug_assert_eq!(self.nr_rows(), other.nr_rows());
        debug_assert_eq!(self.nr_columns(), other.nr_columns());

        self.data.iter().flatten()
            .zip_eq(other.data.iter().flatten())
            .fold(F::zero(), |total, (&left, &right)| total + left * right)
    }

    /// Number of elements strictly larger than `threshold`.
    pub fn count_larger_than(&self, threshold: F) -> usize {
        self.data.iter().flatten().filter(|&&value| value > threshold).count()
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.data.len()
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the data of this matrix.
    pub fn into_data(self) -> Vec<Vec<F>> {
        self.data
    }
}

impl<F: Serialize> Serialize for DenseMatrix<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl<F: Display> Display for DenseMatrix<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            writeln!(f, "{}", row.iter().map(|value| format!("{value:>10.4}")).join(" "))?;
        }

        Ok(())
    }
}
