//! # A linear programming toolkit
//!
//! Small, dense linear programs are solved with either the graphical method (two variables) or the
//! two phase Simplex method, and transportation problems receive an initial allocation from one of
//! three classic heuristics. All solvers report through plain result types, problems can be read
//! from JSON files.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
