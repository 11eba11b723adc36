//! # Reading of problem files
//!
//! This module provides read functionality for problem descriptions.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithm::transportation::Strategy;
use crate::data::linear_program::error::InvalidInput;
use crate::data::linear_program::problem::{LinearProgram, TransportationProblem};
use crate::io::error::ImportError;

pub mod error;
pub mod json;

/// A problem read from a file, together with the method that should solve it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
    /// A linear program in two variables, for the graphical method.
    Graphical(LinearProgram),
    /// A linear program of any size, for the simplex method.
    Simplex(LinearProgram),
    /// A transportation problem and the heuristic for its initial allocation.
    Transportation {
        /// Supply, demand and costs.
        #[serde(flatten)]
        problem: TransportationProblem,
        /// Heuristic to use, North-West Corner if not given.
        #[serde(default)]
        strategy: Strategy,
    },
}

impl Problem {
    /// Check whether the problem is consistent.
    ///
    /// # Errors
    ///
    /// See `LinearProgram::validate` and `TransportationProblem::validate`.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        match self {
            Problem::Graphical(problem) => {
                if problem.nr_variables() != 2 {
                    return Err(InvalidInput::VariableCount { expected: 2, found: problem.nr_variables() });
                }
                problem.validate()
            },
            Problem::Simplex(problem) => problem.validate(),
            Problem::Transportation { problem, .. } => problem.validate(),
        }
    }

    /// Name of the kind of problem, as used in problem files.
    pub fn kind(&self) -> &'static str {
        match self {
            Problem::Graphical(_) => "graphical",
            Problem::Simplex(_) => "simplex",
            Problem::Transportation { .. } => "transportation",
        }
    }
}

/// Import a problem from a file.
///
/// Currently only supports the JSON filetype, see the `json` module for the format.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, there is an inconsistency in
/// the problem file, etc. an error type is returned.
pub fn import(file_path: &Path) -> Result<Problem, ImportError> {
    // Choose the right parser
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("json" | "JSON") => {
                let program = fs::read_to_string(file_path)?;
                json::import(&program)
            },
            Some(extension_string) => Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{extension_string}\" of file: {file_path:?}",
            ))),
            None => Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {extension:?}",
            ))),
        },
        None => Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {file_path:?}",
        ))),
    }
}
