//! # Error reporting for reading of problem files
//!
//! Describes any problems encountered during reading, parsing and checking of a problem file.
use std::io;

use thiserror::Error;

use crate::data::linear_program::error::InvalidInput;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("failed to read problem file: {0}")]
    Io(#[from] io::Error),
    /// Contents of the file could not be parsed into a problem.
    ///
    /// # Note
    ///
    /// If the problem is inconsistent, that will not be represented with this error. This variant
    /// should only be created for syntactically incorrect files.
    #[error("failed to parse problem file: {0}")]
    Parse(#[from] serde_json::Error),
    /// The file describes a problem that can't be solved as described.
    ///
    /// For example, a constraint might have more coefficients than the objective function.
    #[error("inconsistent problem: {0}")]
    InvalidInput(#[from] InvalidInput),
}
