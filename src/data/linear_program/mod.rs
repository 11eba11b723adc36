//! # Representing linear programs
//!
//! Building blocks (constraints, objectives), problem containers that validate their input, and
//! the shared solution representation that every solver produces.
pub mod elements;
pub mod error;
pub mod problem;
pub mod solution;
