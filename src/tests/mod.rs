//! # Tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `const JSON_LITERAL_STRING`
//! * `fn linear_program()`
//! * `fn <name>()` for a transportation problem
//! * `fn <name>_data()` for the balanced working data of a transportation problem
pub mod problem_1;
pub mod problem_2;
