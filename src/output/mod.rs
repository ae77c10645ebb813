//! Terminal output formatting
//!
//! Display utilities for the line-based front end and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_evaluation_result, print_statistics};
