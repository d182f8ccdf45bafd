//! Terminal output formatting
//!
//! Display utilities for the interactive game and CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_categories, print_hint, print_start, print_summary};
