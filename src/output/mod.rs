//! Output formatting for calculation results.
//!
//! This module handles rendering a computed record for the caller:
//! - [`to_json`] - machine-readable JSON output
//! - [`print_result`] - terminal panel with colors

mod json;
mod terminal;

pub use json::to_json;
pub use terminal::{format_label, print_result};
