//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying templates and
//! records in JSON and text form.

mod json;
mod text;

// Re-export public API
pub use json::{print_json, record_json};
pub use text::{entry_columns, entry_rows, field_summary, source_label};
