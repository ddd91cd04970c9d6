//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Confirmation prompts (`input`)
//! - Field definitions, field values and record file names (`parsing`)

mod input;
mod parsing;

// Re-export public API
pub use input::confirm_action;
pub use parsing::{normalize_record_file, parse_assignments, parse_field_specs};
