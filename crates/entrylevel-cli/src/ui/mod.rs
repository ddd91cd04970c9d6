//! Terminal output for the EntryLevel CLI.
//!
//! Each command builds a [`UiContext`], writes its own JSON when
//! `mode.is_json()`, and uses the render helpers for text output.

mod render;
mod style;
mod terminal;

pub use render::{
    blank_line, header, hint, kv, print, print_cancelled, print_error, print_receipt, receipt,
    simple_table,
};
pub use terminal::{UiContext, UiFlags};
