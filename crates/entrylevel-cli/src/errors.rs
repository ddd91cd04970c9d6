//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI. Core errors reaching
//! `main` are mapped to the same codes by [`exit_code_for`].

use std::fmt;

use entrylevel_core::EntryLevelError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (data directory, template, record file)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Name already in use
    Duplicate(String),

    /// One or more validation messages
    ValidationFailed(Vec<String>),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) | CliError::Duplicate(message) => {
                write!(f, "{}", message)
            }
            CliError::ValidationFailed(errors) => {
                write!(f, "Validation failed: {} error(s)", errors.len())?;
                for error in errors {
                    write!(f, "\n  - {}", error)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Create a Duplicate error.
    pub fn duplicate(message: impl Into<String>) -> Self {
        CliError::Duplicate(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Duplicate(_) => exit_codes::DUPLICATE,
            CliError::ValidationFailed(_) => exit_codes::VALIDATION_FAILED,
        }
    }
}

/// Exit code for an error returned from a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<EntryLevelError>() {
        Some(EntryLevelError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(EntryLevelError::DuplicateName(_)) => exit_codes::DUPLICATE,
        Some(
            EntryLevelError::IndexOutOfRange { .. }
            | EntryLevelError::EmptyRecord
            | EntryLevelError::MalformedInput(_)
            | EntryLevelError::InvalidInput(_),
        ) => exit_codes::INVALID_INPUT,
        Some(EntryLevelError::Storage(_)) | None => exit_codes::FAILURE,
    }
}
