//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (storage failures and unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Resource not found (data directory, template, record file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input, malformed import, or out-of-range entry.
    pub const INVALID_INPUT: i32 = 4;

    /// Name already taken by another template or record file.
    pub const DUPLICATE: i32 = 5;

    /// Entries or template definitions failed validation.
    pub const VALIDATION_FAILED: i32 = 6;
}

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "ENTRYLEVEL_CONFIG";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "ENTRYLEVEL_LOG";

/// Directory name used under the XDG config and data homes.
pub const APP_DIR: &str = "entrylevel";
