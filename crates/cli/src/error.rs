//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map configuration and prompt errors found in an `anyhow` chain to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 130 is reserved for an aborted prompt (Unix standard: 128 + SIGINT).

use shortcuts_config::ConfigError;

use crate::interactive::PromptAborted;

/// Structured exit codes for gnome-shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - shortcuts were listed.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Invalid configuration - bad environment value, flag value or `.env` file.
    ///
    /// Scripts should fix the input rather than retry.
    InvalidConfiguration = 2,

    /// Interrupted - the layout prompt was cancelled or could not be shown.
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.is::<ConfigError>() {
                return ExitCode::InvalidConfiguration;
            }
            if cause.is::<PromptAborted>() {
                return ExitCode::Interrupted;
            }
        }
        ExitCode::GeneralError
    }
}
