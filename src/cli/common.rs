//! Shared CLI error handling and exit codes.

use crate::error::ChartError;
use std::fmt;

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Layout data or arguments were rejected
    ValidationError = 1,
    /// A file could not be read or decoded
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error reported by a subcommand, with the exit code to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code for the process
    pub code: ExitCode,
    /// Message printed after `Error:`
    pub message: String,
}

impl CliError {
    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ChartError> for CliError {
    fn from(err: ChartError) -> Self {
        if err.is_io() {
            Self::io(err.to_string())
        } else {
            Self::validation(err.to_string())
        }
    }
}

/// Result alias for subcommand handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Pretty-prints a value as JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_error_exit_codes() {
        let missing = ChartError::label_not_found("<Hyper>");
        assert_eq!(CliError::from(missing).code, ExitCode::ValidationError);

        let io = ChartError::FileAccess {
            path: "/nope.csv".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let err = CliError::from(io);
        assert_eq!(err.code, ExitCode::IoError);
        assert_eq!(err.code.code(), 2);
        assert!(err.message.contains("/nope.csv"));
    }
}
