//! Error types for the CLI application.
//!
//! ## Batch Validation Errors
//!
//! `BatchValidationError<T>` collects one error per failed item with the
//! item's context. `verify` uses it with the round number as context.

use std::fmt;

use unosim_engine::errors::GameError;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input, unreadable traces or failed verification
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

// A rejected table shape is a configuration problem, everything else the
// engine raises is reported as an engine failure.
impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        match error {
            GameError::Config(e) => CliError::Config(e.to_string()),
            other => CliError::Engine(other.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

/// Generic error type for batch validation operations.
///
/// # Type Parameters
///
/// * `T` - Context type identifying the failed item (e.g., `u64` for a
///   round number). Must implement `Display` for error formatting.
///
/// # Examples
///
/// ```rust
/// use unosim_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: 5,
///     message: "round number 7 out of sequence".to_string(),
/// };
/// assert_eq!(error.to_string(), "5: round number 7 out of sequence");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchValidationError<T> {
    /// Context identifying the item that failed validation
    pub item_context: T,
    /// Descriptive error message
    pub message: String,
}

impl<T: fmt::Display> fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}
