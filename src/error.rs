//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number is valid but not stored on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),
}

/// Errors raised while interpreting a command line.
///
/// These are caught at the router boundary and rendered as one-line
/// messages; they never end the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The line was blank
    #[error("empty command line")]
    Empty,

    /// No handler is registered for the keyword
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Wrong number of positional arguments
    #[error("{command} expects `{usage}`, got {got} argument(s)")]
    Arity {
        command: &'static str,
        usage: &'static str,
        got: usize,
    },

    /// The named contact is not in the directory
    #[error("contact not found: {0}")]
    ContactNotFound(String),

    /// The phone number is not stored on the contact
    #[error("phone number not found: {0}")]
    PhoneNotFound(String),

    /// A field failed validation
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// An argument could not be interpreted (e.g. a non-numeric day count)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<RecordError> for CommandError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Validation(e) => CommandError::Validation(e),
            RecordError::PhoneNotFound(phone) => CommandError::PhoneNotFound(phone),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
