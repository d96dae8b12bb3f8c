//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten decimal digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` calendar date.
    InvalidBirthday(String),

    /// The phone number to replace is not stored on the record.
    OldPhoneNotFound(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Invalid name: name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number: {} (expected 10 digits)", phone)
            }
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
            Self::OldPhoneNotFound(_) => write!(f, "Old phone number not found"),
        }
    }
}

impl std::error::Error for ValidationError {}
