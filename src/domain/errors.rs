//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten digits.
    #[error("Invalid phone number: {0} (expected 10 digits)")]
    InvalidPhoneFormat(String),

    /// The provided birthday is not a valid `YYYY-MM-DD` date.
    #[error("Invalid birthday: {0} (expected YYYY-MM-DD)")]
    InvalidBirthdayFormat(String),

    /// The provided contact name is empty.
    #[error("Contact name cannot be empty")]
    EmptyName,
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
