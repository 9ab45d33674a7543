//! Error types for the contact book.
//!
//! Field-level validation errors live in [`crate::domain::ValidationError`];
//! this module defines the directory, service and configuration errors built
//! on top of them with `thiserror`.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by [`crate::directory::ContactDirectory`].
///
/// These are contract violations by the caller rather than bad user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Page size must be at least one
    #[error("Invalid page size: {0} (must be at least 1)")]
    InvalidPageSize(usize),

    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// A value inserted into the directory is not a contact
    #[error("Type mismatch: expected a contact, {0}")]
    TypeMismatch(String),

    /// A contact with this name already exists and the directory rejects duplicates
    #[error("Contact already exists: {0}")]
    DuplicateName(String),
}

/// Errors surfaced through [`crate::services::ContactBookService`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactBookError {
    /// A field rejected its input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The directory rejected the operation
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The command line could not be understood
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ContactBookError
pub type ContactBookResult<T> = Result<T, ContactBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
