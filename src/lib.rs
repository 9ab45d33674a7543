//! Contact Book - a command-line contact manager.
//!
//! This library stores names, phone numbers and birthdays, validates every
//! field on entry, and supports lookup, editing, paginated listing and
//! "days until next birthday" arithmetic.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (phone, birthday, name) built on [`domain::ValidatedField`]
//! - **models**: The [`Contact`] aggregate
//! - **directory**: The insertion-ordered [`ContactDirectory`] with page iteration
//! - **matching**: Fuzzy name matching for search and lookup hints
//! - **services**: Text-producing operations for the command layer
//! - **commands**: Line parsing and dispatch for the interactive binary
//! - **config**: Configuration from environment variables
//! - **error**: Error types for precise error handling

pub mod commands;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod services;

pub use commands::{Command, CommandHandler, Reply};
pub use config::Config;
pub use directory::{ContactDirectory, DuplicatePolicy, Pages};
pub use domain::{BirthdayField, ContactName, PhoneField, ValidatedField, ValidationError};
pub use error::{ConfigError, ContactBookError, DirectoryError};
pub use matching::{MatchResult, NameMatcher};
pub use models::Contact;
pub use services::{
    Clock, ContactBookService, ContactBookServiceImpl, FixedClock, SystemClock,
};
