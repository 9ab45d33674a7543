//! Domain value objects and types.
//!
//! This module contains the validated fields a contact is made of: names,
//! phone numbers and birthdays. Every field is checked at construction time
//! and on every later assignment, so an invalid value can never be stored.

pub mod birthday;
pub mod contact_name;
pub mod errors;
pub mod field;
pub mod phone;

pub use birthday::{BirthdayField, BirthdayRule};
pub use contact_name::ContactName;
pub use errors::{ValidationError, ValidationResult};
pub use field::{FieldRule, ValidatedField};
pub use phone::{PhoneField, PhoneRule};
