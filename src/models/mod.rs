//! Data models for the contact book.
//!
//! A [`Contact`] aggregates the validated fields from [`crate::domain`].

pub mod contact;

pub use contact::Contact;
