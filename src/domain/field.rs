//! Generic validated field.

use super::errors::ValidationResult;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// A validation rule for a [`ValidatedField`].
///
/// Rules are zero-sized markers; the field stores only the value.
pub trait FieldRule {
    /// The type of value the field holds.
    type Value: Clone + fmt::Debug + PartialEq + Eq + Hash;

    /// Check a candidate value, returning the error to report on rejection.
    fn check(value: &Self::Value) -> ValidationResult<()>;
}

/// A value that always satisfies its rule `R`.
///
/// Construction fails if the initial value is rejected, and [`set`](Self::set)
/// leaves the previous value in place when the new one is rejected.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneField;
///
/// let mut phone = PhoneField::new("3434567895").unwrap();
/// assert!(phone.set("not-a-phone").is_err());
/// assert_eq!(phone.get(), "3434567895");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedField<R: FieldRule> {
    value: R::Value,
    rule: PhantomData<R>,
}

impl<R: FieldRule> ValidatedField<R> {
    /// Create a new field, validating the initial value.
    ///
    /// # Errors
    ///
    /// Returns the rule's `ValidationError` if the value is rejected.
    pub fn new(value: impl Into<R::Value>) -> ValidationResult<Self> {
        let value = value.into();
        R::check(&value)?;
        Ok(Self {
            value,
            rule: PhantomData,
        })
    }

    /// Replace the stored value.
    ///
    /// # Errors
    ///
    /// Returns the rule's `ValidationError` if the value is rejected; the
    /// previous value is kept.
    pub fn set(&mut self, value: impl Into<R::Value>) -> ValidationResult<()> {
        let value = value.into();
        R::check(&value)?;
        self.value = value;
        Ok(())
    }

    /// Get the stored value.
    pub fn get(&self) -> &R::Value {
        &self.value
    }

    /// Convert into the underlying value.
    pub fn into_inner(self) -> R::Value {
        self.value
    }
}
