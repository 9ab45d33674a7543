//! PhoneField value object.

use super::errors::{ValidationError, ValidationResult};
use super::field::{FieldRule, ValidatedField};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is a valid regex"));

/// Validation rule for phone numbers.
///
/// # Validation Rules
///
/// - Exactly 10 ASCII decimal digits
/// - No country code, spaces, hyphens, parentheses or other separators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhoneRule;

impl FieldRule for PhoneRule {
    type Value = String;

    fn check(value: &Self::Value) -> ValidationResult<()> {
        if PHONE_PATTERN.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::InvalidPhoneFormat(value.clone()))
        }
    }
}

/// A phone number of exactly ten digits.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneField;
///
/// let phone = PhoneField::new("3434567895").unwrap();
/// assert_eq!(phone.as_str(), "3434567895");
/// assert!(PhoneField::new("+1-555-1234").is_err());
/// ```
pub type PhoneField = ValidatedField<PhoneRule>;

impl PhoneField {
    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.get()
    }

    /// Whether this phone holds exactly `raw`.
    pub fn matches(&self, raw: &str) -> bool {
        self.as_str() == raw
    }
}

// Serde support - serialize as string
impl Serialize for PhoneField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneField::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneField::new("3434567895").unwrap();
        assert_eq!(phone.as_str(), "3434567895");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneField::new("").is_err());
        assert!(PhoneField::new("123456789").is_err());
        assert!(PhoneField::new("12345678901").is_err());
        assert!(PhoneField::new("123-456-7890").is_err());
        assert!(PhoneField::new("(555)123456").is_err());
        assert!(PhoneField::new("+123456789").is_err());
        assert!(PhoneField::new("12345 6789").is_err());
        assert!(PhoneField::new("0000000000").is_ok());
        assert!(PhoneField::new("1276543211").is_ok());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII
        assert!(PhoneField::new("١٢٣٤٥٦٧٨٩٠").is_err());
        // A trailing newline must not sneak past the anchors
        assert!(PhoneField::new("1234567890\n").is_err());
    }

    #[test]
    fn test_phone_error_carries_input() {
        let err = PhoneField::new("abc").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhoneFormat("abc".to_string()));
    }

    #[test]
    fn test_phone_set_is_atomic() {
        let mut phone = PhoneField::new("1111111111").unwrap();
        assert!(phone.set("22").is_err());
        assert_eq!(phone.as_str(), "1111111111");
        phone.set("2222222222").unwrap();
        assert_eq!(phone.as_str(), "2222222222");
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneField::new("3434567895").unwrap();
        assert_eq!(format!("{}", phone), "3434567895");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneField::new("3434567895").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"3434567895\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneField, _> = serde_json::from_str("\"555-1234\"");
        assert!(result.is_err());
    }
}
