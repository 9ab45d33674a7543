//! Contact model: a name with its phone numbers and optional birthday.

use crate::domain::{BirthdayField, ContactName, PhoneField, ValidationResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A person in the contact book.
///
/// The name is the contact's identity and never changes. Phones keep their
/// insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    /// Name the contact is stored under
    name: ContactName,

    /// Phone numbers in the order they were added
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneField>,

    /// Date of birth, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthdayField>,
}

impl Contact {
    /// Create a contact with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Builder-style helper that sets the birthday.
    pub fn with_birthday(mut self, birthday: BirthdayField) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneField] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthdayField> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` and leaves the list
    /// unchanged if `raw` is not a valid phone.
    pub fn add_phone(&mut self, raw: &str) -> ValidationResult<()> {
        let phone = PhoneField::new(raw)?;
        tracing::debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `raw`. Does nothing if none match.
    ///
    /// Returns the number of phones removed.
    pub fn remove_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|phone| !phone.matches(raw));
        let removed = before - self.phones.len();
        tracing::debug!(contact = %self.name, phone = raw, removed, "Removed phone");
        removed
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// A miss on `old` is not an error: the phone list is left unchanged and
    /// `Ok(false)` is returned without looking at `new`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if `old` is present and
    /// `new` is not a valid phone. The phone list is unchanged in that case.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ValidationResult<bool> {
        match self.phones.iter_mut().find(|phone| phone.matches(old)) {
            Some(slot) => {
                let replacement = PhoneField::new(new)?;
                tracing::debug!(contact = %self.name, old, new, "Editing phone");
                *slot = replacement;
                Ok(true)
            }
            None => {
                tracing::debug!(contact = %self.name, old, "No phone to edit");
                Ok(false)
            }
        }
    }

    /// Find the first phone equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneField> {
        self.phones.iter().find(|phone| phone.matches(raw))
    }

    /// Replace the birthday wholesale.
    pub fn set_birthday(&mut self, birthday: BirthdayField) {
        self.birthday = Some(birthday);
    }

    /// Forget the birthday.
    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Days from `today` until the next birthday, `None` when no birthday is set.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday
            .as_ref()
            .map(|birthday| birthday.days_until_next_occurrence(today))
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        if self.phones.is_empty() {
            write!(f, "no phones")?;
        } else {
            let phones: Vec<&str> = self.phones.iter().map(PhoneField::as_str).collect();
            write!(f, "{}", phones.join(", "))?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, "; birthday {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn john() -> Contact {
        Contact::new(ContactName::new("John Doe").unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_contact_is_empty() {
        let contact = john();
        assert_eq!(contact.name().as_str(), "John Doe");
        assert!(contact.phones().is_empty());
        assert!(contact.birthday().is_none());
    }

    #[test]
    fn test_contacts_do_not_share_phone_lists() {
        let mut a = john();
        let b = john();
        a.add_phone("3434567895").unwrap();
        assert_eq!(a.phones().len(), 1);
        assert!(b.phones().is_empty());
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let mut contact = john();
        contact.add_phone("1111111111").unwrap();
        contact.add_phone("2222222222").unwrap();
        contact.add_phone("1111111111").unwrap();

        let phones: Vec<&str> = contact.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn test_add_invalid_phone_leaves_list_unchanged() {
        let mut contact = john();
        contact.add_phone("1111111111").unwrap();
        let err = contact.add_phone("12-34").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhoneFormat("12-34".to_string()));
        assert_eq!(contact.phones().len(), 1);
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut contact = john();
        contact.add_phone("1111111111").unwrap();
        contact.add_phone("2222222222").unwrap();
        contact.add_phone("1111111111").unwrap();

        assert_eq!(contact.remove_phone("1111111111"), 2);
        assert_eq!(contact.phones().len(), 1);
        assert_eq!(contact.phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn test_remove_missing_phone_is_noop() {
        let mut contact = john();
        contact.add_phone("1111111111").unwrap();
        assert_eq!(contact.remove_phone("9999999999"), 0);
        assert_eq!(contact.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_first_match_in_place() {
        let mut contact = john();
        contact.add_phone("1111111111").unwrap();
        contact.add_phone("2222222222").unwrap();
        contact.add_phone("1111111111").unwrap();

        assert!(contact.edit_phone("1111111111", "3333333333").unwrap());
        let phones: Vec<&str> = contact.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["3333333333", "2222222222", "1111111111"]);
    }

    #[test]
    fn test_edit_phone_miss_is_noop() {
        let mut contact = john();
        contact.add_phone("3434567895").unwrap();
        let before = contact.clone();

        assert!(!contact.edit_phone("000", "1111111111").unwrap());
        assert_eq!(contact, before);

        // The replacement is never looked at when nothing matches
        assert_eq!(contact.edit_phone("000", "111"), Ok(false));
        assert_eq!(contact, before);
    }

    #[test]
    fn test_edit_phone_rejects_invalid_replacement() {
        let mut contact = john();
        contact.add_phone("3434567895").unwrap();

        assert!(contact.edit_phone("3434567895", "111").is_err());
        assert_eq!(contact.phones()[0].as_str(), "3434567895");
        assert_eq!(contact.phones().len(), 1);
    }

    #[test]
    fn test_find_phone() {
        let mut contact = john();
        contact.add_phone("3434567895").unwrap();
        assert!(contact.find_phone("3434567895").is_some());
        assert!(contact.find_phone("1276543211").is_none());
    }

    #[test]
    fn test_days_to_birthday() {
        let mut contact = john();
        assert_eq!(contact.days_to_birthday(date(2024, 5, 1)), None);

        contact.set_birthday(BirthdayField::new(date(1991, 5, 11)).unwrap());
        assert_eq!(contact.days_to_birthday(date(2024, 5, 1)), Some(10));

        contact.clear_birthday();
        assert_eq!(contact.days_to_birthday(date(2024, 5, 1)), None);
    }

    #[test]
    fn test_display() {
        let mut contact = john().with_birthday(BirthdayField::new(date(1991, 5, 11)).unwrap());
        assert_eq!(contact.to_string(), "John Doe: no phones; birthday 1991-05-11");

        contact.add_phone("3434567895").unwrap();
        contact.add_phone("1276543211").unwrap();
        assert_eq!(
            contact.to_string(),
            "John Doe: 3434567895, 1276543211; birthday 1991-05-11"
        );
    }

    #[test]
    fn test_serde_roundtrip_validates_fields() {
        let json = r#"{"name":"John Doe","phones":["3434567895"],"birthday":"1991-05-11"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.phones()[0].as_str(), "3434567895");
        assert_eq!(serde_json::to_string(&contact).unwrap(), json);

        let bad_phone = r#"{"name":"John Doe","phones":["555"]}"#;
        assert!(serde_json::from_str::<Contact>(bad_phone).is_err());

        let unknown_field = r#"{"name":"John Doe","email":"john@example.com"}"#;
        assert!(serde_json::from_str::<Contact>(unknown_field).is_err());
    }
}
