//! The contact directory: every known contact, keyed by name.
//!
//! Contacts are kept in insertion order, which is also the order of
//! [`ContactDirectory::iter`] and [`ContactDirectory::iter_pages`].

mod pages;

pub use pages::Pages;

use crate::domain::{BirthdayField, ContactName};
use crate::error::{ContactBookResult, DirectoryError, DirectoryResult};
use crate::matching::{MatchResult, NameMatcher};
use crate::models::Contact;
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// What to do when a contact is added under a name that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Replace the stored contact, keeping its position (last write wins)
    #[default]
    Overwrite,

    /// Keep the stored contact and fail with `DirectoryError::DuplicateName`
    Reject,
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "Must be 'overwrite' or 'reject', got: {}",
                other
            )),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overwrite => write!(f, "overwrite"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// In-memory collection of contacts keyed by name.
///
/// The directory is created empty and owned by whoever composes the
/// application; there is no shared global instance.
///
/// # Example
///
/// ```
/// use contact_book::directory::ContactDirectory;
///
/// let mut directory = ContactDirectory::new();
/// directory.add_record("John Doe", ["3434567895"], Some("1991-05-11")).unwrap();
/// directory.add_record("Jane Smith", ["1276543211"], Some("1982-04-20")).unwrap();
/// directory.add_record("Bob Johnson", [] as [&str; 0], None).unwrap();
///
/// let sizes: Vec<usize> = directory.iter_pages(2).unwrap().map(|page| page.len()).collect();
/// assert_eq!(sizes, vec![2, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    contacts: IndexMap<ContactName, Contact>,
    policy: DuplicatePolicy,
}

impl ContactDirectory {
    /// Create an empty directory that overwrites duplicates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty directory with the given duplicate policy.
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            contacts: IndexMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Insert a contact under its own name.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::DuplicateName` if the name is taken and the
    /// policy is [`DuplicatePolicy::Reject`].
    pub fn add(&mut self, contact: Contact) -> DirectoryResult<()> {
        let name = contact.name().clone();

        if self.contacts.contains_key(name.as_str()) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    debug!(contact = %name, "Rejecting duplicate contact");
                    return Err(DirectoryError::DuplicateName(name.into_inner()));
                }
                DuplicatePolicy::Overwrite => {
                    debug!(contact = %name, "Overwriting existing contact");
                }
            }
        } else {
            debug!(contact = %name, "Adding contact");
        }

        self.contacts.insert(name, contact);
        Ok(())
    }

    /// Insert a contact given as loosely typed JSON.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::TypeMismatch` if the value is not a valid
    /// contact, or any error [`add`](Self::add) returns.
    pub fn add_value(&mut self, value: serde_json::Value) -> DirectoryResult<()> {
        // Derived struct visitors also accept sequences; a contact is always an object
        if !value.is_object() {
            return Err(DirectoryError::TypeMismatch(format!(
                "got {}",
                json_kind(&value)
            )));
        }

        let contact: Contact = serde_json::from_value(value)
            .map_err(|e| DirectoryError::TypeMismatch(e.to_string()))?;
        self.add(contact)
    }

    /// Build a contact from raw parts and insert it under `name`.
    ///
    /// Every phone and the birthday are validated before anything is stored.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad name, phone or birthday, or any
    /// error [`add`](Self::add) returns.
    pub fn add_record<I>(
        &mut self,
        name: &str,
        phones: I,
        birthday: Option<&str>,
    ) -> ContactBookResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut contact = Contact::new(ContactName::new(name)?);
        for phone in phones {
            contact.add_phone(phone.as_ref())?;
        }
        if let Some(raw) = birthday {
            contact.set_birthday(BirthdayField::parse(raw)?);
        }

        self.add(contact)?;
        Ok(())
    }

    /// Remove exactly this contact.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if no contact is stored under the
    /// contact's name, or the stored contact differs from `contact`.
    pub fn remove(&mut self, contact: &Contact) -> DirectoryResult<Contact> {
        let name = contact.name().as_str();
        let is_stored = self
            .contacts
            .get(name)
            .is_some_and(|stored| stored == contact);
        if !is_stored {
            return Err(DirectoryError::NotFound(name.to_string()));
        }
        self.remove_by_name(name)
    }

    /// Remove whichever contact is stored under `name`.
    ///
    /// Later contacts move up one position, so insertion order is preserved.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` if `name` is not in the directory.
    pub fn remove_by_name(&mut self, name: &str) -> DirectoryResult<Contact> {
        let name = name.trim();
        let removed = self
            .contacts
            .shift_remove(name)
            .ok_or_else(|| DirectoryError::NotFound(name.to_string()))?;
        debug!(contact = name, "Removed contact");
        Ok(removed)
    }

    /// Look up a contact by name.
    ///
    /// `name` is trimmed the same way [`ContactName`] trims on insert.
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name.trim())
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.get_mut(name.trim())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name.trim())
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// All contacts in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Contact> + '_ {
        self.contacts.values()
    }

    /// Split the directory into pages of `page_size` contacts.
    ///
    /// Yields `ceil(len / page_size)` pages; nothing for an empty directory.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidPageSize` if `page_size` is zero.
    pub fn iter_pages(&self, page_size: usize) -> DirectoryResult<Pages<'_>> {
        if page_size == 0 {
            return Err(DirectoryError::InvalidPageSize(page_size));
        }
        Ok(Pages::new(&self.contacts, page_size))
    }

    /// Fuzzy search by name, or by phone digits.
    pub fn search(&self, query: &str, max_results: usize) -> Vec<MatchResult<'_>> {
        NameMatcher::new().find_matches(query, self.iter(), max_results, 0)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl<'a> IntoIterator for &'a ContactDirectory {
    type Item = &'a Contact;
    type IntoIter = indexmap::map::Values<'a, ContactName, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.values()
    }
}
