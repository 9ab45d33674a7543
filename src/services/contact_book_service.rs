//! Contact book service layer.
//!
//! The operations the command layer calls. Every operation returns text
//! ready for display; lookup misses are reported as text rather than errors
//! so an interactive session never stops on a typo.

use super::clock::Clock;
use crate::directory::ContactDirectory;
use crate::domain::BirthdayField;
use crate::error::ContactBookResult;
use crate::models::Contact;
use tracing::{debug, info};

/// Placeholder shown when the directory has no contacts.
pub const EMPTY_DIRECTORY: &str = "No contacts saved.";

/// Contact book operations for the command layer.
pub trait ContactBookService {
    /// Add a contact with one phone and an optional `YYYY-MM-DD` birthday.
    fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        birthday: Option<&str>,
    ) -> ContactBookResult<String>;

    /// Replace `old_phone` with `new_phone` on the named contact.
    fn edit_contact(
        &mut self,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> ContactBookResult<String>;

    /// Phones and birthday of the named contact.
    fn lookup_contact(&self, name: &str) -> ContactBookResult<String>;

    /// One line per contact, in insertion order.
    fn list_all(&self) -> ContactBookResult<String>;

    /// Days until the named contact's next birthday.
    fn days_to_birthday(&self, name: &str) -> ContactBookResult<String>;

    /// The directory rendered as pages of `page_size` contacts.
    fn list_paginated(&self, page_size: usize) -> ContactBookResult<Vec<String>>;

    /// Set or replace the named contact's birthday.
    fn set_birthday(&mut self, name: &str, birthday: &str) -> ContactBookResult<String>;

    /// Remove every copy of `phone` from the named contact.
    fn remove_phone(&mut self, name: &str, phone: &str) -> ContactBookResult<String>;

    /// Delete the named contact.
    fn delete_contact(&mut self, name: &str) -> ContactBookResult<String>;

    /// Fuzzy search by name or phone digits.
    fn search(&self, query: &str) -> ContactBookResult<String>;

    /// Contacts whose birthday falls within the next `within_days` days.
    fn upcoming_birthdays(&self, within_days: i64) -> ContactBookResult<String>;
}

/// Default implementation of ContactBookService over an owned directory.
pub struct ContactBookServiceImpl {
    directory: ContactDirectory,
    clock: Box<dyn Clock>,
    max_suggestions: usize,
}

impl ContactBookServiceImpl {
    /// Maximum number of results `search` shows.
    const MAX_SEARCH_RESULTS: usize = 10;

    /// Minimum confidence for a "did you mean" suggestion.
    const SUGGESTION_CONFIDENCE: u8 = 50;

    /// Create a new contact book service.
    pub fn new(directory: ContactDirectory, clock: Box<dyn Clock>, max_suggestions: usize) -> Self {
        Self {
            directory,
            clock,
            max_suggestions,
        }
    }

    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    fn not_found(&self, name: &str) -> String {
        let suggestions: Vec<&str> = crate::matching::NameMatcher::new()
            .find_matches(
                name,
                self.directory.iter(),
                self.max_suggestions,
                Self::SUGGESTION_CONFIDENCE,
            )
            .into_iter()
            .map(|result| result.contact.name().as_str())
            .collect();

        if suggestions.is_empty() {
            format!("Contact '{}' not found.", name)
        } else {
            format!(
                "Contact '{}' not found. Did you mean: {}?",
                name,
                suggestions.join(", ")
            )
        }
    }

    fn render_page(index: usize, total: usize, page: &[&Contact]) -> String {
        let mut lines = vec![format!("Page {}/{}", index + 1, total)];
        lines.extend(page.iter().map(|contact| contact.to_string()));
        lines.join("\n")
    }
}

impl ContactBookService for ContactBookServiceImpl {
    fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        birthday: Option<&str>,
    ) -> ContactBookResult<String> {
        let existed = self.directory.contains(name.trim());
        self.directory.add_record(name, [phone], birthday)?;

        let name = name.trim();
        info!(contact = name, replaced = existed, "Contact saved");
        if existed {
            Ok(format!("Contact '{}' replaced.", name))
        } else {
            Ok(format!("Contact '{}' added.", name))
        }
    }

    fn edit_contact(
        &mut self,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> ContactBookResult<String> {
        let name = name.trim();
        let Some(contact) = self.directory.find_mut(name) else {
            return Ok(self.not_found(name));
        };

        if contact.edit_phone(old_phone, new_phone)? {
            Ok(format!(
                "Phone {} changed to {} for '{}'.",
                old_phone, new_phone, name
            ))
        } else {
            Ok(format!("'{}' has no phone {}; nothing changed.", name, old_phone))
        }
    }

    fn lookup_contact(&self, name: &str) -> ContactBookResult<String> {
        let name = name.trim();
        match self.directory.find(name) {
            Some(contact) => Ok(contact.to_string()),
            None => Ok(self.not_found(name)),
        }
    }

    fn list_all(&self) -> ContactBookResult<String> {
        if self.directory.is_empty() {
            return Ok(EMPTY_DIRECTORY.to_string());
        }

        Ok(self
            .directory
            .iter()
            .map(Contact::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn days_to_birthday(&self, name: &str) -> ContactBookResult<String> {
        let name = name.trim();
        let Some(contact) = self.directory.find(name) else {
            return Ok(self.not_found(name));
        };

        match contact.days_to_birthday(self.clock.today()) {
            Some(0) => Ok(format!("{}'s birthday is today!", name)),
            Some(days) => Ok(format!("Days until {}'s birthday: {}", name, days)),
            None => Ok(format!("No birthday set for '{}'.", name)),
        }
    }

    fn list_paginated(&self, page_size: usize) -> ContactBookResult<Vec<String>> {
        let pages = self.directory.iter_pages(page_size)?;
        let total = pages.len();
        debug!(page_size, total, "Rendering pages");

        Ok(pages
            .enumerate()
            .map(|(index, page)| Self::render_page(index, total, &page))
            .collect())
    }

    fn set_birthday(&mut self, name: &str, birthday: &str) -> ContactBookResult<String> {
        let name = name.trim();
        let birthday = BirthdayField::parse(birthday)?;
        let Some(contact) = self.directory.find_mut(name) else {
            return Ok(self.not_found(name));
        };

        let message = format!("Birthday for '{}' set to {}.", name, birthday);
        contact.set_birthday(birthday);
        Ok(message)
    }

    fn remove_phone(&mut self, name: &str, phone: &str) -> ContactBookResult<String> {
        let name = name.trim();
        let Some(contact) = self.directory.find_mut(name) else {
            return Ok(self.not_found(name));
        };

        match contact.remove_phone(phone) {
            0 => Ok(format!("'{}' has no phone {}; nothing removed.", name, phone)),
            _ => Ok(format!("Phone {} removed from '{}'.", phone, name)),
        }
    }

    fn delete_contact(&mut self, name: &str) -> ContactBookResult<String> {
        let name = name.trim();
        if !self.directory.contains(name) {
            return Ok(self.not_found(name));
        }

        self.directory.remove_by_name(name)?;
        info!(contact = name, "Contact deleted");
        Ok(format!("Contact '{}' deleted.", name))
    }

    fn search(&self, query: &str) -> ContactBookResult<String> {
        let results = self.directory.search(query, Self::MAX_SEARCH_RESULTS);
        if results.is_empty() {
            return Ok(format!("No contacts match '{}'.", query));
        }

        Ok(results
            .iter()
            .map(|result| result.contact.to_string())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn upcoming_birthdays(&self, within_days: i64) -> ContactBookResult<String> {
        let today = self.clock.today();
        let mut upcoming: Vec<(i64, &Contact)> = self
            .directory
            .iter()
            .filter_map(|contact| contact.days_to_birthday(today).map(|days| (days, contact)))
            .filter(|(days, _)| *days <= within_days)
            .collect();

        if upcoming.is_empty() {
            return Ok(format!("No birthdays in the next {} days.", within_days));
        }

        upcoming.sort_by(|(a_days, a), (b_days, b)| {
            a_days.cmp(b_days).then_with(|| a.name().cmp(b.name()))
        });

        Ok(upcoming
            .into_iter()
            .map(|(days, contact)| match days {
                0 => format!("{}: today", contact.name()),
                1 => format!("{}: tomorrow", contact.name()),
                _ => format!("{}: in {} days", contact.name(), days),
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
