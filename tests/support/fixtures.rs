//! Test fixtures and sample data.
//!
//! Reusable contacts, directories and services with a fixed "today".

use chrono::NaiveDate;
use contact_book::{
    Contact, ContactBookServiceImpl, ContactDirectory, ContactName, FixedClock,
};

/// The fixed "today" used across scenario tests.
#[allow(dead_code)]
pub fn today() -> NaiveDate {
    date(2024, 5, 1)
}

/// Shorthand for a known-valid date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is valid")
}

/// Create a contact with a name and the given phones.
#[allow(dead_code)]
pub fn sample_contact(name: &str, phones: &[&str]) -> Contact {
    let mut contact = Contact::new(ContactName::new(name).expect("fixture name is valid"));
    for phone in phones {
        contact.add_phone(phone).expect("fixture phone is valid");
    }
    contact
}

/// The three records from the original walkthrough, in insertion order.
#[allow(dead_code)]
pub fn sample_directory() -> ContactDirectory {
    let mut directory = ContactDirectory::new();
    directory
        .add_record("John Doe", ["3434567895"], Some("1991-05-11"))
        .expect("fixture record is valid");
    directory
        .add_record("Jane Smith", ["1276543211"], Some("1982-04-20"))
        .expect("fixture record is valid");
    directory
        .add_record("Bob Johnson", [] as [&str; 0], None)
        .expect("fixture record is valid");
    directory
}

/// A service over [`sample_directory`] with the clock fixed at [`today`].
#[allow(dead_code)]
pub fn sample_service() -> ContactBookServiceImpl {
    ContactBookServiceImpl::new(sample_directory(), Box::new(FixedClock(today())), 3)
}
