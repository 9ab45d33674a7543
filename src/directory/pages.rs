//! Page-wise iteration over a [`ContactDirectory`](super::ContactDirectory).

use crate::domain::ContactName;
use crate::models::Contact;
use indexmap::IndexMap;
use std::iter::FusedIterator;

/// Lazy iterator over fixed-size pages of contacts in insertion order.
///
/// Every page but the last holds exactly `page_size` contacts. The iterator
/// is cheap to clone, and a clone taken before iteration replays the same
/// pages; [`restart`](Self::restart) rewinds in place.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    contacts: &'a IndexMap<ContactName, Contact>,
    page_size: usize,
    next: usize,
}

impl<'a> Pages<'a> {
    /// `page_size` must be non-zero; the directory checks it before calling.
    pub(super) fn new(contacts: &'a IndexMap<ContactName, Contact>, page_size: usize) -> Self {
        debug_assert!(page_size > 0);
        Self {
            contacts,
            page_size,
            next: 0,
        }
    }

    /// Number of contacts per full page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Rewind to the first page.
    pub fn restart(&mut self) {
        self.next = 0;
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Contact>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.contacts.len();
        if self.next >= len {
            return None;
        }

        let end = self.next.saturating_add(self.page_size).min(len);
        let page: Vec<&'a Contact> = (self.next..end)
            .filter_map(|index| self.contacts.get_index(index).map(|(_, contact)| contact))
            .collect();
        self.next = end;

        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .contacts
            .len()
            .saturating_sub(self.next)
            .div_ceil(self.page_size);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}
