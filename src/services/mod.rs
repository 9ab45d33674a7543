//! Application service layer.
//!
//! Services hold the contact directory and turn its operations into text
//! for the command layer. They provide a clean boundary between line
//! parsing and the domain model.

mod clock;
mod contact_book_service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use contact_book_service::{ContactBookService, ContactBookServiceImpl, EMPTY_DIRECTORY};
