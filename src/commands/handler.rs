//! Dispatch of parsed commands to the contact book service.

use super::{Command, HELP};
use crate::error::{ContactBookError, ContactBookResult};
use crate::services::ContactBookService;
use tracing::warn;

/// Default look-ahead for `upcoming` without an argument.
const DEFAULT_UPCOMING_DAYS: i64 = 7;

/// What the interactive loop should do with a command's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text
    Text(String),

    /// Print the pages one at a time, waiting for the user between them
    Pages(Vec<String>),

    /// Print the farewell and stop
    Exit(String),
}

/// Runs command lines against a [`ContactBookService`].
pub struct CommandHandler {
    service: Box<dyn ContactBookService>,
    default_page_size: usize,
}

impl CommandHandler {
    pub fn new(service: Box<dyn ContactBookService>, default_page_size: usize) -> Self {
        Self {
            service,
            default_page_size,
        }
    }

    /// Parse and execute one line.
    ///
    /// Errors never escape: bad input and rejected values come back as
    /// [`Reply::Text`] so the session keeps going.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match Command::parse(line).and_then(|command| self.execute(command)) {
            Ok(reply) => reply,
            Err(ContactBookError::InvalidCommand(reason)) => {
                warn!(reason = %reason, "Invalid command");
                Reply::Text(format!("Invalid command: {}. Type 'help' for usage.", reason))
            }
            Err(e) => {
                warn!(error = %e, "Command failed");
                Reply::Text(format!("Error: {}", e))
            }
        }
    }

    /// Execute an already parsed command.
    pub fn execute(&mut self, command: Command) -> ContactBookResult<Reply> {
        let service = self.service.as_mut();

        let text = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add {
                name,
                phone,
                birthday,
            } => service.add_contact(&name, &phone, birthday.as_deref())?,
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => service.edit_contact(&name, &old_phone, &new_phone)?,
            Command::Phone { name } => service.lookup_contact(&name)?,
            Command::Birthday { name, birthday } => service.set_birthday(&name, &birthday)?,
            Command::Days { name } => service.days_to_birthday(&name)?,
            Command::RemovePhone { name, phone } => service.remove_phone(&name, &phone)?,
            Command::Delete { name } => service.delete_contact(&name)?,
            Command::Search { query } => service.search(&query)?,
            Command::Upcoming { within_days } => {
                service.upcoming_birthdays(within_days.unwrap_or(DEFAULT_UPCOMING_DAYS))?
            }
            Command::ShowAll => service.list_all()?,
            Command::Pages { page_size } => {
                let pages =
                    service.list_paginated(page_size.unwrap_or(self.default_page_size))?;
                return Ok(if pages.is_empty() {
                    Reply::Text(crate::services::EMPTY_DIRECTORY.to_string())
                } else {
                    Reply::Pages(pages)
                });
            }
            Command::Help => HELP.to_string(),
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
        };

        Ok(Reply::Text(text))
    }
}
