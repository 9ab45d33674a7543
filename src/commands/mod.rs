//! Command parsing for the interactive contact book.
//!
//! A line is split into whitespace-separated tokens; double quotes group a
//! multi-word name into one token (`add "John Doe" 3434567895`). The first
//! token (or the first two, for `show all` and `good bye`) selects the
//! command, case-insensitively.

mod handler;

pub use handler::{CommandHandler, Reply};

use crate::error::{ContactBookError, ContactBookResult};

/// Usage text shown by `help` and after an unknown command.
pub const HELP: &str = "\
Commands:
  hello
  add <name> <phone> [YYYY-MM-DD]
  change <name> <old phone> <new phone>
  phone <name>
  birthday <name> <YYYY-MM-DD>
  days <name>
  remove <name> <phone>
  delete <name>
  search <query>
  upcoming [days]
  show all
  pages [size]
  help
  exit | close | good bye
Quote names with spaces: \"John Doe\"";

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    Birthday {
        name: String,
        birthday: String,
    },
    Days {
        name: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    Delete {
        name: String,
    },
    Search {
        query: String,
    },
    Upcoming {
        within_days: Option<i64>,
    },
    ShowAll,
    Pages {
        page_size: Option<usize>,
    },
    Help,
    Exit,
}

impl Command {
    /// Parse one input line.
    ///
    /// # Errors
    ///
    /// Returns `ContactBookError::InvalidCommand` for an empty line, an
    /// unknown verb, a wrong number of arguments or an unterminated quote.
    pub fn parse(line: &str) -> ContactBookResult<Self> {
        let tokens = tokenize(line)?;
        let Some((verb, args)) = tokens.split_first() else {
            return Err(invalid("empty command"));
        };
        let verb = verb.to_lowercase();

        match (verb.as_str(), args) {
            ("hello", []) => Ok(Self::Hello),
            ("add", [name, phone]) => Ok(Self::Add {
                name: name.clone(),
                phone: phone.clone(),
                birthday: None,
            }),
            ("add", [name, phone, birthday]) => Ok(Self::Add {
                name: name.clone(),
                phone: phone.clone(),
                birthday: Some(birthday.clone()),
            }),
            ("change", [name, old_phone, new_phone]) => Ok(Self::Change {
                name: name.clone(),
                old_phone: old_phone.clone(),
                new_phone: new_phone.clone(),
            }),
            ("phone", [name]) => Ok(Self::Phone { name: name.clone() }),
            ("birthday", [name, birthday]) => Ok(Self::Birthday {
                name: name.clone(),
                birthday: birthday.clone(),
            }),
            ("days", [name]) => Ok(Self::Days { name: name.clone() }),
            ("remove", [name, phone]) => Ok(Self::RemovePhone {
                name: name.clone(),
                phone: phone.clone(),
            }),
            ("delete", [name]) => Ok(Self::Delete { name: name.clone() }),
            ("search", [_, ..]) => Ok(Self::Search {
                query: args.join(" "),
            }),
            ("upcoming", []) => Ok(Self::Upcoming { within_days: None }),
            ("upcoming", [days]) => days
                .parse::<i64>()
                .ok()
                .filter(|days| *days >= 0)
                .map(|days| Self::Upcoming {
                    within_days: Some(days),
                })
                .ok_or_else(|| invalid(format!("'{}' is not a number of days", days))),
            ("show", [all]) if all.eq_ignore_ascii_case("all") => Ok(Self::ShowAll),
            ("pages", []) => Ok(Self::Pages { page_size: None }),
            ("pages", [size]) => size
                .parse::<usize>()
                .map(|size| Self::Pages {
                    page_size: Some(size),
                })
                .map_err(|_| invalid(format!("'{}' is not a page size", size))),
            ("help", []) => Ok(Self::Help),
            ("exit" | "close", []) => Ok(Self::Exit),
            ("good", [bye]) if bye.eq_ignore_ascii_case("bye") => Ok(Self::Exit),
            _ => Err(invalid(format!("unknown command '{}'", line.trim()))),
        }
    }
}

fn invalid(reason: impl Into<String>) -> ContactBookError {
    ContactBookError::InvalidCommand(reason.into())
}

/// Split a line on whitespace, keeping double-quoted runs together.
fn tokenize(line: &str) -> ContactBookResult<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() || quoted {
                    tokens.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            c => current.push(c),
        }
    }

    if in_quotes {
        return Err(invalid("unterminated quote"));
    }
    if !current.is_empty() || quoted {
        tokens.push(current);
    }

    Ok(tokens)
}
