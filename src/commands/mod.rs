//! Command parsing for the interactive session.
//!
//! A session line is whitespace-tokenized; the first token is the
//! command word (matched case-insensitively), the rest are arguments
//! taken verbatim. Tokens beyond what a command needs are ignored.

pub mod handlers;

pub use handlers::dispatch;

use crate::error::{CommandError, CommandResult};

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,

    /// `add <name> <phone>` - create-or-extend a record
    Add { name: String, phone: String },

    /// `change <name> <old phone> <new phone>`
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// `phone <name>` - show a record's phone info
    Phone { name: String },

    /// `all` - list every stored contact
    All,

    /// `add-birthday <name> <DD.MM.YYYY>`
    AddBirthday { name: String, date: String },

    /// `show-birthday <name>`
    ShowBirthday { name: String },

    /// `birthdays` - upcoming-birthday report
    Birthdays,

    /// `close` / `exit` - persist and terminate
    Exit,
}

impl Command {
    /// Parse one input line into a command.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Unknown` for an empty line or an
    /// unrecognized command word, and `CommandError::MissingArguments`
    /// when the command word is known but required arguments are absent.
    pub fn parse(line: &str) -> CommandResult<Self> {
        let mut tokens = line.split_whitespace();
        let word = tokens.next().ok_or(CommandError::Unknown)?.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        match word.as_str() {
            "hello" => Ok(Self::Hello),
            "add" => match args.as_slice() {
                [name, phone, ..] => Ok(Self::Add {
                    name: (*name).to_string(),
                    phone: (*phone).to_string(),
                }),
                _ => Err(CommandError::MissingArguments("name and phone")),
            },
            "change" => match args.as_slice() {
                [name, old_phone, new_phone, ..] => Ok(Self::Change {
                    name: (*name).to_string(),
                    old_phone: (*old_phone).to_string(),
                    new_phone: (*new_phone).to_string(),
                }),
                _ => Err(CommandError::MissingArguments(
                    "name, old phone and new phone",
                )),
            },
            "phone" => match args.as_slice() {
                [name, ..] => Ok(Self::Phone {
                    name: (*name).to_string(),
                }),
                _ => Err(CommandError::MissingArguments("name")),
            },
            "all" => Ok(Self::All),
            "add-birthday" => match args.as_slice() {
                [name, date, ..] => Ok(Self::AddBirthday {
                    name: (*name).to_string(),
                    date: (*date).to_string(),
                }),
                _ => Err(CommandError::MissingArguments("name and birthday date")),
            },
            "show-birthday" => match args.as_slice() {
                [name, ..] => Ok(Self::ShowBirthday {
                    name: (*name).to_string(),
                }),
                _ => Err(CommandError::MissingArguments("name")),
            },
            "birthdays" => Ok(Self::Birthdays),
            "close" | "exit" => Ok(Self::Exit),
            _ => Err(CommandError::Unknown),
        }
    }
}
