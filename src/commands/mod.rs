//! Line-based command dispatcher for the interactive prompt.
//!
//! The dispatcher parses a line of input, runs the matching handler against
//! the address book and renders the outcome as text. This is the only place
//! where errors become user-facing messages; the record and address book
//! types below it only return typed errors.

pub mod handlers;
pub mod parser;

pub use parser::{parse_input, ParsedLine};

use crate::config::Config;
use crate::error::{CommandError, CommandResult};
use crate::matching::ContactMatcher;
use crate::models::{AddressBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};
use std::str::FromStr;
use tracing::{debug, warn};

/// Every command the prompt understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    RemovePhone,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    Find,
    Exit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "remove-phone" => Ok(Command::RemovePhone),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "delete" => Ok(Command::Delete),
            "find" => Ok(Command::Find),
            "close" | "exit" => Ok(Command::Exit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// What the prompt loop should do after a line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading
    Reply(String),

    /// Nothing to do for this line
    Empty,

    /// Save and stop
    Exit,
}

/// Settings the dispatcher needs from the configuration.
#[derive(Debug, Clone)]
pub struct DispatchSettings {
    /// Look-ahead for `birthdays`
    pub birthday_window_days: u32,

    /// Result limit for `find`
    pub max_match_results: usize,

    /// Confidence threshold for `find`
    pub match_confidence_threshold: u8,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            max_match_results: 5,
            match_confidence_threshold: 30,
        }
    }
}

impl From<&Config> for DispatchSettings {
    fn from(config: &Config) -> Self {
        Self {
            birthday_window_days: config.birthday_window_days,
            max_match_results: config.max_match_results,
            match_confidence_threshold: config.match_confidence_threshold,
        }
    }
}

/// Routes parsed command lines to their handlers.
pub struct Dispatcher {
    settings: DispatchSettings,
    matcher: ContactMatcher,
}

impl Dispatcher {
    /// Create a new dispatcher.
    pub fn new(settings: DispatchSettings) -> Self {
        Self {
            settings,
            matcher: ContactMatcher::new(),
        }
    }

    /// Handle one line of user input.
    ///
    /// Any error is rendered as its message; this never fails.
    pub fn handle_line(&self, line: &str, book: &mut AddressBook) -> Outcome {
        let Some(parsed) = parse_input(line) else {
            return Outcome::Empty;
        };

        match self.execute(&parsed.command, &parsed.args, book) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Command '{}' failed: {:?}", parsed.command, e);
                Outcome::Reply(e.to_string())
            }
        }
    }

    /// Run `command` with `args` against the book.
    ///
    /// # Errors
    ///
    /// Returns the typed error of the failing step: an unknown command,
    /// a missing argument, an unknown contact, or a failed book operation.
    pub fn execute(
        &self,
        command: &str,
        args: &[String],
        book: &mut AddressBook,
    ) -> CommandResult<Outcome> {
        let command: Command = command.parse()?;
        debug!("Dispatching {:?} with {} args", command, args.len());

        let reply = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add => handlers::add_contact(args, book)?,
            Command::Change => handlers::change_phone(args, book)?,
            Command::RemovePhone => handlers::remove_phone(args, book)?,
            Command::Phone => handlers::show_phones(args, book)?,
            Command::All => handlers::show_all(book)?,
            Command::AddBirthday => handlers::add_birthday(args, book)?,
            Command::ShowBirthday => handlers::show_birthday(args, book)?,
            Command::Birthdays => {
                handlers::upcoming_birthdays(book, self.settings.birthday_window_days)?
            }
            Command::Delete => handlers::delete_contact(args, book)?,
            Command::Find => handlers::find_contact(
                args,
                book,
                &self.matcher,
                self.settings.max_match_results,
                self.settings.match_confidence_threshold,
            )?,
            Command::Exit => return Ok(Outcome::Exit),
        };

        Ok(Outcome::Reply(reply))
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DispatchSettings::default())
    }
}
