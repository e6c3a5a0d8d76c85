//! Contact Book - a personal contact directory.
//!
//! This library stores named contact records, each holding zero or more
//! validated phone numbers and an optional birthday, and answers queries such
//! as "find a contact" or "whose birthday falls in the next N days".
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone, birthday)
//! - **models**: Contact records and the address book, including the
//!   upcoming-birthdays query
//! - **error**: Custom error types for precise error handling
//! - **matching**: Fuzzy name and exact phone lookup
//! - **repositories**: Loading and saving the whole address book
//! - **commands**: Line-based command dispatcher for the interactive prompt
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repositories;

pub use commands::{Command, DispatchSettings, Dispatcher, Outcome};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use matching::{ContactMatcher, MatchResult, MatchType};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{AddressBookRepository, JsonFileRepository};
