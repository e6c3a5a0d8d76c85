//! Data models for the contact book.
//!
//! This module contains the contact record and the address book that owns
//! every record, along with the upcoming-birthdays query.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use record::Record;
