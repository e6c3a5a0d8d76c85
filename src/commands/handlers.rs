//! One handler per prompt command.
//!
//! Handlers validate their positional arguments, run the matching address
//! book operation and return the reply text. Errors are returned as typed
//! [`CommandError`]s; turning them into text is the dispatcher's job.

use crate::error::{CommandError, CommandResult};
use crate::matching::ContactMatcher;
use crate::models::{AddressBook, Record};

/// Fetch the positional argument at `index`.
fn arg(args: &[String], index: usize) -> CommandResult<&str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument)
}

fn record_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn record<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

/// `add <name> <phone>`: create the contact if needed, then add the phone.
///
/// A new contact is only stored once its first phone has validated.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    if let Some(existing) = book.find_mut(name) {
        existing.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let old_phone = arg(args, 1)?;
    let new_phone = arg(args, 2)?;

    record_mut(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    record_mut(book, name)?.remove_phone(phone)?;
    Ok("Phone removed.".to_string())
}

/// `phone <name>`
pub fn show_phones(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    Ok(format!("Phones: {}", record(book, name)?.get_phones()))
}

/// `all`
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("No contacts".to_string());
    }
    Ok(book.to_string())
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let date = arg(args, 1)?;

    record_mut(book, name)?.add_birthday(date)?;
    Ok("Birthday added".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;

    record(book, name)?
        .get_birthday()
        .map(str::to_string)
        .ok_or_else(|| CommandError::BirthdayNotSet(name.to_string()))
}

/// `birthdays`: celebrations within the next `window_days` days.
pub fn upcoming_birthdays(book: &AddressBook, window_days: u32) -> CommandResult<String> {
    let upcoming = book.get_upcoming_birthdays(window_days);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays".to_string());
    }

    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `delete <name>`
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    book.delete(name)?;
    Ok("Contact deleted.".to_string())
}

/// `find <name or phone>`: fuzzy lookup; multi-word names are rejoined.
pub fn find_contact(
    args: &[String],
    book: &AddressBook,
    matcher: &ContactMatcher,
    max_results: usize,
    min_confidence: u8,
) -> CommandResult<String> {
    if args.is_empty() {
        return Err(CommandError::MissingArgument);
    }
    let query = args.join(" ");

    let matches = matcher.find_matches(&query, book, max_results, min_confidence);
    if matches.is_empty() {
        return Ok("No matching contacts".to_string());
    }

    Ok(matches
        .iter()
        .map(|m| m.record.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}
