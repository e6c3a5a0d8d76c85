//! The address book: every record keyed by contact name.

use super::record::Record;
use crate::domain::DATE_FORMAT;
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default look-ahead, in days, for [`AddressBook::get_upcoming_birthdays`].
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// A birthday reported by the upcoming-birthdays query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Celebration date in `DD.MM.YYYY`, moved to Monday if it falls on a weekend
    pub birthday: String,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.birthday)
    }
}

/// All contact records, keyed by name, in insertion order.
///
/// The key of every entry equals the name of the record stored under it.
/// Record names are immutable, so the two cannot drift apart.
///
/// On disk the book is a plain list of records; keys are rebuilt from the
/// names when it is read back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name.
    ///
    /// An existing record with the same name is replaced entirely; nothing
    /// from it is merged into the new one.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        self.records.insert(name, record);
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if there is no such record.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        self.records
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| BookError::NotFound("No such address".to_string()))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Iterate over contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Birthdays falling within the next `window_days` days, counted from
    /// the current local date.
    pub fn get_upcoming_birthdays(&self, window_days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), window_days)
    }

    /// Birthdays falling within `[today, today + window_days]`.
    ///
    /// A birthday that has already passed this year is looked up again in
    /// the year `today + window_days` falls in. Celebrations landing on a
    /// Saturday or Sunday are reported on the following Monday. Results
    /// follow the book's insertion order.
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let window = i64::from(window_days);
        let window_end_year = today
            .checked_add_days(Days::new(u64::from(window_days)))
            .map(|end| end.year())
            .unwrap_or_else(|| today.year());

        self.records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;

                let mut this_year = birthday.anniversary_in(today.year())?;
                if this_year < today {
                    this_year = birthday.anniversary_in(window_end_year)?;
                }

                let days_until = (this_year - today).num_days();
                if !(0..=window).contains(&days_until) {
                    return None;
                }

                let celebration = celebration_date(this_year)?;
                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    birthday: celebration.format(DATE_FORMAT).to_string(),
                })
            })
            .collect()
    }
}

/// Move weekend dates to the following Monday.
fn celebration_date(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records.into_values().collect()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.records.values().map(Record::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
