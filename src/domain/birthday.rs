//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The `chrono` format string for `DD.MM.YYYY`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A contact's birthday.
///
/// The stored value is the exact input string (`DD.MM.YYYY`), never a
/// re-formatted date; the parsed calendar date is kept alongside it for
/// date arithmetic.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.as_str(), "15.06.1990");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Day and month are one or two digits, the year exactly four
    /// - Parts are separated by '.'
    /// - The result must be a real calendar date (no `31.02.2020`)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value is not a valid date.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let value = birthday.into();

        match Self::parse(&value) {
            Some(date) => Ok(Self { value, date }),
            None => Err(ValidationError::InvalidBirthday(value)),
        }
    }

    fn parse(value: &str) -> Option<NaiveDate> {
        if !BIRTHDAY_SHAPE.is_match(value) {
            return None;
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
    }

    /// Get the birthday as the string it was created from.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The calendar date of birth.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date this birthday falls on in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    /// Returns `None` only if `year` is outside the supported calendar range.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        self.date
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl Field for Birthday {
    fn value(&self) -> &str {
        &self.value
    }
}

// Serde support - serialize as the original string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
