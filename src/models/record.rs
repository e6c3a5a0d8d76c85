//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used when rendering a record's phones on one line.
const PHONE_SEPARATOR: &str = "; ";

/// A contact: a name, an ordered list of phones and an optional birthday.
///
/// The name is fixed at creation. Phones keep insertion order and may
/// contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Name of the contact
    name: Name,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<Phone>,

    /// Birthday, if one was added
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phones, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday field, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if the number is malformed.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> BookResult<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    fn position_of(&self, phone: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::NotFound("Phone not found".to_string()))
    }

    /// Replace `old_phone` with `new_phone`, keeping its position.
    ///
    /// The lookup happens before validation: a missing `old_phone` is
    /// reported even if `new_phone` is also malformed.
    ///
    /// # Errors
    ///
    /// - `BookError::NotFound` if `old_phone` is not on this record
    /// - `BookError::Validation` if `new_phone` is not a valid number
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> BookResult<()> {
        let index = self.position_of(old_phone)?;
        self.phones[index].set_value(new_phone)?;
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if the phone is not on this record.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<()> {
        let index = self.position_of(phone)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Validate and set the birthday, overwriting any previous one.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` unless `date` is a `DD.MM.YYYY` date.
    pub fn add_birthday(&mut self, date: impl Into<String>) -> BookResult<()> {
        self.birthday = Some(Birthday::new(date)?);
        Ok(())
    }

    /// The stored birthday string, if set.
    pub fn get_birthday(&self) -> Option<&str> {
        self.birthday.as_ref().map(Birthday::as_str)
    }

    /// All phone values joined with `"; "`.
    pub fn get_phones(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(PHONE_SEPARATOR)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday:{}",
            self.name,
            self.get_phones(),
            self.get_birthday().unwrap_or("None")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn record_with_phones(phones: &[&str]) -> Record {
        let mut record = Record::new("John");
        for phone in phones {
            record.add_phone(*phone).unwrap();
        }
        record
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("John");
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.get_birthday().is_none());
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let record = record_with_phones(&["1111111111", "2222222222", "1111111111"]);
        assert_eq!(record.get_phones(), "1111111111; 2222222222; 1111111111");
    }

    #[test]
    fn test_add_phone_invalid() {
        let mut record = Record::new("John");
        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(
            err,
            BookError::Validation(ValidationError::InvalidPhone("12345".to_string()))
        );
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_find_phone() {
        let record = record_with_phones(&["1111111111", "2222222222"]);
        assert_eq!(
            record.find_phone("2222222222").map(Phone::as_str),
            Some("2222222222")
        );
        assert!(record.find_phone("3333333333").is_none());
    }

    #[test]
    fn test_edit_phone_in_place() {
        let mut record = record_with_phones(&["1111111111", "2222222222", "3333333333"]);
        record.edit_phone("2222222222", "4444444444").unwrap();
        assert_eq!(record.get_phones(), "1111111111; 4444444444; 3333333333");
    }

    #[test]
    fn test_edit_phone_twice_is_idempotent() {
        let mut record = record_with_phones(&["1111111111"]);
        record.edit_phone("1111111111", "2222222222").unwrap();

        // The old number is gone, so a repeated edit reports it missing
        let second = record.edit_phone("1111111111", "2222222222");
        assert!(matches!(second, Err(BookError::NotFound(_))));

        assert_eq!(record.phones().len(), 1);
        assert!(record.find_phone("2222222222").is_some());
        assert!(record.find_phone("1111111111").is_none());
    }

    #[test]
    fn test_edit_phone_missing_old() {
        let mut record = record_with_phones(&["1111111111"]);
        let err = record.edit_phone("9999999999", "bad").unwrap_err();
        assert_eq!(err, BookError::NotFound("Phone not found".to_string()));
        assert_eq!(err.to_string(), "Phone not found");
    }

    #[test]
    fn test_edit_phone_invalid_new() {
        let mut record = record_with_phones(&["1111111111"]);
        let err = record.edit_phone("1111111111", "22").unwrap_err();
        assert_eq!(err.to_string(), "Phone number is not valid");
        assert_eq!(record.get_phones(), "1111111111");
    }

    #[test]
    fn test_remove_phone() {
        let mut record = record_with_phones(&["1111111111", "2222222222"]);
        record.remove_phone("1111111111").unwrap();
        assert!(record.find_phone("1111111111").is_none());
        assert_eq!(record.get_phones(), "2222222222");
    }

    #[test]
    fn test_remove_phone_removes_first_duplicate_only() {
        let mut record = record_with_phones(&["1111111111", "1111111111"]);
        record.remove_phone("1111111111").unwrap();
        assert_eq!(record.get_phones(), "1111111111");
    }

    #[test]
    fn test_remove_phone_missing() {
        let mut record = Record::new("John");
        let err = record.remove_phone("1111111111").unwrap_err();
        assert!(matches!(err, BookError::NotFound(_)));
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = Record::new("John");
        record.add_birthday("01.01.1990").unwrap();
        record.add_birthday("02.02.1992").unwrap();
        assert_eq!(record.get_birthday(), Some("02.02.1992"));
    }

    #[test]
    fn test_add_birthday_invalid_keeps_previous() {
        let mut record = Record::new("John");
        record.add_birthday("01.01.1990").unwrap();
        assert!(record.add_birthday("1/1/1990").is_err());
        assert_eq!(record.get_birthday(), Some("01.01.1990"));
    }

    #[test]
    fn test_record_display() {
        let mut record = record_with_phones(&["1111111111", "2222222222"]);
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1111111111; 2222222222, birthday:None"
        );

        record.add_birthday("15.06.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1111111111; 2222222222, birthday:15.06.1990"
        );
    }

    #[test]
    fn test_record_serialization() {
        let mut record = record_with_phones(&["1111111111"]);
        record.add_birthday("15.06.1990").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"John","phones":["1111111111"],"birthday":"15.06.1990"}"#
        );

        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_record_deserialization_rejects_bad_phone() {
        let json = r#"{"name":"John","phones":["12"]}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
