//! Domain value objects and types.
//!
//! This module contains the validated fields a contact record is built from:
//! names, phone numbers and birthdays. Each field validates its input at
//! construction time so that invalid data cannot be represented.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, DATE_FORMAT};
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
