//! The shared contract of every contact field.

use std::fmt;

/// A validated scalar value stored on a record.
///
/// Implemented by [`Name`](super::Name), [`Phone`](super::Phone) and
/// [`Birthday`](super::Birthday). Each kind validates its input when it is
/// constructed and renders as exactly the stored value.
pub trait Field: fmt::Display {
    /// The stored value, exactly as it was accepted.
    fn value(&self) -> &str;
}
