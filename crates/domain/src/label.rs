//! Device label — the unique, immutable identity of a device in the house.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Non-blank device label.
///
/// Labels are compared verbatim: `"light1"` and `" light1"` are two
/// different labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label(String);

impl Label {
    /// Validate and wrap a label.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BlankLabel`] when `value` is empty or only
    /// whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::BlankLabel);
        }
        Ok(Self(value))
    }

    /// Validate an optional label, as found in a DTO.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingLabel`] when `value` is `None`, or
    /// [`ValidationError::BlankLabel`] when it is blank.
    pub fn required(value: Option<&str>) -> Result<Self, ValidationError> {
        value
            .ok_or(ValidationError::MissingLabel)
            .and_then(Self::new)
    }

    /// Borrow the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Label {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Label {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
