//! Validation output types
//!
//! A validation run never fails: it yields an ordered list of messages, and an
//! empty list means the input is valid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One failed rule, as a flat human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl PartialEq<&str> for ValidationError {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordered errors of one validation call
///
/// Order is the order in which rules were checked. Duplicates are kept:
/// two rules reporting the same text both show up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

// `is_valid` is the emptiness check
#[allow(clippy::len_without_is_empty)]
impl ValidationResult {
    /// An empty (valid) result
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: impl Into<ValidationError>) {
        self.errors.push(error.into());
    }

    /// Appends all errors of `other` after the current ones
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn contains(&self, message: &str) -> bool {
        self.errors.iter().any(|e| e.message() == message)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Plain message strings, in order, for adapters that render text
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message().to_string()).collect()
    }
}

impl IntoIterator for ValidationResult {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl Extend<ValidationError> for ValidationResult {
    fn extend<T: IntoIterator<Item = ValidationError>>(&mut self, iter: T) {
        self.errors.extend(iter);
    }
}

impl FromIterator<ValidationError> for ValidationResult {
    fn from_iter<T: IntoIterator<Item = ValidationError>>(iter: T) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}
