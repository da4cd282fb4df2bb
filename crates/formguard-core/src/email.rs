//! Email validation

use serde::{Deserialize, Serialize};

use crate::patterns::{contains_dangerous_pattern, contains_disallowed_char, matches_email_shape};
use crate::result::ValidationResult;

/// Longest accepted email after normalization
///
/// Counted in Unicode scalar values (`chars()`), not UTF-16 code units, so an
/// address of astral-plane characters may hold up to 255 of them.
pub const MAX_EMAIL_LENGTH: usize = 255;

pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID_FORMAT: &str = "Email format is invalid.";
pub const EMAIL_TOO_LONG: &str = "Email is too long.";
pub const EMAIL_FORBIDDEN_CONTENT: &str = "Email contains forbidden characters or patterns.";

/// Whether to scan for markup/script content and disallowed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailMode {
    #[default]
    Plain,
    Hardened,
}

/// Message reported when an email exceeds [`MAX_EMAIL_LENGTH`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMessage {
    /// "Email is too long."
    #[default]
    TooLong,
    /// "Email format is invalid."
    InvalidFormat,
}

impl LengthMessage {
    pub fn text(self) -> &'static str {
        match self {
            LengthMessage::TooLong => EMAIL_TOO_LONG,
            LengthMessage::InvalidFormat => EMAIL_INVALID_FORMAT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailOptions {
    pub mode: EmailMode,
    pub length_message: LengthMessage,
}

impl EmailOptions {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn hardened() -> Self {
        Self {
            mode: EmailMode::Hardened,
            ..Self::default()
        }
    }

    pub fn with_length_message(mut self, length_message: LengthMessage) -> Self {
        self.length_message = length_message;
        self
    }
}

/// Trimmed, lowercased form of an email as used by the checks
///
/// Validation never rewrites the caller's value; an adapter may submit this
/// form if it wants to.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Validates an email field
///
/// An empty value (after trimming) reports only "Email is required.".
/// Otherwise format, length and (hardened) content checks each run and
/// report independently, in that order.
pub fn validate_email(raw: &str, options: EmailOptions) -> ValidationResult {
    let mut result = ValidationResult::new();
    let email = normalize_email(raw);

    if email.is_empty() {
        result.push(EMAIL_REQUIRED);
        return result;
    }

    if !matches_email_shape(&email) {
        result.push(EMAIL_INVALID_FORMAT);
    }

    if email.chars().count() > MAX_EMAIL_LENGTH {
        result.push(options.length_message.text());
    }

    if options.mode == EmailMode::Hardened
        && (contains_dangerous_pattern(&email) || contains_disallowed_char(&email))
    {
        result.push(EMAIL_FORBIDDEN_CONTENT);
    }

    result
}
