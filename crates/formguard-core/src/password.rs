//! Password validation functions

use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;
use crate::patterns::{contains_dangerous_pattern, has_special_char};
use crate::result::ValidationResult;

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";
pub const PASSWORD_NEEDS_UPPERCASE: &str = "Password must contain at least one uppercase letter.";
pub const PASSWORD_NEEDS_LOWERCASE: &str = "Password must contain at least one lowercase letter.";
pub const PASSWORD_NEEDS_DIGIT: &str = "Password must contain at least one digit.";
pub const PASSWORD_NEEDS_SPECIAL: &str = "Password must contain at least one special character.";
pub const PASSWORD_NEEDS_LETTER_AND_DIGIT: &str =
    "Password must contain at least one letter and one digit.";
pub const PASSWORD_FORBIDDEN_CONTENT: &str = "Password contains forbidden characters or patterns.";

pub const CONFIRMATION_REQUIRED: &str = "Password and confirmation are required.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";

/// Password strength rule sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordPolicy {
    /// 8+ chars with uppercase, lowercase, digit and special character,
    /// each missing class reported separately
    Strict,
    /// 8+ chars with a letter and a digit, reported as one error;
    /// `hardened` also rejects markup/script content
    Relaxed { hardened: bool },
}

impl PasswordPolicy {
    /// Name accepted by `parse`
    ///
    /// # Examples
    /// ```
    /// use formguard_core::PasswordPolicy;
    /// assert_eq!(PasswordPolicy::Strict.name(), "strict");
    /// assert_eq!("strict".parse(), Ok(PasswordPolicy::Strict));
    /// assert_eq!("relaxed".parse(), Ok(PasswordPolicy::Relaxed { hardened: false }));
    /// assert_eq!("relaxed-hardened".parse(), Ok(PasswordPolicy::Relaxed { hardened: true }));
    /// assert!("medium".parse::<PasswordPolicy>().is_err());
    /// ```
    pub fn name(self) -> &'static str {
        match self {
            PasswordPolicy::Strict => "strict",
            PasswordPolicy::Relaxed { hardened: false } => "relaxed",
            PasswordPolicy::Relaxed { hardened: true } => "relaxed-hardened",
        }
    }
}

impl FromStr for PasswordPolicy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(PasswordPolicy::Strict),
            "relaxed" => Ok(PasswordPolicy::Relaxed { hardened: false }),
            "relaxed-hardened" | "relaxed_hardened" => Ok(PasswordPolicy::Relaxed { hardened: true }),
            _ => Err(EngineError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for PasswordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validates password strength under the given policy
///
/// An empty password reports only "Password is required.". Other checks run
/// independently so every unmet requirement is listed.
pub fn validate_password_strength(password: &str, policy: PasswordPolicy) -> ValidationResult {
    let mut result = ValidationResult::new();

    if password.is_empty() {
        result.push(PASSWORD_REQUIRED);
        return result;
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        result.push(PASSWORD_TOO_SHORT);
    }

    match policy {
        PasswordPolicy::Strict => {
            if !password.chars().any(|c| c.is_ascii_uppercase()) {
                result.push(PASSWORD_NEEDS_UPPERCASE);
            }
            if !password.chars().any(|c| c.is_ascii_lowercase()) {
                result.push(PASSWORD_NEEDS_LOWERCASE);
            }
            if !password.chars().any(|c| c.is_ascii_digit()) {
                result.push(PASSWORD_NEEDS_DIGIT);
            }
            if !has_special_char(password) {
                result.push(PASSWORD_NEEDS_SPECIAL);
            }
        }
        PasswordPolicy::Relaxed { hardened } => {
            let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
            let has_digit = password.chars().any(|c| c.is_ascii_digit());
            if !has_letter || !has_digit {
                result.push(PASSWORD_NEEDS_LETTER_AND_DIGIT);
            }
            if hardened && contains_dangerous_pattern(password) {
                result.push(PASSWORD_FORBIDDEN_CONTENT);
            }
        }
    }

    result
}

/// Checks a password against its confirmation (exact, case-sensitive)
pub fn validate_password_match(password: &str, confirm_password: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if password.is_empty() || confirm_password.is_empty() {
        result.push(CONFIRMATION_REQUIRED);
        return result;
    }

    if password != confirm_password {
        result.push(PASSWORDS_DO_NOT_MATCH);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const STRICT: PasswordPolicy = PasswordPolicy::Strict;
    const RELAXED: PasswordPolicy = PasswordPolicy::Relaxed { hardened: false };
    const RELAXED_HARDENED: PasswordPolicy = PasswordPolicy::Relaxed { hardened: true };

    #[rstest]
    #[case(STRICT)]
    #[case(RELAXED)]
    #[case(RELAXED_HARDENED)]
    fn test_empty_password_is_required_only(#[case] policy: PasswordPolicy) {
        let result = validate_password_strength("", policy);
        assert_eq!(result.messages(), vec![PASSWORD_REQUIRED]);
    }

    #[test]
    fn test_strict_accepts_complete_password() {
        assert!(validate_password_strength("Aa1!aaaa", STRICT).is_valid());
        assert!(validate_password_strength("Secure@Pass1", STRICT).is_valid());
    }

    #[test]
    fn test_strict_lists_missing_classes_in_order() {
        let result = validate_password_strength("aaaaaaaa", STRICT);
        assert_eq!(
            result.messages(),
            vec![
                PASSWORD_NEEDS_UPPERCASE,
                PASSWORD_NEEDS_DIGIT,
                PASSWORD_NEEDS_SPECIAL,
            ]
        );
    }

    #[test]
    fn test_strict_reports_everything_for_short_symbol_only() {
        let result = validate_password_strength("-", STRICT);
        assert_eq!(
            result.messages(),
            vec![
                PASSWORD_TOO_SHORT,
                PASSWORD_NEEDS_UPPERCASE,
                PASSWORD_NEEDS_LOWERCASE,
                PASSWORD_NEEDS_DIGIT,
                PASSWORD_NEEDS_SPECIAL,
            ]
        );
    }

    #[rstest]
    #[case("Aa1!")]
    #[case("Aa1!aaa")]
    #[case("x")]
    fn test_short_passwords_always_report_length(#[case] password: &str) {
        for policy in [STRICT, RELAXED, RELAXED_HARDENED] {
            let result = validate_password_strength(password, policy);
            assert!(result.contains(PASSWORD_TOO_SHORT), "{password} / {policy}");
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        let password = "Ää1!ääá";
        assert_eq!(password.chars().count(), 7);
        assert!(validate_password_strength(password, STRICT).contains(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_strict_special_set_excludes_dash_and_underscore() {
        let result = validate_password_strength("Abcdef1-_", STRICT);
        assert_eq!(result.messages(), vec![PASSWORD_NEEDS_SPECIAL]);
    }

    #[rstest]
    #[case("abcdefgh")]
    #[case("12345678")]
    #[case("!!!!!!!!")]
    fn test_relaxed_combined_letter_digit_error(#[case] password: &str) {
        let result = validate_password_strength(password, RELAXED);
        assert_eq!(result.messages(), vec![PASSWORD_NEEDS_LETTER_AND_DIGIT]);
    }

    #[test]
    fn test_relaxed_accepts_letters_and_digits() {
        assert!(validate_password_strength("abcdefg1", RELAXED).is_valid());
        assert!(validate_password_strength("ABCDEFG1", RELAXED).is_valid());
    }

    #[test]
    fn test_relaxed_hardened_scans_content() {
        let payload = "pass1234<script>";
        assert!(validate_password_strength(payload, RELAXED).is_valid());

        let result = validate_password_strength(payload, RELAXED_HARDENED);
        assert_eq!(result.messages(), vec![PASSWORD_FORBIDDEN_CONTENT]);
    }

    #[test]
    fn test_match() {
        assert!(validate_password_match("X1!aaaaa", "X1!aaaaa").is_valid());

        let result = validate_password_match("X1!aaaaa", "X1!aaaab");
        assert_eq!(result.messages(), vec![PASSWORDS_DO_NOT_MATCH]);

        let result = validate_password_match("Secret1!", "secret1!");
        assert_eq!(result.messages(), vec![PASSWORDS_DO_NOT_MATCH]);
    }

    #[rstest]
    #[case("", "")]
    #[case("X1!aaaaa", "")]
    #[case("", "X1!aaaaa")]
    fn test_match_requires_both(#[case] password: &str, #[case] confirm: &str) {
        let result = validate_password_match(password, confirm);
        assert_eq!(result.messages(), vec![CONFIRMATION_REQUIRED]);
    }

    #[test]
    fn test_match_does_not_trim() {
        let result = validate_password_match("X1!aaaaa", "X1!aaaaa ");
        assert_eq!(result.messages(), vec![PASSWORDS_DO_NOT_MATCH]);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("Strict".parse::<PasswordPolicy>(), Ok(STRICT));
        assert_eq!("relaxed_hardened".parse::<PasswordPolicy>(), Ok(RELAXED_HARDENED));
        assert_eq!(
            "medium".parse::<PasswordPolicy>(),
            Err(EngineError::UnknownPolicy("medium".to_string()))
        );
        assert_eq!(RELAXED.to_string(), "relaxed");
    }
}
