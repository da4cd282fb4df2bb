// File: src/forms.rs
// Purpose: Composite validators per form kind and field-map dispatch

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::email::{validate_email, EmailOptions};
use crate::error::{EngineError, Result};
use crate::password::{
    validate_password_match, validate_password_strength, PasswordPolicy, PASSWORD_REQUIRED,
};
use crate::result::ValidationResult;

pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_CONFIRM_PASSWORD: &str = "confirm_password";

/// The forms the engine knows how to validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Registration,
    Login,
    PasswordReset,
    ForgottenPassword,
}

impl FormKind {
    pub const ALL: [FormKind; 4] = [
        FormKind::Registration,
        FormKind::Login,
        FormKind::PasswordReset,
        FormKind::ForgottenPassword,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormKind::Registration => "registration",
            FormKind::Login => "login",
            FormKind::PasswordReset => "password-reset",
            FormKind::ForgottenPassword => "forgotten-password",
        }
    }

    /// Element id the page gives this form
    pub fn form_id(self) -> &'static str {
        match self {
            FormKind::Registration => "register-form",
            FormKind::Login => "login-form",
            FormKind::PasswordReset => "password-reset-form",
            FormKind::ForgottenPassword => "forgotten-password-form",
        }
    }

    /// Resolve a form from its element id
    ///
    /// # Examples
    /// ```
    /// use formguard_core::FormKind;
    /// assert_eq!(FormKind::from_form_id("login-form"), Some(FormKind::Login));
    /// assert_eq!(FormKind::from_form_id("search-form"), None);
    /// ```
    pub fn from_form_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.form_id() == id)
    }

    /// Fields a caller must supply when dispatching through [`Validator::validate_form`]
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            FormKind::Registration => &[FIELD_EMAIL, FIELD_PASSWORD, FIELD_CONFIRM_PASSWORD],
            FormKind::Login => &[FIELD_EMAIL, FIELD_PASSWORD],
            FormKind::PasswordReset => &[FIELD_PASSWORD, FIELD_CONFIRM_PASSWORD],
            FormKind::ForgottenPassword => &[FIELD_EMAIL],
        }
    }
}

impl FromStr for FormKind {
    type Err = EngineError;

    /// Accepts a kind name (`password-reset`, `password_reset`) or a form id
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == key || kind.form_id() == key)
            .or(match key.as_str() {
                "register" => Some(FormKind::Registration),
                "forgot-password" => Some(FormKind::ForgottenPassword),
                _ => None,
            })
            .ok_or_else(|| EngineError::UnknownFormKind(s.to_string()))
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Field name to raw value, as read from a submitted form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    fields: HashMap<String, String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn require(&self, kind: FormKind, field: &'static str) -> Result<&str> {
        self.get(field).ok_or(EngineError::MissingField {
            kind: kind.name(),
            field,
        })
    }
}

impl From<HashMap<String, String>> for FormInput {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormInput {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Stateless validation engine with its email options fixed by configuration
///
/// Composite validators always check strength with [`PasswordPolicy::Strict`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    email: EmailOptions,
}

impl Validator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            email: config.email,
        }
    }

    pub fn with_email_options(email: EmailOptions) -> Self {
        Self { email }
    }

    pub fn email_options(&self) -> EmailOptions {
        self.email
    }

    pub fn validate_email(&self, email: &str) -> ValidationResult {
        validate_email(email, self.email)
    }

    /// Email, then strict strength, then confirmation
    pub fn validate_registration(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> ValidationResult {
        let mut result = self.validate_email(email);
        result.merge(validate_password_strength(password, PasswordPolicy::Strict));
        result.merge(validate_password_match(password, confirm_password));
        trace_outcome(FormKind::Registration, &result);
        result
    }

    /// Email, then bare password presence (no strength rules at login)
    pub fn validate_login(&self, email: &str, password: &str) -> ValidationResult {
        let mut result = self.validate_email(email);
        if password.is_empty() {
            result.push(PASSWORD_REQUIRED);
        }
        trace_outcome(FormKind::Login, &result);
        result
    }

    pub fn validate_password_reset(&self, password: &str, confirm_password: &str) -> ValidationResult {
        let mut result = validate_password_strength(password, PasswordPolicy::Strict);
        result.merge(validate_password_match(password, confirm_password));
        trace_outcome(FormKind::PasswordReset, &result);
        result
    }

    pub fn validate_forgotten_password(&self, email: &str) -> ValidationResult {
        let result = self.validate_email(email);
        trace_outcome(FormKind::ForgottenPassword, &result);
        result
    }

    /// Dispatches to the composite validator for `kind`
    ///
    /// Every field in [`FormKind::required_fields`] must be present (it may be
    /// empty). A missing field is a caller bug and returns
    /// [`EngineError::MissingField`] rather than a result that skips it.
    pub fn validate_form(&self, kind: FormKind, input: &FormInput) -> Result<ValidationResult> {
        let result = match kind {
            FormKind::Registration => self.validate_registration(
                input.require(kind, FIELD_EMAIL)?,
                input.require(kind, FIELD_PASSWORD)?,
                input.require(kind, FIELD_CONFIRM_PASSWORD)?,
            ),
            FormKind::Login => self.validate_login(
                input.require(kind, FIELD_EMAIL)?,
                input.require(kind, FIELD_PASSWORD)?,
            ),
            FormKind::PasswordReset => self.validate_password_reset(
                input.require(kind, FIELD_PASSWORD)?,
                input.require(kind, FIELD_CONFIRM_PASSWORD)?,
            ),
            FormKind::ForgottenPassword => {
                self.validate_forgotten_password(input.require(kind, FIELD_EMAIL)?)
            }
        };
        Ok(result)
    }
}

// Field values are never logged, only counts.
fn trace_outcome(kind: FormKind, result: &ValidationResult) {
    if result.has_errors() {
        debug!(form = %kind, errors = result.len(), "form rejected");
    } else {
        trace!(form = %kind, "form accepted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::{EMAIL_FORBIDDEN_CONTENT, EMAIL_REQUIRED};
    use crate::password::{CONFIRMATION_REQUIRED, PASSWORD_NEEDS_SPECIAL, PASSWORDS_DO_NOT_MATCH};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("registration", FormKind::Registration)]
    #[case("register-form", FormKind::Registration)]
    #[case("register", FormKind::Registration)]
    #[case("Login", FormKind::Login)]
    #[case("password_reset", FormKind::PasswordReset)]
    #[case("password-reset-form", FormKind::PasswordReset)]
    #[case("forgot-password", FormKind::ForgottenPassword)]
    #[case("forgotten-password-form", FormKind::ForgottenPassword)]
    fn test_parse_form_kind(#[case] input: &str, #[case] expected: FormKind) {
        assert_eq!(input.parse::<FormKind>(), Ok(expected));
    }

    #[test]
    fn test_parse_unknown_form_kind() {
        assert_eq!(
            "checkout".parse::<FormKind>(),
            Err(EngineError::UnknownFormKind("checkout".to_string()))
        );
    }

    #[test]
    fn test_form_id_round_trip() {
        for kind in FormKind::ALL {
            assert_eq!(FormKind::from_form_id(kind.form_id()), Some(kind));
        }
    }

    #[test]
    fn test_login_skips_strength() {
        let validator = Validator::default();
        assert!(validator.validate_login("user@example.com", "weak").is_valid());

        let result = validator.validate_login("", "");
        assert_eq!(result.messages(), vec![EMAIL_REQUIRED, PASSWORD_REQUIRED]);
    }

    #[test]
    fn test_reset_strength_then_match() {
        let validator = Validator::default();
        let result = validator.validate_password_reset("Abcdefg1", "Abcdefg2");
        assert_eq!(
            result.messages(),
            vec![PASSWORD_NEEDS_SPECIAL, PASSWORDS_DO_NOT_MATCH]
        );
    }

    #[test]
    fn test_validator_uses_configured_email_mode() {
        let plain = Validator::default();
        let hardened = Validator::with_email_options(EmailOptions::hardened());

        assert!(plain.validate_forgotten_password("a@b.com<script>").is_valid());
        assert_eq!(
            hardened.validate_forgotten_password("a@b.com<script>").messages(),
            vec![EMAIL_FORBIDDEN_CONTENT]
        );
    }

    #[test]
    fn test_validate_form_missing_field() {
        let validator = Validator::default();
        let input = FormInput::new().with(FIELD_EMAIL, "user@example.com");

        let err = validator
            .validate_form(FormKind::Login, &input)
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::MissingField {
                kind: "login",
                field: FIELD_PASSWORD
            }
        );
        assert_eq!(
            err.to_string(),
            "form 'login' is missing required field 'password'"
        );
    }

    #[test]
    fn test_validate_form_empty_field_is_input_not_misuse() {
        let validator = Validator::default();
        let input = FormInput::new()
            .with(FIELD_PASSWORD, "")
            .with(FIELD_CONFIRM_PASSWORD, "");

        let result = validator
            .validate_form(FormKind::PasswordReset, &input)
            .unwrap();
        assert_eq!(
            result.messages(),
            vec![PASSWORD_REQUIRED, CONFIRMATION_REQUIRED]
        );
    }

    #[test]
    fn test_validate_form_ignores_extra_fields() {
        let validator = Validator::default();
        let input: FormInput = [("email", "user@example.com"), ("csrf_token", "abc")]
            .into_iter()
            .collect();
        let result = validator
            .validate_form(FormKind::ForgottenPassword, &input)
            .unwrap();
        assert!(result.is_valid());
    }
}
