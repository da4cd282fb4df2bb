use std::path::Path;

use anyhow::{Context, Result};
use formguard_core::forms::{FIELD_CONFIRM_PASSWORD, FIELD_EMAIL, FIELD_PASSWORD};
use formguard_core::{EmailMode, FormInput, FormKind, Validator};
use tracing::debug;

use super::{load_config, report};

/// Field values given on the command line; absent flags stay absent
pub struct Fields {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl Fields {
    fn into_input(self) -> FormInput {
        let mut input = FormInput::new();
        for (name, value) in [
            (FIELD_EMAIL, self.email),
            (FIELD_PASSWORD, self.password),
            (FIELD_CONFIRM_PASSWORD, self.confirm_password),
        ] {
            if let Some(value) = value {
                input.insert(name, value);
            }
        }
        input
    }
}

pub fn execute(
    config_path: Option<&Path>,
    kind: &str,
    fields: Fields,
    hardened: bool,
    json: bool,
) -> Result<bool> {
    let mut config = load_config(config_path)?;
    if hardened {
        config.email.mode = EmailMode::Hardened;
    }

    let kind: FormKind = kind.parse()?;
    debug!(form = %kind, email_mode = ?config.email.mode, "validating");

    let result = Validator::new(&config)
        .validate_form(kind, &fields.into_input())
        .with_context(|| format!("pass every field of {}: {}", kind, kind.required_fields().join(", ")))?;

    report(&result, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_flags_stay_absent() {
        let input = Fields {
            email: Some("user@example.com".to_string()),
            password: None,
            confirm_password: Some(String::new()),
        }
        .into_input();

        assert_eq!(input.get(FIELD_EMAIL), Some("user@example.com"));
        assert_eq!(input.get(FIELD_PASSWORD), None);
        assert_eq!(input.get(FIELD_CONFIRM_PASSWORD), Some(""));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let fields = Fields {
            email: Some("user@example.com".to_string()),
            password: None,
            confirm_password: None,
        };
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("formguard.toml");
        let err = execute(Some(&config), "login", fields, false, true).unwrap_err();
        assert!(format!("{:#}", err).contains("missing required field 'password'"));
    }

    #[test]
    fn test_empty_login_password_is_invalid() {
        let fields = Fields {
            email: Some("a@b.c".to_string()),
            password: Some(String::new()),
            confirm_password: None,
        };
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("formguard.toml");
        let valid = execute(Some(&config), "login", fields, false, true).unwrap();
        assert!(!valid);
    }

    #[test]
    fn test_complete_login_is_valid() {
        let fields = Fields {
            email: Some("a@b.c".to_string()),
            password: Some("anything".to_string()),
            confirm_password: None,
        };
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("formguard.toml");
        assert!(execute(Some(&config), "login-form", fields, false, true).unwrap());
    }
}
