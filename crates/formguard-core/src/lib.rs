//! formguard core
//!
//! Pure validation of form field values: email format, password strength and
//! password confirmation, plus composite validators for the registration,
//! login, password reset and forgotten-password forms.
//!
//! Validators take plain strings and return a [`ValidationResult`], an ordered
//! list of messages that is empty when the input is valid. Nothing here reads
//! or writes a page; rendering belongs to the caller.
//!
//! ```
//! use formguard_core::{Validator, EngineConfig};
//!
//! let validator = Validator::new(&EngineConfig::default());
//! let result = validator.validate_registration("user@example.com", "Aa1!aaaa", "Aa1!aaab");
//! assert_eq!(result.messages(), vec!["Passwords do not match."]);
//! ```

pub mod config;
pub mod email;
pub mod error;
pub mod forms;
pub mod password;
pub mod patterns;
pub mod result;

pub use config::EngineConfig;
pub use email::{normalize_email, validate_email, EmailMode, EmailOptions, LengthMessage};
pub use error::EngineError;
pub use forms::{FormInput, FormKind, Validator};
pub use password::{validate_password_match, validate_password_strength, PasswordPolicy};
pub use patterns::{contains_dangerous_pattern, contains_disallowed_char};
pub use result::{ValidationError, ValidationResult};
