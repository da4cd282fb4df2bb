//! formguard WASM
//!
//! WebAssembly bindings for the formguard validation engine.
//! A page script (the form adapter) reads field values, calls in here, and
//! renders the returned messages into its error region. Nothing in this crate
//! touches the DOM.

use std::collections::HashMap;

use formguard_core::{
    self as core, EmailMode, EmailOptions, EngineError, FormInput, FormKind, LengthMessage,
    PasswordPolicy, Validator,
};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Element id of the page's single error region
pub const CLIENT_ERRORS_REGION_ID: &str = "client-errors";

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Options object accepted from JavaScript
///
/// ```javascript
/// { emailMode: "hardened", lengthMessage: "invalid_format" }
/// ```
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationOptions {
    pub email_mode: EmailMode,
    pub length_message: LengthMessage,
}

impl ValidationOptions {
    fn email(self) -> EmailOptions {
        EmailOptions {
            mode: self.email_mode,
            length_message: self.length_message,
        }
    }
}

fn parse_options(options: JsValue) -> Result<ValidationOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(ValidationOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| misuse(format!("Failed to parse options: {}", e)))
}

fn misuse(message: impl Into<String>) -> JsValue {
    let message = message.into();
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

fn to_js(messages: Vec<String>) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&messages)?)
}

/// Resolves a kind name or form element id and validates the given fields
pub fn validate_fields(
    kind_or_form_id: &str,
    fields: HashMap<String, String>,
    options: ValidationOptions,
) -> Result<Vec<String>, EngineError> {
    let kind: FormKind = kind_or_form_id.parse()?;
    let validator = Validator::with_email_options(options.email());
    let result = validator.validate_form(kind, &FormInput::from(fields))?;
    Ok(result.messages())
}

/// Validate an email field
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateEmail(form.email.value, { emailMode: 'hardened' });
/// ```
#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email_js(email: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let options = parse_options(options)?;
    to_js(core::validate_email(email, options.email()).messages())
}

/// Validate password strength under `"strict"`, `"relaxed"` or `"relaxed-hardened"`
#[wasm_bindgen(js_name = validatePasswordStrength)]
pub fn validate_password_strength_js(password: &str, policy: &str) -> Result<JsValue, JsValue> {
    let policy: PasswordPolicy = policy.parse().map_err(|e: EngineError| misuse(e.to_string()))?;
    to_js(core::validate_password_strength(password, policy).messages())
}

#[wasm_bindgen(js_name = validatePasswordMatch)]
pub fn validate_password_match_js(password: &str, confirm_password: &str) -> Result<JsValue, JsValue> {
    to_js(core::validate_password_match(password, confirm_password).messages())
}

#[wasm_bindgen(js_name = containsDangerousPattern)]
pub fn contains_dangerous_pattern_js(value: &str) -> bool {
    core::contains_dangerous_pattern(value)
}

#[wasm_bindgen(js_name = normalizeEmail)]
pub fn normalize_email_js(email: &str) -> String {
    core::normalize_email(email)
}

/// Validate a whole form
///
/// # Arguments
/// * `kind` - Kind name (`"registration"`) or form element id (`"register-form"`)
/// * `fields` - Object mapping field names to raw values
/// * `options` - Optional options object
///
/// # Returns
/// Array of messages (empty if valid). Throws when the form is unknown or a
/// field it needs is missing from `fields`.
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateForm(form.id, {
///     email: form.email.value,
///     password: form.password.value,
///     confirm_password: form.confirm_password.value,
/// });
/// if (errors.length > 0) event.preventDefault();
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form_js(kind: &str, fields: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let fields: HashMap<String, String> = serde_wasm_bindgen::from_value(fields)
        .map_err(|e| misuse(format!("Failed to parse fields: {}", e)))?;
    let options = parse_options(options)?;
    let messages = validate_fields(kind, fields, options).map_err(|e| misuse(e.to_string()))?;
    to_js(messages)
}

/// Kind name for a form element id, or `undefined` if the form is not validated
#[wasm_bindgen(js_name = formKindFor)]
pub fn form_kind_for(form_id: &str) -> Option<String> {
    FormKind::from_form_id(form_id).map(|kind| kind.name().to_string())
}

#[wasm_bindgen(js_name = clientErrorsRegionId)]
pub fn client_errors_region_id() -> String {
    CLIENT_ERRORS_REGION_ID.to_string()
}
