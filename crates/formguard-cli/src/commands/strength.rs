use anyhow::Result;
use formguard_core::{validate_password_strength, PasswordPolicy};

use super::report;

pub fn execute(password: &str, policy: &str, json: bool) -> Result<bool> {
    let policy: PasswordPolicy = policy.parse()?;
    report(&validate_password_strength(password, policy), json)
}
