pub mod check_config;
pub mod strength;
pub mod validate;

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use formguard_core::{EngineConfig, ValidationResult};

pub(crate) fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path),
        None => EngineConfig::load_default(),
    }
}

/// Prints the result and returns whether it was valid
pub(crate) fn report(result: &ValidationResult, json: bool) -> Result<bool> {
    if json {
        println!("{}", serde_json::to_string(result)?);
    } else if result.is_valid() {
        println!("{}", "✓ valid".green().bold());
    } else {
        for error in result {
            println!("{} {}", "✗".red(), error);
        }
    }
    Ok(result.is_valid())
}
