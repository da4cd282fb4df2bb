use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::load_config;

pub fn execute(config_path: Option<&Path>) -> Result<bool> {
    let config = load_config(config_path)?;

    println!("{}", "Configuration OK".green().bold());
    println!();
    print!("{}", config.to_toml()?);

    Ok(true)
}
