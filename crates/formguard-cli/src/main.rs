mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formguard")]
#[command(version, about = "Validate form input the way the page does", long_about = None)]
struct Cli {
    /// Config file (default: ./formguard.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a form: registration, login, password-reset or forgotten-password
    Validate {
        /// Form kind name or form element id
        kind: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        password: Option<String>,

        #[arg(long = "confirm-password")]
        confirm_password: Option<String>,

        /// Force hardened email checks regardless of config
        #[arg(long)]
        hardened: bool,

        /// Print messages as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Check a single password against a strength policy
    Strength {
        password: String,

        /// strict, relaxed or relaxed-hardened
        #[arg(short, long, default_value = "strict")]
        policy: String,

        /// Print messages as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Load and print the effective configuration
    #[command(name = "check-config")]
    CheckConfig,
}

const EXIT_VALID: u8 = 0;
/// Exit status when the input failed validation
const EXIT_INVALID: u8 = 1;
/// Exit status for misuse: bad config, unknown form, missing field
const EXIT_MISUSE: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let outcome = match cli.command {
        Commands::Validate {
            kind,
            email,
            password,
            confirm_password,
            hardened,
            json,
        } => commands::validate::execute(
            config_path,
            &kind,
            commands::validate::Fields {
                email,
                password,
                confirm_password,
            },
            hardened,
            json,
        ),
        Commands::Strength {
            password,
            policy,
            json,
        } => commands::strength::execute(&password, &policy, json),
        Commands::CheckConfig => commands::check_config::execute(config_path),
    };

    if let Err(e) = &outcome {
        eprintln!("{} {:#}", "error:".red().bold(), e);
    }
    ExitCode::from(exit_status(&outcome))
}

/// Maps a command outcome to the process exit status
fn exit_status(outcome: &anyhow::Result<bool>) -> u8 {
    match outcome {
        Ok(true) => EXIT_VALID,
        Ok(false) => EXIT_INVALID,
        Err(_) => EXIT_MISUSE,
    }
}
