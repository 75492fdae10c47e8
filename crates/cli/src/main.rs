//! Shoplist CLI - Backup and settings tools.
//!
//! # Usage
//!
//! ```bash
//! # Export a backup into the backup directory
//! shoplist backup export
//!
//! # Restore a backup
//! shoplist backup import ShoppingList_20240305_140700.backup
//!
//! # Summarize a backup without restoring it
//! shoplist backup inspect ShoppingList_20240305_140700.backup
//!
//! # Show, change or reset settings
//! shoplist settings show general
//! shoplist settings set general currency €
//! shoplist settings reset general
//! ```
//!
//! # Commands
//!
//! - `backup` - Export, import and inspect backup files
//! - `settings` - Show, change and reset settings domains

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::settings::Domain;
use crate::config::{CliConfig, LogFormat};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "shoplist")]
#[command(author, version, about = "Shoplist CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export, import and inspect backups
    Backup {
        #[command(subcommand)]
        action: BackupAction,
    },
    /// Show and change settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum BackupAction {
    /// Write a new backup into the backup directory
    Export,
    /// Replace all data with the contents of a backup
    Import {
        /// Backup file to restore
        file: PathBuf,
    },
    /// Summarize a backup without restoring it
    Inspect {
        /// Backup file to read
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Show every setting of a domain
    Show {
        #[arg(value_enum)]
        domain: Domain,
    },
    /// Change one setting
    Set {
        #[arg(value_enum)]
        domain: Domain,
        /// Setting key, e.g. `night_theme`
        key: String,
        /// New value, e.g. `ENABLED`
        value: String,
    },
    /// Restore the defaults of a domain
    Reset {
        #[arg(value_enum)]
        domain: Domain,
    },
}

fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shoplist=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().without_time().with_target(false))
            .init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_format);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Backup { action } => match action {
            BackupAction::Export => commands::backup::export(config).await?,
            BackupAction::Import { file } => commands::backup::import(config, &file).await?,
            BackupAction::Inspect { file } => commands::backup::inspect(config, &file).await?,
        },
        Commands::Settings { action } => match action {
            SettingsAction::Show { domain } => commands::settings::show(config, domain).await?,
            SettingsAction::Set { domain, key, value } => {
                commands::settings::set(config, domain, &key, &value).await?;
            }
            SettingsAction::Reset { domain } => {
                commands::settings::reset(config, domain).await?;
            }
        },
    }
    Ok(())
}
