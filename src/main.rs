//! tempo CLI entry point.

use anyhow::Result;
use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;
use tempo::cli::{Cli, Command};
use tempo::config::{ConfigFormat, read_cfg};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Command::Show => {
            let config = read_cfg(cli.config_file.as_deref())?;
            println!("{}", serde_json::to_string_pretty(config.settings())?);
        }
        Command::Init { path } => {
            let path = path
                .or(cli.config_file)
                .unwrap_or_else(|| PathBuf::from("pyproject.toml"));
            let format = ConfigFormat::from_path(&path)?;
            format.init_empty_config_content(&path)?;
            info!("Initialized empty tempo section in {}", path.display());
        }
        Command::Set { key, value } => {
            let mut config = read_cfg(cli.config_file.as_deref())?;
            let value: Value = serde_json::from_str(&value).unwrap_or(Value::String(value));
            config.set_key(&key, value)?;
            if let Some(path) = config.path() {
                info!("Updated {} in {}", key, path.display());
            }
        }
    }

    Ok(())
}
