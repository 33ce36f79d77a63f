//! Config command - manage the JSON configuration file.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use spoolparse_core::SpoolConfig;

use super::default_config_path;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Write a configuration file with default values
    Init {
        /// Output path for configuration file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Get a configuration value by dotted key
    Get {
        /// Configuration key (e.g., "extraction.segment_lookahead")
        key: String,
    },

    /// Set a configuration value by dotted key
    Set {
        /// Configuration key
        key: String,
        /// New value (parsed as JSON, else taken as a string)
        value: String,
    },

    /// Show configuration file path
    Path,
}

pub async fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = load_or_default(true)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { output, force } => {
            let output_path = output.unwrap_or_else(default_config_path);
            if output_path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    output_path.display()
                );
            }
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            SpoolConfig::default().save(&output_path)?;
            println!(
                "{} Created configuration file at {}",
                style("✓").green(),
                output_path.display()
            );
        }
        ConfigCommand::Get { key } => {
            let json = serde_json::to_value(load_or_default(false)?)?;
            let value = lookup(&json, &key)
                .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        ConfigCommand::Set { key, value } => {
            let parsed: Value =
                serde_json::from_str(&value).unwrap_or_else(|_| Value::String(value.clone()));

            let mut json = serde_json::to_value(load_or_default(false)?)?;
            assign(&mut json, &key, parsed.clone())?;

            let config: SpoolConfig = serde_json::from_value(json)?;
            config.validate()?;

            let config_path = default_config_path();
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            config.save(&config_path)?;

            println!(
                "{} Set {} = {}",
                style("✓").green(),
                key,
                serde_json::to_string(&parsed)?
            );
        }
        ConfigCommand::Path => {
            let config_path = default_config_path();
            println!("Configuration file: {}", config_path.display());
            if config_path.exists() {
                println!("Status: {}", style("exists").green());
            } else {
                println!("Status: {}", style("not created").yellow());
                println!();
                println!("Run 'spoolparse config init' to create a configuration file.");
            }
        }
    }

    Ok(())
}

fn load_or_default(announce: bool) -> anyhow::Result<SpoolConfig> {
    let config_path = default_config_path();
    if config_path.exists() {
        return Ok(SpoolConfig::from_file(&config_path)?);
    }
    if announce {
        println!(
            "{} No config file found, showing defaults.",
            style("ℹ").blue()
        );
    }
    Ok(SpoolConfig::default())
}

/// Follow a dotted key through nested objects.
fn lookup<'a>(json: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(json, |current, part| current.get(part))
}

/// Replace the value at an existing dotted key.
fn assign(json: &mut Value, key: &str, value: Value) -> anyhow::Result<()> {
    let (parent_key, leaf) = match key.rsplit_once('.') {
        Some((parent, leaf)) => (Some(parent), leaf),
        None => (None, key),
    };

    let mut parent = json;
    if let Some(parent_key) = parent_key {
        for part in parent_key.split('.') {
            parent = parent
                .get_mut(part)
                .ok_or_else(|| anyhow::anyhow!("Configuration path not found: {}", key))?;
        }
    }

    let object = parent
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("Cannot set value at non-object path: {}", key))?;
    if !object.contains_key(leaf) {
        anyhow::bail!("Configuration key not found: {}", key);
    }
    object.insert(leaf.to_string(), value);
    Ok(())
}
