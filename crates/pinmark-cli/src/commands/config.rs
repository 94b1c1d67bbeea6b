//! Config command handlers

use anyhow::{bail, Context, Result};

use pinmark_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(output: &Output) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "max_history": config.max_history
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  data_dir:    {}", config.data_dir.display());
            println!("  max_history: {}", config.max_history);
            println!();
            println!("Config file: {}", Config::config_file_path().display());
        }
    }
    Ok(())
}

/// Set a configuration value and save it to the config file
pub fn set(key: String, value: String, output: &Output) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;

    match key.as_str() {
        "data_dir" => {
            config.data_dir = value.clone().into();
        }
        "max_history" => {
            config.max_history = value
                .parse()
                .with_context(|| format!("max_history must be a number, got '{}'", value))?;
        }
        _ => bail!("Unknown configuration key: {} (expected data_dir or max_history)", key),
    }

    config.save().context("Failed to save configuration")?;
    output.success(&format!("Set {} = {}", key, value));
    Ok(())
}
