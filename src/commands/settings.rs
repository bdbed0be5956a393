//! API key and settings management.

use anyhow::{Result, bail};
use console::style;
use dialoguer::Password;

use crate::config::{Config, redact_api_key};

pub fn handle_key_set() -> Result<()> {
    let key: String = Password::new()
        .with_prompt("OpenRouter API key")
        .interact()?;

    if key.trim().is_empty() {
        bail!("API key cannot be empty");
    }

    let mut config = Config::load()?;
    config.api_key = key.trim().to_string();
    config.save()?;

    println!("{} API key set successfully", style("✓").green().bold());
    Ok(())
}

pub fn handle_key_get() -> Result<()> {
    let config = Config::load()?;

    if config.api_key.is_empty() {
        println!("{} No API key set", style("⚠").yellow().bold());
        return Ok(());
    }

    println!(
        "{} Current API key: {}",
        style("ℹ").blue().bold(),
        style(redact_api_key(&config.api_key)).cyan()
    );
    Ok(())
}

pub fn handle_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    match config.get(key) {
        Some(value) => println!("{value}"),
        None => bail!("unknown config key '{key}' (expected base_url or default_model)"),
    }
    Ok(())
}

pub fn handle_config_set(key: &str, value: String) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    println!("{} {} updated", style("✓").green().bold(), key);
    Ok(())
}
