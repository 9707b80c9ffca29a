//! Configuration display command.

use crate::cli::icons::{dim_arrow, info};
use crate::config::{Config, Settings};

/// Print the effective configuration as TOML.
pub fn cmd_config_show(settings: &Settings, config: &Config) -> anyhow::Result<()> {
    let source = config
        .source_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults (no config file found)".to_string());

    eprintln!("{} Effective configuration", info());
    eprintln!("  {} Source: {}", dim_arrow(), source);

    let effective = Config::from_settings(settings);
    print!("{}", toml::to_string_pretty(&effective)?);

    Ok(())
}
