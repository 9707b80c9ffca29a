//! Configuration management for Benchmark3x using the prefer crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assets::DEFAULT_TTL;
use crate::server::DEFAULT_SITE_NAME;

/// Name used for config file discovery (`benchmark3x.toml`, `.json`, ...).
pub const CONFIG_NAME: &str = "benchmark3x";

/// Default bind address for `serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1:3030";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {format} config {}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        format: &'static str,
        message: String,
    },
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the site images.
    pub assets_dir: PathBuf,
    /// Address for the web server (port, host, or host:port).
    pub bind: String,
    /// Site name used in titles and the footer.
    pub site_name: String,
    /// Asset cache TTL in seconds (0 disables caching).
    pub asset_cache_ttl_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("."),
            bind: DEFAULT_BIND.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            asset_cache_ttl_secs: DEFAULT_TTL.as_secs(),
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, prefer::FromValue)]
pub struct Config {
    /// Assets directory (relative paths resolve against the config file).
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "assets")]
    pub assets_dir: Option<String>,
    /// Bind address for the web server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    /// Site name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    /// Asset cache TTL in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_cache_ttl_secs: Option<u64>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    #[prefer(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Automatically discovers benchmark3x config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load(CONFIG_NAME).await {
            Ok(pref_config) => match pref_config.source_path() {
                Some(path) => Self::load_from_path(path).await.unwrap_or_else(|e| {
                    tracing::warn!("{}; using defaults", e);
                    Self::default()
                }),
                None => Self::default(),
            },
            Err(_) => {
                tracing::debug!("No {} config file found, using defaults", CONFIG_NAME);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file path.
    /// Format is chosen by extension: TOML, YAML, otherwise JSON.
    pub async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let mut config = Self::parse(path, &contents)?;
        config.source_path = Some(path.to_path_buf());
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let parse_error = |format: &'static str, message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            format,
            message,
        };

        match ext {
            "toml" => toml::from_str(contents).map_err(|e| parse_error("TOML", e.to_string())),
            "yaml" | "yml" => {
                serde_yaml::from_str(contents).map_err(|e| parse_error("YAML", e.to_string()))
            }
            _ => serde_json::from_str(contents).map_err(|e| parse_error("JSON", e.to_string())),
        }
    }

    /// Get the base directory for resolving relative paths.
    /// Returns the config file's parent directory if available, otherwise None.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    /// - Absolute paths are returned as-is
    /// - Paths starting with ~ are expanded
    /// - Relative paths are resolved relative to `base_dir`
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref assets_dir) = self.assets_dir {
            settings.assets_dir = self.resolve_path(assets_dir, base_dir);
        }
        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }
        if let Some(ref site_name) = self.site_name {
            settings.site_name = site_name.clone();
        }
        if let Some(ttl) = self.asset_cache_ttl_secs {
            settings.asset_cache_ttl_secs = ttl;
        }
    }

    /// Serialize the effective settings back into config form.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            assets_dir: Some(settings.assets_dir.display().to_string()),
            bind: Some(settings.bind.clone()),
            site_name: Some(settings.site_name.clone()),
            asset_cache_ttl_secs: Some(settings.asset_cache_ttl_secs),
            source_path: None,
        }
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
    /// Use CWD for relative paths instead of config file directory.
    pub use_cwd: bool,
    /// Assets directory (--assets flag), overrides the config file.
    pub assets_dir: Option<PathBuf>,
}

/// Load config from file sources.
async fn load_file_config(options: &LoadOptions) -> Config {
    // Priority 1: Explicit --config flag
    if let Some(ref config_path) = options.config_path {
        return Config::load_from_path(config_path)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("{}; using defaults", e);
                Config::default()
            });
    }

    // Priority 2: Auto-discover via prefer
    Config::load().await
}

/// Load settings with explicit options.
/// Returns (Settings, Config) tuple.
pub async fn load_settings_with_options(options: LoadOptions) -> (Settings, Config) {
    let config = load_file_config(&options).await;
    let settings = resolve_settings(&config, &options);
    (settings, config)
}

/// Layer defaults, the config file and CLI overrides into settings.
fn resolve_settings(config: &Config, options: &LoadOptions) -> Settings {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut settings = Settings {
        assets_dir: cwd.clone(),
        ..Settings::default()
    };

    // Determine base directory for resolving relative paths
    let base_dir = if options.use_cwd {
        cwd.clone()
    } else {
        config.base_dir().unwrap_or_else(|| cwd.clone())
    };

    config.apply_to_settings(&mut settings, &base_dir);

    // CLI paths are relative to where the command was run
    if let Some(ref assets_dir) = options.assets_dir {
        settings.assets_dir = if assets_dir.is_absolute() {
            assets_dir.clone()
        } else {
            cwd.join(assets_dir)
        };
    }

    settings
}
