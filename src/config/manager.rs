use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::chronicle::chat_endpoint;
use crate::fs::atomic_write;
use crate::paths;

/// Backend used when neither the CLI nor the config file names one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Settings in the `[nile]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NileConfig {
    /// Base URL of the Chronicler backend.
    pub base_url: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/nile/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub nile: NileConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// The backend base URL.
    pub base_url: Url,
    /// The full chat endpoint URL.
    pub endpoint: Url,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub base_url: Option<String>,
}

/// Parses a backend base URL.
///
/// Accepts absolute `http`/`https` URLs with a host and no query or fragment.
pub fn parse_base_url(input: &str) -> Result<Url> {
    let invalid = |reason: &str| {
        anyhow::anyhow!(
            "Invalid base URL: '{input}' ({reason})\n\n\
             Expected an http:// or https:// URL, e.g. {DEFAULT_BASE_URL}"
        )
    };

    let url = Url::parse(input.trim()).map_err(|e| invalid(&e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host"));
    }
    if url.query().is_some() {
        return Err(invalid("query strings are not allowed"));
    }
    if url.fragment().is_some() {
        return Err(invalid("fragments are not allowed"));
    }

    Ok(url)
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then config file, then [`DEFAULT_BASE_URL`].
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let base_url = options
        .base_url
        .as_deref()
        .or(config_file.nile.base_url.as_deref())
        .unwrap_or(DEFAULT_BASE_URL);

    let base_url = parse_base_url(base_url)?;
    Ok(ResolvedConfig {
        endpoint: chat_endpoint(&base_url),
        base_url,
    })
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Configuration is stored at `$XDG_CONFIG_HOME/nile/config.toml`
    /// or `~/.config/nile/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the config file, treating a missing file as empty.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(ConfigFile::default());
        }
        self.load()
    }

    /// Loads the config file and merges `options` over it.
    pub fn resolve(&self, options: &ResolveOptions) -> Result<ResolvedConfig> {
        resolve_config(options, &self.load_or_default()?)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
        atomic_write(&self.config_path, &contents)
    }
}
