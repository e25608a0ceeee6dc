//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml`, writing a default file on
//! first run, and applies environment overrides on top.

use crate::paths::SentibotPaths;
use sentibot_core::config::{ChatbotConfig, ClassifierBackend};
use sentibot_core::{Result, SentibotError};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Overrides `classifier.api_token`.
pub const ENV_API_TOKEN: &str = "HF_API_TOKEN";
/// Overrides `classifier.backend` ("huggingface" or "lexicon").
pub const ENV_BACKEND: &str = "SENTIBOT_BACKEND";

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<ChatbotConfig>>>,
}

impl ConfigService {
    /// Creates a service for the default config path (`<config_dir>/sentibot/config.toml`).
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(SentibotPaths::config_file()?))
    }

    /// Creates a service for a custom config path (for testing or `--config`).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// Environment overrides are applied on every call so they always win
    /// over the cached file contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, written or parsed, or if
    /// an environment override holds an invalid value.
    pub fn load(&self) -> Result<ChatbotConfig> {
        let cached = self
            .config
            .read()
            .map_err(|_| SentibotError::internal("Config cache lock poisoned"))?
            .clone();

        let config = match cached {
            Some(config) => config,
            None => {
                let loaded = self.load_from_disk()?;
                let mut write_lock = self
                    .config
                    .write()
                    .map_err(|_| SentibotError::internal("Config cache lock poisoned"))?;
                *write_lock = Some(loaded.clone());
                loaded
            }
        };

        apply_env_overrides(config, |key| std::env::var(key).ok())
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn load_from_disk(&self) -> Result<ChatbotConfig> {
        if !self.path.exists() {
            let default_config = ChatbotConfig::default();
            self.write_default(&default_config)?;
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config = ChatbotConfig::from_toml_str(&content).map_err(|e| {
            SentibotError::config(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            backend = %config.classifier.backend,
            "Loaded config"
        );
        Ok(config)
    }

    fn write_default(&self, config: &ChatbotConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, config.to_toml_string()?)?;

        tracing::info!(path = %self.path.display(), "Created default config");
        Ok(())
    }
}

/// Applies `HF_API_TOKEN` / `SENTIBOT_BACKEND` using `lookup` to read variables.
pub fn apply_env_overrides<F>(mut config: ChatbotConfig, lookup: F) -> Result<ChatbotConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(token) = lookup(ENV_API_TOKEN).filter(|t| !t.trim().is_empty()) {
        config.classifier.api_token = Some(token);
    }

    if let Some(backend) = lookup(ENV_BACKEND).filter(|b| !b.trim().is_empty()) {
        config.classifier.backend = backend.parse::<ClassifierBackend>()?;
    }

    Ok(config)
}
