use std::fs;
use std::path::Path;

use crate::error::{DocGuardError, Result};

use super::Config;

pub const LOCAL_CONFIG_NAME: &str = ".doc-guard.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to
    /// built-in defaults when no file exists.
    ///
    /// # Errors
    /// Returns an error if an existing config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let local = Path::new(LOCAL_CONFIG_NAME);
        if local.exists() {
            self.load_from_path(local)
        } else {
            Ok(Config::default())
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|source| DocGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content)?;
        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate semantic correctness beyond TOML syntax.
///
/// # Errors
/// Returns an error for empty extension lists or invalid glob patterns.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.default.extensions.is_empty() {
        return Err(DocGuardError::Config(
            "default.extensions cannot be empty".to_string(),
        ));
    }

    for pattern in &config.exclude.patterns {
        globset::Glob::new(pattern).map_err(|e| DocGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
