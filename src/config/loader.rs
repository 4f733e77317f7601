use std::path::Path;

use crate::error::{RepoGuardError, Result};

use super::Config;

pub const CONFIG_FILE_NAME: &str = ".repo-guard.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration for the repository rooted at `root`.
    ///
    /// Absence of a configuration file is not an error; defaults apply.
    ///
    /// # Errors
    /// Returns an error if a present config file cannot be read or parsed.
    fn load(&self, root: &Path) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or malformed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Loads `.repo-guard.toml` from the repository root.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self, root: &Path) -> Result<Config> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }
        self.load_from_path(&path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(RepoGuardError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
