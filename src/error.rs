use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Repository root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Invalid path pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid name pattern: {pattern}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RepoGuardError>;
