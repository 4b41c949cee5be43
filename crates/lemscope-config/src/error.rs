//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Config references ${{{0}}}, which is not set")]
    EnvVarNotSet(String),

    #[error("Cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Bad substitution pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// One or more validator errors, joined for display.
    #[error("Invalid config: {0}")]
    Invalid(String),
}
