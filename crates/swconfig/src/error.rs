//! Error types for configuration declarations.
//!
//! Only construction-time operations (parsing and loading declarations) can
//! fail. Merging configurations never produces an error.

use thiserror::Error;

/// Errors that can occur while building a [`Config`](crate::Config) from a
/// textual declaration.
///
/// # Examples
///
/// ```rust
/// use swconfig::{parse_config, ConfigError};
///
/// let result = parse_config(r#"base: "btn"; base: "card";"#);
/// assert!(matches!(result, Err(ConfigError::DuplicateKey(_))));
/// ```
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The declaration text could not be parsed.
    ///
    /// The string contains details about what was unexpected and where.
    #[error("config syntax error: {0}")]
    InvalidSyntax(String),

    /// The same key was declared twice in one configuration.
    #[error("duplicate config key: {0}")]
    DuplicateKey(String),

    /// The same choice was declared twice inside one choice block.
    #[error("duplicate choice '{choice}' in config key '{key}'")]
    DuplicateChoice { key: String, choice: String },

    /// A variant key consisting of the sigil alone (`_`), which names no variant.
    #[error("variant key has no name: {0}")]
    EmptyVariant(String),

    /// An I/O error occurred while reading a declaration file.
    #[error("I/O error reading config declaration")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
