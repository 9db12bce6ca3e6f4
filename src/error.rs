//! Error types for navkey operations.

use thiserror::Error;

/// Errors that can occur while hashing, resolving URLs, or loading configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavkeyError {
    /// The input value was missing (a null string was passed to a validating entry point).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing failed using the url crate.
    #[error("URL parsing error: {0}")]
    UrlParse(String),

    /// The configuration document could not be deserialized.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Reading a configuration file failed.
    #[error("Configuration I/O error: {0}")]
    Io(String),
}

impl From<url::ParseError> for NavkeyError {
    fn from(err: url::ParseError) -> Self {
        NavkeyError::UrlParse(err.to_string())
    }
}

impl From<toml::de::Error> for NavkeyError {
    fn from(err: toml::de::Error) -> Self {
        NavkeyError::Config(err.to_string())
    }
}

impl From<std::io::Error> for NavkeyError {
    fn from(err: std::io::Error) -> Self {
        NavkeyError::Io(err.to_string())
    }
}
