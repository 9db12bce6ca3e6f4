//! Read-only configuration access for URL identification.
//!
//! [`identify`](crate::url::identify) looks up the `url-identifier` value on
//! every call through a [`ConfigSource`]. Any key-value store can act as a
//! source; this module ships an in-memory [`ConfigStore`] and a TOML-backed
//! [`NavkeyConfig`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::NavkeyError;
use crate::types::IdentifierTemplate;

/// Configuration key holding the identifier template.
pub const URL_IDENTIFIER_KEY: &str = "url-identifier";

/// A read-only key-value lookup.
pub trait ConfigSource {
    /// Look up a string value. Unset and null values both read as `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// The configured identifier template, if any.
    fn url_identifier(&self) -> Option<IdentifierTemplate> {
        self.get(URL_IDENTIFIER_KEY)
            .and_then(|raw| IdentifierTemplate::parse(&raw))
    }
}

impl<F> ConfigSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// In-memory configuration store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    values: HashMap<String, String>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value. Setting `None` clears the key.
    pub fn set(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(value) => {
                self.values.insert(key.to_string(), value.to_string());
            }
            None => {
                self.values.remove(key);
            }
        }
    }

    /// Remove a key, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigSource for ConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// File-backed configuration.
///
/// ```toml
/// url-identifier = "?spf=__type__"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NavkeyConfig {
    /// Identifier template appended to URLs; absent means URLs are left untagged.
    #[serde(default)]
    pub url_identifier: Option<String>,
}

impl NavkeyConfig {
    /// Parse configuration from a TOML document.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkey::NavkeyConfig;
    ///
    /// let config = NavkeyConfig::from_toml_str("url-identifier = \".spf.json\"").unwrap();
    /// assert_eq!(config.url_identifier.as_deref(), Some(".spf.json"));
    /// ```
    pub fn from_toml_str(data: &str) -> Result<Self, NavkeyError> {
        Ok(toml::from_str(data)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, NavkeyError> {
        let data = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&data)?;
        tracing::debug!(
            path = %path.display(),
            url_identifier = ?config.url_identifier,
            "loaded navkey config"
        );
        Ok(config)
    }
}

impl ConfigSource for NavkeyConfig {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            URL_IDENTIFIER_KEY => self.url_identifier.clone(),
            _ => None,
        }
    }
}
