//! navkey - Deterministic string and URL keys for navigation caches
//!
//! This crate provides the small set of pure text functions a client-side
//! navigation layer uses to derive cache keys and comparison keys from URLs.
//!
//! # Features
//!
//! - **Hashing**: a 32-bit `31 * h + c` string hash over UTF-16 code units
//! - **Identification**: tag URLs with a configured static suffix or a
//!   typed query parameter
//! - **Normalization**: strip protocols and fragments without parsing
//! - **Deterministic**: same input and configuration always produce the same output
//!
//! # Quick Start
//!
//! ```
//! use navkey::{hash_str, identify, unfragment, unprotocol, ConfigStore, URL_IDENTIFIER_KEY};
//!
//! let mut config = ConfigStore::new();
//! config.set(URL_IDENTIFIER_KEY, Some("?spf=__type__"));
//!
//! let url = unfragment("https://example.com/watch?v=1#t=30");
//! let key = unprotocol(&url);
//! assert_eq!(key, "//example.com/watch?v=1");
//!
//! let fetch_url = identify(&url, Some("navigate"), &config);
//! assert_eq!(fetch_url, "https://example.com/watch?v=1&spf=navigate");
//!
//! let cache_key = hash_str(&key);
//! assert_eq!(cache_key, hash_str("//example.com/watch?v=1"));
//! ```
//!
//! # Configuration
//!
//! [`identify`] reads the `url-identifier` key through any [`ConfigSource`]:
//! a [`ConfigStore`], a [`NavkeyConfig`] loaded from TOML, or a closure.
//!
//! # Error Handling
//!
//! Only [`hash_code`] (given a missing string), [`absolute`] and configuration
//! loading can fail; they return `Result<T, NavkeyError>`. Everything else
//! accepts any string.

// Re-export string utilities
pub use crate::string::{bisect, contains, ends_with, partition, starts_with, to_selector_case};
pub use crate::string::{hash_code, hash_str};

// Re-export URL utilities
pub use crate::url::{absolute, identify, unfragment, unprotocol};
pub use crate::url::{append_parameters, has_fragment, has_query, remove_parameters};

// Re-export public types
pub use crate::config::{ConfigSource, ConfigStore, NavkeyConfig, URL_IDENTIFIER_KEY};
pub use crate::error::NavkeyError;
pub use crate::types::{IdentifierTemplate, TYPE_PLACEHOLDER};

// Module declarations
pub mod config;
pub mod error;
pub mod string;
pub mod types;
pub mod url;
