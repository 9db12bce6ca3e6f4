//! URL processing and manipulation utilities.
//!
//! This module contains URL-related functionality:
//! - Identifier injection from configuration
//! - Protocol and fragment stripping
//! - Query parameter manipulation

pub mod identifier;
pub mod normalizer;
pub mod utils;

// Re-export main functionality
pub use identifier::identify;
pub use normalizer::{absolute, unfragment, unprotocol};
pub use utils::{append_parameters, has_fragment, has_query, remove_parameters};
