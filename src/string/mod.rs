//! String utilities shared by request matching and cache keying.
//!
//! This module contains:
//! - Substring predicates and splitters
//! - camelCase to selector-case conversion
//! - The 32-bit string hash

pub mod hasher;
pub mod ops;

// Re-export main functionality
pub use hasher::{hash_code, hash_str};
pub use ops::{bisect, contains, ends_with, partition, starts_with, to_selector_case};
