//! 32-bit string hashing for cache and selector keys.

use crate::error::NavkeyError;

/// Multiplier of the `31 * h + c` fold.
const HASH_MULTIPLIER: u32 = 31;

/// Hash a string to an unsigned 32-bit key.
///
/// Folds the UTF-16 code units of `input` with `h = 31 * h + c`, wrapping
/// modulo 2^32 at every step. The empty string hashes to 0.
///
/// This is a checksum for keying caches, not a uniqueness guarantee.
///
/// # Examples
///
/// ```
/// use navkey::hash_str;
///
/// assert_eq!(hash_str(""), 0);
/// assert_eq!(hash_str("foo"), 101574);
/// ```
pub fn hash_str(input: &str) -> u32 {
    input
        .encode_utf16()
        .fold(0u32, |acc, unit| {
            acc.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u32::from(unit))
        })
}

/// Hash a possibly-missing string.
///
/// A missing input is rejected rather than coerced to a string.
///
/// # Examples
///
/// ```
/// use navkey::{hash_code, NavkeyError};
///
/// assert_eq!(hash_code(Some("foo")).unwrap(), 101574);
/// assert!(matches!(hash_code(None), Err(NavkeyError::InvalidInput(_))));
/// ```
pub fn hash_code(input: Option<&str>) -> Result<u32, NavkeyError> {
    match input {
        Some(s) => Ok(hash_str(s)),
        None => Err(NavkeyError::InvalidInput(
            "cannot hash a missing string".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_hashing() {
        assert_eq!(hash_str(""), 0);
        assert_eq!(hash_str("a"), 97);
        assert_eq!(hash_str("foo"), 101574);
        assert_eq!(hash_str("foo"), hash_str("foo"));
    }

    #[test]
    fn test_non_ascii_uses_utf16_units() {
        assert_eq!(hash_str("\u{AAAA}foo"), 1301670364);

        // U+1F600 is a surrogate pair: 0xD83D, 0xDE00.
        let expected = 0xD83Du32.wrapping_mul(31).wrapping_add(0xDE00);
        assert_eq!(hash_str("\u{1F600}"), expected);
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(hash_str(&"a".repeat(5)), 92567585);
        assert_eq!(hash_str(&"a".repeat(6)), 2869595232);
        assert_eq!(hash_str(&"a".repeat(7)), 3058106369);
        assert_eq!(hash_str(&"a".repeat(8)), 312017024);
    }

    #[test]
    fn test_missing_input() {
        assert!(matches!(hash_code(None), Err(NavkeyError::InvalidInput(_))));
        assert_eq!(hash_code(Some("")).unwrap(), 0);
    }
}
