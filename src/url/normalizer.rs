//! URL normalization for comparison keys.
//!
//! None of these functions validate the URL. Inputs they cannot confidently
//! rewrite are returned unchanged.

use url::Url;

use crate::error::NavkeyError;
use crate::string::bisect;

/// Separator between a scheme and the authority.
const SCHEME_SEPARATOR: &str = "://";

/// Length of a leading `scheme` before `://`, if the URL starts with one.
///
/// The scheme must begin with an ASCII letter and contain only ASCII letters,
/// digits, `+`, `-` or `.`. Only the first `://` is considered, so a URL nested
/// in a path segment never matches.
fn scheme_len(url: &str) -> Option<usize> {
    let idx = url.find(SCHEME_SEPARATOR)?;
    let mut chars = url[..idx].chars();

    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    valid.then_some(idx)
}

/// Strip a leading `scheme://`, leaving a protocol-relative URL.
///
/// Any scheme is accepted. Protocol-relative, document-relative and
/// malformed inputs are returned unchanged.
///
/// # Examples
///
/// ```
/// use navkey::unprotocol;
///
/// assert_eq!(unprotocol("https://domain/path/"), "//domain/path/");
/// assert_eq!(unprotocol("malformed:path////file"), "malformed:path////file");
/// assert_eq!(unprotocol("path/a/http://domain/path/b/"), "path/a/http://domain/path/b/");
/// ```
pub fn unprotocol(url: &str) -> String {
    match scheme_len(url) {
        // Keep the "//" of the separator.
        Some(len) => url[len + 1..].to_string(),
        None => url.to_string(),
    }
}

/// Remove everything from the first `#` onwards.
///
/// # Examples
///
/// ```
/// use navkey::unfragment;
///
/// assert_eq!(unfragment("/page#frag"), "/page");
/// assert_eq!(unfragment("/page#"), "/page");
/// assert_eq!(unfragment("/page"), "/page");
/// ```
pub fn unfragment(url: &str) -> String {
    bisect(url, "#").0.to_string()
}

/// Resolve `url` against an absolute `base` URL.
///
/// # Examples
///
/// ```
/// use navkey::absolute;
///
/// let resolved = absolute("../other", "https://example.com/docs/page").unwrap();
/// assert_eq!(resolved, "https://example.com/other");
/// ```
pub fn absolute(url: &str, base: &str) -> Result<String, NavkeyError> {
    let base = Url::parse(base)?;
    let joined = base.join(url)?;
    Ok(joined.to_string())
}
