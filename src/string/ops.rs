//! Substring predicates, splitters, and case conversion.
//!
//! These are the checks request matching runs on every URL, so they are
//! plain, case-sensitive comparisons with no normalization.

/// Check whether `needle` occurs anywhere in `haystack`.
///
/// An empty needle always matches.
///
/// # Examples
///
/// ```
/// use navkey::contains;
///
/// assert!(contains("/path?query=arg", "query"));
/// assert!(!contains("/path?query=arg", "#"));
/// ```
pub fn contains(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}

/// Check whether `haystack` begins with `needle`.
///
/// ```
/// use navkey::starts_with;
///
/// assert!(starts_with("?query=arg", "?query"));
/// assert!(!starts_with("?", "?query"));
/// ```
pub fn starts_with(haystack: &str, needle: &str) -> bool {
    haystack.starts_with(needle)
}

/// Check whether `haystack` ends with `needle`.
///
/// ```
/// use navkey::ends_with;
///
/// assert!(ends_with("file.js", ".js"));
/// assert!(!ends_with("file.js", ".txt"));
/// ```
pub fn ends_with(haystack: &str, needle: &str) -> bool {
    haystack.ends_with(needle)
}

/// Split `s` at the first `sep` into `(before, sep, after)`.
///
/// When `sep` is absent the whole input is returned as `before` and the
/// other two parts are empty, so the three parts always concatenate back to `s`.
///
/// # Examples
///
/// ```
/// use navkey::partition;
///
/// assert_eq!(partition("/page?a=1#top", "#"), ("/page?a=1", "#", "top"));
/// assert_eq!(partition("/page", "#"), ("/page", "", ""));
/// ```
pub fn partition<'a>(s: &'a str, sep: &str) -> (&'a str, &'a str, &'a str) {
    match s.find(sep) {
        Some(idx) if !sep.is_empty() => {
            let end = idx + sep.len();
            (&s[..idx], &s[idx..end], &s[end..])
        }
        _ => (s, "", ""),
    }
}

/// Split `s` at the first `sep` into `(before, after)`, dropping the separator.
///
/// ```
/// use navkey::bisect;
///
/// assert_eq!(bisect("spf=navigate", "="), ("spf", "navigate"));
/// assert_eq!(bisect("spf", "="), ("spf", ""));
/// ```
pub fn bisect<'a>(s: &'a str, sep: &str) -> (&'a str, &'a str) {
    let (before, _, after) = partition(s, sep);
    (before, after)
}

/// Convert a camelCase name to lowercase, hyphen-separated selector case.
///
/// A hyphen is inserted before every ASCII uppercase letter, including a
/// leading one, and the result is lowercased.
///
/// # Examples
///
/// ```
/// use navkey::to_selector_case;
///
/// assert_eq!(to_selector_case("oneTwoThree"), "one-two-three");
/// assert_eq!(to_selector_case("OneTwoThree"), "-one-two-three");
/// assert_eq!(to_selector_case("one-two"), "one-two");
/// ```
pub fn to_selector_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    for ch in input.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}
