//! Query string manipulation without full URL parsing.
//!
//! These work on relative URLs as well as absolute ones, which the `url`
//! crate cannot parse without a base.

use crate::string::{bisect, contains, partition};

/// Check if a URL has a query string.
///
/// # Examples
///
/// ```
/// use navkey::has_query;
///
/// assert!(has_query("/page?foo=bar"));
/// assert!(!has_query("/page"));
/// ```
pub fn has_query(url: &str) -> bool {
    contains(url, "?")
}

/// Check if a URL has a fragment.
///
/// ```
/// use navkey::has_fragment;
///
/// assert!(has_fragment("/page#section"));
/// assert!(!has_fragment("/page"));
/// ```
pub fn has_fragment(url: &str) -> bool {
    contains(url, "#")
}

/// Append query parameters to a URL, after any existing ones.
///
/// A parameter with an empty value is written as a bare key. Values are not
/// encoded. A fragment stays at the end of the URL.
///
/// # Examples
///
/// ```
/// use navkey::append_parameters;
///
/// let url = append_parameters("/page#top", &[("a", "1"), ("flag", "")]);
/// assert_eq!(url, "/page?a=1&flag#top");
/// ```
pub fn append_parameters(url: &str, params: &[(&str, &str)]) -> String {
    let (base, hash, fragment) = partition(url, "#");

    let mut out = String::from(base);
    let mut delim = if has_query(base) { '&' } else { '?' };
    for (key, value) in params {
        out.push(delim);
        out.push_str(key);
        if !value.is_empty() {
            out.push('=');
            out.push_str(value);
        }
        delim = '&';
    }

    out.push_str(hash);
    out.push_str(fragment);
    out
}

/// Remove every query parameter whose key is in `keys`.
///
/// Empty parameters are dropped as well, and the `?` goes away once no
/// parameters remain. A fragment stays at the end of the URL.
///
/// # Examples
///
/// ```
/// use navkey::remove_parameters;
///
/// assert_eq!(remove_parameters("/page?a=1&b=2", &["a"]), "/page?b=2");
/// assert_eq!(remove_parameters("/page?a=1#top", &["a"]), "/page#top");
/// ```
pub fn remove_parameters(url: &str, keys: &[&str]) -> String {
    let (base, hash, fragment) = partition(url, "#");
    let (path, sep, query) = partition(base, "?");
    if sep.is_empty() {
        return url.to_string();
    }

    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty() && !keys.contains(&bisect(pair, "=").0))
        .collect();

    let mut out = String::from(path);
    if !kept.is_empty() {
        out.push('?');
        out.push_str(&kept.join("&"));
    }
    out.push_str(hash);
    out.push_str(fragment);
    out
}
