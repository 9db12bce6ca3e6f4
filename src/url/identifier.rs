//! URL identification for cache-busting and request type tagging.

use crate::config::ConfigSource;
use crate::string::partition;
use crate::types::IdentifierTemplate;
use crate::url::utils::has_query;

/// Tag a URL with the configured `url-identifier`.
///
/// The identifier is looked up through `config` on every call:
///
/// - unset: the URL is returned unchanged
/// - static (no `__type__`): the template is appended verbatim
/// - dynamic (contains `__type__`): the placeholder is replaced with `kind`
///   (or nothing) and the result is added as the last query parameter. A
///   fragment on the URL stays at the end.
///
/// # Examples
///
/// ```
/// use navkey::{identify, ConfigStore, URL_IDENTIFIER_KEY};
///
/// let mut config = ConfigStore::new();
/// assert_eq!(identify("/page", Some("navigate"), &config), "/page");
///
/// config.set(URL_IDENTIFIER_KEY, Some(".spf.json"));
/// assert_eq!(identify("/page.html", None, &config), "/page.html.spf.json");
///
/// config.set(URL_IDENTIFIER_KEY, Some("?spf=__type__"));
/// assert_eq!(identify("/page?arg=1", Some("test"), &config), "/page?arg=1&spf=test");
/// ```
pub fn identify<C>(url: &str, kind: Option<&str>, config: &C) -> String
where
    C: ConfigSource + ?Sized,
{
    let template = match config.url_identifier() {
        Some(template) => template,
        None => return url.to_string(),
    };

    let resolved = template.resolve(kind);
    let identified = match template {
        IdentifierTemplate::Static(_) => format!("{url}{resolved}"),
        IdentifierTemplate::Dynamic(_) => {
            let param = resolved.strip_prefix('?').unwrap_or(&resolved);
            let (base, hash, fragment) = partition(url, "#");
            let delim = if has_query(base) { '&' } else { '?' };
            format!("{base}{delim}{param}{hash}{fragment}")
        }
    };

    tracing::trace!(url, identified = %identified, "applied url identifier");
    identified
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigStore, URL_IDENTIFIER_KEY};

    fn store(identifier: Option<&str>) -> ConfigStore {
        let mut config = ConfigStore::new();
        config.set(URL_IDENTIFIER_KEY, identifier);
        config
    }

    #[test]
    fn test_no_identifier() {
        let config = store(None);
        assert_eq!(identify("/page", None, &config), "/page");
        assert_eq!(identify("/page", Some("test"), &config), "/page");
    }

    #[test]
    fn test_static_identifier() {
        let config = store(Some(".spf.json"));
        assert_eq!(identify("/page.html", None, &config), "/page.html.spf.json");
        assert_eq!(identify("/page.html", Some("test"), &config), "/page.html.spf.json");
    }

    #[test]
    fn test_dynamic_identifier() {
        let config = store(Some("?spf=__type__"));
        assert_eq!(identify("/page", None, &config), "/page?spf=");
        assert_eq!(identify("/page", Some("test"), &config), "/page?spf=test");
        assert_eq!(identify("/page?arg=1", None, &config), "/page?arg=1&spf=");
        assert_eq!(identify("/page?arg=1", Some("test"), &config), "/page?arg=1&spf=test");
    }

    #[test]
    fn test_dynamic_identifier_keeps_fragment() {
        let config = store(Some("?spf=__type__"));
        assert_eq!(identify("/page#top", Some("test"), &config), "/page?spf=test#top");
        assert_eq!(
            identify("/page?arg=1#top", Some("test"), &config),
            "/page?arg=1&spf=test#top"
        );
    }

    #[test]
    fn test_dynamic_identifier_without_leading_question_mark() {
        let config = store(Some("spf=__type__"));
        assert_eq!(identify("/page", Some("test"), &config), "/page?spf=test");
    }

    #[test]
    fn test_trait_object_source() {
        let config = store(Some(".json"));
        let source: &dyn ConfigSource = &config;
        assert_eq!(identify("/page", None, source), "/page.json");
    }
}
