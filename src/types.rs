//! Core data structures for URL identification.

/// Placeholder token substituted with the request type in dynamic identifiers.
pub const TYPE_PLACEHOLDER: &str = "__type__";

/// A configured URL identifier, used to tag URLs for cache-busting or type tagging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierTemplate {
    /// Appended verbatim to the URL (e.g. `.spf.json`).
    Static(String),
    /// Contains [`TYPE_PLACEHOLDER`] and is merged into the query string
    /// (e.g. `?spf=__type__`).
    Dynamic(String),
}

impl IdentifierTemplate {
    /// Classify a raw template string.
    ///
    /// Returns `None` for an empty template, which tags nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkey::IdentifierTemplate;
    ///
    /// assert_eq!(
    ///     IdentifierTemplate::parse(".spf.json"),
    ///     Some(IdentifierTemplate::Static(".spf.json".to_string()))
    /// );
    /// assert!(matches!(
    ///     IdentifierTemplate::parse("?spf=__type__"),
    ///     Some(IdentifierTemplate::Dynamic(_))
    /// ));
    /// assert_eq!(IdentifierTemplate::parse(""), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else if raw.contains(TYPE_PLACEHOLDER) {
            Some(IdentifierTemplate::Dynamic(raw.to_string()))
        } else {
            Some(IdentifierTemplate::Static(raw.to_string()))
        }
    }

    /// Whether this template carries the type placeholder.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, IdentifierTemplate::Dynamic(_))
    }

    /// The raw template text.
    pub fn as_str(&self) -> &str {
        match self {
            IdentifierTemplate::Static(raw) | IdentifierTemplate::Dynamic(raw) => raw,
        }
    }

    /// Resolve the template for a request type.
    ///
    /// Static templates are returned as-is. Dynamic templates have their first
    /// placeholder replaced with `kind`, or with nothing when no type is given.
    pub fn resolve(&self, kind: Option<&str>) -> String {
        match self {
            IdentifierTemplate::Static(raw) => raw.clone(),
            IdentifierTemplate::Dynamic(raw) => raw.replacen(TYPE_PLACEHOLDER, kind.unwrap_or(""), 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classification() {
        assert_eq!(
            IdentifierTemplate::parse(".spf.json"),
            Some(IdentifierTemplate::Static(".spf.json".to_string()))
        );
        assert_eq!(
            IdentifierTemplate::parse("?spf=__type__"),
            Some(IdentifierTemplate::Dynamic("?spf=__type__".to_string()))
        );
        assert_eq!(IdentifierTemplate::parse(""), None);
    }

    #[test]
    fn test_resolve_static_ignores_kind() {
        let template = IdentifierTemplate::Static(".spf.json".to_string());
        assert_eq!(template.resolve(None), ".spf.json");
        assert_eq!(template.resolve(Some("test")), ".spf.json");
        assert!(!template.is_dynamic());
    }

    #[test]
    fn test_resolve_dynamic() {
        let template = IdentifierTemplate::Dynamic("?spf=__type__".to_string());
        assert_eq!(template.resolve(None), "?spf=");
        assert_eq!(template.resolve(Some("navigate")), "?spf=navigate");
        assert!(template.is_dynamic());
        assert_eq!(template.as_str(), "?spf=__type__");
    }

    #[test]
    fn test_resolve_replaces_first_placeholder_only() {
        let template = IdentifierTemplate::Dynamic("?a=__type__&b=__type__".to_string());
        assert_eq!(template.resolve(Some("x")), "?a=x&b=__type__");
    }
}
