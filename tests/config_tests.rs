//! Tests for configuration loading and lookup.

use navkey::*;
use std::fs;

#[test]
fn test_load_config_file() {
    let path = std::env::temp_dir().join(format!("navkey-config-{}.toml", std::process::id()));
    fs::write(&path, "url-identifier = \"?spf=__type__\"\n").unwrap();

    let config = NavkeyConfig::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.url_identifier.as_deref(), Some("?spf=__type__"));
    assert_eq!(identify("/page", Some("test"), &config), "/page?spf=test");
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("navkey-definitely-missing.toml");
    match NavkeyConfig::load(&path) {
        Err(NavkeyError::Io(_)) => (),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_default_config_leaves_urls_untouched() {
    let config = NavkeyConfig::default();
    assert_eq!(identify("/page", Some("test"), &config), "/page");
}

#[test]
fn test_config_serializes_kebab_case() {
    let config = NavkeyConfig {
        url_identifier: Some(".spf.json".to_string()),
    };
    let text = toml::to_string(&config).unwrap();
    assert!(text.contains("url-identifier"));
}
