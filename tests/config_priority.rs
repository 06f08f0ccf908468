//! Config priority contract tests.
//!
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file
//! 3. Built-in default

use nile_chat::config::{
    ConfigFile, DEFAULT_BASE_URL, NileConfig, ResolveOptions, resolve_config,
};

fn config_with_base_url(base_url: &str) -> ConfigFile {
    ConfigFile {
        nile: NileConfig {
            base_url: Some(base_url.to_string()),
        },
    }
}

#[test]
fn test_cli_base_url_overrides_config() {
    let config = config_with_base_url("http://from-config:5000");
    let options = ResolveOptions {
        base_url: Some("http://from-cli:5000".to_string()),
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.base_url.as_str(), "http://from-cli:5000/");
    assert_eq!(resolved.endpoint.as_str(), "http://from-cli:5000/api/chat");
}

#[test]
fn test_config_used_when_cli_not_specified() {
    let config = config_with_base_url("http://from-config:5000");

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.base_url.as_str(), "http://from-config:5000/");
}

#[test]
fn test_default_used_when_nothing_specified() {
    let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(
        resolved.base_url.as_str().trim_end_matches('/'),
        DEFAULT_BASE_URL
    );
}

#[test]
fn test_invalid_cli_value_is_not_masked_by_config() {
    let config = config_with_base_url("http://from-config:5000");
    let options = ResolveOptions {
        base_url: Some("from-cli".to_string()),
    };

    assert!(resolve_config(&options, &config).is_err());
}

#[test]
fn test_unusable_urls_are_rejected_before_any_request() {
    let config = ConfigFile::default();

    for base_url in [
        "http://exa mple.com",
        "http://localhost:5000?x=1",
        "https://#frag",
    ] {
        let options = ResolveOptions {
            base_url: Some(base_url.to_string()),
        };
        let result = resolve_config(&options, &config);
        assert!(result.is_err(), "{base_url} should be rejected");
    }
}

#[test]
fn test_endpoint_keeps_base_path() {
    let config = config_with_base_url("https://nile.example.com/chronicler");

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(
        resolved.endpoint.as_str(),
        "https://nile.example.com/chronicler/api/chat"
    );
}
