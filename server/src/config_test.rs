use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on"] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_trims_and_ignores_case() {
    assert_eq!(parse_bool("  TRUE "), Some(true));
    assert_eq!(parse_bool("Off"), Some(false));
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.port, 3000);
    assert_eq!(config.tools_file, PathBuf::from("data/tools.json"));
}

#[test]
fn from_lookup_reads_overrides() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("TOOLS_FILE", "/srv/tools.json"),
        ("USERS_FILE", "/srv/users.json"),
        ("COOKIE_SECURE", "yes"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.tools_file, PathBuf::from("/srv/tools.json"));
    assert_eq!(config.users_file, PathBuf::from("/srv/users.json"));
    assert!(config.cookie_secure);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "http"));
}

#[test]
fn from_lookup_ignores_unparseable_cookie_flag() {
    let config = ServerConfig::from_lookup(lookup_from(&[("COOKIE_SECURE", "sometimes")])).unwrap();
    assert!(!config.cookie_secure);
}
