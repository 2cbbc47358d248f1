use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

const SECRETS: [(&str, &str); 2] = [("ACCESS_TOKEN_SECRET", "access-secret"), ("REFRESH_TOKEN_SECRET", "refresh-secret")];

// =============================================================================
// defaults
// =============================================================================

#[test]
fn minimal_env_uses_defaults() {
    let config = ServerConfig::from_lookup(lookup(&SECRETS)).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.database_url, None);
    assert_eq!(config.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert_eq!(config.tokens.access_ttl_secs, 900);
    assert_eq!(config.tokens.refresh_ttl_secs, 604_800);
    assert!(!config.cookie_secure);
    assert_eq!(config.cors_origin, None);
    assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
}

#[test]
fn overrides_are_parsed() {
    let mut pairs = SECRETS.to_vec();
    pairs.extend([
        ("PORT", "8080"),
        ("DATABASE_URL", "postgres://localhost/threatdash"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("ACCESS_TOKEN_TTL_SECS", "60"),
        ("REFRESH_TOKEN_TTL_SECS", "120"),
        ("CORS_ORIGIN", "http://localhost:5173"),
        ("STATIC_DIR", "/srv/spa"),
    ]);
    let config = ServerConfig::from_lookup(lookup(&pairs)).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/threatdash"));
    assert_eq!(config.db_max_connections, 12);
    assert_eq!(config.tokens.access_ttl_secs, 60);
    assert_eq!(config.tokens.refresh_ttl_secs, 120);
    assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:5173"));
    assert_eq!(config.static_dir, PathBuf::from("/srv/spa"));
}

// =============================================================================
// secrets
// =============================================================================

#[test]
fn missing_access_secret_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("REFRESH_TOKEN_SECRET", "r")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("ACCESS_TOKEN_SECRET"));
}

#[test]
fn missing_refresh_secret_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("ACCESS_TOKEN_SECRET", "a")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("REFRESH_TOKEN_SECRET"));
}

#[test]
fn blank_secret_counts_as_missing() {
    let err = ServerConfig::from_lookup(lookup(&[("ACCESS_TOKEN_SECRET", "   "), ("REFRESH_TOKEN_SECRET", "r")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("ACCESS_TOKEN_SECRET"));
}

#[test]
fn identical_secrets_are_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("ACCESS_TOKEN_SECRET", "same"), ("REFRESH_TOKEN_SECRET", "same")]))
        .unwrap_err();
    assert_eq!(err, ConfigError::SharedSecret);
}

// =============================================================================
// cookie_secure
// =============================================================================

#[test]
fn production_env_enables_secure_cookie() {
    let mut pairs = SECRETS.to_vec();
    pairs.push(("APP_ENV", "Production"));
    assert!(ServerConfig::from_lookup(lookup(&pairs)).unwrap().cookie_secure);
}

#[test]
fn cookie_secure_override_wins_over_app_env() {
    let mut pairs = SECRETS.to_vec();
    pairs.extend([("APP_ENV", "production"), ("COOKIE_SECURE", "off")]);
    assert!(!ServerConfig::from_lookup(lookup(&pairs)).unwrap().cookie_secure);
}

#[test]
fn invalid_cookie_secure_is_an_error() {
    let mut pairs = SECRETS.to_vec();
    pairs.push(("COOKIE_SECURE", "maybe"));
    let err = ServerConfig::from_lookup(lookup(&pairs)).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "COOKIE_SECURE", value: "maybe".into() });
}

#[test]
fn zero_token_ttl_is_rejected() {
    let mut pairs = SECRETS.to_vec();
    pairs.push(("ACCESS_TOKEN_TTL_SECS", "0"));
    let err = ServerConfig::from_lookup(lookup(&pairs)).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "ACCESS_TOKEN_TTL_SECS", value: "0".into() });
}

#[test]
fn oversized_token_ttl_is_rejected() {
    let max = u64::MAX.to_string();
    let pairs = [SECRETS[0], SECRETS[1], ("REFRESH_TOKEN_TTL_SECS", max.as_str())];
    let err = ServerConfig::from_lookup(lookup(&pairs)).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "REFRESH_TOKEN_TTL_SECS", value: max });
}

#[test]
fn token_ttl_at_upper_bound_is_accepted() {
    let max = MAX_TOKEN_TTL_SECS.to_string();
    let pairs = [SECRETS[0], SECRETS[1], ("REFRESH_TOKEN_TTL_SECS", max.as_str())];
    let config = ServerConfig::from_lookup(lookup(&pairs)).unwrap();
    assert_eq!(config.tokens.refresh_ttl_secs, MAX_TOKEN_TTL_SECS);
}

#[test]
fn invalid_port_is_an_error() {
    let mut pairs = SECRETS.to_vec();
    pairs.push(("PORT", "eighty"));
    let err = ServerConfig::from_lookup(lookup(&pairs)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_variants() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "expected true for {raw:?}");
    }
    for raw in ["0", "False", "no", "OFF"] {
        assert_eq!(parse_bool(raw), Some(false), "expected false for {raw:?}");
    }
    assert_eq!(parse_bool(""), None);
    assert_eq!(parse_bool("maybe"), None);
}
