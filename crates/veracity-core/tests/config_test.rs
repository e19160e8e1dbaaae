use veracity_core::config::*;
use veracity_core::errors::{ConfigError, VeracityError};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = VeracityConfig::from_toml("").unwrap();

    // Scoring defaults
    assert!(config.scoring.jitter_enabled);
    assert!(config.scoring.jitter_seed.is_none());

    // Probe defaults
    assert!(config.probe.enabled);
    assert_eq!(config.probe.max_timeout_ms, 10_000);
    assert_eq!(config.probe.max_redirects, 10);
    assert!(config.probe.user_agent.starts_with("veracity/"));

    // Storage defaults
    assert_eq!(config.storage.db_path, "veracity.db");
    assert_eq!(config.storage.input_truncate_chars, 500);
    assert_eq!(
        config.storage.persistence_failure,
        PersistenceFailurePolicy::Fatal
    );

    // Server defaults
    assert_eq!(config.server.bind_addr, "127.0.0.1:8080");
    assert!(config.server.allowed_origins.is_empty());

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[scoring]
jitter_seed = 42

[storage]
db_path = "/var/lib/veracity/results.db"
persistence_failure = "report"
"#;
    let config = VeracityConfig::from_toml(toml).unwrap();
    assert_eq!(config.scoring.jitter_seed, Some(42));
    assert_eq!(config.storage.db_path, "/var/lib/veracity/results.db");
    assert_eq!(
        config.storage.persistence_failure,
        PersistenceFailurePolicy::Report
    );
    // Non-overridden fields keep defaults
    assert!(config.scoring.jitter_enabled);
    assert_eq!(config.storage.input_truncate_chars, 500);
}

#[test]
fn config_rejects_zero_probe_timeout() {
    let err = VeracityConfig::from_toml("[probe]\nmax_timeout_ms = 0\n").unwrap_err();
    match err {
        VeracityError::ConfigError(ConfigError::InvalidValue { field, .. }) => {
            assert_eq!(field, "probe.max_timeout_ms");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn config_rejects_bad_bind_addr() {
    let err = VeracityConfig::from_toml("[server]\nbind_addr = \"nowhere\"\n").unwrap_err();
    assert!(err.to_string().contains("server.bind_addr"));
}

#[test]
fn config_reports_parse_errors() {
    let err = VeracityConfig::from_toml("[probe\nenabled = ").unwrap_err();
    assert!(matches!(
        err,
        VeracityError::ConfigError(ConfigError::ParseError { .. })
    ));
}

#[test]
fn config_load_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = VeracityConfig::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(
        err,
        VeracityError::ConfigError(ConfigError::FileNotFound { .. })
    ));
}

#[test]
fn config_load_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("veracity.toml");
    std::fs::write(&path, "[probe]\nenabled = false\n").unwrap();
    let config = VeracityConfig::load(&path).unwrap();
    assert!(!config.probe.enabled);
}

#[test]
fn config_serde_roundtrip() {
    let config = VeracityConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = VeracityConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.storage.db_path, config.storage.db_path);
    assert_eq!(
        roundtripped.probe.max_timeout_ms,
        config.probe.max_timeout_ms
    );
}
