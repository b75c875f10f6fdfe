// Config loading and validation tests

mod common;

use perfgraph::config::{AppConfig, LimitsConfig};
use perfgraph::error::GraphError;

const VALID_CONFIG: &str = r#"
[server]
port = 8082
host = "0.0.0.0"

[limits]
max_body_bytes = 1048576
max_metrics = 10
max_timestamps = 100
strict_alignment = true
"#;

const MINIMAL_CONFIG: &str = r#"
[server]
port = 8082
host = "127.0.0.1"
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8082);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.limits.max_body_bytes, 1_048_576);
    assert_eq!(config.limits.max_metrics, 10);
    assert_eq!(config.limits.max_timestamps, 100);
    assert!(config.limits.strict_alignment);
}

#[test]
fn test_config_limits_default_when_omitted() {
    let config = AppConfig::load_from_str(MINIMAL_CONFIG).expect("valid");
    assert_eq!(config.limits.max_body_bytes, 8 * 1024 * 1024);
    assert_eq!(config.limits.max_metrics, 200);
    assert_eq!(config.limits.max_timestamps, 20_000);
    assert!(!config.limits.strict_alignment);
}

#[test]
fn test_config_validation_rejects_port_zero() {
    let bad = VALID_CONFIG.replace("port = 8082", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_host() {
    let bad = VALID_CONFIG.replace("host = \"0.0.0.0\"", "host = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.host"));
}

#[test]
fn test_config_validation_rejects_max_body_bytes_zero() {
    let bad = VALID_CONFIG.replace("max_body_bytes = 1048576", "max_body_bytes = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("max_body_bytes"));
}

#[test]
fn test_config_validation_rejects_max_metrics_zero() {
    let bad = VALID_CONFIG.replace("max_metrics = 10", "max_metrics = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("max_metrics"));
}

#[test]
fn test_config_validation_rejects_max_timestamps_zero() {
    let bad = VALID_CONFIG.replace("max_timestamps = 100", "max_timestamps = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("max_timestamps"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.server.port, 8082);
    assert_eq!(config.limits.max_metrics, 10);
}

#[test]
fn test_limits_reject_too_many_metrics() {
    let limits = LimitsConfig {
        max_metrics: 1,
        ..Default::default()
    };
    let data = common::graph(
        &["t1"],
        vec![
            common::metric("a", "u", &[Some(1.0)]),
            common::metric("b", "u", &[Some(1.0)]),
        ],
        None,
    );
    let err = limits.check(&data).unwrap_err();
    assert!(matches!(err, GraphError::TooManyMetrics { count: 2, limit: 1 }));
}

#[test]
fn test_limits_reject_too_many_timestamps() {
    let limits = LimitsConfig {
        max_timestamps: 1,
        ..Default::default()
    };
    let data = common::graph(&["t1", "t2"], vec![], None);
    let err = limits.check(&data).unwrap_err();
    assert!(matches!(err, GraphError::TooManyTimestamps { count: 2, limit: 1 }));
}

#[test]
fn test_limits_strict_alignment_rejects_long_series_only() {
    let strict = LimitsConfig {
        strict_alignment: true,
        ..Default::default()
    };
    let short = common::graph(&["t1", "t2"], vec![common::metric("a", "u", &[Some(1.0)])], None);
    assert!(strict.check(&short).is_ok());

    let long = common::graph(
        &["t1"],
        vec![common::metric("a", "u", &[Some(1.0), Some(2.0)])],
        None,
    );
    let err = strict.check(&long).unwrap_err();
    assert!(err.to_string().contains("metric a has 2 samples for 1 timestamps"));
    assert!(LimitsConfig::default().check(&long).is_ok());
}
