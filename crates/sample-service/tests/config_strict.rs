#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use sample_core::SampleError;
use sample_service::config::{self, ServiceConfig};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k| map.get(k).cloned()
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
service:
  app_version: "v2-bad"
  prot: 9090 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, SampleError::Config(_)), "{err}");
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn unsupported_schema_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(matches!(err, SampleError::UnsupportedVersion(2)));
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.service.app_version, "unknown");
    assert_eq!(cfg.service.port, 8080);
    assert_eq!(cfg.service.seed, None);
}

#[test]
fn empty_app_version_in_file_is_rejected() {
    let bad = "version: 1\nservice:\n  app_version: \"\"\n";
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn defaults_without_environment() {
    let cfg = config::resolve(env(&[])).unwrap();
    assert_eq!(cfg, ServiceConfig::default());
    assert_eq!(cfg.app_version, "unknown");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.listen_addr(), "0.0.0.0:8080");
}

#[test]
fn environment_overrides() {
    let cfg = config::resolve(env(&[
        ("APP_VERSION", "v3-slow"),
        ("PORT", "9091"),
        ("SAMPLE_SERVICE_SEED", "42"),
    ]))
    .unwrap();
    assert_eq!(cfg.app_version, "v3-slow");
    assert_eq!(cfg.port, 9091);
    assert_eq!(cfg.seed, Some(42));
}

#[test]
fn empty_environment_values_count_as_unset() {
    let cfg = config::resolve(env(&[("APP_VERSION", ""), ("PORT", "")])).unwrap();
    assert_eq!(cfg.app_version, "unknown");
    assert_eq!(cfg.port, 8080);
}

#[test]
fn bad_port_is_a_config_error() {
    let err = config::resolve(env(&[("PORT", "http")])).expect_err("must fail");
    assert!(matches!(err, SampleError::Config(_)));

    let err = config::resolve(env(&[("PORT", "70000")])).expect_err("must fail");
    assert!(matches!(err, SampleError::Config(_)));
}

#[test]
fn file_then_environment() {
    let path = std::env::temp_dir().join(format!("sample-service-{}.yaml", std::process::id()));
    std::fs::write(
        &path,
        "version: 1\nservice:\n  app_version: \"v2-bad\"\n  listen_host: \"127.0.0.1\"\n  port: 7000\n",
    )
    .unwrap();
    let path_str = path.to_str().unwrap().to_string();

    let from_file = config::resolve(env(&[("SAMPLE_SERVICE_CONFIG", path_str.as_str())])).unwrap();
    assert_eq!(from_file.app_version, "v2-bad");
    assert_eq!(from_file.listen_addr(), "127.0.0.1:7000");

    let layered = config::resolve(env(&[
        ("SAMPLE_SERVICE_CONFIG", path_str.as_str()),
        ("APP_VERSION", "v3-slow"),
    ]))
    .unwrap();
    assert_eq!(layered.app_version, "v3-slow");
    assert_eq!(layered.port, 7000);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_config_file_is_a_config_error() {
    let err = config::resolve(env(&[("SAMPLE_SERVICE_CONFIG", "/nonexistent/sample.yaml")]))
        .expect_err("must fail");
    assert!(matches!(err, SampleError::Config(_)));
}
