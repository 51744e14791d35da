use std::time::Duration;
use log::LevelFilter;

use crate::core::{
    default_configuration::{Builder, DEFAULT_BASE_URL},
    Error,
};

#[test]
fn test_default_cfg() {
    let cfg = Builder::new().build().unwrap();
    assert_eq!(cfg.base_url().as_str(), format!("{}/", DEFAULT_BASE_URL));
    assert_eq!(cfg.timeout(), None);
    assert_eq!(cfg.log_level(), LevelFilter::Info);
    assert_eq!(cfg.log_file(), None);
}

#[test]
fn test_build_cfg() {
    let cfg = Builder::new()
        .with_base_url("http://10.0.0.7:9000/api/")
        .with_timeout(Duration::from_secs(3))
        .with_logger(LevelFilter::Debug, Some("crm.log"))
        .build()
        .unwrap();

    assert_eq!(cfg.base_url().as_str(), "http://10.0.0.7:9000/api/");
    assert_eq!(cfg.timeout(), Some(Duration::from_secs(3)));
    assert_eq!(cfg.log_level(), LevelFilter::Debug);
    assert_eq!(cfg.log_file(), Some("crm.log"));
}

#[test]
fn test_load_cfg_str() {
    let data = r#"{
        "baseUrl": "http://crm.local:8080",
        "timeout": 10,
        "logger": { "level": "warn", "logFile": "/tmp/crm.log" }
    }"#;

    let cfg = Builder::new()
        .load_str(data)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(cfg.base_url().host_str(), Some("crm.local"));
    assert_eq!(cfg.base_url().port(), Some(8080));
    assert_eq!(cfg.timeout(), Some(Duration::from_secs(10)));
    assert_eq!(cfg.log_level(), LevelFilter::Warn);
    assert_eq!(cfg.log_file(), Some("/tmp/crm.log"));
}

#[test]
fn test_builder_overrides_file() {
    let data = r#"{ "baseUrl": "http://crm.local:8080", "logger": { "level": "error" } }"#;
    let cfg = Builder::new()
        .with_base_url("http://127.0.0.1:8000")
        .load_str(data)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(cfg.base_url().host_str(), Some("127.0.0.1"));
    assert_eq!(cfg.log_level(), LevelFilter::Error);
}

#[test]
fn test_bad_cfg() {
    let mut b = Builder::new();
    let result = b.load_str("{ not json");
    assert!(matches!(result, Err(Error::Argument(_))));

    let result = Builder::new().with_base_url("not a url").build();
    assert!(matches!(result, Err(Error::Argument(_))));

    let result = Builder::new().with_base_url("mailto:sales@acme.com").build();
    assert!(matches!(result, Err(Error::Argument(_))));

    let result = Builder::new()
        .load_str(r#"{ "logger": { "level": "loud" } }"#)
        .unwrap()
        .build();
    assert!(matches!(result, Err(Error::Argument(_))));
}

#[test]
fn test_missing_cfg_file() {
    let mut b = Builder::new();
    let result = b.load("no-such-dir/crm.conf");
    assert!(matches!(result, Err(Error::Io(_))));
}
