use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use log::LevelFilter;

use crate::Error;
use crate::core::config::{Config, StorageKind};
use crate::core::default_configuration as cfg;

const CONFIG_JSON: &str = r#"{
    "address": "0.0.0.0",
    "port": 9090,
    "storage": "memory",
    "database": "directory.db",
    "allowedOrigin": "http://localhost:3000",
    "logger": {
        "level": "debug",
        "logFile": "service.log"
    }
}"#;

#[test]
fn test_defaults() {
    let mut b = cfg::Builder::new();
    let config = b.build()
        .expect("Failed to build config");

    assert_eq!(config.addr(), IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(config.listening_port(), 8080);
    assert_eq!(config.storage_kind(), StorageKind::Sqlite);
    assert_eq!(config.storage_path(), "contacts.db");
    assert_eq!(config.allowed_origin(), None);
    assert_eq!(config.log_level(), LevelFilter::Info);
    assert_eq!(config.log_file(), None);
}

#[test]
fn test_builder_overrides() {
    let mut b = cfg::Builder::new();
    b.with_addr("0.0.0.0")
        .with_port(9090)
        .with_storage_kind(StorageKind::Memory)
        .with_database("directory.db")
        .with_allowed_origin("http://localhost:3000")
        .with_logger(LevelFilter::Debug, Some("service.log"));

    let config = b.build()
        .expect("Failed to build config");

    assert_eq!(config.addr(), "0.0.0.0".parse::<IpAddr>().unwrap());
    assert_eq!(config.listening_port(), 9090);
    assert_eq!(config.storage_kind(), StorageKind::Memory);
    assert_eq!(config.storage_path(), "directory.db");
    assert_eq!(config.allowed_origin(), Some("http://localhost:3000"));
    assert_eq!(config.log_level(), LevelFilter::Debug);
    assert_eq!(config.log_file(), Some("service.log"));
}

#[test]
fn test_load() {
    let path = "config-load-test.json";
    fs::write(path, CONFIG_JSON)
        .expect("Failed to write config file");

    let mut b = cfg::Builder::new();
    b.load(path)
        .expect("Failed to load config file");
    let config = b.build()
        .expect("Failed to build config");
    _ = fs::remove_file(path);

    assert_eq!(config.addr(), "0.0.0.0".parse::<IpAddr>().unwrap());
    assert_eq!(config.listening_port(), 9090);
    assert_eq!(config.storage_kind(), StorageKind::Memory);
    assert_eq!(config.storage_path(), "directory.db");
    assert_eq!(config.allowed_origin(), Some("http://localhost:3000"));
    assert_eq!(config.log_level(), LevelFilter::Debug);
    assert_eq!(config.log_file(), Some("service.log"));
}

#[test]
fn test_builder_wins_over_file() {
    let path = "config-precedence-test.json";
    fs::write(path, CONFIG_JSON)
        .expect("Failed to write config file");

    let mut b = cfg::Builder::new();
    b.load(path)
        .expect("Failed to load config file");
    b.with_port(7070)
        .with_database("override.db");
    let config = b.build()
        .expect("Failed to build config");
    _ = fs::remove_file(path);

    assert_eq!(config.listening_port(), 7070);
    assert_eq!(config.storage_path(), "override.db");
    // untouched settings keep the file's values
    assert_eq!(config.storage_kind(), StorageKind::Memory);
    assert_eq!(config.allowed_origin(), Some("http://localhost:3000"));
}

#[test]
fn test_missing_file_is_an_error() {
    let mut b = cfg::Builder::new();
    let result = b.load("no-such-config.json");

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_bad_file_is_an_error() {
    let path = "config-bad-test.json";
    fs::write(path, "{ not json }")
        .expect("Failed to write config file");

    let mut b = cfg::Builder::new();
    let result = b.load(path);
    _ = fs::remove_file(path);

    assert!(matches!(result, Err(Error::Argument(_))));
}

#[test]
fn test_storage_kind_parsing() {
    assert_eq!(StorageKind::parse("sqlite"), Some(StorageKind::Sqlite));
    assert_eq!(StorageKind::parse("Memory"), Some(StorageKind::Memory));
    assert_eq!(StorageKind::parse("mem"), Some(StorageKind::Memory));
    assert_eq!(StorageKind::parse("postgres"), None);
    assert!(StorageKind::Memory.is_memory());
    assert!(!StorageKind::Sqlite.is_memory());
}
