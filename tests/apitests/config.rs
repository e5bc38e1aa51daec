use std::fs;
use log::LevelFilter;

use contacts::{configuration as cfg, Config, StorageKind};

#[test]
fn test_config_from_file() {
    let path = "apitests-config.json";
    fs::write(path, r#"{
        "port": 9090,
        "storage": "memory",
        "database": "directory.db",
        "allowedOrigin": "http://localhost:3000",
        "logger": {
            "level": "debug"
        }
    }"#).expect("Failed to write config file");

    let mut b = cfg::Builder::new();
    b.load(path).expect("Failed to load config file");
    let config = b.build().expect("Failed to build config");
    _ = fs::remove_file(path);

    assert_eq!(config.listening_port(), 9090);
    assert_eq!(config.storage_kind(), StorageKind::Memory);
    assert_eq!(config.storage_path(), "directory.db");
    assert_eq!(config.allowed_origin(), Some("http://localhost:3000"));
    assert_eq!(config.log_level(), LevelFilter::Debug);
    assert_eq!(config.log_file(), None);
}
