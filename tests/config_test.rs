// tests/config_test.rs
use brand_release::config::{load_config, Config};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.registry_path, "src/config/appVersion.json");
    assert_eq!(config.remote, "origin");
    assert_eq!(config.commit_message, "chore: release new version");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
registry_path = "config/versions.json"
remote = "upstream"

[uat]
require_release_type = false
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.registry_path, "config/versions.json");
    assert_eq!(config.remote, "upstream");
    assert!(!config.uat.require_release_type);
    // Unspecified keys fall back to defaults
    assert_eq!(config.commit_message, "chore: release new version");
}

#[test]
fn test_uat_gate_defaults_to_strict() {
    let config = Config::default();
    assert!(config.uat.require_release_type);
}

#[test]
fn test_missing_custom_path_is_an_error() {
    assert!(load_config(Some("/nonexistent/brandrelease.toml")).is_err());
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"registry_path = [not toml").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}
