//! Integration tests for loading and writing config files.

use dme_config::Config;

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn template_round_trips_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");

    Config::write_template(&path).expect("template should be written");
    let loaded = Config::load_from(&path).expect("template should load");

    assert_eq!(loaded, Config::default());
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn template_refuses_to_overwrite() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{}").expect("seed file");

    assert!(Config::write_template(&path).is_err());
    assert_eq!(std::fs::read_to_string(&path).expect("read back"), "{}");
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn overrides_are_read_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
  "endpoint": { "url": "http://127.0.0.1:9000/orders", "timeout_secs": 5 },
  "note": { "path": "/var/notes/today.txt", "fallback_text": "wheelchair" }
}"#,
    )
    .expect("seed file");

    let config = Config::load_from(&path).expect("config should load");

    assert_eq!(config.endpoint.url, "http://127.0.0.1:9000/orders");
    assert_eq!(config.endpoint.timeout_secs, 5);
    assert_eq!(config.note.path.to_str(), Some("/var/notes/today.txt"));
    assert_eq!(config.note.fallback_text, "wheelchair");
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn malformed_or_invalid_files_are_errors() {
    let dir = tempfile::tempdir().expect("tempdir");

    let malformed = dir.path().join("malformed.json");
    std::fs::write(&malformed, "{ not json").expect("seed file");
    assert!(Config::load_from(&malformed).is_err());

    let invalid = dir.path().join("invalid.json");
    std::fs::write(&invalid, r#"{"endpoint":{"url":"mailto:ops@example.com"}}"#)
        .expect("seed file");
    assert!(Config::load_from(&invalid).is_err());

    assert!(Config::load_from(&dir.path().join("missing.json")).is_err());
}
