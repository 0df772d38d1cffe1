use pastebin::load_config::{load_config, resolve_config_path};
use pastebin_core::config::{WireFormat, DEFAULT_ENDPOINT};
use pastebin_core::error::PasteError;
use serial_test::serial;
use std::env;
use std::fs::write;
use std::path::PathBuf;
use tempfile::{tempdir, NamedTempFile};

/// A config with just the two keys yields the credentials and defaults.
#[test]
fn test_load_config_success_with_required_keys() {
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), "devkey: abc\nuserkey: xyz\n").unwrap();

    let config = load_config(config_file.path()).expect("Config should load");

    assert_eq!(config.credentials.dev_key, "abc");
    assert_eq!(config.credentials.user_key, "xyz");
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.wire_format, WireFormat::Form);
}

/// Optional keys override the defaults; unknown keys are ignored.
#[test]
fn test_load_config_with_endpoint_and_wire_format() {
    let config_yaml = r#"
devkey: "abc"
userkey: "xyz"
endpoint: "http://localhost:8080/api/api_post.php"
wire_format: json
colour: blue
"#;
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), config_yaml).unwrap();

    let config = load_config(config_file.path()).expect("Config should load");
    assert_eq!(config.endpoint, "http://localhost:8080/api/api_post.php");
    assert_eq!(config.wire_format, WireFormat::Json);
}

#[test]
fn test_load_config_errors_for_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = load_config(&path).unwrap_err();
    match err {
        PasteError::ConfigNotFound { path: p } => assert_eq!(p, path),
        other => panic!("expected ConfigNotFound, got {other:?}"),
    }
}

#[test]
fn test_load_config_errors_for_directory() {
    let dir = tempdir().unwrap();

    let err = load_config(dir.path()).unwrap_err();
    assert!(
        matches!(err, PasteError::ConfigUnreadable { .. }),
        "expected ConfigUnreadable, got {err:?}"
    );
}

/// If the config file is not valid YAML, load_config errors and reports as such.
#[test]
fn test_load_config_errors_for_invalid_file() {
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), b"not-yaml: [:::").unwrap();

    let err = load_config(config_file.path()).unwrap_err();
    let msg = err.to_string();
    assert!(matches!(err, PasteError::ConfigMalformed { .. }));
    assert!(msg.contains("YAML"), "Parse error expected, got: {msg}");
}

#[test]
fn test_load_config_errors_on_missing_devkey() {
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), "userkey: xyz\n").unwrap();

    let err = load_config(config_file.path()).unwrap_err();
    assert!(matches!(err, PasteError::ConfigMalformed { .. }));
    assert!(err.to_string().contains("devkey"));
}

#[test]
fn test_load_config_errors_on_unknown_wire_format() {
    let config_file = NamedTempFile::new().expect("temp file");
    write(
        config_file.path(),
        "devkey: abc\nuserkey: xyz\nwire_format: xml\n",
    )
    .unwrap();

    let err = load_config(config_file.path()).unwrap_err();
    assert!(matches!(err, PasteError::ConfigMalformed { .. }));
}

#[test]
fn test_load_config_errors_on_invalid_endpoint() {
    let config_file = NamedTempFile::new().expect("temp file");
    write(
        config_file.path(),
        "devkey: abc\nuserkey: xyz\nendpoint: not a url\n",
    )
    .unwrap();

    let err = load_config(config_file.path()).unwrap_err();
    assert!(err.to_string().contains("endpoint"));
}

/// Without --conf the config is looked up as $HOME/.pastebin.yaml.
#[test]
#[serial]
fn test_default_config_path_uses_home() {
    let home = tempdir().unwrap();
    let previous = env::var_os("HOME");
    env::set_var("HOME", home.path());

    let resolved = resolve_config_path(None);

    match previous {
        Some(v) => env::set_var("HOME", v),
        None => env::remove_var("HOME"),
    }

    assert_eq!(
        resolved.expect("home should resolve"),
        home.path().join(".pastebin.yaml")
    );
}

#[test]
fn test_explicit_config_path_is_used_as_is() {
    let resolved = resolve_config_path(Some(PathBuf::from("./custom.yaml"))).unwrap();
    assert_eq!(resolved, PathBuf::from("./custom.yaml"));
}
