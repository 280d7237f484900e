//! Credential resolution: env precedence, secrets file fallback, sentinel

use std::io::Write;

use serial_test::serial;
use tempfile::NamedTempFile;

use refoodify_probe::config::{ConfigError, CredentialSource, Credentials, SENTINEL_KEY};

use crate::common::IsolatedKeyEnv;

fn write_secrets(spoonacular: &str, google: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp secrets file");
    write!(
        file,
        r#"{{"spoonacular_api_key": "{spoonacular}", "google_maps_api_key": "{google}"}}"#
    )
    .expect("write secrets");
    file
}

#[test]
#[serial]
fn env_vars_resolve_both_keys() {
    let _guard = IsolatedKeyEnv::new();
    std::env::set_var("SPOONACULAR_API_KEY", "env-spoon");
    std::env::set_var("GOOGLE_MAPS_API_KEY", "env-maps");

    let creds = Credentials::resolve(None).unwrap();
    assert_eq!(creds.spoonacular.value, "env-spoon");
    assert_eq!(creds.google_maps.value, "env-maps");
    assert_eq!(creds.spoonacular.source, CredentialSource::Environment);
}

#[test]
#[serial]
fn secrets_file_fills_in_missing_keys() {
    let _guard = IsolatedKeyEnv::new();
    let file = write_secrets("file-spoon", "file-maps");

    let creds = Credentials::resolve(Some(file.path())).unwrap();
    assert_eq!(creds.spoonacular.value, "file-spoon");
    assert_eq!(creds.google_maps.value, "file-maps");
    assert!(matches!(
        creds.spoonacular.source,
        CredentialSource::SecretsFile(_)
    ));
}

#[test]
#[serial]
fn env_wins_over_secrets_file() {
    let _guard = IsolatedKeyEnv::new();
    std::env::set_var("SPOONACULAR_API_KEY", "env-spoon");
    let file = write_secrets("file-spoon", "file-maps");

    let creds = Credentials::resolve(Some(file.path())).unwrap();
    assert_eq!(creds.spoonacular.value, "env-spoon");
    assert_eq!(creds.spoonacular.source, CredentialSource::Environment);
    assert_eq!(creds.google_maps.value, "file-maps");
}

#[test]
#[serial]
fn empty_env_value_is_treated_as_missing() {
    let _guard = IsolatedKeyEnv::new();
    std::env::set_var("SPOONACULAR_API_KEY", "");
    let file = write_secrets("file-spoon", "file-maps");

    let creds = Credentials::resolve(Some(file.path())).unwrap();
    assert_eq!(creds.spoonacular.value, "file-spoon");
}

#[test]
#[serial]
fn missing_key_is_a_config_error() {
    let _guard = IsolatedKeyEnv::new();
    std::env::set_var("SPOONACULAR_API_KEY", "env-spoon");

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{}}").unwrap();

    let err = Credentials::resolve(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::MissingKey { .. }));
    assert!(err.to_string().contains("GOOGLE_MAPS_API_KEY"));
}

#[test]
#[serial]
fn unreadable_explicit_secrets_file_is_an_error() {
    let _guard = IsolatedKeyEnv::new();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");

    let err = Credentials::resolve(Some(&missing)).unwrap_err();
    assert!(matches!(err, ConfigError::SecretsRead { .. }));
}

#[test]
#[serial]
fn malformed_secrets_file_is_a_parse_error() {
    let _guard = IsolatedKeyEnv::new();
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json at all").unwrap();

    let err = Credentials::resolve(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::SecretsParse { .. }));
}

#[test]
fn sentinel_key_counts_as_unconfigured() {
    let key = refoodify_probe::config::ApiKey {
        value: SENTINEL_KEY.to_string(),
        source: CredentialSource::Environment,
    };
    assert!(!key.is_configured());

    let empty = refoodify_probe::config::ApiKey {
        value: String::new(),
        source: CredentialSource::Environment,
    };
    assert!(!empty.is_configured());

    let real = refoodify_probe::config::ApiKey {
        value: "825ab033e0a4".to_string(),
        source: CredentialSource::Environment,
    };
    assert!(real.is_configured());
}
