//! Credential resolution for the probe suite
//!
//! Keys are never embedded in the binary. Resolution order, per key:
//!
//! 1. Environment variables `SPOONACULAR_API_KEY` / `GOOGLE_MAPS_API_KEY`
//!    (empty strings are treated as missing)
//! 2. A JSON secrets file, either the `--secrets-file` path or
//!    `<config_dir>/refoodify/credentials.json`
//!
//! Both keys must resolve or startup fails with a configuration error.
//! The sentinel `YOUR_API_KEY_HERE` resolves like any other value; the
//! key-validation probe is what flags it as unconfigured.

pub mod defaults;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use defaults::{
    DEFAULT_TIMEOUT_SECS, GOOGLE_MAPS_ENV_VAR, RATE_LIMIT_REQUESTS, SECRETS_DIR, SECRETS_FILE,
    SENTINEL_KEY, SPOONACULAR_ENV_VAR,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing {name}: set {env_var} or add \"{file_field}\" to the secrets file")]
    MissingKey {
        name: &'static str,
        env_var: &'static str,
        file_field: &'static str,
    },
    #[error("failed to read secrets file {path}: {source}")]
    SecretsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse secrets file {path}: {source}")]
    SecretsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where a key was resolved from.
#[derive(Debug, Clone, PartialEq)]
pub enum CredentialSource {
    Environment,
    SecretsFile(PathBuf),
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialSource::Environment => write!(f, "environment"),
            CredentialSource::SecretsFile(path) => write!(f, "secrets file {}", path.display()),
        }
    }
}

/// One resolved API key with source tracking.
#[derive(Debug, Clone)]
pub struct ApiKey {
    pub value: String,
    pub source: CredentialSource,
}

impl ApiKey {
    /// True when the key is non-empty and not the placeholder sentinel.
    pub fn is_configured(&self) -> bool {
        !self.value.is_empty() && self.value != SENTINEL_KEY
    }
}

/// Process-wide, read-only credentials for both external APIs.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub spoonacular: ApiKey,
    pub google_maps: ApiKey,
}

/// On-disk secrets file shape.
#[derive(Debug, Default, Deserialize)]
struct SecretsFileContents {
    spoonacular_api_key: Option<String>,
    google_maps_api_key: Option<String>,
}

impl Credentials {
    /// Resolve both keys, preferring environment variables over the secrets
    /// file. `secrets_override` is the `--secrets-file` path; when set, a
    /// read failure is an error rather than a silent skip.
    pub fn resolve(secrets_override: Option<&Path>) -> Result<Self, ConfigError> {
        let file = load_secrets(secrets_override)?;

        let spoonacular = resolve_key(
            SPOONACULAR_ENV_VAR,
            file.as_ref()
                .and_then(|(c, _)| c.spoonacular_api_key.clone()),
            file.as_ref().map(|(_, p)| p.clone()),
        )
        .ok_or(ConfigError::MissingKey {
            name: "Spoonacular API key",
            env_var: SPOONACULAR_ENV_VAR,
            file_field: "spoonacular_api_key",
        })?;

        let google_maps = resolve_key(
            GOOGLE_MAPS_ENV_VAR,
            file.as_ref()
                .and_then(|(c, _)| c.google_maps_api_key.clone()),
            file.as_ref().map(|(_, p)| p.clone()),
        )
        .ok_or(ConfigError::MissingKey {
            name: "Google Maps API key",
            env_var: GOOGLE_MAPS_ENV_VAR,
            file_field: "google_maps_api_key",
        })?;

        Ok(Self {
            spoonacular,
            google_maps,
        })
    }
}

/// Default secrets path: `<config_dir>/refoodify/credentials.json`.
pub fn default_secrets_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SECRETS_DIR).join(SECRETS_FILE))
}

fn resolve_key(
    env_var: &str,
    file_value: Option<String>,
    file_path: Option<PathBuf>,
) -> Option<ApiKey> {
    if let Ok(value) = env::var(env_var) {
        if !value.trim().is_empty() {
            return Some(ApiKey {
                value,
                source: CredentialSource::Environment,
            });
        }
    }

    match (file_value, file_path) {
        (Some(value), Some(path)) if !value.trim().is_empty() => Some(ApiKey {
            value,
            source: CredentialSource::SecretsFile(path),
        }),
        _ => None,
    }
}

/// Load the secrets file, if any. An explicitly-given path must be readable;
/// the default path is allowed to be absent.
fn load_secrets(
    secrets_override: Option<&Path>,
) -> Result<Option<(SecretsFileContents, PathBuf)>, ConfigError> {
    let (path, required) = match secrets_override {
        Some(path) => (path.to_path_buf(), true),
        None => match default_secrets_path() {
            Some(path) => (path, false),
            None => return Ok(None),
        },
    };

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(ConfigError::SecretsRead {
                path,
                source: err,
            })
        }
    };

    let contents: SecretsFileContents =
        serde_json::from_str(&raw).map_err(|err| ConfigError::SecretsParse {
            path: path.clone(),
            source: err,
        })?;

    Ok(Some((contents, path)))
}
