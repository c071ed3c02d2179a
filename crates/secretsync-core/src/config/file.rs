//! Loading the secrets.yaml document
//!
//! Document shape:
//!
//! ```yaml
//! secrets:
//!   SOME_TOKEN:
//!     description: What this token is for
//!     keychain:
//!       service: some-service
//!       json_path: nested.field        # optional
//! repos:
//!   owner/repo:
//!     secrets: [SOME_TOKEN]
//! ```
//!
//! A secret entry with an absent or null body is valid (no description,
//! no keychain lookup).

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use super::model::{Config, KeychainLookup, RepoDef, SecretDef};

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Raw document structure, as serde sees it
///
/// Top-level sections are `Option` so that a bare `secrets:` key (a null
/// value in YAML) reads the same as an absent one.
#[derive(Debug, Deserialize, Default)]
struct ConfigDoc {
    #[serde(default)]
    secrets: Option<IndexMap<String, Option<SecretEntry>>>,
    #[serde(default)]
    repos: Option<IndexMap<String, RepoEntry>>,
}

#[derive(Debug, Deserialize, Default)]
struct SecretEntry {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    keychain: Option<KeychainEntry>,
}

#[derive(Debug, Deserialize)]
struct KeychainEntry {
    #[serde(default)]
    service: String,
    #[serde(default)]
    json_path: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct RepoEntry {
    #[serde(default)]
    secrets: Vec<String>,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let doc: ConfigDoc =
            serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let secrets = doc
            .secrets
            .unwrap_or_default()
            .into_iter()
            .map(|(name, entry)| {
                let entry = entry.unwrap_or_default();
                let def = SecretDef {
                    name: name.clone(),
                    description: entry.description.unwrap_or_default(),
                    keychain: entry.keychain.map(|kc| KeychainLookup {
                        service: kc.service,
                        json_path: kc.json_path,
                    }),
                };
                (name, def)
            })
            .collect();

        let repos = doc
            .repos
            .unwrap_or_default()
            .into_iter()
            .map(|(name, entry)| {
                let def = RepoDef {
                    name: name.clone(),
                    secrets: entry.secrets,
                };
                (name, def)
            })
            .collect();

        Ok(Config { secrets, repos })
    }
}

/// Default config file location
///
/// Prefers `secrets.yaml` in the current directory, falling back to the
/// user config directory (`~/.config/secretsync/secrets.yaml` on Linux).
pub fn default_config_path() -> PathBuf {
    let local = PathBuf::from("secrets.yaml");
    if local.exists() {
        return local;
    }
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
    config_dir.join("secretsync").join("secrets.yaml")
}
