//! macOS Keychain credential store
//!
//! Queries the keychain through the `security` CLI rather than linking a
//! keychain API: the values this tool cares about (e.g. OAuth blobs
//! written by other applications) live under generic-password items
//! addressed by service name and account.

use std::process::Command;

use serde_json::Value;

use super::traits::{CredentialStore, Lookup};
use crate::config::KeychainLookup;
use crate::logging::SharedLogger;

/// Credential store backed by `security find-generic-password`
///
/// Only functional on macOS; everywhere else `is_available()` is false
/// and lookups report `NotFound` so resolution falls through to the
/// prompt.
pub struct SecurityCliStore {
    logger: SharedLogger,
}

impl SecurityCliStore {
    pub fn new(logger: SharedLogger) -> Self {
        Self { logger }
    }

    fn account() -> String {
        std::env::var("USER").unwrap_or_default()
    }
}

impl CredentialStore for SecurityCliStore {
    fn name(&self) -> &str {
        "keychain"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn lookup(&self, spec: &KeychainLookup) -> Lookup {
        if !self.is_available() {
            return Lookup::NotFound;
        }

        self.logger.debug(&format!(
            "querying keychain for service '{}'",
            spec.service
        ));

        let output = match Command::new("security")
            .args([
                "find-generic-password",
                "-s",
                &spec.service,
                "-a",
                &Self::account(),
                "-w",
            ])
            .output()
        {
            Ok(output) => output,
            Err(e) => return Lookup::Failed(format!("failed to run security: {e}")),
        };

        // Nonzero exit usually means no matching item
        if !output.status.success() {
            return Lookup::NotFound;
        }

        let raw = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if raw.is_empty() {
            return Lookup::NotFound;
        }

        match &spec.json_path {
            Some(path) => extract_json_path(&raw, path),
            None => Lookup::Found(raw),
        }
    }
}

/// Walk a dot-separated path through a JSON-encoded credential
///
/// Each segment is an object-key accessor; the final value is coerced to
/// a string (inner string for JSON strings, rendered form otherwise).
pub(crate) fn extract_json_path(raw: &str, path: &str) -> Lookup {
    let mut value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => return Lookup::Failed(format!("credential is not valid JSON: {e}")),
    };

    for key in path.split('.') {
        value = match value.get_mut(key) {
            Some(inner) => inner.take(),
            None => return Lookup::Failed(format!("no '{key}' in credential value")),
        };
    }

    match value {
        Value::String(s) => Lookup::Found(s),
        other => Lookup::Found(other.to_string()),
    }
}
