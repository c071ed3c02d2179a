//! In-memory credential store

use std::collections::HashMap;
use std::sync::RwLock;

use super::security::extract_json_path;
use super::traits::{CredentialStore, Lookup};
use crate::config::KeychainLookup;

/// In-memory credential store for testing and scripted use
///
/// Entries are keyed by service name and hold the raw stored value; a
/// `json_path` on the lookup spec is applied the same way the real
/// keychain store applies it.
#[derive(Debug)]
pub struct MemoryCredentialStore {
    entries: RwLock<HashMap<String, String>>,
    available: bool,
}

impl Default for MemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCredentialStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            available: true,
        }
    }

    /// Create a store that reports itself unavailable, to mimic a
    /// platform without a credential store
    pub fn unavailable() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            available: false,
        }
    }

    /// Insert a raw value under a service name
    pub fn insert(&self, service: impl Into<String>, value: impl Into<String>) {
        let mut entries = self.entries.write().unwrap();
        entries.insert(service.into(), value.into());
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn lookup(&self, spec: &KeychainLookup) -> Lookup {
        if !self.available {
            return Lookup::NotFound;
        }

        let entries = self.entries.read().unwrap();
        let raw = match entries.get(&spec.service) {
            Some(raw) => raw.clone(),
            None => return Lookup::NotFound,
        };

        match &spec.json_path {
            Some(path) => extract_json_path(&raw, path),
            None => Lookup::Found(raw),
        }
    }
}
