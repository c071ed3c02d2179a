//! Mock secret client for testing
//!
//! Deterministic, configurable stand-in for the `gh` client: pre-seeded
//! existing secrets, recorded calls, and per-repository failure
//! injection.

use std::collections::HashSet;
use std::sync::RwLock;

use super::traits::{ClientError, SecretClient};

/// A recorded `set` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCall {
    pub repo: String,
    pub name: String,
    pub value: String,
}

/// In-memory secret client for tests
#[derive(Debug, Default)]
pub struct MockSecretClient {
    existing: RwLock<HashSet<(String, String)>>,
    fail_repos: RwLock<HashSet<String>>,
    set_calls: RwLock<Vec<SetCall>>,
    exists_calls: RwLock<Vec<(String, String)>>,
}

impl MockSecretClient {
    /// Create a new mock with no existing secrets
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a secret as already present on a repository
    pub fn seed(&self, repo: &str, name: &str) {
        let mut existing = self.existing.write().unwrap();
        existing.insert((repo.to_string(), name.to_string()));
    }

    /// Make every `set` against `repo` fail
    pub fn fail_on(&self, repo: &str) {
        let mut fail = self.fail_repos.write().unwrap();
        fail.insert(repo.to_string());
    }

    /// All recorded `set` calls, in order
    pub fn set_calls(&self) -> Vec<SetCall> {
        self.set_calls.read().unwrap().clone()
    }

    /// All recorded `exists` calls, in order
    pub fn exists_calls(&self) -> Vec<(String, String)> {
        self.exists_calls.read().unwrap().clone()
    }

    /// Total number of remote calls of any kind
    pub fn remote_calls(&self) -> usize {
        self.set_calls.read().unwrap().len() + self.exists_calls.read().unwrap().len()
    }
}

impl SecretClient for MockSecretClient {
    fn name(&self) -> &str {
        "mock"
    }

    fn exists(&self, repo: &str, name: &str) -> bool {
        let mut calls = self.exists_calls.write().unwrap();
        calls.push((repo.to_string(), name.to_string()));

        let existing = self.existing.read().unwrap();
        existing.contains(&(repo.to_string(), name.to_string()))
    }

    fn set(&self, repo: &str, name: &str, value: &str) -> Result<(), ClientError> {
        let mut calls = self.set_calls.write().unwrap();
        calls.push(SetCall {
            repo: repo.to_string(),
            name: name.to_string(),
            value: value.to_string(),
        });
        drop(calls);

        let fail = self.fail_repos.read().unwrap();
        if fail.contains(repo) {
            return Err(ClientError::CommandFailed(format!(
                "injected failure for {repo}"
            )));
        }
        drop(fail);

        let mut existing = self.existing.write().unwrap();
        existing.insert((repo.to_string(), name.to_string()));
        Ok(())
    }
}
