//! Secret value resolution
//!
//! Sources are tried in priority order:
//! 1. The local credential store, when the secret declares a keychain
//!    lookup
//! 2. The prompt (masked terminal entry, or a line from piped stdin)
//!
//! A resolved value is never empty; an empty result from every source is
//! an error that aborts the remaining sync work.

use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::config::SecretDef;
use crate::credentials::{CredentialStore, Lookup};
use crate::logging::SharedLogger;

/// Errors that can occur during value resolution
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("empty value for secret '{0}'")]
    EmptyValue(String),

    #[error("failed to read secret value: {0}")]
    Input(#[from] std::io::Error),
}

/// A resolved secret value
#[derive(Debug, Clone)]
pub struct ResolvedSecret {
    /// The secret value, guaranteed non-empty
    pub value: String,
    /// Which source provided the value ("keychain", "prompt", ...)
    pub source: String,
}

/// Source of interactively (or scripted) entered values
///
/// The terminal implementation lives in the CLI crate; `QueuedPrompt`
/// covers tests and scripted use.
pub trait PromptSource: Send + Sync {
    /// Obtain a value for the named secret
    fn read_secret(&self, name: &str) -> std::io::Result<String>;
}

/// Prompt source that answers from a queue of canned values
///
/// An exhausted queue answers with an empty string, which resolution
/// treats as failure.
#[derive(Debug, Default)]
pub struct QueuedPrompt {
    values: RwLock<VecDeque<String>>,
}

impl QueuedPrompt {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a canned value
    pub fn push(&self, value: impl Into<String>) {
        let mut values = self.values.write().unwrap();
        values.push_back(value.into());
    }
}

impl PromptSource for QueuedPrompt {
    fn read_secret(&self, _name: &str) -> std::io::Result<String> {
        let mut values = self.values.write().unwrap();
        Ok(values.pop_front().unwrap_or_default())
    }
}

/// Resolves secret values through the credential store, falling back to
/// the prompt
pub struct ValueResolver {
    store: Arc<dyn CredentialStore>,
    prompt: Arc<dyn PromptSource>,
    logger: SharedLogger,
}

impl ValueResolver {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        prompt: Arc<dyn PromptSource>,
        logger: SharedLogger,
    ) -> Self {
        Self {
            store,
            prompt,
            logger,
        }
    }

    /// Resolve a value for `secret`
    ///
    /// Fails with [`ResolveError::EmptyValue`] when no source yields a
    /// non-empty value.
    pub fn resolve(&self, secret: &SecretDef) -> Result<ResolvedSecret, ResolveError> {
        if let Some(spec) = &secret.keychain {
            if self.store.is_available() {
                match self.store.lookup(spec) {
                    Lookup::Found(value) if !value.is_empty() => {
                        self.logger.info(&format!(
                            "Got {} from {}",
                            secret.name,
                            self.store.name()
                        ));
                        return Ok(ResolvedSecret {
                            value,
                            source: self.store.name().to_string(),
                        });
                    }
                    Lookup::Found(_) | Lookup::NotFound => {}
                    Lookup::Failed(detail) => {
                        // Best-effort: a broken store falls through to
                        // the prompt
                        self.logger.warn(&format!(
                            "{} lookup for {} failed: {detail}",
                            self.store.name(),
                            secret.name
                        ));
                    }
                }
            }
        }

        let value = self.prompt.read_secret(&secret.name)?;
        if value.is_empty() {
            return Err(ResolveError::EmptyValue(secret.name.clone()));
        }
        Ok(ResolvedSecret {
            value,
            source: "prompt".to_string(),
        })
    }
}
