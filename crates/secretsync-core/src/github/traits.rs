//! Core trait and error type for repository secret clients

/// Errors that can occur when writing a secret to a repository
///
/// Write failures are per-repository and non-fatal: the orchestrator
/// reports them and moves on to the next repository.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to run {command}: {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    CommandFailed(String),
}

/// Trait for remote repository secret stores
///
/// Implementations:
/// - `GhClient`: GitHub via the `gh` CLI
/// - `MockSecretClient`: In-memory for testing
pub trait SecretClient: Send + Sync {
    /// Human-readable name of this client
    fn name(&self) -> &str;

    /// Check whether `repo` already holds a secret named `name`
    ///
    /// Advisory only - used to skip redundant writes. A failed listing
    /// reads as "does not exist", never as an error.
    fn exists(&self, repo: &str, name: &str) -> bool;

    /// Set a secret on a repository, overwriting any existing value
    fn set(&self, repo: &str, name: &str, value: &str) -> Result<(), ClientError>;
}
