//! secretsync core
//!
//! Syncs named secret values into the secret stores of multiple
//! repositories, driven by a declarative secrets.yaml mapping of secrets
//! to the repositories that need them.
//!
//! The pieces compose left to right:
//! - `config`: the secrets.yaml model
//! - `credentials`: best-effort lookup in the local OS credential store
//! - `resolver`: credential store first, prompt fallback
//! - `github`: existence checks and idempotent writes via the `gh` CLI
//! - `sync`: the list and sync workflows over all of the above
//!
//! The remote platform and the credential store are both opaque CLIs;
//! everything here is synchronous and strictly sequential.

pub mod config;
pub mod credentials;
pub mod github;
pub mod logging;
pub mod resolver;
pub mod sync;

// Re-export commonly used types
pub use config::{default_config_path, Config, ConfigError, KeychainLookup, RepoDef, SecretDef};
pub use credentials::{CredentialStore, Lookup, MemoryCredentialStore, SecurityCliStore};
pub use github::{ClientError, GhClient, MockSecretClient, SecretClient};
pub use logging::{ConsoleLogger, Logger, NoOpLogger, SharedLogger};
pub use resolver::{PromptSource, QueuedPrompt, ResolveError, ResolvedSecret, ValueResolver};
pub use sync::{
    SecretStatus, Selection, SyncAction, SyncEngine, SyncError, SyncReport,
};
