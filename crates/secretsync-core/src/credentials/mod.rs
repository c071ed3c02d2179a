//! Credential-store adapters
//!
//! Best-effort lookup of secret values from a local OS credential store:
//! - `CredentialStore` trait with a capability check for platform gating
//! - `SecurityCliStore` for the macOS Keychain (via the `security` CLI)
//! - `MemoryCredentialStore` for tests

mod memory;
mod security;
mod traits;

pub use memory::MemoryCredentialStore;
pub use security::SecurityCliStore;
pub use traits::{CredentialStore, Lookup};
