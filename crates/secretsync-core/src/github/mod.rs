//! Repository secret clients
//!
//! Wraps the remote platform's secret store behind a small trait:
//! - `SecretClient` with advisory existence checks and idempotent writes
//! - `GhClient` shelling out to the `gh` CLI
//! - `MockSecretClient` for tests

mod gh;
mod mock;
mod traits;

pub use gh::GhClient;
pub use mock::{MockSecretClient, SetCall};
pub use traits::{ClientError, SecretClient};
