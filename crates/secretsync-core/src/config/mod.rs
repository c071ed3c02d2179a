//! Configuration model and loading
//!
//! The secrets.yaml document declares which secrets exist, how to find
//! their values locally, and which repositories need which secrets.

mod file;
mod model;

pub use file::{default_config_path, ConfigError, ConfigResult};
pub use model::{Config, KeychainLookup, RepoDef, SecretDef};
