//! Core trait and types for credential-store lookup

use crate::config::KeychainLookup;

/// Outcome of a credential-store lookup
///
/// Lookup is best-effort: `Failed` is kept distinct from `NotFound`
/// internally so it stays testable, but callers collapse it to absent at
/// the adapter boundary via [`Lookup::into_value`] - a broken store must
/// fall through to the next resolution strategy, never abort the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// A value was found
    Found(String),
    /// The store has no entry for the requested service
    NotFound,
    /// The store query or value extraction failed (detail for diagnostics)
    Failed(String),
}

impl Lookup {
    /// Collapse to an optional value, treating failures and empty
    /// strings as absent
    pub fn into_value(self) -> Option<String> {
        match self {
            Lookup::Found(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}

/// Trait for credential store implementations
///
/// Implementations:
/// - `SecurityCliStore`: macOS Keychain via the `security` CLI
/// - `MemoryCredentialStore`: In-memory for testing
pub trait CredentialStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Check if this store can be queried at all
    ///
    /// For example, the macOS keychain store is unavailable on every
    /// other platform. Callers treat unavailable as "nothing found",
    /// never as an error.
    fn is_available(&self) -> bool {
        true
    }

    /// Look up a credential by its keychain spec
    fn lookup(&self, spec: &KeychainLookup) -> Lookup;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_value() {
        assert_eq!(
            Lookup::Found("tok".to_string()).into_value(),
            Some("tok".to_string())
        );
        assert_eq!(Lookup::Found(String::new()).into_value(), None);
        assert_eq!(Lookup::NotFound.into_value(), None);
        assert_eq!(Lookup::Failed("boom".to_string()).into_value(), None);
    }
}
