//! In-memory configuration model

use indexmap::IndexMap;

/// How to look a secret up in the local OS credential store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeychainLookup {
    /// Service name the credential is registered under
    pub service: String,
    /// Optional dot-separated path into a JSON-encoded credential,
    /// e.g. "claudeAiOauth.accessToken". Stored verbatim; split at
    /// lookup time.
    pub json_path: Option<String>,
}

/// Definition of a secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretDef {
    /// Unique name, also the key in the remote secret store
    pub name: String,
    /// Human-readable description (may be empty)
    pub description: String,
    /// Optional credential-store lookup tried before prompting
    pub keychain: Option<KeychainLookup>,
}

/// Definition of a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoDef {
    /// Repository identifier on the remote platform, e.g. "owner/repo"
    pub name: String,
    /// Names of the secrets this repository should hold, in config order
    pub secrets: Vec<String>,
}

/// Configuration loaded from a secrets.yaml document
///
/// Loaded once per invocation and read-only thereafter. Entry order
/// follows the document, so list/sync output is stable across runs.
///
/// A repository may reference a secret name that has no entry under
/// `secrets:` - loading stays permissive and the reference simply never
/// matches a defined secret.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Secret definitions keyed by name
    pub secrets: IndexMap<String, SecretDef>,
    /// Repository definitions keyed by repo identifier
    pub repos: IndexMap<String, RepoDef>,
}

impl Config {
    /// Look up a secret definition by name
    pub fn secret(&self, name: &str) -> Option<&SecretDef> {
        self.secrets.get(name)
    }

    /// Repositories whose required-secrets list contains `name`, in
    /// config order
    pub fn repos_requiring(&self, name: &str) -> Vec<&RepoDef> {
        self.repos
            .values()
            .filter(|repo| repo.secrets.iter().any(|s| s == name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> Config {
        let mut config = Config::default();
        config.secrets.insert(
            "TOKEN".to_string(),
            SecretDef {
                name: "TOKEN".to_string(),
                description: "API token".to_string(),
                keychain: None,
            },
        );
        config.repos.insert(
            "a/x".to_string(),
            RepoDef {
                name: "a/x".to_string(),
                secrets: vec!["TOKEN".to_string()],
            },
        );
        config.repos.insert(
            "a/y".to_string(),
            RepoDef {
                name: "a/y".to_string(),
                secrets: vec!["OTHER".to_string()],
            },
        );
        config
    }

    #[test]
    fn test_repos_requiring_filters_and_orders() {
        let config = sample_config();

        let needing = config.repos_requiring("TOKEN");
        assert_eq!(needing.len(), 1);
        assert_eq!(needing[0].name, "a/x");

        // Dangling reference: no defined secret matches, no repos either
        assert!(config.repos_requiring("MISSING").is_empty());
    }

    #[test]
    fn test_secret_lookup() {
        let config = sample_config();
        assert!(config.secret("TOKEN").is_some());
        assert!(config.secret("token").is_none()); // case-sensitive
    }
}
