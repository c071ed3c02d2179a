//! List and sync workflows
//!
//! Both workflows are linear and strictly sequential: validate the
//! selected secret names, resolve values up front (sync only, skipped on
//! dry runs), then check and write per secret per repository. Remote
//! write failures are isolated per repository and never abort the run;
//! structural errors (unknown secret, empty value) abort immediately.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{Config, ConfigError, SecretDef};
use crate::github::SecretClient;
use crate::logging::SharedLogger;
use crate::resolver::{ResolveError, ValueResolver};

/// Errors that abort a list or sync invocation
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown secret: {0}")]
    UnknownSecret(String),

    #[error("specify a secret name or use --all")]
    NoSelection,

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Which secrets an invocation targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every secret in the config, in document order
    All,
    /// A single named secret
    One(String),
}

impl Selection {
    /// Build a selection from CLI arguments
    pub fn from_args(secret: Option<String>, all: bool) -> Result<Self, SyncError> {
        match (secret, all) {
            (_, true) => Ok(Selection::All),
            (Some(name), false) => Ok(Selection::One(name)),
            (None, false) => Err(SyncError::NoSelection),
        }
    }
}

/// Per-repository presence, for `list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoStatus {
    pub repo: String,
    pub present: bool,
}

/// Status of one secret across the repositories that need it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretStatus {
    pub name: String,
    pub description: String,
    pub repos: Vec<RepoStatus>,
}

/// What happened (or would happen) for one repository during sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// The repository already holds the secret; nothing written
    AlreadySet,
    /// Dry run: a write would have happened
    WouldSet,
    /// The secret was written
    Set,
    /// The write failed (message for the operator); the run continued
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub repo: String,
    pub action: SyncAction,
}

/// Sync results for one secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretSync {
    pub name: String,
    /// Which source provided the value (absent on dry runs)
    pub source: Option<String>,
    pub outcomes: Vec<SyncOutcome>,
}

/// Results of a whole sync invocation
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub secrets: Vec<SecretSync>,
}

/// Drives the list and sync workflows over a loaded config
pub struct SyncEngine<'a> {
    config: &'a Config,
    client: Arc<dyn SecretClient>,
    logger: SharedLogger,
}

impl<'a> SyncEngine<'a> {
    pub fn new(config: &'a Config, client: Arc<dyn SecretClient>, logger: SharedLogger) -> Self {
        Self {
            config,
            client,
            logger,
        }
    }

    /// Resolve a selection to secret definitions, validating every name
    /// before anything else happens
    fn selected(&self, selection: &Selection) -> Result<Vec<&'a SecretDef>, SyncError> {
        match selection {
            Selection::All => Ok(self.config.secrets.values().collect()),
            Selection::One(name) => match self.config.secret(name) {
                Some(def) => Ok(vec![def]),
                None => Err(SyncError::UnknownSecret(name.clone())),
            },
        }
    }

    /// Report, per selected secret, which repositories already hold it
    pub fn list(&self, filter: Option<&str>) -> Result<Vec<SecretStatus>, SyncError> {
        let selection = match filter {
            Some(name) => Selection::One(name.to_string()),
            None => Selection::All,
        };
        let selected = self.selected(&selection)?;

        let mut statuses = Vec::with_capacity(selected.len());
        for def in selected {
            let repos = self
                .config
                .repos_requiring(&def.name)
                .into_iter()
                .map(|repo| RepoStatus {
                    repo: repo.name.clone(),
                    present: self.client.exists(&repo.name, &def.name),
                })
                .collect();
            statuses.push(SecretStatus {
                name: def.name.clone(),
                description: def.description.clone(),
                repos,
            });
        }
        Ok(statuses)
    }

    /// Sync the selected secrets into every repository that needs them
    ///
    /// Values are resolved up front for all selected secrets; a dry run
    /// resolves nothing and performs no writes.
    pub fn sync(
        &self,
        selection: &Selection,
        dry_run: bool,
        resolver: &ValueResolver,
    ) -> Result<SyncReport, SyncError> {
        // Phase 1: validate names, before any value is resolved or any
        // remote call made
        let selected = self.selected(selection)?;

        // Phase 2: resolve all values up front
        let mut resolved = HashMap::new();
        if !dry_run {
            for def in &selected {
                let value = resolver.resolve(def)?;
                resolved.insert(def.name.clone(), value);
            }
        }

        // Phase 3: act, isolating per-repository failures
        let mut report = SyncReport::default();
        for def in selected {
            let mut outcomes = Vec::new();
            for repo in self.config.repos_requiring(&def.name) {
                let action = if self.client.exists(&repo.name, &def.name) {
                    SyncAction::AlreadySet
                } else if dry_run {
                    SyncAction::WouldSet
                } else {
                    let value = &resolved[&def.name].value;
                    match self.client.set(&repo.name, &def.name, value) {
                        Ok(()) => SyncAction::Set,
                        Err(e) => {
                            self.logger.error(&format!(
                                "failed to set {} in {}: {e}",
                                def.name, repo.name
                            ));
                            SyncAction::Failed(e.to_string())
                        }
                    }
                };
                outcomes.push(SyncOutcome {
                    repo: repo.name.clone(),
                    action,
                });
            }
            report.secrets.push(SecretSync {
                name: def.name.clone(),
                source: resolved.get(&def.name).map(|r| r.source.clone()),
                outcomes,
            });
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::MemoryCredentialStore;
    use crate::github::MockSecretClient;
    use crate::logging::NoOpLogger;
    use crate::resolver::QueuedPrompt;

    const CONFIG: &str = r#"
secrets:
  TOKEN:
    description: API token
  KEYED:
    keychain:
      service: keyed-svc
repos:
  a/x:
    secrets: [TOKEN, KEYED]
  a/y:
    secrets: [TOKEN]
  a/z:
    secrets: [KEYED]
"#;

    fn config() -> Config {
        Config::from_yaml(CONFIG).unwrap()
    }

    fn resolver_with(prompt_values: &[&str], store: MemoryCredentialStore) -> ValueResolver {
        let prompt = QueuedPrompt::new();
        for value in prompt_values {
            prompt.push(*value);
        }
        ValueResolver::new(
            Arc::new(store),
            Arc::new(prompt),
            Arc::new(NoOpLogger::new()),
        )
    }

    fn engine<'a>(config: &'a Config, client: Arc<MockSecretClient>) -> SyncEngine<'a> {
        SyncEngine::new(config, client, Arc::new(NoOpLogger::new()))
    }

    #[test]
    fn test_selection_from_args() {
        assert_eq!(
            Selection::from_args(Some("TOKEN".to_string()), false).unwrap(),
            Selection::One("TOKEN".to_string())
        );
        assert_eq!(Selection::from_args(None, true).unwrap(), Selection::All);
        // --all wins when both are given
        assert_eq!(
            Selection::from_args(Some("TOKEN".to_string()), true).unwrap(),
            Selection::All
        );
        assert!(matches!(
            Selection::from_args(None, false),
            Err(SyncError::NoSelection)
        ));
    }

    #[test]
    fn test_list_one_present_one_missing_in_config_order() {
        let config = config();
        let client = Arc::new(MockSecretClient::new());
        client.seed("a/x", "TOKEN");

        let statuses = engine(&config, client).list(Some("TOKEN")).unwrap();

        assert_eq!(statuses.len(), 1);
        let status = &statuses[0];
        assert_eq!(status.name, "TOKEN");
        assert_eq!(status.description, "API token");
        assert_eq!(
            status.repos,
            vec![
                RepoStatus {
                    repo: "a/x".to_string(),
                    present: true
                },
                RepoStatus {
                    repo: "a/y".to_string(),
                    present: false
                },
            ]
        );
    }

    #[test]
    fn test_list_unknown_secret_fails_before_remote_calls() {
        let config = config();
        let client = Arc::new(MockSecretClient::new());

        let err = engine(&config, client.clone())
            .list(Some("NOPE"))
            .unwrap_err();
        assert!(matches!(err, SyncError::UnknownSecret(name) if name == "NOPE"));
        assert_eq!(client.remote_calls(), 0);
    }

    #[test]
    fn test_sync_skips_existing_and_writes_missing() {
        // Scenario: TOKEN required by a/x and a/y; a/x already has it
        let config = config();
        let client = Arc::new(MockSecretClient::new());
        client.seed("a/x", "TOKEN");

        let resolver = resolver_with(&["secret123"], MemoryCredentialStore::new());
        let report = engine(&config, client.clone())
            .sync(&Selection::One("TOKEN".to_string()), false, &resolver)
            .unwrap();

        assert_eq!(report.secrets.len(), 1);
        let sync = &report.secrets[0];
        assert_eq!(sync.source.as_deref(), Some("prompt"));
        assert_eq!(
            sync.outcomes,
            vec![
                SyncOutcome {
                    repo: "a/x".to_string(),
                    action: SyncAction::AlreadySet
                },
                SyncOutcome {
                    repo: "a/y".to_string(),
                    action: SyncAction::Set
                },
            ]
        );

        let calls = client.set_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].repo, "a/y");
        assert_eq!(calls[0].name, "TOKEN");
        assert_eq!(calls[0].value, "secret123");
    }

    #[test]
    fn test_sync_unknown_secret_is_structural_and_silent() {
        let config = config();
        let client = Arc::new(MockSecretClient::new());
        let resolver = resolver_with(&["unused"], MemoryCredentialStore::new());

        let err = engine(&config, client.clone())
            .sync(&Selection::One("UNKNOWN_SECRET".to_string()), false, &resolver)
            .unwrap_err();
        assert!(matches!(err, SyncError::UnknownSecret(_)));
        assert_eq!(client.remote_calls(), 0);
    }

    #[test]
    fn test_dry_run_performs_zero_writes_but_reports_intent() {
        let config = config();
        let client = Arc::new(MockSecretClient::new());
        client.seed("a/x", "TOKEN");

        // No prompt values queued: a dry run must not resolve anything
        let resolver = resolver_with(&[], MemoryCredentialStore::new());
        let report = engine(&config, client.clone())
            .sync(&Selection::All, true, &resolver)
            .unwrap();

        assert!(client.set_calls().is_empty());
        assert!(report.secrets.iter().all(|s| s.source.is_none()));

        let token = &report.secrets[0];
        assert_eq!(token.name, "TOKEN");
        assert_eq!(token.outcomes[0].action, SyncAction::AlreadySet);
        assert_eq!(token.outcomes[1].action, SyncAction::WouldSet);
    }

    #[test]
    fn test_sync_all_resolves_keychain_and_prompt() {
        let config = config();
        let client = Arc::new(MockSecretClient::new());

        let store = MemoryCredentialStore::new();
        store.insert("keyed-svc", "from-keychain");
        // TOKEN has no keychain spec, so only it consumes the prompt
        let resolver = resolver_with(&["prompted"], store);

        let report = engine(&config, client.clone())
            .sync(&Selection::All, false, &resolver)
            .unwrap();

        assert_eq!(report.secrets.len(), 2);
        assert_eq!(report.secrets[0].name, "TOKEN");
        assert_eq!(report.secrets[0].source.as_deref(), Some("prompt"));
        assert_eq!(report.secrets[1].name, "KEYED");
        assert_eq!(report.secrets[1].source.as_deref(), Some("memory"));

        let set_calls = client.set_calls();
        let values: Vec<&str> = set_calls.iter().map(|c| c.value.as_str()).collect();
        // TOKEN goes to a/x and a/y, KEYED to a/x and a/z
        assert_eq!(
            values,
            vec!["prompted", "prompted", "from-keychain", "from-keychain"]
        );
    }

    #[test]
    fn test_empty_value_aborts_before_any_write() {
        let config = config();
        let client = Arc::new(MockSecretClient::new());

        // First secret resolves, second one gets an empty line; values
        // are resolved up front so nothing is written at all
        let store = MemoryCredentialStore::new();
        let resolver = resolver_with(&["value", ""], store);

        let err = engine(&config, client.clone())
            .sync(&Selection::All, false, &resolver)
            .unwrap_err();
        assert!(matches!(
            err,
            SyncError::Resolve(ResolveError::EmptyValue(name)) if name == "KEYED"
        ));
        assert!(client.set_calls().is_empty());
    }

    #[test]
    fn test_write_failure_does_not_abort_siblings() {
        let config = config();
        let client = Arc::new(MockSecretClient::new());
        client.fail_on("a/x");

        let resolver = resolver_with(&["v"], MemoryCredentialStore::new());
        let report = engine(&config, client.clone())
            .sync(&Selection::One("TOKEN".to_string()), false, &resolver)
            .unwrap();

        let sync = &report.secrets[0];
        assert!(matches!(sync.outcomes[0].action, SyncAction::Failed(_)));
        // The failure on a/x did not stop the write to a/y
        assert_eq!(sync.outcomes[1].action, SyncAction::Set);
        assert_eq!(client.set_calls().len(), 2);
    }
}
