//! GitHub secret client backed by the `gh` CLI

use std::process::{Command, Output};

use super::traits::{ClientError, SecretClient};
use crate::logging::SharedLogger;

/// Repository secret client that shells out to `gh`
///
/// Requires an authenticated `gh` on PATH; authentication and transport
/// are entirely `gh`'s concern.
pub struct GhClient {
    logger: SharedLogger,
}

impl GhClient {
    pub fn new(logger: SharedLogger) -> Self {
        Self { logger }
    }

    fn run(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new("gh").args(args).output()
    }
}

impl SecretClient for GhClient {
    fn name(&self) -> &str {
        "gh"
    }

    fn exists(&self, repo: &str, name: &str) -> bool {
        self.logger
            .debug(&format!("gh secret list --repo {repo}"));

        let output = match self.run(&["secret", "list", "--repo", repo]) {
            Ok(output) => output,
            Err(e) => {
                self.logger.warn(&format!("failed to run gh: {e}"));
                return false;
            }
        };
        if !output.status.success() {
            return false;
        }

        listing_has_secret(&String::from_utf8_lossy(&output.stdout), name)
    }

    fn set(&self, repo: &str, name: &str, value: &str) -> Result<(), ClientError> {
        // Never log the value
        self.logger
            .debug(&format!("gh secret set {name} --repo {repo}"));

        let output = self
            .run(&["secret", "set", name, "--repo", repo, "--body", value])
            .map_err(|source| ClientError::Io {
                command: format!("gh secret set {name} --repo {repo}"),
                source,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(ClientError::CommandFailed(stderr))
        }
    }
}

/// Check a `gh secret list` output for an exact secret name
///
/// Each line is `NAME\tUpdated ...`; only the first tab-delimited field
/// is compared, case-sensitively.
pub(crate) fn listing_has_secret(listing: &str, name: &str) -> bool {
    listing
        .lines()
        .any(|line| line.split('\t').next() == Some(name))
}
