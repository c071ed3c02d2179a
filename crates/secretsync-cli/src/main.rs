//! secretsync - sync secrets across repository secret stores
//!
//! ```text
//! secretsync list
//! secretsync list CLAUDE_CODE_OAUTH_TOKEN
//! secretsync sync CLAUDE_CODE_OAUTH_TOKEN
//! secretsync sync --all
//! secretsync sync CLAUDE_CODE_OAUTH_TOKEN --dry-run
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use secretsync_core::{
    default_config_path, Config, ConsoleLogger, GhClient, SecretStatus, SecurityCliStore,
    Selection, SharedLogger, SyncAction, SyncEngine, SyncError, SyncReport, ValueResolver,
};

mod prompt;

use prompt::TerminalPrompt;

#[derive(Parser)]
#[command(name = "secretsync", version)]
#[command(about = "Sync secrets across repository secret stores")]
struct Cli {
    /// Path to secrets.yaml (defaults to ./secrets.yaml, then the user
    /// config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Show diagnostic output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List secret status across repositories
    List {
        /// Secret name (all secrets when omitted)
        secret: Option<String>,
    },

    /// Sync secrets to the repositories that need them
    Sync {
        /// Secret name
        secret: Option<String>,

        /// Sync all secrets in the config
        #[arg(long)]
        all: bool,

        /// Preview without making changes
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), SyncError> {
    let logger: SharedLogger = Arc::new(ConsoleLogger::new().verbose(cli.verbose));

    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = Config::load(&config_path)?;

    let client = Arc::new(GhClient::new(logger.clone()));
    let engine = SyncEngine::new(&config, client, logger.clone());

    match cli.command {
        Commands::List { secret } => {
            let statuses = engine.list(secret.as_deref())?;
            render_list(&statuses);
        }
        Commands::Sync {
            secret,
            all,
            dry_run,
        } => {
            let selection = Selection::from_args(secret, all)?;
            let store = Arc::new(SecurityCliStore::new(logger.clone()));
            let resolver = ValueResolver::new(store, Arc::new(TerminalPrompt::new()), logger);
            let report = engine.sync(&selection, dry_run, &resolver)?;
            render_sync(&report);
        }
    }
    Ok(())
}

fn render_list(statuses: &[SecretStatus]) {
    for status in statuses {
        println!("\n{}", status.name);
        if !status.description.is_empty() {
            println!("  {}", status.description);
        }
        println!();
        for repo in &status.repos {
            if repo.present {
                println!("  ✓ {}", repo.repo);
            } else {
                println!("  ✗ missing {}", repo.repo);
            }
        }
    }
}

fn render_sync(report: &SyncReport) {
    for sync in &report.secrets {
        println!("\nSyncing {}...", sync.name);
        for outcome in &sync.outcomes {
            match &outcome.action {
                SyncAction::AlreadySet => {
                    println!("  ✓ {} (already set)", outcome.repo);
                }
                SyncAction::WouldSet => {
                    println!("  [dry-run] Would set {} in {}", sync.name, outcome.repo);
                }
                SyncAction::Set => {
                    println!("  ✓ Set {} in {}", sync.name, outcome.repo);
                }
                SyncAction::Failed(message) => {
                    println!("  ✗ Failed to set {} in {}: {message}", sync.name, outcome.repo);
                }
            }
        }
    }
    println!("\nDone.");
}
