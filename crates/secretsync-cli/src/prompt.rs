//! Terminal prompt source
//!
//! Masked entry when stdin is a terminal; a single trimmed line when
//! input is piped.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Password;
use secretsync_core::PromptSource;

/// Prompt source reading from the controlling terminal or piped stdin
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl PromptSource for TerminalPrompt {
    fn read_secret(&self, name: &str) -> io::Result<String> {
        if io::stdin().is_terminal() {
            Password::new()
                .with_prompt(format!("Enter value for {name}"))
                .allow_empty_password(true)
                .interact()
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
        } else {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line.trim_end().to_string())
        }
    }
}
