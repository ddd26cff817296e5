//! Add command.
//!
//! Interactively append API keys, with hidden input on a terminal and
//! line-by-line reads when stdin is piped.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::{Input, Password};
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::constants::MAX_INTERACTIVE_KEYS;
use crate::core::domain::{ApiKey, Ordinal};
use crate::core::store::{append_interactive, KeyPrompt, Store};
use crate::error::{Error, Result, ValidationError};

/// Show saved keys, prompt for new ones, and persist the combined list.
pub fn execute<S: Store + ?Sized>(store: &S) -> Result<Vec<ApiKey>> {
    let existing = store.load()?;
    info!(existing = existing.len(), "interactive key entry");

    if !existing.is_empty() {
        output::header("You already have these API keys saved:");
        for (index, key) in existing.iter().enumerate() {
            output::kv(&format!("key {}", index + 1), key.masked());
        }
        output::blank();
    }

    let stdin = io::stdin();
    let keys = if stdin.is_terminal() {
        append_interactive(store, existing, &mut Terminal)?
    } else {
        append_interactive(store, existing, &mut Lines::new(stdin.lock()))?
    };

    output::success(&format!(
        "saved {} API keys to {}",
        keys.len(),
        output::path(&store.location())
    ));

    Ok(keys)
}

/// Prompts on an interactive terminal.
struct Terminal;

impl KeyPrompt for Terminal {
    fn count(&mut self) -> Result<usize> {
        let count = Input::<usize>::new()
            .with_prompt(format!(
                "How many API keys do you want to add (1-{})",
                MAX_INTERACTIVE_KEYS
            ))
            .interact_text()?;
        Ok(count)
    }

    fn key(&mut self, position: Ordinal) -> Result<Zeroizing<String>> {
        let key = Password::new()
            .with_prompt(format!("API key {}", position.get()))
            .interact()?;
        Ok(Zeroizing::new(key))
    }
}

/// Reads the count and keys one per line, for piped input.
pub struct Lines<R> {
    reader: R,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// One line without its terminator.
    fn next_line(&mut self, what: &'static str) -> Result<Zeroizing<String>> {
        let mut line = Zeroizing::new(String::new());
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ValidationError::UnexpectedEof(what).into());
        }
        Ok(Zeroizing::new(
            line.trim_end_matches(['\r', '\n']).to_string(),
        ))
    }
}

impl<R: BufRead> KeyPrompt for Lines<R> {
    fn count(&mut self) -> Result<usize> {
        let line = self.next_line("key count")?;
        let line = line.trim();
        line.parse::<usize>()
            .map_err(|_| Error::from(ValidationError::InvalidCount(line.to_string())))
    }

    fn key(&mut self, _position: Ordinal) -> Result<Zeroizing<String>> {
        self.next_line("API key")
    }
}
