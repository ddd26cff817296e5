//! Run command.
//!
//! Send the prompt with each key in turn until one answers.

use crate::cli::output;
use crate::core::client::{ChatClient, Outcome};
use crate::core::domain::ApiKey;
use crate::core::rotation;
use crate::error::Result;

/// Send `prompt`, printing a line for every failed key and the answer.
pub fn execute<C: ChatClient + ?Sized>(client: &C, prompt: &str, keys: &[ApiKey]) -> Result<()> {
    let answer = rotation::run_with_fallback(client, prompt, keys, |ordinal, outcome| {
        match outcome {
            Outcome::Success(_) => {}
            Outcome::RateLimited => {
                output::failure(&format!("API key {} is rate-limited", ordinal))
            }
            Outcome::Failed(e) => {
                output::failure(&format!("error with API key {}: {}", ordinal, e))
            }
        }
    })?;

    match answer {
        Some(answer) => output::answer(answer.ordinal, &answer.content),
        None => output::warn(&format!("all {} API keys failed", keys.len())),
    }

    Ok(())
}
