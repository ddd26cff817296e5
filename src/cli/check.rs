//! Check command.
//!
//! Report the validity of every saved key.

use crate::cli::output;
use crate::core::client::ChatClient;
use crate::core::domain::ApiKey;
use crate::core::rotation::{self, KeyStatus};
use crate::error::Result;

/// Check every key and print one status line each.
pub fn execute<C: ChatClient + ?Sized>(client: &C, keys: &[ApiKey]) -> Result<()> {
    rotation::check_all(client, keys, |ordinal, status| match status {
        KeyStatus::Valid => output::success(&format!("API key {} is valid", ordinal)),
        KeyStatus::RateLimited => {
            output::failure(&format!("API key {} is rate-limited", ordinal))
        }
        KeyStatus::Invalid => output::failure(&format!("API key {} is invalid", ordinal)),
    })?;

    Ok(())
}
