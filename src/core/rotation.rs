//! Key rotation.
//!
//! Both operations walk the key list in order with one blocking call per
//! key. `run_with_fallback` stops at the first answer; `check_all` always
//! visits every key. Per-key failures are reported through the callback and
//! never returned as errors.

use tracing::{debug, info};

use crate::core::client::{ChatClient, Outcome};
use crate::core::constants::CHECK_PROMPT;
use crate::core::domain::{ApiKey, Ordinal};
use crate::error::{Error, Result};

/// The first successful completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// Key that produced it
    pub ordinal: Ordinal,
    /// Completion text
    pub content: String,
}

/// Validity of one key, as seen by [`check_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    Valid,
    RateLimited,
    Invalid,
}

impl From<&Outcome> for KeyStatus {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Success(_) => KeyStatus::Valid,
            Outcome::RateLimited => KeyStatus::RateLimited,
            Outcome::Failed(_) => KeyStatus::Invalid,
        }
    }
}

/// Send `prompt` with each key in turn until one succeeds.
///
/// `report` sees every attempt, in order, including the successful one.
/// Returns `Ok(None)` once every key has failed.
///
/// # Errors
///
/// Returns `Error::NoKeys` without calling the client if `keys` is empty.
pub fn run_with_fallback<C, F>(
    client: &C,
    prompt: &str,
    keys: &[ApiKey],
    mut report: F,
) -> Result<Option<Answer>>
where
    C: ChatClient + ?Sized,
    F: FnMut(Ordinal, &Outcome),
{
    if keys.is_empty() {
        return Err(Error::NoKeys);
    }

    for (index, key) in keys.iter().enumerate() {
        let ordinal = Ordinal::from_index(index);
        debug!(%ordinal, key = %key, "sending prompt");

        let outcome = client.complete(key, prompt);
        report(ordinal, &outcome);

        match outcome {
            Outcome::Success(content) => {
                info!(%ordinal, "prompt answered");
                return Ok(Some(Answer { ordinal, content }));
            }
            Outcome::RateLimited => debug!(%ordinal, "rate limited, trying next key"),
            Outcome::Failed(e) => debug!(%ordinal, error = %e, "failed, trying next key"),
        }
    }

    info!(tried = keys.len(), "every key failed");
    Ok(None)
}

/// Send a fixed test prompt with every key and classify each one.
///
/// Statuses are returned in key order; `report` is called once per key as
/// results arrive.
///
/// # Errors
///
/// Returns `Error::NoKeys` without calling the client if `keys` is empty.
pub fn check_all<C, F>(client: &C, keys: &[ApiKey], mut report: F) -> Result<Vec<KeyStatus>>
where
    C: ChatClient + ?Sized,
    F: FnMut(Ordinal, KeyStatus),
{
    if keys.is_empty() {
        return Err(Error::NoKeys);
    }

    let statuses = keys
        .iter()
        .enumerate()
        .map(|(index, key)| {
            let ordinal = Ordinal::from_index(index);
            let outcome = client.complete(key, CHECK_PROMPT);
            if let Outcome::Failed(e) = &outcome {
                debug!(%ordinal, error = %e, "check failed");
            }

            let status = KeyStatus::from(&outcome);
            debug!(%ordinal, ?status, "checked");
            report(ordinal, status);
            status
        })
        .collect();

    Ok(statuses)
}
