//! Credential storage.
//!
//! The key list is an ordered sequence; order is rotation priority and
//! duplicates are kept. Storage is the only source of truth and is reloaded
//! on every run.

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::domain::{ApiKey, Ordinal};
use crate::error::{Result, ValidationError};

mod fs;

pub use fs::Filesystem;

/// Key storage trait.
pub trait Store {
    /// Load all stored keys in rotation order.
    ///
    /// Returns an empty list when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if storage exists but cannot be read or decoded.
    fn load(&self) -> Result<Vec<ApiKey>>;

    /// Replace the stored list with `keys`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write does not complete. Callers must not
    /// swallow this: a lost write means lost credentials.
    fn save(&self, keys: &[ApiKey]) -> Result<()>;

    /// Human-readable location, for messages.
    fn location(&self) -> String;
}

/// Source of operator input for [`append_interactive`].
pub trait KeyPrompt {
    /// How many keys the operator wants to add.
    fn count(&mut self) -> Result<usize>;

    /// The key that will occupy `position` in the list, exactly as entered.
    fn key(&mut self, position: Ordinal) -> Result<Zeroizing<String>>;
}

/// Ask the operator for new keys, append them to `existing` and persist.
///
/// Keys are appended in entry order after the existing ones. Leading and
/// trailing whitespace is stripped from each entry.
///
/// Nothing is saved until every entry has been read. An empty entry, or a
/// prompt error part way through, discards the whole batch, including the
/// keys already entered in this call; the stored list is left untouched.
///
/// # Errors
///
/// Returns `ValidationError::EmptyKey` for an empty entry, any prompt error,
/// or the store's write error.
pub fn append_interactive<S, P>(
    store: &S,
    mut existing: Vec<ApiKey>,
    prompt: &mut P,
) -> Result<Vec<ApiKey>>
where
    S: Store + ?Sized,
    P: KeyPrompt + ?Sized,
{
    let count = prompt.count()?;
    debug!(count, existing = existing.len(), "adding keys");

    for _ in 0..count {
        let position = Ordinal::from_index(existing.len());
        let raw = prompt.key(position)?;
        let key = ApiKey::new(raw.trim());
        if key.is_empty() {
            return Err(ValidationError::EmptyKey(position.get()).into());
        }
        existing.push(key);
    }

    store.save(&existing)?;
    info!(total = existing.len(), location = %store.location(), "keys saved");

    Ok(existing)
}
