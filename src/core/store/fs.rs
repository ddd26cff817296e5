//! Filesystem-based key storage.
//!
//! Keys live in a single JSON file holding an array of strings
//! (`api_keys.json` by default).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Store;
use crate::core::domain::ApiKey;
use crate::error::{Result, StoreError};

/// JSON file key storage.
#[derive(Debug, Clone)]
pub struct Filesystem {
    path: PathBuf,
}

impl Filesystem {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for Filesystem {
    fn load(&self) -> Result<Vec<ApiKey>> {
        debug!(path = %self.path.display(), "loading keys");

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no key file, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::ReadFailed {
                    path: self.location(),
                    source,
                }
                .into())
            }
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let keys: Vec<ApiKey> =
            serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
                path: self.location(),
                source,
            })?;

        debug!(count = keys.len(), "keys loaded");
        Ok(keys)
    }

    fn save(&self, keys: &[ApiKey]) -> Result<()> {
        debug!(path = %self.path.display(), count = keys.len(), "saving keys");

        let contents = serde_json::to_string_pretty(keys).map_err(StoreError::Serialize)?;
        let write_failed = |source| StoreError::WriteFailed {
            path: self.location(),
            source,
        };

        fs::write(&self.path, format!("{}\n", contents)).map_err(write_failed)?;

        // Restrict permissions on key file (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .map_err(write_failed)?;
        }

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
