//! Constants used throughout keyrelay.
//!
//! Centralizes file names and default values.

/// Credential file name, relative to the working directory.
pub const KEYS_FILE: &str = "api_keys.json";

/// Project-local settings file name.
pub const SETTINGS_FILE: &str = ".keyrelay.toml";

/// Directory under the user config dir holding `config.toml`.
pub const SETTINGS_DIR: &str = "keyrelay";

/// Settings file name inside [`SETTINGS_DIR`].
pub const GLOBAL_SETTINGS_FILE: &str = "config.toml";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "KEYRELAY_LOG";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// API base URL used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Prompt sent by the validity check.
pub const CHECK_PROMPT: &str = "Hello";

/// Number of leading characters shown when a key is masked.
pub const MASK_PREFIX_LEN: usize = 10;

/// Upper bound suggested to the operator during interactive entry.
pub const MAX_INTERACTIVE_KEYS: usize = 5;

/// Per-request timeout in seconds used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;
