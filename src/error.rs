//! Error types for keyrelay.
//!
//! Fatal failures flow up to `main` as [`Error`]. Remote call failures never
//! do: the client classifies them into an `Outcome` and the rotation loop
//! moves on to the next key.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no API keys found")]
    NoKeys,

    #[error("input error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Credential file errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed key file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode key list: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Settings file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to initialise HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Remote call failures.
///
/// These are folded into `Outcome` at the client boundary and only ever
/// reach the terminal as a per-key message.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Transport(String),

    #[error("unexpected response format: {0}")]
    ResponseFormat(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        Self::ResponseFormat(e.to_string())
    }
}

/// Operator input errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("API key {0} cannot be empty")]
    EmptyKey(usize),

    #[error("not a number: {0:?}")]
    InvalidCount(String),

    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
