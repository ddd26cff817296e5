//! Chat completion client seam.
//!
//! A client takes the credential as an explicit argument on every call and
//! holds no per-key state, so one instance serves the whole rotation.

mod openai;

pub use openai::OpenAi;

use crate::core::domain::ApiKey;
use crate::error::ClientError;

/// Result of one remote call.
#[derive(Debug)]
pub enum Outcome {
    /// The completion text.
    Success(String),
    /// The API refused the key for quota or throughput reasons.
    RateLimited,
    /// Anything else: network, authentication, malformed response.
    Failed(ClientError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

impl From<Result<String, ClientError>> for Outcome {
    fn from(result: Result<String, ClientError>) -> Self {
        match result {
            Ok(content) => Outcome::Success(content),
            Err(ClientError::RateLimited(_)) => Outcome::RateLimited,
            Err(e) => Outcome::Failed(e),
        }
    }
}

/// A hosted chat completion API.
pub trait ChatClient {
    /// Send `prompt` as the only user message, authenticated with `key`.
    ///
    /// Never fails: every error is folded into the returned [`Outcome`].
    fn complete(&self, key: &ApiKey, prompt: &str) -> Outcome;
}
