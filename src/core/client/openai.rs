//! Blocking client for OpenAI-compatible chat completion endpoints.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ChatClient, Outcome};
use crate::core::config::Settings;
use crate::core::constants::DEFAULT_TIMEOUT_SECS;
use crate::core::domain::ApiKey;
use crate::error::{ClientError, ConfigError, Result};

/// Chat completion client for `POST {endpoint}/chat/completions`.
#[derive(Debug, Clone)]
pub struct OpenAi {
    http: reqwest::blocking::Client,
    url: String,
    model: String,
}

impl OpenAi {
    /// Build a client for `endpoint` (an API base URL such as
    /// `https://api.openai.com/v1`).
    ///
    /// `timeout` bounds the whole request including the body; `None` means
    /// [`DEFAULT_TIMEOUT_SECS`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HttpClient` if the HTTP stack cannot be built.
    pub fn new(endpoint: &str, model: &str, timeout: Option<Duration>) -> Result<Self> {
        let timeout = timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("keyrelay/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            http,
            url: format!("{}/chat/completions", endpoint.trim_end_matches('/')),
            model: model.to_string(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(&settings.endpoint, &settings.model, settings.timeout())
    }

    fn send(&self, key: &ApiKey, prompt: &str) -> std::result::Result<String, ClientError> {
        let req = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(key.expose())
            .json(&req)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        debug!(%status, bytes = body.len(), "chat completion response");

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ClientError::RateLimited(error_message(&body)));
        }
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                ClientError::ResponseFormat("response missing choices[0].message.content".into())
            })
    }
}

impl ChatClient for OpenAi {
    fn complete(&self, key: &ApiKey, prompt: &str) -> Outcome {
        self.send(key, prompt).into()
    }
}

/// Pull `error.message` out of an error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.message)
        .unwrap_or_else(|| body.trim().to_string())
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
}
