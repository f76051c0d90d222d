use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::infra::config::{ApiKey, ServerConfig};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const RETRY_BASE_DELAY_MS: u64 = 500;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request to Gemini API timed out")]
    Timeout,

    #[error("Gemini API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("failed to reach Gemini API: {0}")]
    Http(#[source] reqwest::Error),

    #[error("no text in Gemini response")]
    EmptyResponse,
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: ApiKey,
    model: String,
    timeout: Duration,
    max_retries: u32,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

impl GeminiClient {
    pub fn new(api_key: ApiKey, config: &ServerConfig) -> Self {
        Self {
            api_key,
            model: config.model.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
            max_retries: config.max_retries,
            client: reqwest::Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `prompt` upstream and return the first candidate's text.
    ///
    /// Timeouts, connection failures and 5xx responses are retried with
    /// exponential backoff up to the configured retry budget.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let mut attempt = 0;
        loop {
            match self.complete_once(prompt).await {
                Ok(text) => return Ok(text),
                Err(err) if attempt < self.max_retries && is_retryable(&err) => {
                    let delay = Duration::from_millis(RETRY_BASE_DELAY_MS << attempt);
                    warn!(
                        "Gemini request failed ({err}), retrying in {}ms (attempt {}/{})",
                        delay.as_millis(),
                        attempt + 1,
                        self.max_retries
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn complete_once(&self, prompt: &str) -> Result<String, LlmError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_BASE_URL,
            self.model,
            self.api_key.expose()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else {
                    LlmError::Http(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(LlmError::Http)?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or(LlmError::EmptyResponse)
    }
}

fn is_retryable(err: &LlmError) -> bool {
    match err {
        LlmError::Timeout => true,
        LlmError::Api { status, .. } => (500..600).contains(status),
        LlmError::Http(e) => e.is_connect(),
        LlmError::EmptyResponse => false,
    }
}
