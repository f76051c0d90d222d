//! Error taxonomy for the HTTP surface.
//!
//! Internal failures map to a small closed set of user-facing kinds. Full
//! detail is logged server-side and never echoed to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;
use tracing::error;

use crate::domain::ErrorResponse;
use crate::llm::LlmError;
use crate::prompts;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", prompts::MSG_NO_TEXT)]
    EmptyText,

    #[error("{}", prompts::MSG_INVALID_SENTENCE_COUNT)]
    InvalidSentenceCount,

    #[error("{}", prompts::MSG_UPSTREAM_TIMEOUT)]
    UpstreamTimeout,

    #[error("{}", prompts::MSG_UPSTREAM_ERROR)]
    Upstream(#[source] LlmError),

    #[error("{}", prompts::MSG_PDF_FAILED)]
    PdfRender(#[source] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::EmptyText | ApiError::InvalidSentenceCount => StatusCode::BAD_REQUEST,
            ApiError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::PdfRender(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Timeout => ApiError::UpstreamTimeout,
            other => ApiError::Upstream(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            match &self {
                ApiError::Upstream(source) => error!("upstream request failed: {source}"),
                ApiError::PdfRender(source) => error!("pdf rendering failed: {source:#}"),
                ApiError::UpstreamTimeout => error!("upstream request timed out"),
                _ => error!("request failed: {self}"),
            }
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
