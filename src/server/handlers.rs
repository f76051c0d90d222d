use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse, Json, Response};
use tracing::info;

use crate::domain::{SummarizeRequest, SummaryResponse, TaskKind, TextRequest};
use crate::error::ApiError;
use crate::nlp;
use crate::pdf;
use crate::prompts;

use super::AppState;

/// Landing page with a minimal client for the API.
pub async fn index() -> impl IntoResponse {
    Html(include_str!("../../static/index.html"))
}

fn require_text(text: &str) -> Result<&str, ApiError> {
    if text.is_empty() {
        Err(ApiError::EmptyText)
    } else {
        Ok(text)
    }
}

/// POST /summarize — local extractive summary, no upstream call.
pub async fn summarize_local(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let text = require_text(&req.text)?;
    let sentence_count = req
        .sentence_count
        .unwrap_or(state.config.default_sentence_count);
    if sentence_count == 0 {
        return Err(ApiError::InvalidSentenceCount);
    }

    let summary = nlp::summarize(text, sentence_count);
    Ok(Json(SummaryResponse { summary }))
}

pub async fn summarize_gemini(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    forward(state, req, TaskKind::Summary).await
}

pub async fn summarize_gemini_bullets(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    forward(state, req, TaskKind::Bullets).await
}

pub async fn summarize_gemini_takeaways(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    forward(state, req, TaskKind::Takeaways).await
}

pub async fn ask_gemini(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    forward(state, req, TaskKind::Question).await
}

/// Shared path for the four Gemini task variants.
async fn forward(
    state: AppState,
    req: TextRequest,
    task: TaskKind,
) -> Result<Json<SummaryResponse>, ApiError> {
    let text = require_text(&req.text)?;
    info!("forwarding {} chars to {}", text.len(), state.gemini.model());

    let prompt = task.prompt(text);
    let summary = state.gemini.complete(&prompt).await?;
    Ok(Json(SummaryResponse { summary }))
}

/// POST /extract-links
pub async fn extract_links(
    Json(req): Json<TextRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let text = require_text(&req.text)?;
    let links = nlp::extract_links(text);

    let summary = if links.is_empty() {
        prompts::MSG_NO_LINKS_FOUND.to_string()
    } else {
        links.join("\n")
    };
    Ok(Json(SummaryResponse { summary }))
}

/// POST /generate-pdf — renders the text and streams it back as an
/// attachment.
pub async fn generate_pdf(Json(req): Json<TextRequest>) -> Result<Response, ApiError> {
    let text = require_text(&req.text)?;
    let bytes = pdf::render(text).map_err(ApiError::PdfRender)?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", pdf::ATTACHMENT_FILENAME),
        ),
    ];
    Ok((headers, bytes).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::{ApiKey, ServerConfig};
    use crate::llm::GeminiClient;
    use axum::http::StatusCode;

    fn test_state() -> AppState {
        let config = ServerConfig::default();
        let gemini = GeminiClient::new(ApiKey::for_tests("test-key"), &config);
        AppState { config, gemini }
    }

    fn empty_body() -> TextRequest {
        serde_json::from_str("{}").unwrap()
    }

    #[tokio::test]
    async fn summarize_local_rejects_missing_text() {
        let req: SummarizeRequest = serde_json::from_str("{}").unwrap();
        let err = summarize_local(State(test_state()), Json(req))
            .await
            .err()
            .unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "No text provided");
    }

    #[tokio::test]
    async fn summarize_local_rejects_zero_sentence_count() {
        let req: SummarizeRequest =
            serde_json::from_str(r#"{"text":"Some text.","sentence_count":0}"#).unwrap();
        let err = summarize_local(State(test_state()), Json(req))
            .await
            .err()
            .unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn summarize_local_returns_a_summary() {
        let req: SummarizeRequest = serde_json::from_str(
            r#"{"text":"Rust is fast. Rust is safe. Unrelated filler sentence here.","sentence_count":1}"#,
        )
        .unwrap();
        let Json(response) = summarize_local(State(test_state()), Json(req))
            .await
            .unwrap();
        assert!(!response.summary.is_empty());
    }

    #[tokio::test]
    async fn gemini_endpoints_reject_missing_text_before_any_upstream_call() {
        let err = summarize_gemini(State(test_state()), Json(empty_body()))
            .await
            .err()
            .unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = ask_gemini(State(test_state()), Json(empty_body()))
            .await
            .err()
            .unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn extract_links_joins_matches_with_newlines() {
        let req: TextRequest =
            serde_json::from_str(r#"{"text":"see http://a.com and www.b.org"}"#).unwrap();
        let Json(response) = extract_links(Json(req)).await.unwrap();
        assert_eq!(response.summary, "http://a.com\nwww.b.org");
    }

    #[tokio::test]
    async fn extract_links_returns_sentinel_when_empty() {
        let req: TextRequest = serde_json::from_str(r#"{"text":"no links here"}"#).unwrap();
        let Json(response) = extract_links(Json(req)).await.unwrap();
        assert_eq!(response.summary, "No links found in the text.");
    }

    #[tokio::test]
    async fn generate_pdf_streams_an_attachment() {
        let req: TextRequest =
            serde_json::from_str(r#"{"text":"café → 日本"}"#).unwrap();
        let response = generate_pdf(Json(req)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"summary.pdf\""
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn generate_pdf_rejects_missing_text() {
        let err = generate_pdf(Json(empty_body())).await.err().unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
