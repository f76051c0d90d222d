use serde::{Deserialize, Serialize};

use crate::prompts;

/// The four Gemini task variants. They share one request path and differ
/// only by instruction string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Summary,
    Bullets,
    Takeaways,
    Question,
}

impl TaskKind {
    pub fn instruction(&self) -> &'static str {
        match self {
            TaskKind::Summary => prompts::PROMPT_CONCISE_SUMMARY,
            TaskKind::Bullets => prompts::PROMPT_BULLET_POINTS,
            TaskKind::Takeaways => prompts::PROMPT_KEY_TAKEAWAYS,
            TaskKind::Question => prompts::PROMPT_ANSWER_QUESTION,
        }
    }

    /// Full prompt for this task over `text`.
    pub fn prompt(&self, text: &str) -> String {
        prompts::task_prompt(self.instruction(), text)
    }
}

/// Body of every text-accepting endpoint. A missing `text` key deserializes
/// as the empty string so `{}` and `{"text":""}` are rejected identically.
#[derive(Debug, Clone, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: String,
}

/// Body of the local `/summarize` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: String,
    pub sentence_count: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
