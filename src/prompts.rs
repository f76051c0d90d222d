/// All user-facing strings and Gemini task instructions for Briefly
///
/// This module centralizes text constants for easy maintenance

// Gemini task instructions
pub const PROMPT_CONCISE_SUMMARY: &str = "Provide a concise summary of the following text";
pub const PROMPT_BULLET_POINTS: &str =
    "Summarize the following text into a bulleted list of key points";
pub const PROMPT_KEY_TAKEAWAYS: &str = "Extract the key takeaways from this text";
pub const PROMPT_ANSWER_QUESTION: &str = "Answer the following question";

// API responses
pub const MSG_NO_TEXT: &str = "No text provided";
pub const MSG_NO_LINKS_FOUND: &str = "No links found in the text.";
pub const MSG_INVALID_SENTENCE_COUNT: &str = "sentence_count must be at least 1";
pub const MSG_UPSTREAM_TIMEOUT: &str = "Summarization service timed out";
pub const MSG_UPSTREAM_ERROR: &str = "Summarization service unavailable";
pub const MSG_PDF_FAILED: &str = "PDF rendering failed";

// CLI messages
pub const MSG_NO_API_KEY: &str = "No Gemini API key configured";
pub const MSG_API_KEY_INSTRUCTION: &str =
    "Set this environment variable:\n  export BRIEFLY_GEMINI_API_KEY=your-key";
pub const MSG_EMPTY_INPUT: &str = "Input text is empty";

/// Build the full prompt sent upstream: instruction, colon, blank line, text.
pub fn task_prompt(instruction: &str, text: &str) -> String {
    format!("{instruction}:\n\n{text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_joins_instruction_and_text() {
        let prompt = task_prompt(PROMPT_ANSWER_QUESTION, "What is Rust?");
        assert_eq!(prompt, "Answer the following question:\n\nWhat is Rust?");
    }
}
