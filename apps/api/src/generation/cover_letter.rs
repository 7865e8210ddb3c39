//! Cover Letter Generation: one chat call over the CV and the job description.

use tracing::debug;

use crate::errors::PipelineError;
use crate::generation::prompts::{cover_letter_user_prompt, COVER_LETTER_SYSTEM};
use crate::llm_client::{ChatBackend, ChatMessage};

/// Characters of CV text included in the prompt. Fixed; the job description is never cut.
pub const CV_PROMPT_CHAR_LIMIT: usize = 4000;

/// Returns the first `limit` characters of `text`, never splitting a UTF-8 sequence.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

pub fn build_messages(cv_text: &str, job_description: &str) -> Vec<ChatMessage> {
    let cv_excerpt = truncate_chars(cv_text, CV_PROMPT_CHAR_LIMIT);
    vec![
        ChatMessage::system(COVER_LETTER_SYSTEM),
        ChatMessage::user(cover_letter_user_prompt(cv_excerpt, job_description)),
    ]
}

/// Returns the model's reply verbatim. A blank reply is `GenerationEmpty`.
pub async fn generate_cover_letter(
    backend: &dyn ChatBackend,
    model: &str,
    cv_text: &str,
    job_description: &str,
) -> Result<String, PipelineError> {
    let messages = build_messages(cv_text, job_description);

    let letter = backend
        .chat(model, &messages)
        .await
        .map_err(|e| PipelineError::ModelUnavailable(format!("Chat call failed: {e}")))?;

    if letter.trim().is_empty() {
        return Err(PipelineError::GenerationEmpty);
    }

    debug!(model, chars = letter.chars().count(), "Cover letter generated");
    Ok(letter)
}
