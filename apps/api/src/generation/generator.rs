//! Upload pipeline: orchestrates one cover letter request.
//!
//! Flow: decode fileContent → extract text → embed CV + description (concurrently)
//!       → generate cover letter → return.
//!
//! Each step short-circuits on failure; the error is returned as a tagged
//! `PipelineError` and the response layer turns it into the failure body.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::PipelineError;
use crate::extraction::document::DocumentContent;
use crate::generation::cover_letter::generate_cover_letter;
use crate::generation::embeddings::generate_embedding;
use crate::state::AppState;

/// Body of `POST /upload`. Missing fields default to empty so that a bare `{}`
/// still reaches the pipeline and fails at extraction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    #[serde(default)]
    pub file_content: DocumentContent,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetter {
    pub cover_letter: String,
}

pub async fn run_pipeline(
    state: &AppState,
    request: UploadRequest,
) -> Result<CoverLetter, PipelineError> {
    // Step 1: Extract CV text
    let bytes = request.file_content.decode()?;
    let cv_text = state.extractor.extract(bytes).await?;
    info!("CV text extracted ({} chars)", cv_text.chars().count());

    // Step 2: Embeddings (no data dependency between the two calls)
    let model = state.config.embedding_model.as_str();
    let (cv_embedding, job_embedding) = tokio::try_join!(
        generate_embedding(state.embedder.as_ref(), model, &cv_text),
        generate_embedding(state.embedder.as_ref(), model, &request.description),
    )?;
    info!(
        "Embeddings generated (length): {} {}",
        cv_embedding.len(),
        job_embedding.len()
    );

    // Step 3: Cover letter
    let cover_letter = generate_cover_letter(
        state.chat.as_ref(),
        &state.config.chat_model,
        &cv_text,
        &request.description,
    )
    .await?;
    info!(
        "Cover letter generated ({} chars)",
        cover_letter.chars().count()
    );

    Ok(CoverLetter { cover_letter })
}
