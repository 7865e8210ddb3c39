//! Embedding generation for the CV and the job description.
//!
//! The vectors are logged and dropped; nothing downstream compares them.

use tracing::{debug, trace};

use crate::errors::PipelineError;
use crate::llm_client::EmbeddingBackend;

pub async fn generate_embedding(
    backend: &dyn EmbeddingBackend,
    model: &str,
    text: &str,
) -> Result<Vec<f32>, PipelineError> {
    let embedding = backend
        .embed(model, text)
        .await
        .map_err(|e| PipelineError::ModelUnavailable(format!("Embedding call failed: {e}")))?;

    if embedding.is_empty() {
        return Err(PipelineError::ModelUnavailable(
            "Embedding backend returned an empty vector".to_string(),
        ));
    }

    debug!(model, dimensions = embedding.len(), "Embedding generated");
    trace!(?embedding, "Embedding vector");
    Ok(embedding)
}
