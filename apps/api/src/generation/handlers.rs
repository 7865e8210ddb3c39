//! Axum route handlers for the cover letter API.

use axum::{extract::State, Json};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::errors::PipelineError;
use crate::generation::generator::{run_pipeline, CoverLetter, UploadRequest};
use crate::state::AppState;

/// POST /upload
///
/// Full pipeline: extract → embed → generate.
/// Success and failure are both answered with 200; failures carry `"status": "fail"`.
pub async fn handle_upload(
    State(state): State<AppState>,
    Json(request): Json<UploadRequest>,
) -> Result<Json<CoverLetter>, PipelineError> {
    let request_id = Uuid::new_v4();
    let cover_letter = run_pipeline(&state, request)
        .instrument(info_span!("upload", %request_id))
        .await?;

    Ok(Json(cover_letter))
}
