use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure of any step of the upload pipeline.
///
/// Implements `IntoResponse` so the upload handler can return
/// `Result<Json<CoverLetter>, PipelineError>`. Failures are still delivered
/// with `200 OK`: callers detect them by the `"status": "fail"` marker in the body.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Language model returned an empty cover letter")]
    GenerationEmpty,
}

impl PipelineError {
    /// Stable machine-readable discriminant carried in the failure body.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Extraction(_) => "extraction",
            PipelineError::ModelUnavailable(_) => "model_unavailable",
            PipelineError::GenerationEmpty => "generation_empty",
        }
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        tracing::error!(kind = self.kind(), "Cover letter pipeline failed: {self}");

        let body = Json(json!({
            "status": "fail",
            "error": {
                "kind": self.kind(),
                "message": self.to_string()
            }
        }));

        (StatusCode::OK, body).into_response()
    }
}
