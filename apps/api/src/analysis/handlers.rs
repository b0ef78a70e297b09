//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extract::{extract_text, DocumentKind};
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeTextRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// An uploaded resume file as received from the multipart body.
struct ResumeUpload {
    bytes: Bytes,
    kind: DocumentKind,
}

/// POST /analyse
///
/// Multipart body with a `resume` file part and a `jobDescription` text part.
pub async fn handle_analyse_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut upload: Option<ResumeUpload> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let kind = DocumentKind::detect(field.content_type(), field.file_name());
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    upload = Some(ResumeUpload { bytes, kind });
                }
            }
            Some(JOB_DESCRIPTION_FIELD) => {
                job_description = Some(field.text().await?);
            }
            other => warn!("Ignoring unexpected multipart field {:?}", other),
        }
    }

    let (upload, job_description) = match (upload, job_description) {
        (Some(upload), Some(jd)) if !jd.trim().is_empty() => (upload, jd),
        _ => {
            return Err(AppError::Validation(
                "Resume and job description are required".to_string(),
            ))
        }
    };

    info!(kind = ?upload.kind, size = upload.bytes.len(), "resume upload received");
    let resume_text = extract_upload(upload).await?;

    let result = state.analyzer.analyze(&resume_text, &job_description).await?;
    Ok(Json(result))
}

/// POST /api/v1/analysis
///
/// JSON variant for callers that already hold decoded resume text.
pub async fn handle_analyse_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let result = state
        .analyzer
        .analyze(&request.resume_text, &request.job_description)
        .await?;
    Ok(Json(result))
}

/// Decodes the upload off the async runtime. A panicking decoder is reported
/// as an unreadable document.
async fn extract_upload(upload: ResumeUpload) -> Result<String, AppError> {
    let joined = tokio::task::spawn_blocking(move || extract_text(&upload.bytes, upload.kind)).await;

    match joined {
        Ok(extracted) => Ok(extracted?),
        Err(e) if e.is_panic() => Err(AppError::UnprocessableEntity(
            "Could not read the uploaded document".to_string(),
        )),
        Err(e) => Err(AppError::Internal(e.into())),
    }
}
