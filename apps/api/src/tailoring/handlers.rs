//! Axum route handlers for the Tailoring API.

use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tailoring::extractor::{extract_sections, CategorizedLines};
use crate::tailoring::structure::update_resume_with;

/// File name offered to the browser for upload downloads.
pub const DOWNLOAD_FILE_NAME: &str = "updated_resume.txt";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub sections: CategorizedLines,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub resume_text: String,
    pub jd_text: String,
    /// Persist the result through the output sink.
    #[serde(default)]
    pub save: bool,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub updated_resume: String,
    pub sections: CategorizedLines,
    pub output_path: Option<String>,
    pub generated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn require_jd(jd_text: &str) -> Result<(), AppError> {
    if jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }
    Ok(())
}

fn require_resume(resume_text: &str) -> Result<(), AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume cannot be empty".to_string()));
    }
    Ok(())
}

/// Saved files get a unique name so concurrent requests never overwrite each other.
fn unique_output_name() -> String {
    format!("updated_resume-{}.txt", Uuid::new_v4())
}

fn malformed(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Malformed multipart body: {e}"))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jd/classify
///
/// Previews how each JD line is categorized before tailoring.
pub async fn handle_classify_jd(
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    require_jd(&request.jd_text)?;
    let sections = extract_sections(&request.jd_text);
    Ok(Json(ClassifyResponse { sections }))
}

/// POST /api/v1/resumes/update
///
/// Tailors a resume to a JD and returns the text, optionally saving it.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<UpdateResponse>, AppError> {
    require_jd(&request.jd_text)?;
    require_resume(&request.resume_text)?;

    let sections = extract_sections(&request.jd_text);
    let updated_resume = update_resume_with(&request.resume_text, &sections);

    let output_path = if request.save {
        let path = state.sink.save(&unique_output_name(), &updated_resume).await?;
        Some(path.display().to_string())
    } else {
        None
    };

    info!(
        resume_bytes = request.resume_text.len(),
        updated_bytes = updated_resume.len(),
        saved = output_path.is_some(),
        "Resume tailored"
    );

    Ok(Json(UpdateResponse {
        updated_resume,
        sections,
        output_path,
        generated_at: Utc::now(),
    }))
}

/// POST /api/v1/resumes/upload
///
/// Multipart form with a `resume` text file and a `jd_text` field. Responds
/// with the tailored resume as a downloadable attachment and saves a copy.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut resume: Option<(Option<String>, Vec<u8>)> = None;
    let mut jd_text: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await.map_err(malformed)?;
                resume = Some((file_name, bytes.to_vec()));
            }
            "jd_text" => jd_text = Some(field.text().await.map_err(malformed)?),
            _ => {}
        }
    }

    let (file_name, bytes) =
        resume.ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;
    if let Some(file_name) = &file_name {
        if !file_name.to_lowercase().ends_with(".txt") {
            return Err(AppError::Validation(format!(
                "resume must be a .txt file, got '{file_name}'"
            )));
        }
    }
    let jd_text = jd_text.unwrap_or_default();
    require_jd(&jd_text)?;

    let resume_text = String::from_utf8(bytes)
        .map_err(|_| AppError::UnprocessableEntity("resume must be UTF-8 text".to_string()))?;
    require_resume(&resume_text)?;

    let sections = extract_sections(&jd_text);
    let updated_resume = update_resume_with(&resume_text, &sections);
    let path = state.sink.save(&unique_output_name(), &updated_resume).await?;

    info!(
        upload = file_name.as_deref().unwrap_or("<unnamed>"),
        path = %path.display(),
        "Uploaded resume tailored"
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_FILE_NAME}\""),
            ),
        ],
        updated_resume,
    )
        .into_response())
}
