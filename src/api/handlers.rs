//! API request handlers.

use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use axum::{
    Json,
    extract::{Multipart, State},
};

use crate::core::{self, DocumentFormat, SUPPORTED_EXTENSIONS};

use super::{
    error::ApiError,
    types::{ApiState, ConvertResponse, HealthResponse, OcrStatusResponse, SupportedFormatsResponse},
};

/// Convert endpoint handler.
///
/// POST /api/convert
///
/// Accepts multipart form data with a single `file` field. The upload is
/// spooled to a temp file carrying its original extension, converted via the
/// primary-then-fallback pipeline, and the temp file is removed afterwards,
/// including when conversion fails.
pub async fn convert_handler(
    State(state): State<ApiState>,
    mut multipart: Multipart,
) -> Result<Json<ConvertResponse>, ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(e.to_string()))?;
            upload = Some((filename, data.to_vec()));
        }
    }

    let (filename, data) = upload.ok_or_else(|| ApiError::bad_request("No file provided"))?;
    if filename.is_empty() {
        return Err(ApiError::bad_request("No file selected"));
    }

    // Reject anything outside the allow-list before touching the disk.
    let extension = core::extension_of(&filename)
        .ok_or_else(|| ApiError::bad_request("File type not allowed"))?;
    let format = DocumentFormat::from_extension(&extension)
        .map_err(|_| ApiError::bad_request("File type not allowed"))?;

    let temp_path = unique_temp_path(&extension);
    tokio::fs::write(&temp_path, &data)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to write upload: {}", e)))?;

    tracing::info!(filename = %filename, size = data.len(), "converting upload");

    let ocr = Arc::clone(&state.ocr);
    let primary = state.primary.clone();
    let task_path = temp_path.clone();
    let result = tokio::task::spawn_blocking(move || {
        core::dispatcher::convert(&task_path, format, &ocr, primary.as_deref())
    })
    .await;

    // The temp file goes away no matter how the task ended.
    let _ = tokio::fs::remove_file(&temp_path).await;

    let text = result.map_err(|e| ApiError::internal(format!("Conversion task failed: {}", e)))?;

    Ok(Json(ConvertResponse {
        success: true,
        text,
        filename,
    }))
}

/// Health check endpoint handler.
///
/// GET /api/health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "OCR API is running".to_string(),
    })
}

/// Supported formats endpoint handler.
///
/// GET /api/supported-formats
pub async fn supported_formats_handler() -> Json<SupportedFormatsResponse> {
    Json(SupportedFormatsResponse {
        formats: SUPPORTED_EXTENSIONS
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect(),
        description: "Supported file formats for OCR conversion".to_string(),
    })
}

/// OCR status endpoint handler.
///
/// GET /api/test-ocr
pub async fn test_ocr_handler(State(state): State<ApiState>) -> Json<OcrStatusResponse> {
    Json(OcrStatusResponse {
        tesseract_available: state.ocr.available(),
        tesseract_version: state.ocr.version().map(|v| v.to_string()),
    })
}

fn unique_temp_path(extension: &str) -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let unique_id = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "textfall_upload_{}_{}{}",
        std::process::id(),
        unique_id,
        extension
    ))
}
