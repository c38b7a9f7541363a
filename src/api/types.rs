//! API request and response types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{core::DocumentConverter, ocr::OcrRuntime};

/// API server size limit configuration.
///
/// Uploads are capped at 16 MB by default. Override via
/// `TEXTFALL_MAX_UPLOAD_SIZE_MB` or programmatically when building the
/// router.
#[derive(Debug, Clone, Copy)]
pub struct ApiSizeLimits {
    /// Maximum size of the entire request body in bytes.
    pub max_request_body_bytes: usize,
}

impl Default for ApiSizeLimits {
    fn default() -> Self {
        Self {
            max_request_body_bytes: 16 * 1024 * 1024,
        }
    }
}

impl ApiSizeLimits {
    /// Size limits from an MB value.
    pub fn from_mb(max_request_body_mb: usize) -> Self {
        Self {
            max_request_body_bytes: max_request_body_mb * 1024 * 1024,
        }
    }
}

/// Shared server state.
///
/// The OCR capability is probed once at startup; the primary converter is
/// optional and tried before format fallback when present.
#[derive(Clone)]
pub struct ApiState {
    pub ocr: Arc<OcrRuntime>,
    pub primary: Option<Arc<dyn DocumentConverter>>,
}

/// Successful conversion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub success: bool,
    pub text: String,
    pub filename: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Supported formats response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportedFormatsResponse {
    pub formats: Vec<String>,
    pub description: String,
}

/// OCR engine status response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrStatusResponse {
    pub tesseract_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tesseract_version: Option<String>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
