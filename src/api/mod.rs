//! REST API server for textfall document conversion.
//!
//! Axum-based HTTP layer mirroring the upload workflow: receive a file,
//! spool it to a temp path, run primary-then-fallback conversion, delete the
//! temp file, return text or a diagnostic.
//!
//! # Endpoints
//!
//! - `POST /api/convert` - Convert an uploaded file to text (multipart form
//!   data, field `file`)
//! - `GET /api/health` - Health check
//! - `GET /api/supported-formats` - Extension allow-list
//! - `GET /api/test-ocr` - OCR engine availability and version
//!
//! # Examples
//!
//! ```bash
//! curl -F "file=@scan.png" http://localhost:5000/api/convert
//! curl http://localhost:5000/api/health
//! ```

mod error;
mod handlers;
mod server;
mod types;

pub use error::ApiError;
pub use server::{create_router, create_router_with_limits, serve};
pub use types::{
    ApiSizeLimits, ApiState, ConvertResponse, ErrorResponse, HealthResponse, OcrStatusResponse,
    SupportedFormatsResponse,
};
