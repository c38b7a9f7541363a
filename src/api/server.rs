//! API server setup and configuration.

use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::{
    core::DocumentConverter,
    error::{Result, TextfallError},
    ocr::OcrRuntime,
};

use super::{
    handlers::{convert_handler, health_handler, supported_formats_handler, test_ocr_handler},
    types::{ApiSizeLimits, ApiState},
};

/// Parse the upload size limit from `TEXTFALL_MAX_UPLOAD_SIZE_MB`.
///
/// Falls back to the 16 MB default when unset or invalid.
fn parse_size_limits_from_env() -> ApiSizeLimits {
    if let Ok(value) = std::env::var("TEXTFALL_MAX_UPLOAD_SIZE_MB") {
        match value.parse::<usize>() {
            Ok(mb) if mb > 0 => {
                tracing::info!("Upload size limit configured from environment: {} MB", mb);
                return ApiSizeLimits::from_mb(mb);
            }
            _ => {
                tracing::warn!(
                    "Failed to parse TEXTFALL_MAX_UPLOAD_SIZE_MB='{}', using default",
                    value
                );
            }
        }
    }
    ApiSizeLimits::default()
}

/// Create the API router with default size limits.
///
/// Public so the router can be embedded in a larger application.
pub fn create_router(ocr: OcrRuntime, primary: Option<Arc<dyn DocumentConverter>>) -> Router {
    create_router_with_limits(ocr, primary, ApiSizeLimits::default())
}

/// Create the API router with custom size limits.
pub fn create_router_with_limits(
    ocr: OcrRuntime,
    primary: Option<Arc<dyn DocumentConverter>>,
    limits: ApiSizeLimits,
) -> Router {
    let state = ApiState {
        ocr: Arc::new(ocr),
        primary,
    };

    // Default CORS is permissive for development convenience; production
    // deployments set TEXTFALL_CORS_ORIGINS to an explicit list.
    let cors_layer = if let Ok(origins_str) = std::env::var("TEXTFALL_CORS_ORIGINS") {
        let origins: Vec<_> = origins_str
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .filter_map(|s| s.trim().parse::<axum::http::HeaderValue>().ok())
            .collect();

        if !origins.is_empty() {
            tracing::info!("CORS configured with {} explicit allowed origin(s)", origins.len());
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            tracing::warn!("TEXTFALL_CORS_ORIGINS set but empty/invalid - falling back to permissive CORS");
            CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
        }
    } else {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    };

    Router::new()
        .route("/api/convert", post(convert_handler))
        .route("/api/health", get(health_handler))
        .route("/api/supported-formats", get(supported_formats_handler))
        .route("/api/test-ocr", get(test_ocr_handler))
        .layer(DefaultBodyLimit::max(limits.max_request_body_bytes))
        .layer(RequestBodyLimitLayer::new(limits.max_request_body_bytes))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the API server.
///
/// Probes the OCR engine once, reads the upload size limit from the
/// environment, binds, and serves until the process exits.
pub async fn serve(host: impl AsRef<str>, port: u16) -> Result<()> {
    let ip: IpAddr = host
        .as_ref()
        .parse()
        .map_err(|e| TextfallError::validation(format!("Invalid host address: {}", e)))?;

    let ocr = OcrRuntime::detect();
    let limits = parse_size_limits_from_env();

    let addr = SocketAddr::new(ip, port);
    let app = create_router_with_limits(ocr, None, limits);

    tracing::info!("Starting textfall API server on http://{}:{}", ip, port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(TextfallError::Io)?;

    axum::serve(listener, app)
        .await
        .map_err(|e| TextfallError::Other(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_router() {
        let _router = create_router(OcrRuntime::unavailable(), None);
    }

    #[test]
    fn test_default_limit_is_16_mb() {
        assert_eq!(ApiSizeLimits::default().max_request_body_bytes, 16 * 1024 * 1024);
    }

    #[test]
    fn test_from_mb() {
        assert_eq!(ApiSizeLimits::from_mb(2).max_request_body_bytes, 2 * 1024 * 1024);
    }
}
