//! textfall API server binary.
//!
//! Host and port come from `TEXTFALL_HOST` / `TEXTFALL_PORT`, defaulting to
//! 0.0.0.0:5000.

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> textfall::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let host = std::env::var("TEXTFALL_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("TEXTFALL_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(5000);

    textfall::api::serve(host, port).await
}
