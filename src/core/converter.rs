//! Primary converter seam.
//!
//! The service first hands an upload to a generic document-to-text converter
//! when one is configured, and only falls back to the format strategies when
//! that produces nothing. No converter ships with this crate; the trait
//! exists so deployments can plug one in and so tests can fake the primary
//! path.

use std::path::Path;

use crate::error::Result;

/// A generic document-to-text converter tried before format fallback.
pub trait DocumentConverter: Send + Sync {
    /// Human-readable converter name, used in logs.
    fn name(&self) -> &str;

    /// Convert the file at `path` to plain text. An empty string means the
    /// converter ran but recovered nothing; the caller then falls back.
    fn convert(&self, path: &Path) -> Result<String>;
}
