//! OCR integration via the system `tesseract` binary.
//!
//! The engine is invoked as a subprocess with the image path and `stdout` as
//! the output target, so no intermediate files are created. Availability is
//! probed once at startup and carried as an explicit [`OcrRuntime`] value so
//! the dispatcher can be exercised in tests with a mocked capability.

use std::{path::Path, process::Command};

use crate::error::{Result, TextfallError};

/// Fixed engine parameters used by every configured recognition attempt.
///
/// PSM 6 assumes a single uniform block of text; OEM 3 lets the engine pick
/// between legacy and LSTM models.
pub const OCR_FIXED_ARGS: &[&str] = &["--psm", "6", "--oem", "3"];

/// Language preference order for configured recognition attempts: Vietnamese
/// only, English only, then combined. The first non-empty result wins, so the
/// order only decides which attempt pays the engine cost first.
pub const LANGUAGE_LADDER: &[&str] = &["vie", "eng", "vie+eng"];

/// OCR engine capability, computed once at process startup.
#[derive(Debug, Clone)]
pub struct OcrRuntime {
    available: bool,
    version: Option<String>,
}

impl OcrRuntime {
    /// Probe the system for a working `tesseract` binary.
    pub fn detect() -> Self {
        match Command::new("tesseract").arg("--version").output() {
            Ok(output) if output.status.success() => {
                let version = String::from_utf8_lossy(&output.stdout)
                    .lines()
                    .next()
                    .map(|line| line.trim().to_string());
                tracing::info!(version = version.as_deref(), "tesseract OCR is available");
                Self {
                    available: true,
                    version,
                }
            }
            _ => {
                tracing::warn!("tesseract not available - install it for image/scan OCR");
                Self {
                    available: false,
                    version: None,
                }
            }
        }
    }

    /// Build a runtime with an explicit availability flag, for embedding and
    /// tests.
    pub fn new(available: bool, version: Option<String>) -> Self {
        Self { available, version }
    }

    /// A runtime with no engine present.
    pub fn unavailable() -> Self {
        Self::new(false, None)
    }

    /// Whether the engine can be invoked.
    pub fn available(&self) -> bool {
        self.available
    }

    /// First line of `tesseract --version`, when known.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

/// Run one recognition pass over an image file.
///
/// `language` is a tesseract language spec such as `"vie"` or `"vie+eng"`;
/// `None` runs the engine's default. When `configured` is set the fixed
/// [`OCR_FIXED_ARGS`] parameters are appended, otherwise the engine runs
/// entirely with its defaults.
pub fn recognize(path: &Path, language: Option<&str>, configured: bool) -> Result<String> {
    let mut cmd = Command::new("tesseract");
    cmd.arg(path).arg("stdout");
    if let Some(lang) = language {
        cmd.args(["-l", lang]);
    }
    if configured {
        cmd.args(OCR_FIXED_ARGS);
    }

    let output = cmd
        .output()
        .map_err(|e| TextfallError::ocr_with_source("failed to invoke tesseract", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(TextfallError::ocr(format!(
            "tesseract exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
