//! Image OCR extraction.
//!
//! Recognition runs through a fixed language-preference ladder: Vietnamese
//! only, then English only, then combined Vietnamese+English, each with the
//! fixed engine parameters. The first attempt producing non-empty trimmed
//! text wins. When every configured attempt comes back empty, one last pass
//! runs with engine defaults.

use std::path::Path;

use crate::{
    error::Result,
    ocr::{self, LANGUAGE_LADDER, OcrRuntime},
    text::normalize,
    types::ExtractionOutcome,
};

/// OCR an image file, normalizing any recognized text.
pub fn extract_image(path: &Path, ocr: &OcrRuntime) -> Result<ExtractionOutcome> {
    extract_image_with(path, ocr, ocr::recognize)
}

/// Ladder driver with an injectable recognizer, so the attempt sequence can
/// be exercised without an engine on PATH.
fn extract_image_with<F>(path: &Path, ocr: &OcrRuntime, recognize: F) -> Result<ExtractionOutcome>
where
    F: Fn(&Path, Option<&str>, bool) -> Result<String>,
{
    if !ocr.available() {
        return Ok(ExtractionOutcome::Unavailable(
            "Tesseract OCR is not installed. Install it to extract text from images and scans."
                .to_string(),
        ));
    }

    for &language in LANGUAGE_LADDER {
        match recognize(path, Some(language), true) {
            Ok(text) if !text.trim().is_empty() => {
                tracing::debug!(language, chars = text.len(), "OCR attempt succeeded");
                return Ok(ExtractionOutcome::Text(normalize(&text)));
            }
            Ok(_) => {
                tracing::debug!(language, "OCR attempt produced no text");
            }
            Err(e) => {
                tracing::warn!(language, error = %e, "OCR attempt failed");
            }
        }
    }

    // Last resort: let the engine run entirely with its defaults. An error
    // here propagates and becomes the diagnostic string.
    let text = recognize(path, None, false)?;
    if text.trim().is_empty() {
        Ok(ExtractionOutcome::Unavailable(
            "No text found in image.".to_string(),
        ))
    } else {
        Ok(ExtractionOutcome::Text(normalize(&text)))
    }
}
