//! Extraction dispatcher.
//!
//! Routes a file to one of six format strategies and reports the result as
//! data. The contract at this boundary: `extract` never returns an error or
//! panics for a supported format; every strategy failure degrades to an
//! [`ExtractionOutcome::Unavailable`] carrying the failure message verbatim.

use std::path::Path;

use crate::{
    core::{converter::DocumentConverter, formats::DocumentFormat},
    error::Result,
    extractors,
    ocr::OcrRuntime,
    types::ExtractionOutcome,
};

/// Generic fallback message for strategies that ran but recovered nothing.
const NO_TEXT_MESSAGE: &str = "No text could be extracted from this file.";

/// Run the fallback extraction strategy for `format` against `path`.
///
/// `ocr` is the engine capability computed at startup; the image strategy
/// and the scanned-PDF diagnostics depend on it.
pub fn extract(path: &Path, format: DocumentFormat, ocr: &OcrRuntime) -> ExtractionOutcome {
    tracing::debug!(path = %path.display(), ?format, "running fallback extraction");

    let result = run_strategy(path, format, ocr);

    match result {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!(path = %path.display(), ?format, error = %e, "fallback extraction failed");
            ExtractionOutcome::Unavailable(e.to_string())
        }
    }
}

/// Full conversion pipeline: primary converter first, format fallback second.
///
/// Always produces a string for the caller: either recovered text or the
/// diagnostic explaining why nothing was recovered. A primary converter that
/// errors or returns only whitespace simply hands over to the fallback.
pub fn convert(
    path: &Path,
    format: DocumentFormat,
    ocr: &OcrRuntime,
    primary: Option<&dyn DocumentConverter>,
) -> String {
    if let Some(converter) = primary {
        match converter.convert(path) {
            Ok(text) if !text.trim().is_empty() => {
                tracing::debug!(converter = converter.name(), chars = text.len(), "primary converter succeeded");
                return text;
            }
            Ok(_) => {
                tracing::debug!(converter = converter.name(), "primary converter produced no text, falling back");
            }
            Err(e) => {
                tracing::warn!(converter = converter.name(), error = %e, "primary converter failed, falling back");
            }
        }
    }

    match extract(path, format, ocr) {
        ExtractionOutcome::Text(text) => text,
        ExtractionOutcome::Unavailable(reason) => reason,
    }
}

fn run_strategy(path: &Path, format: DocumentFormat, ocr: &OcrRuntime) -> Result<ExtractionOutcome> {
    match format {
        DocumentFormat::Png | DocumentFormat::Jpeg | DocumentFormat::Gif => {
            extractors::image::extract_image(path, ocr)
        }
        DocumentFormat::Pdf => {
            let text = extractors::pdf::extract_pdf(path)?;
            if text.trim().is_empty() {
                Ok(ExtractionOutcome::Unavailable(scanned_pdf_message(ocr)))
            } else {
                Ok(ExtractionOutcome::Text(text))
            }
        }
        DocumentFormat::Docx => Ok(text_or_empty(extractors::docx::extract_docx(path)?)),
        DocumentFormat::Xlsx => Ok(text_or_empty(extractors::excel::extract_xlsx(path)?)),
        DocumentFormat::Pptx => Ok(text_or_empty(extractors::pptx::extract_pptx(path)?)),
        DocumentFormat::Txt => Ok(text_or_empty(extractors::text::extract_text_file(path)?)),
    }
}

/// Wrap recovered text, degrading all-whitespace output to `Unavailable`.
///
/// The content itself is never trimmed; only the emptiness check is.
fn text_or_empty(text: String) -> ExtractionOutcome {
    if text.trim().is_empty() {
        ExtractionOutcome::Unavailable(NO_TEXT_MESSAGE.to_string())
    } else {
        ExtractionOutcome::Text(text)
    }
}

/// Diagnostic for a PDF with no text layer. PDF-page OCR is deliberately
/// unimplemented, and the message distinguishes whether installing the
/// engine would even help.
fn scanned_pdf_message(ocr: &OcrRuntime) -> String {
    if ocr.available() {
        "This PDF contains scanned content. OCR for PDF scans is not implemented yet. \
         Try converting PDF pages to images first."
            .to_string()
    } else {
        "This PDF contains scanned content. Install Tesseract OCR to extract text from scanned PDFs."
            .to_string()
    }
}
