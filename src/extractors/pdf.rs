//! PDF text-layer extraction using lopdf.
//!
//! Pages are walked in document order and their text layers concatenated
//! with newline separators. Scanned PDFs with no text layer come back empty;
//! rendering pages to images for OCR is deliberately not implemented, and
//! the dispatcher reports that as a diagnostic rather than failing silently.

use std::path::Path;

use crate::error::Result;

/// Extract the text layer of every page, joined with newlines.
///
/// Pages whose content streams cannot be decoded are skipped with a warning
/// instead of aborting the whole document.
pub fn extract_pdf(path: &Path) -> Result<String> {
    let document = lopdf::Document::load(path)?;
    let pages = document.get_pages();
    tracing::debug!(page_count = pages.len(), "loaded PDF");

    let mut text = String::new();
    for page_number in pages.keys() {
        match document.extract_text(&[*page_number]) {
            Ok(page_text) => {
                if !page_text.is_empty() {
                    text.push_str(&page_text);
                    text.push('\n');
                    tracing::debug!(
                        page = page_number,
                        chars = page_text.len(),
                        "extracted PDF page"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(page = page_number, error = %e, "failed to extract PDF page text");
            }
        }
    }

    Ok(text)
}
