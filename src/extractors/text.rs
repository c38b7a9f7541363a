//! Plain text extraction.

use std::path::Path;

use crate::error::Result;

/// Read the whole file as UTF-8 text, verbatim.
///
/// No trimming or newline handling; `.txt` uploads come back exactly as
/// stored.
pub fn extract_text_file(path: &Path) -> Result<String> {
    // IO errors bubble up unchanged; the dispatcher turns them into a
    // diagnostic string at its boundary.
    let content = std::fs::read_to_string(path)?;
    Ok(content)
}
