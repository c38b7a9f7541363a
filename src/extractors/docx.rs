//! DOCX paragraph extraction.
//!
//! Reads `word/document.xml` out of the Office Open XML archive and emits
//! every paragraph's text in document order, one per line. Formatting, tables
//! and headers are out of scope for the fallback path.

use std::{io::Read, path::Path};

use roxmltree::Document;
use zip::ZipArchive;

use crate::error::{Result, TextfallError};

const W_NAMESPACE: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Extract paragraph texts joined with newlines.
pub fn extract_docx(path: &Path) -> Result<String> {
    let document_xml = read_archive_file(path, "word/document.xml")?;
    let xml_str = std::str::from_utf8(&document_xml)
        .map_err(|_| TextfallError::parsing("Invalid UTF-8 in document XML".to_string()))?;

    let doc = Document::parse(xml_str)
        .map_err(|e| TextfallError::parsing(format!("Failed to parse document XML: {}", e)))?;

    let mut text = String::new();
    for paragraph in doc
        .descendants()
        .filter(|n| n.has_tag_name((W_NAMESPACE, "p")))
    {
        for t_node in paragraph
            .descendants()
            .filter(|n| n.has_tag_name((W_NAMESPACE, "t")))
        {
            if let Some(t) = t_node.text() {
                text.push_str(t);
            }
        }
        text.push('\n');
    }

    tracing::debug!(chars = text.len(), "extracted DOCX paragraphs");
    Ok(text)
}

fn read_archive_file(path: &Path, name: &str) -> Result<Vec<u8>> {
    // IO errors must bubble up unchanged.
    let file = std::fs::File::open(path)?;

    let mut archive = match ZipArchive::new(file) {
        Ok(arc) => arc,
        Err(zip::result::ZipError::Io(io_err)) => return Err(io_err.into()),
        Err(e) => {
            return Err(TextfallError::parsing(format!(
                "Failed to read DOCX archive (invalid format): {}",
                e
            )));
        }
    };

    match archive.by_name(name) {
        Ok(mut entry) => {
            let mut contents = Vec::new();
            entry.read_to_end(&mut contents)?;
            Ok(contents)
        }
        Err(zip::result::ZipError::FileNotFound) => Err(TextfallError::parsing(format!(
            "{} not found in archive",
            name
        ))),
        Err(zip::result::ZipError::Io(io_err)) => Err(io_err.into()),
        Err(e) => Err(TextfallError::parsing(format!("Zip error: {}", e))),
    }
}
