//! Supported document formats and extension handling.
//!
//! The allow-list is deliberately closed: requests for anything outside it
//! are rejected before reaching the dispatcher.

use crate::error::{Result, TextfallError};

/// Extensions accepted for upload, lowercase with leading dot.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".pdf", ".docx", ".xlsx", ".pptx", ".txt",
];

/// A document format the fallback dispatcher knows how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Png,
    Jpeg,
    Gif,
    Pdf,
    Docx,
    Xlsx,
    Pptx,
    Txt,
}

impl DocumentFormat {
    /// Resolve a lowercase dotted extension (e.g. `".pdf"`) to a format.
    ///
    /// Returns `UnsupportedFormat` for anything outside the allow-list.
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension {
            ".png" => Ok(Self::Png),
            ".jpg" | ".jpeg" => Ok(Self::Jpeg),
            ".gif" => Ok(Self::Gif),
            ".pdf" => Ok(Self::Pdf),
            ".docx" => Ok(Self::Docx),
            ".xlsx" => Ok(Self::Xlsx),
            ".pptx" => Ok(Self::Pptx),
            ".txt" => Ok(Self::Txt),
            other => Err(TextfallError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Resolve a filename (`report.PDF`) to a format via its extension.
    pub fn from_filename(filename: &str) -> Result<Self> {
        match extension_of(filename) {
            Some(ext) => Self::from_extension(&ext),
            None => Err(TextfallError::UnsupportedFormat(filename.to_string())),
        }
    }

    /// Whether this format goes through the OCR strategy.
    pub fn is_image(self) -> bool {
        matches!(self, Self::Png | Self::Jpeg | Self::Gif)
    }
}

/// Normalized lowercase dotted extension of a filename, if it has one.
pub fn extension_of(filename: &str) -> Option<String> {
    let dot = filename.rfind('.')?;
    if dot == 0 && !filename[1..].contains('.') {
        // Dotfiles like ".gitignore" carry no extension.
        return None;
    }
    let ext = &filename[dot..];
    if ext.len() < 2 {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
