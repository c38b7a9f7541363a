//! Textfall - Document-to-Text Conversion with OCR Fallback
//!
//! Textfall converts uploaded documents into plain text. A pluggable primary
//! converter runs first; when it produces nothing, a format-specific fallback
//! extractor takes over. Images go through a Tesseract OCR language ladder
//! tuned for Vietnamese documents, and the recovered text is repaired with an
//! ordered substitution table for common OCR misreads.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use textfall::{DocumentFormat, OcrRuntime};
//!
//! let ocr = OcrRuntime::detect();
//! let format = DocumentFormat::from_filename("report.docx").unwrap();
//! let text = textfall::convert(Path::new("report.docx"), format, &ocr, None);
//! println!("{}", text);
//! ```
//!
//! # Architecture
//!
//! - **Core** (`core`): extension allow-list, the [`DocumentConverter`] seam,
//!   and the fallback dispatcher that never errors for a supported format
//! - **Extractors** (`extractors`): per-format strategies (PDF, DOCX, XLSX,
//!   PPTX, plain text, images)
//! - **OCR** (`ocr`): Tesseract CLI probe and invocation
//! - **Text** (`text`): whitespace normalization and the ordered Vietnamese
//!   substitution table
//! - **API** (`api`, feature-gated): Axum upload endpoint mirroring the
//!   pipeline over HTTP

#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod extractors;
pub mod ocr;
pub mod text;
pub mod types;

#[cfg(feature = "api")]
pub mod api;

pub use crate::core::{
    DocumentConverter, DocumentFormat, SUPPORTED_EXTENSIONS, convert, extension_of, extract,
};
pub use error::{Result, TextfallError};
pub use ocr::{LANGUAGE_LADDER, OcrRuntime};
pub use text::{SUBSTITUTIONS, normalize};
pub use types::ExtractionOutcome;
