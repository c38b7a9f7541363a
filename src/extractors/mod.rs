//! Format-specific fallback extractors.
//!
//! Each extractor handles exactly one strategy from the dispatcher's branch
//! table. They return `Result`; the dispatcher owns the conversion of every
//! failure into an `Unavailable` outcome.

pub mod docx;
pub mod excel;
pub mod image;
pub mod pdf;
pub mod pptx;
pub mod text;
