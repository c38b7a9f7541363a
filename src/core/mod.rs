//! Core orchestration: format allow-list, converter seam, and the fallback
//! dispatcher.

pub mod converter;
pub mod dispatcher;
pub mod formats;

pub use converter::DocumentConverter;
pub use dispatcher::{convert, extract};
pub use formats::{DocumentFormat, SUPPORTED_EXTENSIONS, extension_of};
