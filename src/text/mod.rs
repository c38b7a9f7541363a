//! Text post-processing for OCR output.

mod normalize;

pub use normalize::{SUBSTITUTIONS, normalize};
