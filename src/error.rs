//! Error types for the icon loading path.
//!
//! The geometry, cache, and recolor engines are total over well-formed
//! in-memory data and never fail; decoding an icon from encoded bytes is the
//! one operation with a real failure mode.

use thiserror::Error;

/// Errors produced when constructing a dock item from encoded icon bytes.
#[derive(Debug, Error)]
pub enum IconError {
    /// The byte stream was not a decodable image.
    #[error("failed to decode icon image: {0}")]
    Decode(#[from] image::ImageError),

    /// The decoded image had no pixels.
    #[error("icon image has no pixels")]
    EmptyImage,
}
