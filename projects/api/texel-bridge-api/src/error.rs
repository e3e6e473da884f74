//! Error types for texture bridge operations.

use texel_bridge_common::row_mirror::RowLayoutError;
use thiserror::Error;

/// Result type for texture bridge operations
pub type TextureResult<T> = Result<T, TextureError>;

/// Errors surfaced by the texture bridge.
///
/// Upload validation fails fast: nothing is written to the destination when
/// any of these is returned, and the texture's change marker stays put.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextureError {
    /// The texture was disposed and its graphics resource released.
    #[error("texture was disposed; its graphics resource is no longer available")]
    Disposed,

    /// The requested operation has no implementation in this bridge.
    #[error("{0} is not supported")]
    Unsupported(&'static str),

    /// A width or height of zero cannot back a texture.
    #[error("invalid texture dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// The element count does not fill the destination exactly.
    #[error("element count {count} does not match destination capacity {capacity}")]
    CountMismatch {
        /// Number of source elements the caller asked to convert
        count: usize,
        /// Pixel capacity of the destination raw memory
        capacity: usize,
    },

    /// The source buffer has fewer elements than the conversion would read.
    #[error("source buffer too short: need {needed} elements, got {actual}")]
    SourceTooShort {
        /// Elements the conversion would read
        needed: usize,
        /// Elements actually available
        actual: usize,
    },

    /// A row count scaled to pixels overflowed the address space.
    #[error("row count {rows} overflows at width {width}")]
    RowCountOverflow {
        /// Caller-supplied row count
        rows: usize,
        /// Destination width in pixels
        width: usize,
    },

    /// The pixel count cannot be laid out as whole rows of the destination
    /// width.
    #[error(transparent)]
    RowLayout(#[from] RowLayoutError),
}
