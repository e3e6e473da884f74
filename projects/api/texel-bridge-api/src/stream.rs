//! Stream-based texture loading from the legacy API surface.
//!
//! Decoding encoded image formats is out of scope for the bridge; hosts load
//! images through their own codecs. These entry points exist so legacy call
//! sites compile and hit a well-defined stub instead of partial decode logic.

use std::io::Read;

use crate::error::{TextureError, TextureResult};
use crate::resource::MemoryResource;
use crate::texture::Texture2D;

/// Dimension value reported by [`texture_data_from_stream`] when the caller
/// did not request a size.
pub const UNSPECIFIED_DIMENSION: i32 = -1;

/// Pixel data as reported by the stream-decode stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamTextureData {
    /// Width the caller requested, passed through unchanged
    pub width: i32,
    /// Height the caller requested, passed through unchanged
    pub height: i32,
    /// Placeholder pixel payload: always a single zero byte
    pub pixels: Vec<u8>,
}

/// Stub decoder behind the legacy stream-loading entry point.
///
/// Performs no decoding whatsoever: the stream is never read, the requested
/// (or [`UNSPECIFIED_DIMENSION`]) sizes come back unchanged, and the pixel
/// payload is a single placeholder byte.
pub fn texture_data_from_stream<S: Read>(
    _stream: S,
    requested_width: i32,
    requested_height: i32,
) -> StreamTextureData {
    StreamTextureData {
        width: requested_width,
        height: requested_height,
        pixels: vec![0],
    }
}

impl Texture2D<MemoryResource> {
    /// Creates a texture by decoding an encoded image stream.
    ///
    /// # Errors
    ///
    /// Always [`TextureError::Unsupported`]: the bridge ships no image codec,
    /// and returning a dummy texture would hide the missing decode from the
    /// caller.
    pub fn from_stream<S: Read>(_stream: S) -> TextureResult<Self> {
        Err(TextureError::Unsupported(
            "decoding a texture from an encoded image stream",
        ))
    }
}
