#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
pub mod error;
pub mod resource;
#[cfg(feature = "std")]
pub mod stream;
pub mod texture;
pub mod upload;

#[cfg(test)]
mod test_prelude;

// Re-export main functionality at crate root
pub use error::{TextureError, TextureResult};
pub use resource::{GraphicsResource, MemoryResource};
pub use texture::{Rect, Texture2D};

// Pixel types callers hand to the upload operations
pub use texel_bridge_common::color_1555::Color1555;
pub use texel_bridge_common::color_8888::Color8888;
