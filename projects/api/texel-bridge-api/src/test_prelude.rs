//! Common test imports and helpers shared across the texture and upload
//! tests.
#![allow(unused_imports)]

pub use rstest::rstest;

pub use crate::error::TextureError;
pub use crate::resource::{GraphicsResource, MemoryResource};
pub use crate::texture::Texture2D;
pub use texel_bridge_common::color_8888::Color8888;

/// A `width x height` texture over the in-memory backend.
pub fn make_texture(width: u32, height: u32) -> Texture2D {
    Texture2D::new(width, height).unwrap()
}

/// The committed (GPU-visible) pixels of an in-memory texture.
pub fn committed(texture: &Texture2D) -> &[u32] {
    texture.resource().unwrap().committed()
}

/// Fills both the staging and committed views with `sentinel`, so later
/// asserts can tell slots the upload wrote from slots it only overwrote with
/// the temporary buffer's default.
pub fn fill_sentinel(texture: &mut Texture2D, sentinel: u32) {
    let resource = texture.resource_mut().unwrap();
    resource.raw_view().fill(sentinel);
    resource.commit();
}
