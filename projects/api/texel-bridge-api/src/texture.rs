//! The legacy texture object, bridged onto a [`GraphicsResource`].

use crate::error::{TextureError, TextureResult};
use crate::resource::{GraphicsResource, MemoryResource};

/// An axis-aligned rectangle, as the legacy API reports texture bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// A 2D texture in the legacy framework's API, backed by a host graphics
/// resource.
///
/// Pixel uploads go through the `set_data_*` operations in [`crate::upload`],
/// which convert the caller's pixel layout into the backend's raw 32-bit
/// memory and commit the result. Disposal releases the backend resource;
/// every later pixel operation fails with [`TextureError::Disposed`] rather
/// than touching freed memory.
#[derive(Debug)]
pub struct Texture2D<R: GraphicsResource = MemoryResource> {
    resource: Option<R>,
    version: u64,
}

impl Texture2D<MemoryResource> {
    /// Creates a texture backed by an in-memory resource.
    ///
    /// # Errors
    ///
    /// [`TextureError::InvalidDimensions`] when either dimension is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use texel_bridge_api::Texture2D;
    ///
    /// let texture = Texture2D::new(64, 32)?;
    /// assert_eq!(texture.width(), 64);
    /// assert_eq!(texture.height(), 32);
    /// # Ok::<(), texel_bridge_api::TextureError>(())
    /// ```
    pub fn new(width: u32, height: u32) -> TextureResult<Self> {
        Ok(Self::from_resource(MemoryResource::new(width, height)?))
    }
}

impl<R: GraphicsResource> Texture2D<R> {
    /// Wraps an already-allocated backend resource.
    pub fn from_resource(resource: R) -> Self {
        Self {
            resource: Some(resource),
            version: 0,
        }
    }

    /// Width in pixels; 0 once the texture has been disposed.
    pub fn width(&self) -> u32 {
        self.resource.as_ref().map_or(0, R::width)
    }

    /// Height in pixels; 0 once the texture has been disposed.
    pub fn height(&self) -> u32 {
        self.resource.as_ref().map_or(0, R::height)
    }

    /// The texture's bounds, with the origin at (0, 0).
    pub fn bounds(&self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: self.width(),
            height: self.height(),
        }
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.resource.is_none()
    }

    /// Change marker for the pixel contents.
    ///
    /// Starts at 0 and increases by one on every committed upload; consumers
    /// that cached a reading can compare against it as a cheap dirty flag.
    /// Failed uploads leave it untouched.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Borrow of the backend resource, for hosts that need the native handle.
    /// `None` after disposal.
    pub fn resource(&self) -> Option<&R> {
        self.resource.as_ref()
    }

    /// Mutable borrow of the backend resource. `None` after disposal.
    pub fn resource_mut(&mut self) -> Option<&mut R> {
        self.resource.as_mut()
    }

    /// Releases the backend graphics memory.
    ///
    /// Idempotent. All later pixel operations fail with
    /// [`TextureError::Disposed`].
    pub fn dispose(&mut self) {
        if let Some(mut resource) = self.resource.take() {
            resource.release();
        }
    }

    pub(crate) fn live_resource(&mut self) -> TextureResult<&mut R> {
        self.resource.as_mut().ok_or(TextureError::Disposed)
    }

    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
    }
}
