//! The seam between the bridge and a host rendering system.

use alloc::{vec, vec::Vec};

use crate::error::{TextureError, TextureResult};

/// A host-engine texture handle, seen by the bridge as raw 32-bit pixel
/// memory plus commit and release operations.
///
/// Implementations own the native resource. Platform-specific destruction
/// timing (deferred vs. immediate, editor vs. runtime) lives entirely inside
/// [`release`](GraphicsResource::release), so the bridge itself carries no
/// platform branches.
///
/// Both dimensions are fixed at allocation and must be greater than zero; the
/// upload paths divide by `width`.
pub trait GraphicsResource {
    /// Width of the underlying image in pixels.
    fn width(&self) -> u32;

    /// Height of the underlying image in pixels.
    fn height(&self) -> u32;

    /// Mutable view of the raw texture memory, one `u32` per pixel, length
    /// `width * height`.
    ///
    /// Writes land on the CPU side and become GPU-visible only after
    /// [`commit`](GraphicsResource::commit).
    fn raw_view(&mut self) -> &mut [u32];

    /// Flushes CPU-side pixel writes so the GPU-visible copy reflects them.
    fn commit(&mut self);

    /// Frees the native graphics memory. Called exactly once, on disposal.
    fn release(&mut self);
}

/// An in-memory [`GraphicsResource`]: a staging buffer exposed through
/// [`raw_view`](GraphicsResource::raw_view) plus a committed copy standing in
/// for the GPU-visible image.
///
/// Used by the test suite and as a host-less default backend.
#[derive(Debug)]
pub struct MemoryResource {
    width: u32,
    height: u32,
    staging: Vec<u32>,
    committed: Vec<u32>,
}

impl MemoryResource {
    /// Allocates a `width x height` resource with zeroed pixel memory.
    ///
    /// # Errors
    ///
    /// [`TextureError::InvalidDimensions`] when either dimension is zero or
    /// their product overflows.
    pub fn new(width: u32, height: u32) -> TextureResult<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|&len| len > 0)
            .ok_or(TextureError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            staging: vec![0; len],
            committed: vec![0; len],
        })
    }

    /// Read-only view of the committed (GPU-visible) pixels.
    ///
    /// Staging writes that have not been committed yet are not reflected here.
    pub fn committed(&self) -> &[u32] {
        &self.committed
    }
}

impl GraphicsResource for MemoryResource {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn raw_view(&mut self) -> &mut [u32] {
        &mut self.staging
    }

    fn commit(&mut self) {
        self.committed.copy_from_slice(&self.staging);
    }

    fn release(&mut self) {
        self.staging = Vec::new();
        self.committed = Vec::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            MemoryResource::new(0, 4).unwrap_err(),
            TextureError::InvalidDimensions { width: 0, height: 4 }
        );
        assert_eq!(
            MemoryResource::new(4, 0).unwrap_err(),
            TextureError::InvalidDimensions { width: 4, height: 0 }
        );
    }

    #[test]
    fn staging_writes_are_invisible_until_commit() {
        let mut resource = MemoryResource::new(2, 1).unwrap();
        resource.raw_view().copy_from_slice(&[1, 2]);
        assert_eq!(resource.committed(), &[0, 0]);

        resource.commit();
        assert_eq!(resource.committed(), &[1, 2]);
    }

    #[test]
    fn debug_formats_for_result_diagnostics() {
        // `Result<MemoryResource, _>::unwrap_err` needs the Ok type to be
        // Debug; keep the derive in place.
        let resource = MemoryResource::new(2, 1).unwrap();
        assert!(format!("{resource:?}").contains("MemoryResource"));
    }

    #[test]
    fn release_frees_both_buffers() {
        let mut resource = MemoryResource::new(2, 2).unwrap();
        resource.release();
        assert!(resource.committed().is_empty());
        assert!(resource.raw_view().is_empty());
    }
}
