//! Pixel upload operations: convert a caller-side pixel buffer into the
//! backend's raw 32-bit memory and commit it.
//!
//! All three formats share the same coordinate transform. For output position
//! `i` the mirrored index is [`row_mirror_index`]`(i, width)`, which reflects
//! each row left-to-right; the source element is then read at an inverted
//! position (`count - mirrored - 1` for the exact-fill paths), which
//! additionally reverses row order top-to-bottom. Together these reconcile
//! the legacy framework's row/column conventions with the destination
//! engine's.
//!
//! Each operation fills a temporary buffer first, copies it over the raw
//! view in one pass, commits, and bumps the texture's change marker. A failed
//! validation writes nothing.

use alloc::vec;
use texel_bridge_common::channel_order::rgba_to_argb;
use texel_bridge_common::color_1555::Color1555;
use texel_bridge_common::color_8888::Color8888;
use texel_bridge_common::row_mirror::{row_mirror_index, validate_row_layout, RowLayoutError};

use crate::error::{TextureError, TextureResult};
use crate::resource::GraphicsResource;
use crate::texture::Texture2D;

impl<R: GraphicsResource> Texture2D<R> {
    /// Uploads 16-bit packed 1-5-5-5 pixels, one per destination pixel.
    ///
    /// Equivalent to [`set_data_u16_count`](Self::set_data_u16_count) over the
    /// whole slice.
    pub fn set_data_u16(&mut self, data: &[u16]) -> TextureResult<()> {
        self.set_data_u16_count(data, data.len())
    }

    /// Uploads the first `count` 16-bit packed 1-5-5-5 pixels.
    ///
    /// Each pixel expands to 8-bit channels through
    /// [`Color1555::to_argb_word`]; destination position `i` reads its source
    /// element from `data[count - mirrored - 1]`, applying the shared
    /// coordinate transform.
    ///
    /// # Errors
    ///
    /// - [`TextureError::Disposed`] after [`dispose`](Self::dispose)
    /// - [`TextureError::RowLayout`] when `count` is not a whole number of
    ///   destination-width rows
    /// - [`TextureError::CountMismatch`] when `count` does not fill the
    ///   destination exactly
    /// - [`TextureError::SourceTooShort`] when `data` has fewer than `count`
    ///   elements
    pub fn set_data_u16_count(&mut self, data: &[u16], count: usize) -> TextureResult<()> {
        self.convert_exact(data, count, |&value| {
            Color1555::from_raw(value).to_argb_word()
        })
    }

    /// Uploads 8-bit-per-channel color records, one per destination pixel.
    ///
    /// Equivalent to [`set_data_colors_count`](Self::set_data_colors_count)
    /// over the whole slice.
    pub fn set_data_colors(&mut self, data: &[Color8888]) -> TextureResult<()> {
        self.set_data_colors_count(data, data.len())
    }

    /// Uploads the first `count` color records.
    ///
    /// Same coordinate transform and validation as
    /// [`set_data_u16_count`](Self::set_data_u16_count); each record packs as
    /// [`Color8888::to_rgba_word`].
    pub fn set_data_colors_count(&mut self, data: &[Color8888], count: usize) -> TextureResult<()> {
        self.convert_exact(data, count, Color8888::to_rgba_word)
    }

    /// Uploads 32-bit RGBA-byte-ordered pixel words.
    ///
    /// `row_count == 0` processes the entire slice; any other value is taken
    /// as a number of destination-width rows, not pixels. `start_offset`
    /// shifts the window read from the end of `data` by that many elements.
    ///
    /// Unlike the exact-fill paths this one tolerates a processed range that
    /// does not line up with whole rows or with the destination size:
    /// destination position `i` is written only when the mirrored index falls
    /// inside the processed range and `i` is inside the destination. Skipped
    /// positions keep the temporary buffer's zero default — and since the
    /// temporary buffer is copied over the raw memory wholesale, they read
    /// back zero after the call, not their pre-call value. This is documented
    /// partial-fill semantics, not an error.
    ///
    /// # Errors
    ///
    /// - [`TextureError::Disposed`] after [`dispose`](Self::dispose)
    /// - [`TextureError::RowCountOverflow`] when `row_count * width` does not
    ///   fit in `usize`
    /// - [`TextureError::SourceTooShort`] when `start_offset` plus the
    ///   processed length exceeds `data.len()`, which would send a source
    ///   index out of range
    pub fn set_data_u32(
        &mut self,
        data: &[u32],
        start_offset: usize,
        row_count: usize,
    ) -> TextureResult<()> {
        let resource = self.live_resource()?;
        let width = resource.width() as usize;
        if width == 0 {
            return Err(RowLayoutError::ZeroWidth.into());
        }

        let element_count = if row_count == 0 {
            data.len()
        } else {
            row_count
                .checked_mul(width)
                .ok_or(TextureError::RowCountOverflow { rows: row_count, width })?
        };
        let needed = start_offset.saturating_add(element_count);
        if needed > data.len() {
            return Err(TextureError::SourceTooShort {
                needed,
                actual: data.len(),
            });
        }

        let dst = resource.raw_view();
        let dst_len = dst.len();
        let mut tmp = vec![0u32; dst_len];
        for i in 0..element_count {
            let mirrored = row_mirror_index(i, width);
            // Out-of-range slots stay at the zero default on purpose.
            if mirrored < element_count && i < dst_len {
                tmp[i] = rgba_to_argb(data[data.len() - start_offset - mirrored - 1]);
            }
        }
        dst.copy_from_slice(&tmp);
        resource.commit();
        self.bump_version();
        Ok(())
    }

    /// Raw byte-array upload from the legacy API surface.
    ///
    /// Kept for call-site compatibility only; there is no byte-level pixel
    /// layout to honor, so this always fails with
    /// [`TextureError::Unsupported`] and performs no conversion.
    pub fn set_data_bytes(&mut self, _data: &[u8]) -> TextureResult<()> {
        Err(TextureError::Unsupported("byte-array pixel upload"))
    }

    /// Shared exact-fill path: `count` must cover the destination completely
    /// in whole rows, every destination slot is written once.
    fn convert_exact<T>(
        &mut self,
        data: &[T],
        count: usize,
        repack: impl Fn(&T) -> u32,
    ) -> TextureResult<()> {
        let resource = self.live_resource()?;
        let width = resource.width() as usize;
        validate_row_layout(count, width)?;
        if count > data.len() {
            return Err(TextureError::SourceTooShort {
                needed: count,
                actual: data.len(),
            });
        }

        let dst = resource.raw_view();
        if count != dst.len() {
            return Err(TextureError::CountMismatch {
                count,
                capacity: dst.len(),
            });
        }

        // Whole rows covering the destination exactly make the mirrored index
        // a bijection on [0, count), so every source read below is in range.
        let mut tmp = vec![0u32; count];
        for (i, slot) in tmp.iter_mut().enumerate() {
            let mirrored = row_mirror_index(i, width);
            *slot = repack(&data[count - mirrored - 1]);
        }
        dst.copy_from_slice(&tmp);
        resource.commit();
        self.bump_version();
        Ok(())
    }
}
