//! The row-mirror index remap shared by every upload path.

use thiserror::Error;

/// Mirrors `index` within its row of a `width`-pixel-wide rectangular buffer.
///
/// The row is kept, the column is reflected:
/// `(index / width) * width + (width - index % width - 1)`. Applying the remap
/// twice yields the original index, and for a pixel count that is a whole
/// multiple of `width` the remap is a bijection on `[0, count)`.
///
/// # Examples
///
/// ```
/// use texel_bridge_common::row_mirror::row_mirror_index;
///
/// // Width 4: each row of four reverses in place.
/// assert_eq!(row_mirror_index(0, 4), 3);
/// assert_eq!(row_mirror_index(3, 4), 0);
/// assert_eq!(row_mirror_index(4, 4), 7);
///
/// // Mirror of mirror is identity.
/// assert_eq!(row_mirror_index(row_mirror_index(5, 4), 4), 5);
/// ```
///
/// # Panics
///
/// Panics when `width` is zero; callers go through [`validate_row_layout`]
/// first.
#[inline]
pub fn row_mirror_index(index: usize, width: usize) -> usize {
    let x = index % width;
    let row_start = (index / width) * width;
    row_start + (width - x - 1)
}

/// Checks that `count` pixels can be laid out as whole `width`-pixel rows.
///
/// The upload paths that read their source through an inverted index require
/// this: with a trailing partial row the mirrored index can escape
/// `[0, count)` and read outside the source buffer.
#[inline]
pub fn validate_row_layout(count: usize, width: usize) -> Result<(), RowLayoutError> {
    if width == 0 {
        return Err(RowLayoutError::ZeroWidth);
    }
    if count % width != 0 {
        return Err(RowLayoutError::PartialRow { count, width });
    }
    Ok(())
}

/// Errors for pixel counts that cannot be laid out as whole rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RowLayoutError {
    /// The destination width is zero, so the div/mod remap is undefined.
    #[error("row width must be greater than zero")]
    ZeroWidth,

    /// The pixel count does not divide into whole rows.
    #[error("{count} pixels do not form whole rows of width {width}")]
    PartialRow {
        /// The pixel count that was checked
        count: usize,
        /// The row width it was checked against
        width: usize,
    },
}
