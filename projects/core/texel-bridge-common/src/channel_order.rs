//! Channel reordering for pixels that are already 8 bits per channel.

/// Reorders an RGBA-byte-ordered 32-bit pixel into the destination engine's
/// ARGB byte order.
///
/// Reading bytes least significant first, an input of `[r, g, b, a]` becomes
/// `[a, r, g, b]`: with input bytes `[b0, b1, b2, b3]` the output word is
/// `b2 << 24 | b1 << 16 | b0 << 8 | b3`.
///
/// # Examples
///
/// ```
/// use texel_bridge_common::channel_order::rgba_to_argb;
///
/// assert_eq!(rgba_to_argb(0x4433_2211), 0x3322_1144);
/// ```
#[inline]
pub fn rgba_to_argb(word: u32) -> u32 {
    let b0 = word & 0xFF;
    let b1 = (word >> 8) & 0xFF;
    let b2 = (word >> 16) & 0xFF;
    let b3 = (word >> 24) & 0xFF;
    (b2 << 24) | (b1 << 16) | (b0 << 8) | b3
}
