use crate::color_1555::Color1555;
use crate::color_8888::Color8888;
use rstest::rstest;

#[test]
fn zero_packed_value_stays_zero() {
    // A raw value of zero short-circuits: fully transparent, no channel scaling.
    assert_eq!(Color1555::from_raw(0).to_argb_word(), 0);
    assert_eq!(Color1555::from_raw(0).to_color_8888(), Color8888::new(0, 0, 0, 0));
}

#[test]
fn opaque_white_expands_to_full_bytes() {
    // All channel bits set, alpha bit set. The f32 product at channel value 31
    // rounds to exactly 255.0, so every byte comes out 255.
    let white = Color1555::from_raw(0xFFFF);
    assert_eq!(white.alpha(), 255);
    assert_eq!(white.red(), 255);
    assert_eq!(white.green(), 255);
    assert_eq!(white.blue(), 255);
    assert_eq!(white.to_argb_word(), 0xFFFF_FFFF);
}

// Pins the truncating-cast expansion policy exactly: c * 8.225806 as f32,
// truncated to u8.
#[rstest]
#[case(0, 0)]
#[case(1, 8)]
#[case(2, 16)]
#[case(10, 82)]
#[case(15, 123)]
#[case(16, 131)]
#[case(30, 246)]
#[case(31, 255)]
fn five_bit_channel_expansion_is_fixed(#[case] channel: u8, #[case] expected: u8) {
    let color = Color1555::from_channels(true, channel, channel, channel);
    assert_eq!(color.red(), expected);
    assert_eq!(color.green(), expected);
    assert_eq!(color.blue(), expected);
}

#[test]
fn alpha_bit_has_no_mid_range() {
    assert_eq!(Color1555::from_channels(true, 1, 1, 1).alpha(), 255);
    assert_eq!(Color1555::from_channels(false, 1, 1, 1).alpha(), 0);
}

#[test]
fn argb_word_byte_order_is_alpha_first() {
    let color = Color1555::from_channels(true, 31, 0, 16);
    let word = color.to_argb_word();
    // Bytes least significant first: [alpha, red, green, blue].
    assert_eq!(word & 0xFF, 255);
    assert_eq!((word >> 8) & 0xFF, 255);
    assert_eq!((word >> 16) & 0xFF, 0);
    assert_eq!((word >> 24) & 0xFF, 131);
}

#[test]
fn alpha_bit_alone_is_a_nonzero_pixel() {
    // Only the alpha bit set: the value is nonzero, so the short-circuit does
    // not apply and the alpha byte survives.
    let clear = Color1555::from_raw(0x8000);
    assert_eq!(clear.to_argb_word(), 0x0000_00FF);
}

#[test]
fn from_channels_masks_to_five_bits() {
    let masked = Color1555::from_channels(false, 0xFF, 0xE3, 0x20);
    assert_eq!(masked.raw_value(), (0x1F << 10) | (0x03 << 5));
}

#[test]
fn color_8888_rgba_word_packs_channels_high_to_low() {
    let pixel = Color8888::new(0xAA, 0xBB, 0xCC, 0xDD);
    assert_eq!(pixel.to_rgba_word(), 0xAABB_CCDD);
}
