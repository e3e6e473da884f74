/// Represents a single pixel color with one byte per channel, as handed over
/// by the legacy framework's color-record upload path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Constructs a new [`Color8888`] from red, green, blue, and alpha
    /// components, each in the 0-255 range.
    ///
    /// # Examples
    ///
    /// ```
    /// use texel_bridge_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.g, 0);
    /// assert_eq!(pixel.b, 0);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packs the channels into a single 32-bit word as
    /// `r << 24 | g << 16 | b << 8 | a`, the layout the destination engine
    /// expects for color-record uploads.
    ///
    /// # Examples
    ///
    /// ```
    /// use texel_bridge_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(0x12, 0x34, 0x56, 0x78);
    /// assert_eq!(pixel.to_rgba_word(), 0x1234_5678);
    /// ```
    #[inline]
    pub fn to_rgba_word(&self) -> u32 {
        ((self.r as u32) << 24) | ((self.g as u32) << 16) | ((self.b as u32) << 8) | (self.a as u32)
    }
}
