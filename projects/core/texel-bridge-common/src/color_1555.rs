use crate::color_8888::Color8888;

/// Scale factor expanding a 5-bit channel to 8 bits, an approximation of `255 / 31`.
///
/// The legacy framework used exactly this constant, so the bridge keeps it:
/// the `f32` product at the maximum channel value 31 rounds to exactly 255.0,
/// and the truncating cast therefore takes a saturated channel to 255.
const CHANNEL_SCALE: f32 = 8.225806;

/// Represents a 16-bit packed 1-5-5-5 color: 1 alpha bit (bit 15), then 5 bits
/// each of red (bits 10-14), green (bits 5-9) and blue (bits 0-4).
///
/// This is the pixel encoding the legacy framework hands over for 16-bit
/// texture uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color1555 {
    /// The underlying packed 16-bit value
    value: u16,
}

impl Color1555 {
    /// Creates a new [`Color1555`] from the raw 16-bit value
    #[inline]
    pub fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color1555`] from an alpha flag and three 5-bit channel
    /// values.
    ///
    /// Channel values are masked to their low 5 bits.
    #[inline]
    pub fn from_channels(alpha: bool, r: u8, g: u8, b: u8) -> Self {
        Self {
            value: ((alpha as u16) << 15)
                | ((r as u16 & 0x1F) << 10)
                | ((g as u16 & 0x1F) << 5)
                | (b as u16 & 0x1F),
        }
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub fn raw_value(&self) -> u16 {
        self.value
    }

    /// Extracts the expanded 8-bit alpha component: 255 when the alpha bit is
    /// set, 0 otherwise. The 1-bit encoding cannot express mid-range alpha.
    #[inline]
    pub fn alpha(&self) -> u8 {
        ((self.value >> 15) as u8) * 255
    }

    /// Extracts the expanded 8-bit red component
    #[inline]
    pub fn red(&self) -> u8 {
        expand_channel((self.value >> 10) & 0x1F)
    }

    /// Extracts the expanded 8-bit green component
    #[inline]
    pub fn green(&self) -> u8 {
        expand_channel((self.value >> 5) & 0x1F)
    }

    /// Extracts the expanded 8-bit blue component
    #[inline]
    pub fn blue(&self) -> u8 {
        expand_channel(self.value & 0x1F)
    }

    /// Converts this [`Color1555`] to a [`Color8888`] with expanded channels.
    ///
    /// # Examples
    ///
    /// ```
    /// use texel_bridge_common::color_1555::Color1555;
    ///
    /// let red = Color1555::from_channels(true, 31, 0, 0);
    /// let expanded = red.to_color_8888();
    /// assert_eq!(expanded.r, 255);
    /// assert_eq!(expanded.g, 0);
    /// assert_eq!(expanded.b, 0);
    /// assert_eq!(expanded.a, 255);
    /// ```
    pub fn to_color_8888(&self) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), self.alpha())
    }

    /// Packs the expanded channels into the destination engine's raw 32-bit
    /// layout: the result's bytes, least significant first, are
    /// `[alpha, red, green, blue]`.
    ///
    /// A raw value of zero short-circuits to a packed word of zero, skipping
    /// channel scaling entirely.
    ///
    /// # Examples
    ///
    /// ```
    /// use texel_bridge_common::color_1555::Color1555;
    ///
    /// let white = Color1555::from_raw(0xFFFF);
    /// assert_eq!(white.to_argb_word(), 0xFFFF_FFFF);
    ///
    /// // Alpha bit alone: only the low (alpha) byte is set.
    /// let clear = Color1555::from_raw(0x8000);
    /// assert_eq!(clear.to_argb_word(), 0x0000_00FF);
    ///
    /// assert_eq!(Color1555::from_raw(0).to_argb_word(), 0);
    /// ```
    #[inline]
    pub fn to_argb_word(&self) -> u32 {
        if self.value == 0 {
            return 0;
        }
        (self.alpha() as u32)
            | ((self.red() as u32) << 8)
            | ((self.green() as u32) << 16)
            | ((self.blue() as u32) << 24)
    }
}

/// Expands a 5-bit channel value to 8 bits via the fixed truncating-cast
/// policy. Input must already be masked to 5 bits.
#[inline]
fn expand_channel(channel: u16) -> u8 {
    (channel as f32 * CHANNEL_SCALE) as u8
}
