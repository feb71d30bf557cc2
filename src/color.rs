//! Packed RGB565 color
//!
//! The framebuffer stores one [`Color`] per pixel as two bytes, high byte
//! first, which is the byte order the controller expects on the bus.
//!
//! | Bits   | 15..11 | 10..5 | 4..0 |
//! |--------|--------|-------|------|
//! | Field  | red    | green | blue |
//!
//! ## Example
//!
//! ```
//! use axs15231::Color;
//!
//! let orange = Color::from_rgb888(0xFF, 0x80, 0x00);
//! assert_eq!(orange.raw(), 0xFC00);
//! assert_eq!(orange.to_be_bytes(), [0xFC, 0x00]);
//! ```

/// A packed 5-6-5 color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(u16);

impl Color {
    /// Black (0x0000)
    pub const BLACK: Self = Self(0x0000);
    /// White (0xFFFF)
    pub const WHITE: Self = Self(0xFFFF);
    /// Red (0xF800)
    pub const RED: Self = Self(0xF800);
    /// Green (0x07E0)
    pub const GREEN: Self = Self(0x07E0);
    /// Blue (0x001F)
    pub const BLUE: Self = Self(0x001F);

    /// Wrap an already packed value
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Reduce 8-bit channels to 5-6-5 by truncation
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        let r5 = (r >> 3) as u16;
        let g6 = (g >> 2) as u16;
        let b5 = (b >> 3) as u16;
        Self((r5 << 11) | (g6 << 5) | b5)
    }

    /// The packed value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Bytes in bus order
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Whether both bytes of the packed value are equal
    ///
    /// Such colors can be written with a single-byte memory fill.
    pub const fn is_byte_uniform(self) -> bool {
        let [hi, lo] = self.to_be_bytes();
        hi == lo
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::IntoStorage;
        Self(color.into_storage())
    }
}
