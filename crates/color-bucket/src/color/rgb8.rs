//! 8-bit RGB pixel

/// A pixel with red, green and blue channels on the 0..=255 scale.
///
/// Alpha is not represented: classification ignores it entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb8 {
    /// Create a pixel from 8-bit channel values.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a pixel from 16-bit channel values.
    ///
    /// Each channel is divided by 256, so an 8-bit value promoted to 16 bits
    /// by replication (`v * 257`) comes back unchanged.
    ///
    /// # Example
    /// ```
    /// use color_bucket::Rgb8;
    /// let px = Rgb8::from_rgb16(65535, 200 * 257, 0x00ff);
    /// assert_eq!(px, Rgb8::new(255, 200, 0));
    /// ```
    #[inline]
    pub fn from_rgb16(r: u16, g: u16, b: u16) -> Self {
        Self {
            r: (r >> 8) as u8,
            g: (g >> 8) as u8,
            b: (b >> 8) as u8,
        }
    }

    /// Create a pixel from a 16-bit `[R, G, B, A]` sample, dropping alpha.
    #[inline]
    pub fn from_rgba16(rgba: [u16; 4]) -> Self {
        Self::from_rgb16(rgba[0], rgba[1], rgba[2])
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}
