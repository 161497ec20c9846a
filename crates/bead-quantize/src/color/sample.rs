//! Decoded pixel samples.

use super::rgb::Rgb;

/// Minimum alpha for a sample to count towards a region's color.
///
/// Anything below this is treated as background and ignored when averaging.
pub const OPAQUE_THRESHOLD: u8 = 128;

/// One decoded RGBA pixel as read from a [`PixelSource`](crate::PixelSource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PixelSample {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A fully opaque sample of the given color.
    #[inline]
    pub const fn opaque(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, 255)
    }

    /// A fully transparent black sample.
    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// True if the sample's alpha reaches [`OPAQUE_THRESHOLD`].
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a >= OPAQUE_THRESHOLD
    }

    /// The color channels without alpha.
    #[inline]
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_threshold_boundary() {
        assert!(!PixelSample::new(0, 0, 0, 127).is_opaque());
        assert!(PixelSample::new(0, 0, 0, 128).is_opaque());
        assert!(PixelSample::opaque(Rgb::WHITE).is_opaque());
        assert!(!PixelSample::transparent().is_opaque());
    }

    #[test]
    fn test_rgb_drops_alpha() {
        let sample = PixelSample::new(1, 2, 3, 4);
        assert_eq!(sample.rgb(), Rgb::new(1, 2, 3));
    }
}
