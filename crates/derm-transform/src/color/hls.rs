//! HLS (hue, lightness, saturation) color type
//!
//! Lightness here is the bi-hexcone definition `(max + min) / 2`, the same
//! quantity image libraries expose as the `L` plane of an 8-bit HLS image.

use super::srgb::Srgb;

/// A color in HLS space.
///
/// - `h`: hue in degrees, 0.0..360.0 (0.0 for achromatic pixels)
/// - `l`: lightness, 0.0..=1.0
/// - `s`: saturation, 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    /// Hue in degrees
    pub h: f32,
    /// Lightness (0.0..=1.0)
    pub l: f32,
    /// Saturation (0.0..=1.0)
    pub s: f32,
}

impl Hls {
    #[inline]
    pub fn new(h: f32, l: f32, s: f32) -> Self {
        Self { h, l, s }
    }

    /// Lightness quantized to the 8-bit range.
    #[inline]
    pub fn lightness_u8(self) -> u8 {
        (self.l * 255.0).round().clamp(0.0, 255.0) as u8
    }

    /// Same hue and saturation with an 8-bit lightness substituted.
    #[inline]
    pub fn with_lightness_u8(self, lightness: u8) -> Self {
        Self {
            l: lightness as f32 / 255.0,
            ..self
        }
    }
}

impl From<Srgb> for Hls {
    fn from(rgb: Srgb) -> Self {
        let vmax = rgb.r.max(rgb.g).max(rgb.b);
        let vmin = rgb.r.min(rgb.g).min(rgb.b);
        let l = (vmax + vmin) / 2.0;
        let diff = vmax - vmin;

        if diff <= f32::EPSILON {
            return Self::new(0.0, l, 0.0);
        }

        let s = if l < 0.5 {
            diff / (vmax + vmin)
        } else {
            diff / (2.0 - vmax - vmin)
        };

        let mut h = if vmax == rgb.r {
            60.0 * (rgb.g - rgb.b) / diff
        } else if vmax == rgb.g {
            120.0 + 60.0 * (rgb.b - rgb.r) / diff
        } else {
            240.0 + 60.0 * (rgb.r - rgb.g) / diff
        };
        if h < 0.0 {
            h += 360.0;
        }

        Self::new(h, l, s)
    }
}
