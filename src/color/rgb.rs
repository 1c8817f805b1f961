//! Integer RGB color arithmetic for quantization and error diffusion

use image::Rgb;

/// RGB color with signed integer channels
///
/// Channels are nominally in `[0, 255]`, but error diffusion deliberately
/// pushes intermediate values outside that range. Values are clamped only
/// when written back to an output pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: i32,
    /// Green channel
    pub g: i32,
    /// Blue channel
    pub b: i32,
}

impl Color {
    /// Create a color from raw channel values
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Widen an 8-bit image pixel into a working color
    pub const fn from_pixel(pixel: Rgb<u8>) -> Self {
        let Rgb([r, g, b]) = pixel;
        Self {
            r: r as i32,
            g: g as i32,
            b: b as i32,
        }
    }

    /// Narrow to an 8-bit image pixel, clamping each channel to `[0, 255]`
    pub fn to_pixel(self) -> Rgb<u8> {
        Rgb([
            self.r.clamp(0, 255) as u8,
            self.g.clamp(0, 255) as u8,
            self.b.clamp(0, 255) as u8,
        ])
    }

    /// Squared Euclidean distance to another color
    pub const fn distance_squared(self, other: Self) -> i64 {
        let dr = (self.r - other.r) as i64;
        let dg = (self.g - other.g) as i64;
        let db = (self.b - other.b) as i64;
        dr * dr + dg * dg + db * db
    }

    /// Component-wise signed difference `self - other`
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            r: self.r - other.r,
            g: self.g - other.g,
            b: self.b - other.b,
        }
    }

    /// Add a weighted quantization error to each channel
    ///
    /// The sum is truncated toward zero, not rounded, and is never clamped
    /// to the displayable range.
    #[must_use]
    pub fn with_error(self, error: Self, weight: f64) -> Self {
        Self {
            r: f64::from(error.r).mul_add(weight, f64::from(self.r)) as i32,
            g: f64::from(error.g).mul_add(weight, f64::from(self.g)) as i32,
            b: f64::from(error.b).mul_add(weight, f64::from(self.b)) as i32,
        }
    }

    /// HSV hue in `[0, 1)`, used to order palette preview swatches
    ///
    /// Channels are clamped to the displayable range first; achromatic
    /// colors report a hue of zero.
    pub fn hue(self) -> f64 {
        let r = self.r.clamp(0, 255);
        let g = self.g.clamp(0, 255);
        let b = self.b.clamp(0, 255);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        if max == min {
            return 0.0;
        }

        let delta = f64::from(max - min);
        let sector = if max == r {
            (f64::from(g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            f64::from(b - r) / delta + 2.0
        } else {
            f64::from(r - g) / delta + 4.0
        };
        sector / 6.0
    }
}
