//! Representative color sampling for tile thumbnails

use crate::color::Color;
use crate::io::error::{MosaicError, Result};
use image::{Rgb, RgbImage};

/// Average color of the pixels inside the thumbnail's inscribed circle
///
/// Cap photographs are circular subjects on rectangular frames, so the
/// average is taken over a disc centered on the image with a radius of half
/// its width. Channel sums are floor-divided by the pixel count.
///
/// # Errors
///
/// Returns [`MosaicError::DegenerateSample`] when the mask covers no pixels,
/// which happens for thumbnails smaller than 2x2.
pub fn representative_color(image: &RgbImage) -> Result<Color> {
    let (width, height) = image.dimensions();
    let cx = f64::from(width) / 2.0;
    let cy = f64::from(height) / 2.0;
    let radius = f64::from(width) / 2.0;
    let radius_sq = radius * radius;

    let mut sum_r = 0_u64;
    let mut sum_g = 0_u64;
    let mut sum_b = 0_u64;
    let mut count = 0_u64;

    for (x, y, pixel) in image.enumerate_pixels() {
        let dx = cx - f64::from(x);
        let dy = cy - f64::from(y);
        if dx.mul_add(dx, dy * dy) <= radius_sq {
            let Rgb([r, g, b]) = *pixel;
            sum_r += u64::from(r);
            sum_g += u64::from(g);
            sum_b += u64::from(b);
            count += 1;
        }
    }

    if count == 0 {
        return Err(MosaicError::DegenerateSample { width, height });
    }

    Ok(Color::new(
        (sum_r / count) as i32,
        (sum_g / count) as i32,
        (sum_b / count) as i32,
    ))
}
