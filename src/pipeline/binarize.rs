//! Strict binarization and border suppression
//!
//! Binarization is deliberately threshold-free: a pixel counts as ink only
//! when its RGB triple is bit-exact (0,0,0). Compositing has already turned
//! every partially transparent or off-black pixel into something else, so a
//! tunable threshold would only add per-scanner calibration for no gain.
//!
//! Border suppression clears a fixed frame where scan-edge artifacts
//! accumulate: one line on the leading edge (row 0, column 0) and two lines
//! on the trailing edge (last two rows, last two columns). The asymmetry
//! matches how trailing-edge artifacts show up in practice and is preserved
//! exactly.

use image::{Rgb, RgbImage};

use super::types::{CleanError, Result, BACKGROUND, INK, MIN_DIMENSION};

/// Force every non-exact-black pixel to exact white.
pub fn binarize_in_place(image: &mut RgbImage) {
    for pixel in image.pixels_mut() {
        if pixel.0 != INK {
            *pixel = Rgb(BACKGROUND);
        }
    }
}

/// Clear the fixed artifact frame: row 0, the last two rows, column 0 and
/// the last two columns.
///
/// Runs before the ink mask is derived, so border pixels can never
/// reappear as ink in later stages.
pub fn suppress_border(image: &mut RgbImage) -> Result<()> {
    let (width, height) = image.dimensions();
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(CleanError::DegenerateInput { width, height });
    }

    let white = Rgb(BACKGROUND);
    for x in 0..width {
        image.put_pixel(x, 0, white);
        image.put_pixel(x, height - 1, white);
        image.put_pixel(x, height - 2, white);
    }
    for y in 0..height {
        image.put_pixel(0, y, white);
        image.put_pixel(width - 1, y, white);
        image.put_pixel(width - 2, y, white);
    }

    Ok(())
}
