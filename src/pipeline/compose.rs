//! Alpha compositing onto an opaque white canvas
//!
//! Scans and photos exported from drawing apps often carry a transparency
//! channel. Every downstream stage assumes opaque RGB, so the first stage
//! flattens the input: each pixel is blended against pure white, weighted
//! by its own alpha. Alpha 0 yields white, alpha 255 leaves the color
//! untouched. Inputs without an alpha channel decode with alpha 255
//! everywhere, making the blend a no-op.

use image::{Rgb, RgbImage, RgbaImage};

/// Flatten a possibly-transparent image onto a white background.
pub fn flatten_onto_white(image: &RgbaImage) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut out = RgbImage::new(width, height);

    for (x, y, pixel) in image.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        out.put_pixel(x, y, Rgb([blend(r, a), blend(g, a), blend(b, a)]));
    }

    out
}

/// Integer blend of one channel against white, rounded to nearest.
#[inline]
fn blend(channel: u8, alpha: u8) -> u8 {
    let c = channel as u32;
    let a = alpha as u32;
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}
