//! Ink mask: boolean classification grid derived from a binarized image
//!
//! The mask decouples the ink/background classification from the rendered
//! pixels. Filter stages operate on the mask only; the cleaned image is
//! materialized once at the end by [`InkMask::render`].

use image::{Rgb, RgbImage};

use super::types::{CleanError, Result, BACKGROUND, INK};

/// Dense boolean grid, `true` = ink, row-major storage.
///
/// Mask mutations are monotonic: filter stages only ever flip cells from
/// `true` to `false`, never the other way around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InkMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl InkMask {
    /// Derive the mask from a binarized image: a cell is ink iff the pixel
    /// is bit-exact black.
    pub fn from_image(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        let cells = image.pixels().map(|p| p.0 == INK).collect();
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Whether the cell at (x, y) is classified as ink.
    #[inline]
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Reclassify the cell at (x, y) as background.
    #[inline]
    pub fn clear(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        self.cells[idx] = false;
    }

    /// Number of ink cells in the mask.
    pub fn ink_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Whether every ink cell of `self` is also ink in `other`.
    pub fn is_subset_of(&self, other: &InkMask) -> bool {
        self.width == other.width
            && self.height == other.height
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(&a, &b)| !a || b)
    }

    /// Sum of ink cells in the 3x3 neighborhood centered on (x, y),
    /// the center cell included. Caller must keep (x, y) at least one
    /// pixel away from every image edge.
    pub fn neighborhood_sum(&self, x: u32, y: u32) -> u32 {
        let mut sum = 0;
        for ny in y - 1..=y + 1 {
            for nx in x - 1..=x + 1 {
                if self.is_ink(nx, ny) {
                    sum += 1;
                }
            }
        }
        sum
    }

    /// Materialize the mask into the image: ink cells become exact black,
    /// everything else exact white.
    pub fn render(&self, image: &mut RgbImage) -> Result<()> {
        let (width, height) = image.dimensions();
        if width != self.width || height != self.height {
            return Err(CleanError::Conversion(format!(
                "mask is {}x{} but image is {}x{}",
                self.width, self.height, width, height
            )));
        }

        for (x, y, pixel) in image.enumerate_pixels_mut() {
            *pixel = if self.is_ink(x, y) {
                Rgb(INK)
            } else {
                Rgb(BACKGROUND)
            };
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_with_ink(coords: &[(u32, u32)]) -> RgbImage {
        let mut img = RgbImage::from_pixel(5, 5, Rgb(BACKGROUND));
        for &(x, y) in coords {
            img.put_pixel(x, y, Rgb(INK));
        }
        img
    }

    #[test]
    fn test_from_image_exact_black_only() {
        let mut img = image_with_ink(&[(2, 2)]);
        // Near-black must not classify as ink
        img.put_pixel(1, 1, Rgb([1, 1, 1]));

        let mask = InkMask::from_image(&img);
        assert!(mask.is_ink(2, 2));
        assert!(!mask.is_ink(1, 1));
        assert_eq!(mask.ink_count(), 1);
    }

    #[test]
    fn test_clear_is_monotonic() {
        let img = image_with_ink(&[(2, 2), (3, 3)]);
        let mask_before = InkMask::from_image(&img);

        let mut mask = mask_before.clone();
        mask.clear(2, 2);

        assert!(!mask.is_ink(2, 2));
        assert!(mask.is_ink(3, 3));
        assert!(mask.is_subset_of(&mask_before));
        assert!(!mask_before.is_subset_of(&mask));
    }

    #[test]
    fn test_neighborhood_sum() {
        let img = image_with_ink(&[(2, 2), (2, 1), (3, 3)]);
        let mask = InkMask::from_image(&img);

        // Center, up-neighbor and diagonal all fall inside the 3x3 window
        assert_eq!(mask.neighborhood_sum(2, 2), 3);
        // Window around (1, 1) sees (2, 2) and (2, 1)
        assert_eq!(mask.neighborhood_sum(1, 1), 2);
    }

    #[test]
    fn test_render_applies_mask() {
        let img = image_with_ink(&[(2, 2), (3, 3)]);
        let mut mask = InkMask::from_image(&img);
        mask.clear(3, 3);

        let mut out = img.clone();
        mask.render(&mut out).unwrap();

        assert_eq!(out.get_pixel(2, 2).0, INK);
        assert_eq!(out.get_pixel(3, 3).0, BACKGROUND);
    }

    #[test]
    fn test_render_dimension_mismatch() {
        let img = image_with_ink(&[]);
        let mask = InkMask::from_image(&img);

        let mut wrong = RgbImage::new(4, 4);
        let result = mask.render(&mut wrong);
        assert!(matches!(result, Err(CleanError::Conversion(_))));
    }
}
