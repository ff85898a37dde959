//! Morphological noise filters over the ink mask
//!
//! Two stages, run in order:
//!
//! 1. **Line-artifact removal** - clears ink pixels that are exactly one
//!    pixel wide along either axis (thin scan-noise lines).
//! 2. **Speckle removal** - clears ink pixels left with no ink neighbor in
//!    their 3x3 neighborhood (isolated dots).
//!
//! Each stage decides removals against a frozen snapshot of the mask as it
//! existed when the stage started, and applies them as a batch. Clearing one
//! pixel therefore never changes the decision made for another pixel in the
//! same stage, which keeps the result independent of traversal order. The
//! snapshot reads also make the row scans trivially parallel.

use rayon::prelude::*;

use super::mask::InkMask;

/// Clear ink pixels that form one-pixel-wide runs along either axis.
///
/// The horizontal and vertical sub-passes both read the mask as it existed
/// before either pass began; their removals are unioned. Boundary rows and
/// columns are never evaluated by the respective pass.
pub fn remove_line_artifacts(mask: &mut InkMask) {
    let snapshot = mask.clone();

    for (x, y) in horizontal_removals(&snapshot) {
        mask.clear(x, y);
    }
    for (x, y) in vertical_removals(&snapshot) {
        mask.clear(x, y);
    }
}

/// Ink pixels whose left and right neighbors are both background.
fn horizontal_removals(snapshot: &InkMask) -> Vec<(u32, u32)> {
    let (width, height) = (snapshot.width(), snapshot.height());

    (0..height)
        .into_par_iter()
        .flat_map_iter(|y| {
            (1..width - 1)
                .filter(move |&x| {
                    snapshot.is_ink(x, y)
                        && !snapshot.is_ink(x - 1, y)
                        && !snapshot.is_ink(x + 1, y)
                })
                .map(move |x| (x, y))
        })
        .collect()
}

/// Ink pixels whose up and down neighbors are both background.
fn vertical_removals(snapshot: &InkMask) -> Vec<(u32, u32)> {
    let (width, height) = (snapshot.width(), snapshot.height());

    (1..height - 1)
        .into_par_iter()
        .flat_map_iter(|y| {
            (0..width)
                .filter(move |&x| {
                    snapshot.is_ink(x, y)
                        && !snapshot.is_ink(x, y - 1)
                        && !snapshot.is_ink(x, y + 1)
                })
                .map(move |x| (x, y))
        })
        .collect()
}

/// Clear interior ink pixels whose 3x3 neighborhood (center included)
/// contains exactly one ink cell: the pixel itself.
pub fn remove_speckles(mask: &mut InkMask) {
    let snapshot = mask.clone();
    let (width, height) = (snapshot.width(), snapshot.height());

    let removals: Vec<(u32, u32)> = (1..height - 1)
        .into_par_iter()
        .flat_map_iter(|y| {
            let snapshot = &snapshot;
            (1..width - 1)
                .filter(move |&x| {
                    snapshot.is_ink(x, y) && snapshot.neighborhood_sum(x, y) == 1
                })
                .map(move |x| (x, y))
        })
        .collect();

    for (x, y) in removals {
        mask.clear(x, y);
    }
}
