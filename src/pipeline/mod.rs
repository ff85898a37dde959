//! Image cleaning pipeline
//!
//! Turns a scanned or photographed image of black marks on an arbitrary
//! background into a strict black-and-white image suitable for symbol
//! detection. Stages run strictly in sequence, one full pass each:
//!
//! 1. Composite onto white ([`compose`])
//! 2. Binarize to exact black/white ([`binarize`])
//! 3. Suppress the border artifact frame ([`binarize`])
//! 4. Derive the ink mask ([`mask`])
//! 5. Remove one-pixel-wide line artifacts ([`filters`])
//! 6. Remove isolated speckles ([`filters`])
//! 7. Render the mask back into pixels ([`mask`])
//!
//! The pipeline holds no state across invocations; concurrent calls are
//! fully independent.

pub mod binarize;
pub mod compose;
pub mod filters;
pub mod mask;
mod types;

pub use binarize::{binarize_in_place, suppress_border};
pub use compose::flatten_onto_white;
pub use filters::{remove_line_artifacts, remove_speckles};
pub use mask::InkMask;
pub use types::{CleanError, Result, BACKGROUND, INK, MIN_DIMENSION};

use image::RgbImage;
use tracing::debug;

/// Clean encoded image bytes: decode, then run every pipeline stage.
///
/// Rejects empty payloads before attempting to decode. Decoding failures
/// surface as [`CleanError::Decode`] with the underlying reason.
pub fn clean_bytes(bytes: &[u8]) -> Result<RgbImage> {
    if bytes.is_empty() {
        return Err(CleanError::EmptyInput);
    }

    let decoded = image::load_from_memory(bytes)?;
    clean_image(&decoded.to_rgba8())
}

/// Run the cleaning stages over an already-decoded image.
pub fn clean_image(input: &image::RgbaImage) -> Result<RgbImage> {
    let (width, height) = input.dimensions();
    debug!(width, height, "cleaning image");

    let mut image = flatten_onto_white(input);
    binarize_in_place(&mut image);
    suppress_border(&mut image)?;

    let mut mask = InkMask::from_image(&image);
    let initial_ink = mask.ink_count();

    remove_line_artifacts(&mut mask);
    let after_lines = mask.ink_count();

    remove_speckles(&mut mask);
    let after_speckles = mask.ink_count();

    debug!(
        initial_ink,
        line_removed = initial_ink - after_lines,
        speckle_removed = after_lines - after_speckles,
        "noise filters applied"
    );

    mask.render(&mut image)?;
    Ok(image)
}
