//! Common types for the cleaning pipeline

use thiserror::Error;

/// Minimum width and height the border suppressor can handle.
///
/// The suppressed frame is one pixel on the leading edge and two pixels on
/// the trailing edge per axis, so anything below 3x3 has no interior left.
pub const MIN_DIMENSION: u32 = 3;

/// Exact-black ink value.
pub const INK: [u8; 3] = [0, 0, 0];

/// Exact-white background value.
pub const BACKGROUND: [u8; 3] = [255, 255, 255];

/// Cleaning pipeline error types
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("empty input: no image bytes provided")]
    EmptyInput,

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image too small: {width}x{height}, minimum is {min}x{min}", min = MIN_DIMENSION)]
    DegenerateInput { width: u32, height: u32 },

    #[error("pixel conversion failed: {0}")]
    Conversion(String),
}

pub type Result<T> = std::result::Result<T, CleanError>;
