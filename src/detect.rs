//! Symbol detection boundary
//!
//! The detection model itself is an external collaborator: a pre-trained
//! object detector that localizes and classifies symbols on the cleaned
//! image. This module pins down the contract only - a [`SymbolDetector`]
//! trait implemented by whatever backend the embedding application wires
//! in, plus the left-to-right string assembly applied to its output.
//!
//! A backend handle is created once at process startup, shared read-only
//! for the life of the process (`Arc<dyn SymbolDetector>`), and torn down
//! at shutdown.

use image::RgbImage;
use serde::Serialize;
use thiserror::Error;

/// Detection error types
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("no detection backend is configured")]
    Unavailable,

    #[error("inference failed: {0}")]
    Inference(String),
}

/// One detected symbol: bounding box, class label and confidence.
#[derive(Debug, Clone, Serialize)]
pub struct Detection {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
    pub label: String,
    pub confidence: f32,
}

/// A pre-trained symbol detection backend.
///
/// Implementations receive the cleaned RGB image; any channel-order
/// conversion the underlying model wants (e.g. BGR) is the backend's
/// responsibility.
pub trait SymbolDetector: Send + Sync {
    /// Detect symbols on the cleaned image.
    fn detect(&self, image: &RgbImage) -> Result<Vec<Detection>, DetectError>;

    /// Whether the backend is loaded and able to serve requests.
    fn is_ready(&self) -> bool {
        true
    }
}

/// Placeholder backend used when no model has been wired in. Always
/// reports not-ready and fails every request with
/// [`DetectError::Unavailable`].
#[derive(Debug, Default)]
pub struct UnconfiguredDetector;

impl SymbolDetector for UnconfiguredDetector {
    fn detect(&self, _image: &RgbImage) -> Result<Vec<Detection>, DetectError> {
        Err(DetectError::Unavailable)
    }

    fn is_ready(&self) -> bool {
        false
    }
}

/// Order detections left to right and concatenate their labels.
///
/// Sorting is stable on the left edge of each bounding box, so detections
/// sharing an x_min keep the order the backend returned them in.
pub fn assemble_text(detections: &[Detection]) -> String {
    let mut ordered: Vec<&Detection> = detections.iter().collect();
    ordered.sort_by(|a, b| {
        a.x_min
            .partial_cmp(&b.x_min)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ordered.iter().map(|d| d.label.as_str()).collect()
}
