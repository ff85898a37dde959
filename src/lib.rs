//! inkwash - cleaning pipeline and detection service for scanned handwritten marks
//!
//! The core of the crate is [`pipeline`]: alpha compositing onto white,
//! strict black/white binarization, border-artifact suppression, and a
//! two-stage morphological noise filter that strips one-pixel-wide line
//! artifacts and isolated speckles while preserving connected strokes.
//!
//! Around it sit the [`detect`] boundary (a trait for the external symbol
//! detection model plus left-to-right string assembly) and a small [`web`]
//! layer exposing the whole flow as an upload endpoint.
//!
//! ```no_run
//! let bytes = std::fs::read("scan.png")?;
//! let cleaned = inkwash::pipeline::clean_bytes(&bytes)?;
//! cleaned.save("cleaned.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod detect;
pub mod pipeline;
pub mod web;

pub use cli::{Cli, CleanArgs, Commands, ServeArgs};
pub use config::{Config, ConfigError};
pub use detect::{assemble_text, DetectError, Detection, SymbolDetector, UnconfiguredDetector};
pub use pipeline::{clean_bytes, clean_image, CleanError, InkMask};
pub use web::{ServerConfig, WebServer};
