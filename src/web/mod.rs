//! Web server module for inkwash
//!
//! Provides the REST API around the cleaning pipeline and the symbol
//! detection backend.
//!
//! # Endpoints
//!
//! - `POST /api/detect-text` - upload an image, get the detected string
//! - `GET /api/health` - service and detector status
//!
//! # Usage
//!
//! ```bash
//! inkwash serve --port 8080
//! ```

mod routes;
mod server;

pub use routes::{api_routes, AppError, AppState, DetectTextResponse, HealthResponse};
pub use server::{ServerConfig, WebServer};

/// Default server port
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address
pub const DEFAULT_BIND: &str = "127.0.0.1";

/// Default upload limit in bytes (16 MB)
pub const DEFAULT_UPLOAD_LIMIT: usize = 16 * 1024 * 1024;
