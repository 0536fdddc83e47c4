//! Error types for poster layout, rendering and rasterization

use thiserror::Error;

/// Result type alias for poster operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while laying out, rendering or rasterizing a poster
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration (bad heights, gaps, page size)
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Geometry that cannot be laid out (degenerate or inverted frames)
    #[error("Layout failed: {0}")]
    LayoutError(String),

    /// Malformed poster content (unknown colours, bad block placement)
    #[error("Invalid content: {0}")]
    ContentError(String),

    /// Failed to serialize a scene
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// External rasterizer could not be run or exited unsuccessfully
    #[error("Rasterization failed: {0}")]
    RasterError(String),

    /// I/O error reading or writing poster files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Poster document could not be parsed
    #[error("Malformed poster document: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
