//! tiltposter
//!
//! Static poster generation around a tilted-seam layout: a header strip, a
//! footer strip and N columns whose borders share one continuous diagonal.
//!
//! # Pipeline
//!
//! - [`layout`] computes every frame in fractional coordinates (pure arithmetic)
//! - [`content`] describes what goes on the poster as data
//! - [`rendering`] composes layout and content into a [`Scene`] and writes it
//!   as a standalone TikZ document or an SVG preview
//! - [`raster`] converts finished PDFs to PNG with Ghostscript
//!
//! # Example
//!
//! ```
//! use tiltposter::layout::{compute_column_frames, LayoutConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = LayoutConfig::default();
//! let cols = compute_column_frames(3, &cfg)?;
//! assert_eq!(cols.len(), 3);
//! assert!(cols[2].right.abs() < 1e-12);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod layout;
pub mod palette;
pub mod raster;
pub mod rendering;

pub use config::{PosterConfig, PosterDocument};
pub use error::{Error, Result};
pub use layout::{LayoutConfig, Page, PosterLayout};
pub use rendering::{compose, Backend, Format, Scene};

/// Load a poster file and compose it into a scene.
pub fn load_scene(path: impl AsRef<std::path::Path>) -> Result<Scene> {
    let doc = PosterDocument::load(path)?;
    compose(&doc)
}
