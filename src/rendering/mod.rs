//! Rendering: composition into a display list and document backends
//!
//! [`compose`] turns a poster document into a [`Scene`], a flat list of
//! [`PaintCommand`]s in page points. Backends serialize a scene; the TikZ
//! backend writes the printable LaTeX document and the SVG backend a quick
//! preview of the geometry.

pub mod compose;
pub mod paint;
#[cfg(feature = "svg")]
pub mod svg;
#[cfg(feature = "tikz")]
pub mod tikz;

use std::path::Path;

use log::info;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::palette::Color;
use crate::{Error, Result};

pub use compose::compose;
pub use paint::{Anchor, PaintCommand, Stroke};

/// Everything needed to write one poster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub name: String,
    pub width_pt: f64,
    pub height_pt: f64,
    /// LaTeX preamble lines
    pub preamble: Vec<String>,
    /// Colour of text that does not set its own
    pub text_color: Color,
    pub commands: Vec<PaintCommand>,
}

impl Scene {
    /// Hex SHA-256 of the scene as rendered by `backend`.
    pub fn digest(&self, backend: &dyn Backend) -> Result<String> {
        Ok(digest(backend.render(self)?.as_bytes()))
    }
}

/// Hex SHA-256 of `bytes`.
pub fn digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Serializes a scene into a document format
pub trait Backend {
    /// File extension of the produced document, without the dot
    fn extension(&self) -> &'static str;

    fn render(&self, scene: &Scene) -> Result<String>;

    /// Render and write to `path`.
    fn write_to(&self, scene: &Scene, path: &Path) -> Result<()> {
        let doc = self.render(scene)?;
        std::fs::write(path, doc)?;
        info!("wrote {} ({} bytes)", path.display(), std::fs::metadata(path)?.len());
        Ok(())
    }
}

/// Output formats known to the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Tex,
    Svg,
}

impl Format {
    pub fn backend(self) -> Result<Box<dyn Backend>> {
        match self {
            #[cfg(feature = "tikz")]
            Format::Tex => Ok(Box::new(tikz::TikzBackend)),
            #[cfg(feature = "svg")]
            Format::Svg => Ok(Box::new(svg::SvgBackend)),
            #[allow(unreachable_patterns)]
            other => Err(Error::RenderError(format!(
                "{:?} output was not compiled in",
                other
            ))),
        }
    }
}

/// Format numbers in emitted documents with a fixed precision so output is
/// byte-stable.
pub(crate) fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    // avoid "-0.000"
    if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        "0.000".to_string()
    } else {
        s
    }
}
