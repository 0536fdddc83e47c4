//! Poster configuration and document loading
//!
//! Every field has a default matching the house style (US letter, 1% outside
//! margin, 10%/7% header/footer, solarized palette), so a poster file only
//! needs to mention what it changes.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::content::{PosterContent, Typography};
use crate::layout::{LayoutConfig, Page};
use crate::palette::Palette;
use crate::Result;

/// Packages every poster loads
pub const BASE_PACKAGES: &[&str] = &["graphicx", "xcolor", "tikz", "wrapfig"];

/// Configuration for composing a poster
///
/// # Examples
///
/// ```
/// let cfg = tiltposter::PosterConfig::default();
/// assert_eq!(cfg.page.width_in, 8.5);
/// assert!((cfg.layout.bottom_tilt() - 0.3571).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterConfig {
    pub page: Page,
    pub layout: LayoutConfig,
    pub palette: Palette,
    pub typography: Typography,
    /// Extra preamble lines, e.g. `\usepackage{CaslonPro}`
    pub preamble: Vec<String>,
    /// Overlay the placement grid on every region
    pub grid: bool,
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            page: Page::default(),
            layout: LayoutConfig::default(),
            palette: Palette::default(),
            typography: Typography::default(),
            preamble: vec!["\\usepackage[stretch=30,shrink=30]{microtype}".to_string()],
            grid: false,
        }
    }
}

impl PosterConfig {
    pub fn validate(&self) -> Result<()> {
        self.page.validate()?;
        self.layout.validate(self.page.aspect_ratio())
    }

    /// Full preamble: base packages followed by the configured extras.
    pub fn preamble_lines(&self) -> Vec<String> {
        BASE_PACKAGES
            .iter()
            .map(|p| format!("\\usepackage{{{}}}", p))
            .chain(self.preamble.iter().cloned())
            .collect()
    }
}

/// A poster file: configuration plus content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosterDocument {
    #[serde(default)]
    pub config: PosterConfig,
    pub content: PosterContent,
}

impl PosterDocument {
    pub fn from_json(s: &str) -> Result<Self> {
        let doc: PosterDocument = serde_json::from_str(s)?;
        doc.config.validate()?;
        Ok(doc)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading poster document {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let doc = PosterDocument::from_json(
            r#"{
                "config": {"page": {"width_in": 11.0, "height_in": 8.5}, "layout": {"top_tilt": 0.3}},
                "content": {"name": "x", "columns": [{}]}
            }"#,
        )
        .unwrap();
        assert_eq!(doc.config.page.outside_margin, 0.01);
        assert_eq!(doc.config.layout.header_height, 0.10);
        assert_eq!(doc.config.layout.top_tilt, 0.3);
        assert_eq!(doc.content.columns.len(), 1);
    }

    #[test]
    fn invalid_layout_is_rejected_on_load() {
        let err = PosterDocument::from_json(
            r#"{"config": {"layout": {"header_height": 1.5}}, "content": {"name": "x", "columns": []}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, crate::Error::ConfigError(_)));
    }

    #[test]
    fn preamble_lists_base_packages_first() {
        let lines = PosterConfig::default().preamble_lines();
        assert_eq!(lines[0], "\\usepackage{graphicx}");
        assert!(lines.last().unwrap().contains("microtype"));
    }
}
