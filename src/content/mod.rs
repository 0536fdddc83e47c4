//! Poster content as data
//!
//! A poster is a table of text blocks: each block names a style, carries its
//! text (plain LaTeX or a sequence of fragments mixing prose and figures) and
//! a placement in the local coordinates of the region it belongs to. The
//! geometry comes from [`crate::layout`]; nothing in here knows about pages.

pub mod markup;

use serde::{Deserialize, Serialize};

use crate::palette::ColorRef;

pub use markup::{FontSpec, Shape, Side, Typography};

/// Text style of a block; selects the font spec and default colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Title,
    Subtitle,
    Author,
    Section,
    Body,
    Caption,
    Reference,
    ReferenceHeading,
    /// Emitted exactly as written
    Plain,
}

/// Vertical anchoring of a block relative to its `at` point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Top,
    Center,
    #[default]
    Baseline,
    Bottom,
}

/// Horizontal anchoring of a block relative to its `at` point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justification {
    Left,
    #[default]
    Center,
    Right,
}

/// Rotation of a block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Angle {
    Degrees(f64),
    /// Parallel to the header seam
    Named(SeamAngle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeamAngle {
    Seam,
}

/// A piece of a body block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fragment {
    Text {
        text: String,
    },
    /// Figure that body text flows around
    WrapImage {
        file: String,
        lines: u32,
        #[serde(default)]
        side: Side,
        #[serde(default = "one")]
        width_factor: f64,
    },
    /// Inline figure; `width` is a fraction of the column width
    Image {
        file: String,
        width: f64,
    },
    Break,
}

fn one() -> f64 {
    1.0
}

fn default_width() -> f64 {
    0.96
}

/// One placed piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub style: TextStyle,
    /// Leading text; shorthand for a single `text` fragment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fragments: Vec<Fragment>,
    /// Anchor point in the region's local fractional coordinates
    pub at: [f64; 2],
    #[serde(default)]
    pub alignment: Alignment,
    #[serde(default)]
    pub justification: Justification,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<Angle>,
    /// Minipage width as a fraction of the column (body blocks)
    #[serde(default = "default_width")]
    pub width: f64,
}

impl TextBlock {
    pub fn new(style: TextStyle, text: impl Into<String>, at: [f64; 2]) -> Self {
        Self {
            style,
            text: Some(text.into()),
            fragments: Vec::new(),
            at,
            alignment: Alignment::default(),
            justification: Justification::default(),
            color: None,
            angle: None,
            width: default_width(),
        }
    }

    pub fn aligned(mut self, alignment: Alignment, justification: Justification) -> Self {
        self.alignment = alignment;
        self.justification = justification;
        self
    }

    pub fn rotated(mut self, angle: Angle) -> Self {
        self.angle = Some(angle);
        self
    }

    pub fn with_fragments(mut self, fragments: Vec<Fragment>) -> Self {
        self.fragments = fragments;
        self
    }

    /// `text` followed by `fragments`, in reading order.
    pub fn all_fragments(&self) -> impl Iterator<Item = Fragment> + '_ {
        self.text
            .iter()
            .map(|t| Fragment::Text { text: t.clone() })
            .chain(self.fragments.iter().cloned())
    }
}

/// A column's blocks, optionally overlaid with a placement grid
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Column {
    #[serde(default)]
    pub blocks: Vec<TextBlock>,
    #[serde(default)]
    pub grid: bool,
}

/// Everything that varies between posters apart from configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PosterContent {
    /// Output basename
    pub name: String,
    #[serde(default)]
    pub header: Vec<TextBlock>,
    #[serde(default)]
    pub footer: Vec<TextBlock>,
    pub columns: Vec<Column>,
}
