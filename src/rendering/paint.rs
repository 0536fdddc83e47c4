/// Paint command set produced by composition and consumed by backends

use serde::Serialize;

use crate::content::{Alignment, Justification};
use crate::layout::Point;
use crate::palette::Color;

/// Outline of a filled polygon
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    /// Line width in points
    pub width: f64,
}

/// Where a text item sits relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Anchor {
    pub alignment: Alignment,
    pub justification: Justification,
}

impl Anchor {
    pub fn new(alignment: Alignment, justification: Justification) -> Self {
        Self { alignment, justification }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PaintCommand {
    /// Closed polygon in page points; corners are mitred
    Polygon {
        points: Vec<Point>,
        fill: Color,
        stroke: Option<Stroke>,
    },
    /// LaTeX text anchored at a page point
    Text {
        at: Point,
        text: String,
        anchor: Anchor,
        /// `None` inherits the document text colour
        color: Option<Color>,
        /// Counter-clockwise rotation in degrees
        angle: f64,
    },
}
