/// Fractional frames, boundary polylines and their physical placement

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A point in physical page units (points, origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A physical rectangle in points, origin at its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Map a frame-local fractional coordinate onto this rectangle.
    pub fn at(&self, u: f64, v: f64) -> Point {
        Point::new(self.x + u * self.width, self.y + v * self.height)
    }
}

/// A rectangular region expressed as fractional margins measured inward
/// from each edge of the enclosing region.
///
/// Margins may be negative, in which case the frame extends past the
/// enclosing region (the page background does this).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Frame {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }

    /// Fraction of the enclosing width this frame spans.
    pub fn width_fraction(&self) -> f64 {
        1.0 - self.left - self.right
    }

    /// Fraction of the enclosing height this frame spans.
    pub fn height_fraction(&self) -> f64 {
        1.0 - self.top - self.bottom
    }

    /// Reject degenerate or inverted frames.
    pub fn validate(&self) -> Result<()> {
        let margins = [self.left, self.right, self.top, self.bottom];
        if margins.iter().any(|m| !m.is_finite()) {
            return Err(Error::LayoutError(format!("non-finite margin in {:?}", self)));
        }
        if self.left + self.right >= 1.0 {
            return Err(Error::LayoutError(format!(
                "horizontal margins {} + {} leave no width",
                self.left, self.right
            )));
        }
        if self.top + self.bottom >= 1.0 {
            return Err(Error::LayoutError(format!(
                "vertical margins {} + {} leave no height",
                self.top, self.bottom
            )));
        }
        Ok(())
    }

    /// Place this frame inside `outer`, producing physical coordinates.
    pub fn resolve(&self, outer: Rect) -> Rect {
        Rect {
            x: outer.x + self.left * outer.width,
            y: outer.y + self.bottom * outer.height,
            width: outer.width * self.width_fraction(),
            height: outer.height * self.height_fraction(),
        }
    }
}

/// The four-point border of a frame in its local fractional space
/// (x rightward, y upward, 0..1 on each axis before tilt is applied).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPolyline {
    pub points: [(f64, f64); 4],
}

impl BoundaryPolyline {
    pub fn new(points: [(f64, f64); 4]) -> Self {
        Self { points }
    }

    /// Plain rectangle covering the whole frame.
    pub fn rectangle() -> Self {
        Self::new([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    pub fn resolve(&self, rect: Rect) -> Vec<Point> {
        self.points.iter().map(|&(u, v)| rect.at(u, v)).collect()
    }
}
