/// Page dimensions and the tunable layout parameters

use serde::{Deserialize, Serialize};

use super::frame::{Frame, Rect};
use crate::{Error, Result};

/// Points per physical inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Physical page with an outside margin.
///
/// The margin is a fraction of the page width; vertically it is scaled by the
/// aspect ratio so the inset is the same physical distance on all sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    /// Width in inches
    pub width_in: f64,
    /// Height in inches
    pub height_in: f64,
    /// Outside margin as a fraction of the page width
    pub outside_margin: f64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            width_in: 8.5,
            height_in: 11.0,
            outside_margin: 0.01,
        }
    }
}

impl Page {
    /// US letter in landscape orientation.
    pub fn landscape() -> Self {
        Self {
            width_in: 11.0,
            height_in: 8.5,
            ..Self::default()
        }
    }

    pub fn width_pt(&self) -> f64 {
        self.width_in * POINTS_PER_INCH
    }

    pub fn height_pt(&self) -> f64 {
        self.height_in * POINTS_PER_INCH
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width_in / self.height_in
    }

    /// Whole page in points.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width_pt(), self.height_pt())
    }

    /// The page inset by the outside margin; all poster frames are relative
    /// to this region.
    pub fn default_frame(&self) -> Frame {
        let v = self.outside_margin * self.aspect_ratio();
        Frame::new(self.outside_margin, self.outside_margin, v, v)
    }

    /// Fraction of the page width left after the outside margins.
    pub fn inner_width_fraction(&self) -> f64 {
        self.default_frame().width_fraction()
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width_in > 0.0 && self.height_in > 0.0) {
            return Err(Error::ConfigError(format!(
                "page must have positive size, got {}x{} in",
                self.width_in, self.height_in
            )));
        }
        if self.outside_margin < 0.0 {
            return Err(Error::ConfigError(format!(
                "outside margin must not be negative, got {}",
                self.outside_margin
            )));
        }
        self.default_frame().validate()
    }
}

/// Tunable parameters of the tilted layout.
///
/// `bottom_tilt` and the vertical gap are derived on demand so they can never
/// drift away from the values they depend on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Header strip height, fraction of the frame height
    pub header_height: f64,
    /// Footer strip height, fraction of the frame height
    pub footer_height: f64,
    /// Gap between columns, fraction of the frame width
    pub column_gap: f64,
    /// Skew of the header seam
    pub top_tilt: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_height: 0.10,
            footer_height: 0.07,
            column_gap: 0.01,
            top_tilt: 0.25,
        }
    }
}

impl LayoutConfig {
    /// Skew of the footer seam, scaled so both seams look alike under the
    /// header/footer height ratio.
    pub fn bottom_tilt(&self) -> f64 {
        self.top_tilt * self.header_height / self.footer_height
    }

    /// Column gap expressed as a fraction of the frame height.
    pub fn column_gap_vertical(&self, page_aspect_ratio: f64) -> f64 {
        self.column_gap * page_aspect_ratio
    }

    /// Height left for the columns between header and footer, gaps removed.
    pub fn body_height(&self, page_aspect_ratio: f64) -> f64 {
        1.0 - self.header_height
            - self.footer_height
            - 2.0 * self.column_gap_vertical(page_aspect_ratio)
    }

    pub fn validate(&self, page_aspect_ratio: f64) -> Result<()> {
        let fields = [
            ("header_height", self.header_height),
            ("footer_height", self.footer_height),
            ("column_gap", self.column_gap),
            ("top_tilt", self.top_tilt),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::ConfigError(format!("{} must be finite", name)));
        }
        if !(self.header_height > 0.0 && self.header_height < 1.0) {
            return Err(Error::ConfigError(format!(
                "header_height must be in (0, 1), got {}",
                self.header_height
            )));
        }
        if !(self.footer_height > 0.0 && self.footer_height < 1.0) {
            return Err(Error::ConfigError(format!(
                "footer_height must be in (0, 1), got {}",
                self.footer_height
            )));
        }
        if self.column_gap < 0.0 {
            return Err(Error::ConfigError(format!(
                "column_gap must not be negative, got {}",
                self.column_gap
            )));
        }
        if self.body_height(page_aspect_ratio) <= 0.0 {
            return Err(Error::ConfigError(format!(
                "header ({}) and footer ({}) leave no room for columns",
                self.header_height, self.footer_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_is_portrait_letter() {
        let p = Page::default();
        assert_eq!(p.width_pt(), 612.0);
        assert_eq!(p.height_pt(), 792.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn default_frame_scales_vertical_margin_by_aspect() {
        let p = Page::landscape();
        let f = p.default_frame();
        assert!((f.left - 0.01).abs() < 1e-12);
        assert!((f.top - 0.01 * 11.0 / 8.5).abs() < 1e-12);
    }

    #[test]
    fn bottom_tilt_is_derived_from_heights() {
        let cfg = LayoutConfig::default();
        assert!((cfg.bottom_tilt() - 0.25 * 0.10 / 0.07).abs() < 1e-12);
        assert!((cfg.bottom_tilt() - 0.3571).abs() < 1e-4);
    }

    #[test]
    fn oversized_header_and_footer_are_rejected() {
        let cfg = LayoutConfig {
            header_height: 0.6,
            footer_height: 0.4,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(1.0), Err(Error::ConfigError(_))));
    }

    #[test]
    fn negative_gap_is_rejected() {
        let cfg = LayoutConfig {
            column_gap: -0.01,
            ..Default::default()
        };
        assert!(cfg.validate(1.0).is_err());
    }
}
