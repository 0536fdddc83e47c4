/// Skewed-frame layout: header, footer and tilted columns

use log::debug;
use serde::Serialize;

use super::frame::{BoundaryPolyline, Frame};
use super::page::{LayoutConfig, Page};
use crate::{Error, Result};

/// Header and footer strips. The header hangs from the top of the frame, the
/// footer sits on its bottom; neither depends on the column count.
pub fn compute_header_footer_frames(config: &LayoutConfig) -> (Frame, Frame) {
    let header = Frame::new(0.0, 0.0, 0.0, 1.0 - config.header_height);
    let footer = Frame::new(0.0, 0.0, 1.0 - config.footer_height, 0.0);
    (header, footer)
}

/// Split the width into `n_columns` equal columns separated by
/// `config.column_gap`, ordered left to right.
///
/// Only the horizontal margins are set; see [`seat_column`] for the vertical
/// placement between the seams.
pub fn compute_column_frames(n_columns: usize, config: &LayoutConfig) -> Result<Vec<Frame>> {
    if n_columns == 0 {
        return Err(Error::ConfigError("a poster needs at least one column".into()));
    }
    let gap = config.column_gap;
    if !(gap >= 0.0) {
        return Err(Error::ConfigError(format!("column gap must not be negative, got {}", gap)));
    }
    let gaps = gap * (n_columns - 1) as f64;
    if gaps >= 1.0 {
        return Err(Error::ConfigError(format!(
            "{} gaps of {} leave no width for {} columns",
            n_columns - 1,
            gap,
            n_columns
        )));
    }

    let n = n_columns as f64;
    let width = (1.0 - gaps) / n;
    let stride = width + gap;

    Ok((0..n_columns)
        .map(|i| {
            let left = i as f64 * stride;
            let right = (n_columns - 1 - i) as f64 * stride;
            Frame::new(left, right, 0.0, 0.0)
        })
        .collect())
}

/// Give a column its vertical margins so its top edge tucks under the header
/// seam and its bottom edge clears the footer seam, one vertical gap apart.
pub fn seat_column(frame: Frame, config: &LayoutConfig, page_aspect_ratio: f64) -> Frame {
    let vgap = config.column_gap_vertical(page_aspect_ratio);

    let top_offset = config.top_tilt * config.header_height * (1.0 - 2.0 * frame.left);
    let bottom_offset = config.bottom_tilt() * config.footer_height * (2.0 * frame.right - 1.0);

    Frame {
        top: config.header_height + top_offset + vgap,
        bottom: config.footer_height - bottom_offset + vgap,
        ..frame
    }
}

/// Boundary of a column. The bottom-left corner drops and the top-right
/// corner rises by the same amount, scaled by the column's share of the
/// width, so the slanted edges of neighbouring columns continue one another.
pub fn compute_tilt_polyline(
    frame: &Frame,
    config: &LayoutConfig,
    page_aspect_ratio: f64,
) -> BoundaryPolyline {
    let dy = tilt_offset(frame, config, page_aspect_ratio);
    BoundaryPolyline::new([(0.0, -dy), (1.0, 0.0), (1.0, 1.0 + dy), (0.0, 1.0)])
}

/// Vertical displacement of a column's slanted corners, in column-local units.
pub fn tilt_offset(frame: &Frame, config: &LayoutConfig, page_aspect_ratio: f64) -> f64 {
    let dy = config.top_tilt * config.header_height / config.body_height(page_aspect_ratio);
    dy * frame.width_fraction() * 2.0
}

/// Header border: the bottom edge slants up from left to right.
pub fn header_polyline(config: &LayoutConfig) -> BoundaryPolyline {
    let t = config.top_tilt;
    BoundaryPolyline::new([(0.0, -t), (1.0, t), (1.0, 1.0), (0.0, 1.0)])
}

/// Footer border: the top edge slants up from left to right.
pub fn footer_polyline(config: &LayoutConfig) -> BoundaryPolyline {
    let t = config.bottom_tilt();
    BoundaryPolyline::new([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0 + t), (0.0, 1.0 - t)])
}

/// Frame that covers the outside margin, used for the page background.
pub fn background_frame(page: &Page) -> Frame {
    let h = -page.outside_margin;
    let v = h * page.aspect_ratio();
    Frame::new(h, h, v, v)
}

/// Rotation in degrees of text that should run parallel to the header seam.
pub fn seam_angle(config: &LayoutConfig) -> f64 {
    (2.0 * config.top_tilt * config.header_height).atan().to_degrees()
}

/// A column frame together with its tilted border.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnLayout {
    pub frame: Frame,
    pub boundary: BoundaryPolyline,
}

impl ColumnLayout {
    /// Width of the column as a fraction of the poster frame.
    pub fn width_fraction(&self) -> f64 {
        self.frame.width_fraction()
    }
}

/// Every frame of a poster, computed once before anything is drawn.
///
/// Frames are relative to the page's default frame (the page minus its
/// outside margin).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosterLayout {
    pub page: Page,
    pub config: LayoutConfig,
    pub background: Frame,
    pub header: Frame,
    pub header_boundary: BoundaryPolyline,
    pub footer: Frame,
    pub footer_boundary: BoundaryPolyline,
    pub columns: Vec<ColumnLayout>,
}

impl PosterLayout {
    pub fn compute(page: Page, config: LayoutConfig, n_columns: usize) -> Result<Self> {
        page.validate()?;
        let aspect = page.aspect_ratio();
        config.validate(aspect)?;

        let (header, footer) = compute_header_footer_frames(&config);
        header.validate()?;
        footer.validate()?;

        let columns = compute_column_frames(n_columns, &config)?
            .into_iter()
            .map(|f| {
                let frame = seat_column(f, &config, aspect);
                frame.validate()?;
                Ok(ColumnLayout {
                    boundary: compute_tilt_polyline(&frame, &config, aspect),
                    frame,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "laid out {} column(s): bottom tilt {:.4}, column width {:.4}",
            n_columns,
            config.bottom_tilt(),
            columns[0].width_fraction()
        );

        Ok(Self {
            page,
            config,
            background: background_frame(&page),
            header,
            header_boundary: header_polyline(&config),
            footer,
            footer_boundary: footer_polyline(&config),
            columns,
        })
    }

    pub fn seam_angle(&self) -> f64 {
        seam_angle(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn cfg(gap: f64) -> LayoutConfig {
        LayoutConfig {
            column_gap: gap,
            ..Default::default()
        }
    }

    #[test]
    fn header_and_footer_frames() {
        let (h, f) = compute_header_footer_frames(&LayoutConfig::default());
        assert!((h.bottom - 0.90).abs() < EPS);
        assert_eq!(h.top, 0.0);
        assert!((f.top - 0.93).abs() < EPS);
        assert_eq!(f.bottom, 0.0);
    }

    #[test]
    fn three_columns_with_gap() {
        let cols = compute_column_frames(3, &cfg(0.01)).unwrap();
        let width = (1.0 - 0.02) / 3.0;
        assert!((cols[0].width_fraction() - width).abs() < EPS);
        assert!((width - 0.32667).abs() < 1e-5);

        let stride = width + 0.01;
        assert!(cols[0].left.abs() < EPS);
        assert!((cols[0].right - 2.0 * stride).abs() < EPS);
        assert!((cols[1].left - stride).abs() < EPS);
        assert!((cols[1].right - stride).abs() < EPS);
        assert!((cols[2].left - 2.0 * stride).abs() < EPS);
        assert!(cols[2].right.abs() < EPS);
        assert!((cols[0].right - 0.67333).abs() < 1e-5);
        assert!((cols[1].left - 0.33667).abs() < 1e-5);
    }

    #[test]
    fn single_column_spans_full_width() {
        let cols = compute_column_frames(1, &cfg(0.0)).unwrap();
        assert_eq!(cols.len(), 1);
        assert_eq!(cols[0].left, 0.0);
        assert_eq!(cols[0].right, 0.0);
    }

    #[test]
    fn zero_columns_and_oversized_gaps_are_rejected() {
        assert!(compute_column_frames(0, &cfg(0.01)).is_err());
        assert!(compute_column_frames(3, &cfg(0.5)).is_err());
        assert!(compute_column_frames(2, &cfg(1.0)).is_err());
        assert!(compute_column_frames(1, &cfg(5.0)).is_ok());
    }

    #[test]
    fn tilt_polyline_shape() {
        let c = LayoutConfig::default();
        let full = Frame::default();
        let poly = compute_tilt_polyline(&full, &c, 1.0);
        let dy = c.top_tilt * c.header_height / (1.0 - 0.10 - 0.07 - 0.02) * 2.0;
        assert!((poly.points[0].1 + dy).abs() < EPS);
        assert_eq!(poly.points[1], (1.0, 0.0));
        assert!((poly.points[2].1 - (1.0 + dy)).abs() < EPS);
        assert_eq!(poly.points[3], (0.0, 1.0));
    }

    #[test]
    fn seated_columns_follow_the_seams() {
        let c = LayoutConfig::default();
        let cols = compute_column_frames(2, &c).unwrap();
        let left = seat_column(cols[0], &c, 1.0);
        let right = seat_column(cols[1], &c, 1.0);
        // The seam rises to the right, so the right column starts lower from the top.
        assert!(left.top > right.top);
        // And its bottom seam is higher on the right.
        assert!(right.bottom > left.bottom);
        // Full-width column starts one gap below the header at the left edge.
        let full = seat_column(Frame::default(), &c, 1.0);
        assert!((full.top - (0.10 + 0.25 * 0.10 + 0.01)).abs() < EPS);
    }

    #[test]
    fn seam_angle_matches_header_slope() {
        let a = seam_angle(&LayoutConfig::default());
        assert!((a - (0.05f64).atan().to_degrees()).abs() < EPS);
    }

    #[test]
    fn poster_layout_fails_fast_on_bad_config() {
        let bad = LayoutConfig {
            footer_height: 0.0,
            ..Default::default()
        };
        assert!(PosterLayout::compute(Page::default(), bad, 2).is_err());
        assert!(PosterLayout::compute(Page::default(), LayoutConfig::default(), 0).is_err());
    }

    #[test]
    fn poster_layout_has_one_boundary_per_column() {
        let l = PosterLayout::compute(Page::landscape(), LayoutConfig::default(), 4).unwrap();
        assert_eq!(l.columns.len(), 4);
        assert!(l.background.left < 0.0);
        assert!(l.columns.iter().all(|c| c.frame.validate().is_ok()));
    }
}
