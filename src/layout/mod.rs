//! Skewed-frame layout engine
//!
//! Computes, in fractional coordinates, the frames of a poster: a header
//! strip, a footer strip and N equal columns. Every border is a four-point
//! polyline whose slanted edges line up across frames, so the page reads as
//! one continuous diagonal seam from left to right.
//!
//! Nothing here draws. Callers resolve frames against physical rectangles
//! with [`Frame::resolve`] and [`BoundaryPolyline::resolve`].

pub mod engine;
pub mod frame;
pub mod page;

pub use engine::{
    background_frame, compute_column_frames, compute_header_footer_frames, compute_tilt_polyline,
    footer_polyline, header_polyline, seam_angle, seat_column, tilt_offset, ColumnLayout,
    PosterLayout,
};
pub use frame::{BoundaryPolyline, Frame, Point, Rect};
pub use page::{LayoutConfig, Page, POINTS_PER_INCH};
