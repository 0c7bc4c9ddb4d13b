mod color;
mod geometry;
mod types;

pub use color::Color;
pub use geometry::{ARC_HIT_SAMPLES, Point, arc_band_polygon, point_in_polygon, point_on_arc};
pub use types::{ChartKind, CursorPoint, RenderReason, Viewport};
