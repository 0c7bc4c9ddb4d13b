//! Chart-type modules behind one capability contract.
//!
//! Each variant supplies data preparation, a draw routine, and tooltip
//! content; the lifecycle engine composes exactly one variant per chart
//! instance (no subclassing, just the trait seam).

mod combo;
mod funnel;
mod radar;
mod slice;

pub use combo::{ComboChart, ComboData, ComboDataset, PreparedSeries, SeriesKind};
pub use funnel::{FunnelChart, PreparedBand};
pub use radar::{PreparedRing, RadarChart, RadarData, RadarDataset};
pub use slice::{PreparedSlice, SliceChart};

use serde_json::Value;

use crate::api::{DrawPass, TooltipContent};
use crate::core::{ChartKind, Color};
use crate::error::ChartResult;

/// Caller-supplied dataset entry. Untrusted: values may be non-positive
/// and the color is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDataPoint {
    pub value: f64,
    pub label: String,
    pub color: Option<Color>,
}

impl RawDataPoint {
    #[must_use]
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Capability contract implemented by every chart-type module.
///
/// The engine drives the lifecycle; the variant owns its prepared data
/// exclusively and rebuilds it wholesale on every `set_data`.
pub trait ChartVariant {
    type Data;

    fn kind(&self) -> ChartKind;

    /// Rebuilds the prepared sequence from raw input.
    fn set_data(&mut self, data: Self::Data);

    /// Deep-merges a partial override onto the current settings tree.
    ///
    /// Leaves settings untouched on a shape error.
    fn apply_settings(&mut self, overrides: &Value) -> ChartResult<()>;

    /// Drops all hover flags (pointer left the surface).
    fn clear_hover(&mut self);

    /// Recomputes geometry for the current frame, reports hover hits back
    /// through the pass, and emits draw primitives in prepared-data order.
    fn draw(&mut self, pass: &mut DrawPass<'_>);

    /// Tooltip for the first hovered item in draw order, if any.
    fn tooltip_content(&self) -> Option<TooltipContent>;
}
