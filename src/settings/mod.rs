//! Typed settings schemas and their merge semantics.
//!
//! Each chart kind ships an immutable default tree (`Default` impl). Caller
//! overrides arrive as partial JSON, are deep-merged onto the serialized
//! current tree, and the merged tree is re-typed. Unknown keys are rejected
//! explicitly rather than silently accepted.

mod combo;
mod funnel;
mod merge;
mod radar;
mod slice;

pub use combo::{BarSettings, ComboSettings, DotSettings, LineSettings};
pub use funnel::{AreaSettings, FunnelSettings};
pub use merge::deep_merge;
pub use radar::{GridSettings, RadarAreaSettings, RadarSettings};
pub use slice::{CenterLabel, SliceDataSettings, SliceRingStyles, SliceSettings, SliceTextSettings};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::Color;
use crate::error::{ChartError, ChartResult};

/// Offsets between the canvas edges and the drawable plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Offset {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Offset {
    #[must_use]
    pub const fn uniform(inset: f64) -> Self {
        Self {
            top: inset,
            right: inset,
            bottom: inset,
            left: inset,
        }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::uniform(30.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextStyles {
    pub font_size: f64,
    pub color: Color,
}

impl Default for TextStyles {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            color: Color::rgb(255, 255, 255),
        }
    }
}

/// Toggleable text block (labels, values, percent captions).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelBlock {
    pub enabled: bool,
    pub styles: TextStyles,
}

impl Default for LabelBlock {
    fn default() -> Self {
        Self {
            enabled: true,
            styles: TextStyles::default(),
        }
    }
}

/// Hover feedback behavior shared by every chart kind.
///
/// `value` is the inflation magnitude in pixels applied at full hover
/// state; the eased per-item state scales it frame by frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HoverBehavior {
    pub enabled: bool,
    pub value: f64,
}

impl Default for HoverBehavior {
    fn default() -> Self {
        Self {
            enabled: true,
            value: 15.0,
        }
    }
}

/// Merges a partial JSON override onto typed settings and re-types the result.
///
/// The current settings act as the base tree; the merge never mutates them.
/// A shape mismatch or unknown key surfaces as `InvalidSettings` and leaves
/// the caller's settings untouched.
pub(crate) fn merge_settings<T>(current: &T, overrides: &Value) -> ChartResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let base = serde_json::to_value(current)
        .map_err(|e| ChartError::InvalidSettings(format!("failed to serialize settings: {e}")))?;
    let merged = deep_merge(&base, overrides);
    serde_json::from_value(merged).map_err(|e| ChartError::InvalidSettings(e.to_string()))
}
