use serde::{Deserialize, Serialize};

use crate::core::Color;

use super::{HoverBehavior, LabelBlock, Offset, TextStyles};

/// Default tree for pie and donut charts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SliceSettings {
    pub offset: Offset,
    pub data: SliceDataSettings,
    pub texts: SliceTextSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SliceDataSettings {
    pub styles: SliceRingStyles,
    pub hover: HoverBehavior,
    /// Draws a darker secondary ring inset from the primary one.
    pub volumed: bool,
}

impl Default for SliceDataSettings {
    fn default() -> Self {
        Self {
            styles: SliceRingStyles::default(),
            hover: HoverBehavior::default(),
            volumed: false,
        }
    }
}

/// Ring stroke styling; `width` only applies to donuts, pies derive their
/// stroke from the available side size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SliceRingStyles {
    pub width: f64,
}

impl Default for SliceRingStyles {
    fn default() -> Self {
        Self { width: 40.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SliceTextSettings {
    pub slice_percent: LabelBlock,
    pub center: CenterLabel,
}

impl Default for SliceTextSettings {
    fn default() -> Self {
        Self {
            slice_percent: LabelBlock::default(),
            center: CenterLabel::default(),
        }
    }
}

/// Optional label drawn at the chart center (donut holes, mostly).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CenterLabel {
    pub enabled: bool,
    pub value: String,
    pub styles: TextStyles,
}

impl Default for CenterLabel {
    fn default() -> Self {
        Self {
            enabled: false,
            value: String::new(),
            styles: TextStyles {
                font_size: 24.0,
                color: Color::rgb(255, 255, 255),
            },
        }
    }
}
