use serde::{Deserialize, Serialize};

use crate::core::Color;

use super::{HoverBehavior, LabelBlock, Offset, TextStyles};

/// Default tree for combo charts (bar + line + dot series over one axis).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComboSettings {
    pub offset: Offset,
    pub bar: BarSettings,
    pub line: LineSettings,
    pub labels: LabelBlock,
    pub hover: HoverBehavior,
}

impl Default for ComboSettings {
    fn default() -> Self {
        Self {
            offset: Offset::default(),
            bar: BarSettings::default(),
            line: LineSettings::default(),
            labels: LabelBlock {
                enabled: true,
                styles: TextStyles {
                    font_size: 12.0,
                    color: Color::rgb(255, 255, 255),
                },
            },
            hover: HoverBehavior {
                enabled: true,
                value: 10.0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BarSettings {
    /// Horizontal gap between grouped bars inside one label slot.
    pub gap: f64,
}

impl Default for BarSettings {
    fn default() -> Self {
        Self { gap: 4.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineSettings {
    pub width: f64,
    pub dots: DotSettings,
}

impl Default for LineSettings {
    fn default() -> Self {
        Self {
            width: 2.0,
            dots: DotSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DotSettings {
    pub enabled: bool,
    pub radius: f64,
}

impl Default for DotSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            radius: 3.0,
        }
    }
}
