use serde::{Deserialize, Serialize};

use crate::core::Color;

use super::{HoverBehavior, LabelBlock, Offset, TextStyles};

/// Default tree for radar charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RadarSettings {
    pub offset: Offset,
    pub grid: GridSettings,
    pub labels: LabelBlock,
    pub area: RadarAreaSettings,
    pub hover: HoverBehavior,
}

impl Default for RadarSettings {
    fn default() -> Self {
        Self {
            offset: Offset::default(),
            grid: GridSettings::default(),
            labels: LabelBlock {
                enabled: true,
                styles: TextStyles {
                    font_size: 12.0,
                    color: Color::rgb(255, 255, 255),
                },
            },
            area: RadarAreaSettings::default(),
            hover: HoverBehavior {
                enabled: true,
                value: 10.0,
            },
        }
    }
}

/// Concentric guide rings behind the dataset polygons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridSettings {
    pub rings: u32,
    pub color: Color,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            rings: 4,
            color: Color::rgb(68, 68, 68),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RadarAreaSettings {
    /// Fill opacity of dataset polygons at full loading.
    pub opacity: f64,
}

impl Default for RadarAreaSettings {
    fn default() -> Self {
        Self { opacity: 0.35 }
    }
}
