use serde::{Deserialize, Serialize};

use super::{HoverBehavior, LabelBlock, Offset};

/// Default tree for funnel charts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunnelSettings {
    pub offset: Offset,
    /// Band label drawn near the top edge of each band.
    pub label: LabelBlock,
    /// Numeric value drawn at the vertical midpoint of each band.
    pub value: LabelBlock,
    pub area: AreaSettings,
    pub hover: HoverBehavior,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AreaSettings {
    /// Blends each band's color with its vertical neighbors at the seams.
    pub gradient: bool,
    pub smooth: bool,
}

impl Default for AreaSettings {
    fn default() -> Self {
        Self {
            gradient: false,
            smooth: true,
        }
    }
}
