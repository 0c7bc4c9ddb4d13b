use std::f64::consts::{FRAC_PI_2, TAU};

use serde_json::Value;
use tracing::debug;

use crate::api::{DrawPass, TooltipContent, TooltipPanel};
use crate::core::{ARC_HIT_SAMPLES, ChartKind, Color, Point, arc_band_polygon, point_on_arc};
use crate::error::ChartResult;
use crate::render::{ArcPrimitive, FontWeight, TextHAlign, TextPrimitive};
use crate::settings::SliceSettings;

use super::{ChartVariant, RawDataPoint};

/// Tone shift applied to the secondary "volume" ring.
const VOLUME_TONE: f64 = -50.0;

/// Prepared slice entry; rebuilt wholesale on every data change, geometry
/// fields recomputed every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSlice {
    pub value: f64,
    pub label: String,
    pub color: Color,
    /// Share of the dataset total, in percent.
    pub percent: f64,
    /// Sum of all positive values; identical across entries.
    pub total: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Sampled hit region along the inflated ring band.
    pub polygon: Vec<Point>,
    pub hovered: bool,
    /// Eased hover intensity in [0, 1].
    pub state: f64,
}

/// Pie and donut charts: one module, parameterized by kind.
///
/// The two differ only in stroke width relative to the computed radius and
/// in the optional centered label.
pub struct SliceChart {
    kind: ChartKind,
    settings: SliceSettings,
    prepared: Vec<PreparedSlice>,
}

impl SliceChart {
    #[must_use]
    pub fn pie(data: Vec<RawDataPoint>) -> Self {
        Self::with_kind(ChartKind::Pie, data)
    }

    #[must_use]
    pub fn donut(data: Vec<RawDataPoint>) -> Self {
        Self::with_kind(ChartKind::Donut, data)
    }

    fn with_kind(kind: ChartKind, data: Vec<RawDataPoint>) -> Self {
        Self {
            kind,
            settings: SliceSettings::default(),
            prepared: prepare(&data),
        }
    }

    /// Merges caller overrides onto the default tree at construction.
    pub fn with_settings(mut self, overrides: &Value) -> ChartResult<Self> {
        self.settings = crate::settings::merge_settings(&self.settings, overrides)?;
        Ok(self)
    }

    #[must_use]
    pub fn settings(&self) -> &SliceSettings {
        &self.settings
    }

    #[must_use]
    pub fn prepared(&self) -> &[PreparedSlice] {
        &self.prepared
    }
}

/// Drops non-positive entries, derives percents against the remaining
/// total, and defaults missing colors.
///
/// A dataset with no positive values prepares to an empty sequence; the
/// chart then draws nothing instead of failing.
fn prepare(data: &[RawDataPoint]) -> Vec<PreparedSlice> {
    let total: f64 = data
        .iter()
        .filter(|item| item.value > 0.0)
        .map(|item| item.value)
        .sum();

    if total <= 0.0 {
        debug!("slice dataset has no positive values; preparing empty sequence");
        return Vec::new();
    }

    data.iter()
        .filter(|item| item.value > 0.0)
        .map(|item| PreparedSlice {
            value: item.value,
            label: item.label.clone(),
            color: item.color.unwrap_or_else(Color::random),
            percent: 100.0 * item.value / total,
            total,
            start_angle: 0.0,
            end_angle: 0.0,
            polygon: Vec::new(),
            hovered: false,
            state: 0.0,
        })
        .collect()
}

/// Two-decimal percent caption with trailing zeros trimmed (`25%`, `33.33%`).
fn format_percent(percent: f64) -> String {
    let fixed = format!("{percent:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}%")
}

impl ChartVariant for SliceChart {
    type Data = Vec<RawDataPoint>;

    fn kind(&self) -> ChartKind {
        self.kind
    }

    fn set_data(&mut self, data: Self::Data) {
        self.prepared = prepare(&data);
    }

    fn apply_settings(&mut self, overrides: &Value) -> ChartResult<()> {
        self.settings = crate::settings::merge_settings(&self.settings, overrides)?;
        Ok(())
    }

    fn clear_hover(&mut self) {
        for item in &mut self.prepared {
            item.hovered = false;
        }
    }

    fn draw(&mut self, pass: &mut DrawPass<'_>) {
        let kind = self.kind;
        let s = &self.settings;
        let viewport = pass.viewport();
        let loading = pass.loading();

        let ring_inset = if kind == ChartKind::Donut {
            s.data.styles.width
        } else {
            0.0
        };
        let side = ((viewport.height_px() - s.offset.top - s.offset.bottom - ring_inset)
            .min(viewport.width_px() - s.offset.left - s.offset.right - ring_inset)
            * loading)
            .max(0.0);

        let (slice_width, radius) = if kind == ChartKind::Pie {
            (side / 2.0, side / 4.0)
        } else {
            (s.data.styles.width.min(side), side / 2.0)
        };

        let cx = viewport.width_px() / 2.0 + s.offset.left - s.offset.right;
        let cy = viewport.height_px() / 2.0 + s.offset.top - s.offset.bottom;

        // Slices are laid out contiguously from 12 o'clock; each end angle
        // becomes the next start angle, so draw order is the prepared order.
        let mut angle = -FRAC_PI_2;

        for item in &mut self.prepared {
            let start = angle;
            let end = TAU * loading * item.percent / 100.0 + start;
            item.start_angle = start;
            item.end_angle = end;
            angle = end;

            // Inflation from the previous frame's eased state.
            let hover_px = s.data.hover.value * item.state;

            let polygon = arc_band_polygon(
                cx,
                cy,
                radius + hover_px / 2.0,
                slice_width + hover_px,
                start,
                end,
                ARC_HIT_SAMPLES,
            );
            let hit = s.data.hover.enabled && pass.cursor_hits(&polygon);
            item.polygon = polygon;
            item.hovered = hit;
            item.state = pass.hover(item.state, hit);

            pass.push_arc(ArcPrimitive::new(
                cx,
                cy,
                (radius + hover_px / 2.0).max(0.0),
                start,
                end,
                slice_width + hover_px,
                item.color.with_tone(hover_px),
            ));

            if s.data.volumed {
                let (volume_radius, volume_width) = if kind == ChartKind::Donut {
                    let r = radius - slice_width / 4.0 + hover_px / 2.0;
                    (r, slice_width / 2.0 + hover_px)
                } else {
                    let r = radius - slice_width / 6.0 + hover_px / 2.0;
                    (r, (r * 2.0).max(0.0))
                };
                pass.push_arc(ArcPrimitive::new(
                    cx,
                    cy,
                    volume_radius.max(0.0),
                    start,
                    end,
                    volume_width,
                    item.color.with_tone(VOLUME_TONE + hover_px),
                ));
            }
        }

        if s.texts.slice_percent.enabled {
            for item in &self.prepared {
                let hover_px = s.data.hover.value * item.state;
                let percent_radius = radius
                    + if kind == ChartKind::Donut {
                        if s.data.volumed {
                            slice_width / 4.0 + hover_px
                        } else {
                            hover_px / 2.0
                        }
                    } else if s.data.volumed {
                        slice_width / 3.0 + hover_px
                    } else {
                        hover_px / 2.0
                    };

                let mid_angle = (item.start_angle + item.end_angle) / 2.0;
                let anchor = point_on_arc(cx, cy, percent_radius, mid_angle);
                pass.push_text(
                    TextPrimitive::new(
                        format_percent(item.percent),
                        anchor.x,
                        anchor.y,
                        s.texts.slice_percent.styles.font_size,
                        s.texts.slice_percent.styles.color,
                        TextHAlign::Center,
                    )
                    .with_weight(FontWeight::Thin),
                );
            }
        }

        if s.texts.center.enabled && !s.texts.center.value.is_empty() {
            let font_size = s.texts.center.styles.font_size * loading;
            if font_size > 0.0 {
                pass.push_text(
                    TextPrimitive::new(
                        s.texts.center.value.clone(),
                        cx,
                        cy,
                        font_size,
                        s.texts.center.styles.color,
                        TextHAlign::Center,
                    )
                    .with_weight(FontWeight::Bold),
                );
            }
        }
    }

    fn tooltip_content(&self) -> Option<TooltipContent> {
        let hovered = self.prepared.iter().find(|item| item.hovered)?;
        Some(TooltipContent {
            title: hovered.label.clone(),
            panels: vec![TooltipPanel {
                color: hovered.color,
                texts: vec![
                    format!("Value: {}", hovered.value),
                    format!("Percent: {:.2}%", hovered.percent),
                ],
                footer: Some(format!("Total: {}", hovered.total)),
            }],
        })
    }
}
