use std::f64::consts::{FRAC_PI_2, TAU};

use serde_json::Value;
use tracing::debug;

use crate::api::{DrawPass, TooltipContent, TooltipPanel};
use crate::core::{ChartKind, Color, Point, point_on_arc};
use crate::error::ChartResult;
use crate::render::{ArcPrimitive, Fill, LinePrimitive, PolygonPrimitive, TextHAlign, TextPrimitive};
use crate::settings::RadarSettings;

use super::ChartVariant;

const GRID_STROKE_WIDTH: f64 = 1.0;
const RING_OUTLINE_WIDTH: f64 = 2.0;
/// Gap between the outermost grid ring and the axis labels.
const AXIS_LABEL_GAP: f64 = 16.0;

/// Radar input: one shared axis set, any number of overlaid datasets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RadarData {
    pub labels: Vec<String>,
    pub datasets: Vec<RadarDataset>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarDataset {
    pub name: String,
    pub values: Vec<f64>,
    pub color: Option<Color>,
}

impl RadarDataset {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Prepared dataset ring; the polygon doubles as fill outline and hit
/// region.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRing {
    pub name: String,
    pub color: Color,
    pub values: Vec<f64>,
    pub polygon: Vec<Point>,
    pub hovered: bool,
    /// Eased hover intensity in [0, 1].
    pub state: f64,
}

/// Radar (spider) chart: axes fan out from the center starting at 12
/// o'clock, each dataset draws one translucent polygon over a shared grid.
pub struct RadarChart {
    settings: RadarSettings,
    labels: Vec<String>,
    prepared: Vec<PreparedRing>,
}

impl RadarChart {
    #[must_use]
    pub fn new(data: RadarData) -> Self {
        Self {
            settings: RadarSettings::default(),
            labels: data.labels.clone(),
            prepared: prepare(&data),
        }
    }

    /// Merges caller overrides onto the default tree at construction.
    pub fn with_settings(mut self, overrides: &Value) -> ChartResult<Self> {
        self.settings = crate::settings::merge_settings(&self.settings, overrides)?;
        Ok(self)
    }

    #[must_use]
    pub fn settings(&self) -> &RadarSettings {
        &self.settings
    }

    #[must_use]
    pub fn prepared(&self) -> &[PreparedRing] {
        &self.prepared
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

fn prepare(data: &RadarData) -> Vec<PreparedRing> {
    data.datasets
        .iter()
        .map(|dataset| PreparedRing {
            name: dataset.name.clone(),
            color: dataset.color.unwrap_or_else(Color::random),
            values: dataset.values.clone(),
            polygon: Vec::new(),
            hovered: false,
            state: 0.0,
        })
        .collect()
}

/// Distance of one dataset vertex from the center. Negative values pin to
/// the center; the eased hover state inflates the whole ring uniformly.
pub(crate) fn vertex_radius(value: f64, max: f64, max_radius: f64, inflation: f64) -> f64 {
    (value.max(0.0) / max) * max_radius + inflation
}

impl ChartVariant for RadarChart {
    type Data = RadarData;

    fn kind(&self) -> ChartKind {
        ChartKind::Radar
    }

    fn set_data(&mut self, data: Self::Data) {
        self.labels = data.labels.clone();
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
        let axis_count = self.labels.len();
        if axis_count < 3 {
            debug!(axis_count, "radar needs at least 3 axes; drawing nothing");
            return;
        }

        let s = &self.settings;
        let viewport = pass.viewport();
        let loading = pass.loading();

        let cx = viewport.width_px() / 2.0 + s.offset.left - s.offset.right;
        let cy = viewport.height_px() / 2.0 + s.offset.top - s.offset.bottom;
        let avail_width = (viewport.width_px() - s.offset.left - s.offset.right).max(0.0);
        let avail_height = (viewport.height_px() - s.offset.top - s.offset.bottom).max(0.0);
        let max_radius = avail_width.min(avail_height) / 2.0 * loading;

        let axis_angle = |index: usize| -FRAC_PI_2 + TAU * index as f64 / axis_count as f64;

        // Grid first so dataset polygons layer above it.
        for ring in 1..=s.grid.rings {
            let radius = max_radius * f64::from(ring) / f64::from(s.grid.rings.max(1));
            pass.push_arc(ArcPrimitive::new(
                cx,
                cy,
                radius,
                0.0,
                TAU,
                GRID_STROKE_WIDTH,
                s.grid.color,
            ));
        }
        for index in 0..axis_count {
            let tip = point_on_arc(cx, cy, max_radius, axis_angle(index));
            pass.push_line(LinePrimitive::new(
                cx,
                cy,
                tip.x,
                tip.y,
                GRID_STROKE_WIDTH,
                s.grid.color,
            ));
        }

        let max = self
            .prepared
            .iter()
            .flat_map(|ring| ring.values.iter().copied())
            .filter(|value| value.is_finite())
            .fold(f64::NEG_INFINITY, f64::max);

        if max > 0.0 {
            for item in &mut self.prepared {
                // Inflation from the previous frame's eased state.
                let hover_px = s.hover.value * item.state;

                let polygon: Vec<Point> = (0..axis_count)
                    .map(|index| {
                        let value = item.values.get(index).copied().unwrap_or(0.0);
                        let radius = vertex_radius(value, max, max_radius, hover_px);
                        point_on_arc(cx, cy, radius, axis_angle(index))
                    })
                    .collect();

                let hit = s.hover.enabled && pass.cursor_hits(&polygon);
                item.polygon = polygon.clone();
                item.hovered = hit;
                item.state = pass.hover(item.state, hit);

                let color = item.color.with_tone(hover_px);
                for index in 0..polygon.len() {
                    let from = polygon[index];
                    let to = polygon[(index + 1) % polygon.len()];
                    pass.push_line(LinePrimitive::new(
                        from.x,
                        from.y,
                        to.x,
                        to.y,
                        RING_OUTLINE_WIDTH,
                        color,
                    ));
                }
                let alpha = (s.area.opacity * loading).clamp(0.0, 1.0);
                if alpha > 0.0 {
                    pass.push_polygon(
                        PolygonPrimitive::new(polygon, Fill::Solid { color }).with_alpha(alpha),
                    );
                }
            }
        } else {
            debug!("radar datasets have no positive values; drawing grid only");
        }

        if s.labels.enabled {
            let font_size = s.labels.styles.font_size * loading;
            if font_size > 0.0 {
                for (index, label) in self.labels.iter().enumerate() {
                    if label.is_empty() {
                        continue;
                    }
                    let anchor =
                        point_on_arc(cx, cy, max_radius + AXIS_LABEL_GAP, axis_angle(index));
                    pass.push_text(
                        TextPrimitive::new(
                            label.clone(),
                            anchor.x,
                            anchor.y,
                            font_size,
                            s.labels.styles.color,
                            TextHAlign::Center,
                        )
                        .with_alpha(loading.clamp(0.0, 1.0)),
                    );
                }
            }
        }
    }

    fn tooltip_content(&self) -> Option<TooltipContent> {
        let hovered = self.prepared.iter().find(|item| item.hovered)?;
        let texts = self
            .labels
            .iter()
            .zip(&hovered.values)
            .map(|(label, value)| format!("{label}: {value}"))
            .collect();
        Some(TooltipContent {
            title: hovered.name.clone(),
            panels: vec![TooltipPanel {
                color: hovered.color,
                texts,
                footer: None,
            }],
        })
    }
}
