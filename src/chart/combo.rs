use serde_json::Value;
use tracing::debug;

use crate::api::{DrawPass, TooltipContent, TooltipPanel};
use crate::core::{ChartKind, Color, Point};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};
use crate::settings::ComboSettings;

use super::ChartVariant;

const BASELINE_COLOR: Color = Color::rgb(68, 68, 68);
const BASELINE_STROKE_WIDTH: f64 = 1.0;
/// Half-side of the square hit region around line and dot vertices.
const VERTEX_HIT_HALF: f64 = 6.0;
/// Gap between the baseline and the x-axis label baseline.
const AXIS_LABEL_GAP: f64 = 4.0;

/// How one combo dataset renders inside the shared label slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Bar,
    Line,
    Dot,
}

/// Combo input: one shared label axis, any mix of bar, line, and dot
/// datasets over it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComboData {
    pub labels: Vec<String>,
    pub datasets: Vec<ComboDataset>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComboDataset {
    pub name: String,
    pub kind: SeriesKind,
    /// Corner-cut the polyline (line datasets only).
    pub smooth: bool,
    pub values: Vec<f64>,
    pub color: Option<Color>,
}

impl ComboDataset {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: SeriesKind, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            kind,
            smooth: false,
            values,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn smoothed(mut self) -> Self {
        self.smooth = true;
        self
    }
}

/// Prepared combo series with one hit polygon per label slot.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSeries {
    pub name: String,
    pub kind: SeriesKind,
    pub smooth: bool,
    pub color: Color,
    pub values: Vec<f64>,
    pub hit_polygons: Vec<Vec<Point>>,
    pub hovered: bool,
    /// Slot index under the cursor, when hovered.
    pub hovered_slot: Option<usize>,
    /// Eased hover intensity in [0, 1].
    pub state: f64,
}

/// Combo chart: grouped bars, polylines, and dot series over one shared
/// label axis with a zero baseline.
pub struct ComboChart {
    settings: ComboSettings,
    labels: Vec<String>,
    prepared: Vec<PreparedSeries>,
}

impl ComboChart {
    #[must_use]
    pub fn new(data: ComboData) -> Self {
        Self {
            settings: ComboSettings::default(),
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
    pub fn settings(&self) -> &ComboSettings {
        &self.settings
    }

    #[must_use]
    pub fn prepared(&self) -> &[PreparedSeries] {
        &self.prepared
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

fn prepare(data: &ComboData) -> Vec<PreparedSeries> {
    data.datasets
        .iter()
        .map(|dataset| PreparedSeries {
            name: dataset.name.clone(),
            kind: dataset.kind,
            smooth: dataset.smooth,
            color: dataset.color.unwrap_or_else(Color::random),
            values: dataset.values.clone(),
            hit_polygons: Vec::new(),
            hovered: false,
            hovered_slot: None,
            state: 0.0,
        })
        .collect()
}

/// One round of Chaikin corner cutting; endpoints stay fixed.
pub(crate) fn smooth_polyline(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let mut out = Vec::with_capacity(points.len() * 2);
    out.push(points[0]);
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        out.push(Point::new(
            a.x * 0.75 + b.x * 0.25,
            a.y * 0.75 + b.y * 0.25,
        ));
        out.push(Point::new(
            a.x * 0.25 + b.x * 0.75,
            a.y * 0.25 + b.y * 0.75,
        ));
    }
    out.push(points[points.len() - 1]);
    out
}

fn axis_aligned_box(cx: f64, cy: f64, half: f64) -> Vec<Point> {
    vec![
        Point::new(cx - half, cy - half),
        Point::new(cx + half, cy - half),
        Point::new(cx + half, cy + half),
        Point::new(cx - half, cy + half),
    ]
}

impl ChartVariant for ComboChart {
    type Data = ComboData;

    fn kind(&self) -> ChartKind {
        ChartKind::Combo
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
            item.hovered_slot = None;
        }
    }

    fn draw(&mut self, pass: &mut DrawPass<'_>) {
        let slot_count = self.labels.len();
        if slot_count == 0 {
            debug!("combo chart has no labels; drawing nothing");
            return;
        }

        let s = &self.settings;
        let viewport = pass.viewport();
        let loading = pass.loading();

        let x_start = s.offset.left;
        let x_end = viewport.width_px() - s.offset.right;
        let y_start = s.offset.top;
        let y_end = viewport.height_px() - s.offset.bottom;
        let plot_width = (x_end - x_start).max(0.0);
        let plot_height = (y_end - y_start).max(0.0);
        let slot_width = plot_width / slot_count as f64;

        // Value range always spans zero so the baseline stays inside the
        // plot and bars have somewhere to grow from.
        let mut min = 0.0f64;
        let mut max = 0.0f64;
        for series in &self.prepared {
            for value in series.values.iter().copied().filter(|v| v.is_finite()) {
                min = min.min(value);
                max = max.max(value);
            }
        }
        let span = if max - min > 0.0 { max - min } else { 1.0 };

        let y_for = |value: f64| y_end - (value - min) / span * plot_height;
        let slot_center = |slot: usize| x_start + slot_width * (slot as f64 + 0.5);
        let baseline_y = y_for(0.0);

        pass.push_line(LinePrimitive::new(
            x_start,
            baseline_y,
            x_end,
            baseline_y,
            BASELINE_STROKE_WIDTH,
            BASELINE_COLOR,
        ));

        let bar_series_count = self
            .prepared
            .iter()
            .filter(|series| series.kind == SeriesKind::Bar)
            .count();
        let bar_width = if bar_series_count > 0 {
            ((slot_width - s.bar.gap * (bar_series_count as f64 + 1.0))
                / bar_series_count as f64)
                .max(1.0)
        } else {
            0.0
        };

        let mut bar_index = 0usize;
        for series in &mut self.prepared {
            // Tone shift from the previous frame's eased state.
            let hover_tone = s.hover.value * series.state;
            let color = series.color.with_tone(hover_tone);

            let value_at = |slot: usize| {
                series
                    .values
                    .get(slot)
                    .copied()
                    .filter(|v| v.is_finite())
                    .unwrap_or(0.0)
                    * loading
            };

            let mut hit_polygons = Vec::with_capacity(slot_count);
            match series.kind {
                SeriesKind::Bar => {
                    for slot in 0..slot_count {
                        let value = value_at(slot);
                        let x = x_start
                            + slot_width * slot as f64
                            + s.bar.gap * (bar_index as f64 + 1.0)
                            + bar_width * bar_index as f64;
                        let y_value = y_for(value);
                        let top = y_value.min(baseline_y);
                        let height = (y_value - baseline_y).abs();
                        pass.push_rect(RectPrimitive::new(x, top, bar_width, height, color));
                        hit_polygons.push(vec![
                            Point::new(x, top),
                            Point::new(x + bar_width, top),
                            Point::new(x + bar_width, top + height),
                            Point::new(x, top + height),
                        ]);
                    }
                    bar_index += 1;
                }
                SeriesKind::Line => {
                    let vertices: Vec<Point> = (0..slot_count)
                        .map(|slot| Point::new(slot_center(slot), y_for(value_at(slot))))
                        .collect();
                    let path = if series.smooth {
                        smooth_polyline(&vertices)
                    } else {
                        vertices.clone()
                    };
                    for pair in path.windows(2) {
                        pass.push_line(LinePrimitive::new(
                            pair[0].x,
                            pair[0].y,
                            pair[1].x,
                            pair[1].y,
                            s.line.width,
                            color,
                        ));
                    }
                    if s.line.dots.enabled {
                        for vertex in &vertices {
                            let side = s.line.dots.radius * 2.0;
                            pass.push_rect(RectPrimitive::new(
                                vertex.x - s.line.dots.radius,
                                vertex.y - s.line.dots.radius,
                                side,
                                side,
                                color,
                            ));
                        }
                    }
                    for vertex in &vertices {
                        hit_polygons.push(axis_aligned_box(vertex.x, vertex.y, VERTEX_HIT_HALF));
                    }
                }
                SeriesKind::Dot => {
                    for slot in 0..slot_count {
                        let center = Point::new(slot_center(slot), y_for(value_at(slot)));
                        let side = s.line.dots.radius * 2.0;
                        pass.push_rect(RectPrimitive::new(
                            center.x - s.line.dots.radius,
                            center.y - s.line.dots.radius,
                            side,
                            side,
                            color,
                        ));
                        hit_polygons
                            .push(axis_aligned_box(center.x, center.y, VERTEX_HIT_HALF));
                    }
                }
            }

            let hovered_slot = if s.hover.enabled {
                hit_polygons
                    .iter()
                    .position(|polygon| pass.cursor_hits(polygon))
            } else {
                None
            };
            series.hit_polygons = hit_polygons;
            series.hovered_slot = hovered_slot;
            series.hovered = hovered_slot.is_some();
            series.state = pass.hover(series.state, series.hovered);
        }

        if s.labels.enabled {
            let font_size = s.labels.styles.font_size * loading;
            if font_size > 0.0 {
                for (slot, label) in self.labels.iter().enumerate() {
                    if label.is_empty() {
                        continue;
                    }
                    pass.push_text(
                        TextPrimitive::new(
                            label.clone(),
                            slot_center(slot),
                            y_end + font_size + AXIS_LABEL_GAP,
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
        let hovered = self.prepared.iter().find(|series| series.hovered)?;
        let slot = hovered.hovered_slot?;
        let label = self.labels.get(slot)?;
        let value = hovered.values.get(slot).copied().unwrap_or(0.0);
        Some(TooltipContent {
            title: hovered.name.clone(),
            panels: vec![TooltipPanel {
                color: hovered.color,
                texts: vec![format!("{label}: {value}")],
                footer: None,
            }],
        })
    }
}
