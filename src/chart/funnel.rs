use serde_json::Value;
use tracing::debug;

use crate::api::{DrawPass, TooltipContent, TooltipPanel};
use crate::core::{ChartKind, Color, Point};
use crate::error::ChartResult;
use crate::render::{Fill, FontWeight, GradientStop, PolygonPrimitive, TextHAlign, TextPrimitive};
use crate::settings::FunnelSettings;

use super::{ChartVariant, RawDataPoint};

/// Vertical gap between a band's top edge and its label baseline.
const LABEL_TOP_GAP: f64 = 5.0;

/// Prepared funnel band. Unlike slices, non-positive entries are kept:
/// every input row owns a band row, a zero value just collapses to the
/// center line.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedBand {
    pub value: f64,
    pub label: String,
    pub color: Color,
    /// Trapezoid hit region, recomputed every frame.
    pub polygon: Vec<Point>,
    pub hovered: bool,
    /// Eased hover intensity in [0, 1].
    pub state: f64,
}

/// Top-down funnel of horizontally centered bands. Input order is display
/// order; band widths are sized against the dataset maximum, not the sum.
pub struct FunnelChart {
    settings: FunnelSettings,
    prepared: Vec<PreparedBand>,
}

impl FunnelChart {
    #[must_use]
    pub fn new(data: Vec<RawDataPoint>) -> Self {
        Self {
            settings: FunnelSettings::default(),
            prepared: prepare(&data),
        }
    }

    /// Merges caller overrides onto the default tree at construction.
    pub fn with_settings(mut self, overrides: &Value) -> ChartResult<Self> {
        self.settings = crate::settings::merge_settings(&self.settings, overrides)?;
        Ok(self)
    }

    #[must_use]
    pub fn settings(&self) -> &FunnelSettings {
        &self.settings
    }

    #[must_use]
    pub fn prepared(&self) -> &[PreparedBand] {
        &self.prepared
    }
}

fn prepare(data: &[RawDataPoint]) -> Vec<PreparedBand> {
    data.iter()
        .map(|item| PreparedBand {
            value: item.value,
            label: item.label.clone(),
            color: item.color.unwrap_or_else(Color::random),
            polygon: Vec::new(),
            hovered: false,
            state: 0.0,
        })
        .collect()
}

/// Band width in pixels: value relative to the dataset maximum, scaled by
/// the plot width and the entrance progress. Negative values collapse to 0.
pub(crate) fn scaled_width(value: f64, max: f64, plot_width: f64, loading: f64) -> f64 {
    ((value / max) * plot_width * loading).max(0.0)
}

impl ChartVariant for FunnelChart {
    type Data = Vec<RawDataPoint>;

    fn kind(&self) -> ChartKind {
        ChartKind::Funnel
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
        if self.prepared.is_empty() {
            return;
        }

        let max = self
            .prepared
            .iter()
            .map(|item| item.value)
            .fold(f64::NEG_INFINITY, f64::max);
        if !max.is_finite() || max <= 0.0 {
            debug!(max, "funnel dataset has no positive maximum; drawing nothing");
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
        let center = x_start + plot_width / 2.0;
        let band_height = plot_height / self.prepared.len() as f64;

        let band_count = self.prepared.len();
        let next_values: Vec<f64> = (0..band_count)
            .map(|index| {
                self.prepared
                    .get(index + 1)
                    .map_or(self.prepared[index].value, |next| next.value)
            })
            .collect();
        let band_colors: Vec<Color> = self.prepared.iter().map(|item| item.color).collect();

        for (index, item) in self.prepared.iter_mut().enumerate() {
            let y_top = y_start + band_height * index as f64;
            let y_bottom = y_top + band_height;

            let width = scaled_width(item.value, max, plot_width, loading);
            // Smooth bands taper toward the next band's width; stepped bands
            // keep their own width down to the bottom edge.
            let bottom_width = if s.area.smooth {
                scaled_width(next_values[index], max, plot_width, loading)
            } else {
                width
            };

            let polygon = vec![
                Point::new(center - width / 2.0, y_top),
                Point::new(center - bottom_width / 2.0, y_bottom),
                Point::new(center + bottom_width / 2.0, y_bottom),
                Point::new(center + width / 2.0, y_top),
            ];

            // Inflation from the previous frame's eased state.
            let hover_tone = s.hover.value * item.state;
            let hit = s.hover.enabled && pass.cursor_hits(&polygon);
            item.polygon = polygon.clone();
            item.hovered = hit;
            item.state = pass.hover(item.state, hit);

            let base = item.color.with_tone(hover_tone);
            let fill = if s.area.gradient {
                // Seam blending: each band fades from its upper neighbor's
                // hue into its lower neighbor's at the edges.
                let above = if index == 0 {
                    base
                } else {
                    Color::average(&[band_colors[index - 1].with_tone(hover_tone), base])
                };
                let below = if index + 1 == band_count {
                    base
                } else {
                    Color::average(&[base, band_colors[index + 1].with_tone(hover_tone)])
                };
                Fill::LinearGradient {
                    y_start: y_top,
                    y_end: y_bottom,
                    stops: vec![
                        GradientStop::new(0.0, above),
                        GradientStop::new(0.3, base),
                        GradientStop::new(0.7, base),
                        GradientStop::new(1.0, below),
                    ],
                }
            } else {
                Fill::Solid { color: base }
            };

            pass.push_polygon(PolygonPrimitive::new(polygon, fill));

            if s.label.enabled && !item.label.is_empty() {
                let font_size = s.label.styles.font_size * loading;
                if font_size > 0.0 {
                    pass.push_text(
                        TextPrimitive::new(
                            item.label.clone(),
                            center,
                            y_top + font_size + LABEL_TOP_GAP,
                            font_size,
                            s.label.styles.color,
                            TextHAlign::Center,
                        )
                        .with_alpha(loading.clamp(0.0, 1.0)),
                    );
                }
            }

            if s.value.enabled {
                let font_size = s.value.styles.font_size * loading;
                if font_size > 0.0 {
                    pass.push_text(
                        TextPrimitive::new(
                            format!("{}", item.value),
                            center,
                            y_top + band_height / 2.0,
                            font_size,
                            s.value.styles.color,
                            TextHAlign::Center,
                        )
                        .with_weight(FontWeight::Bold)
                        .with_alpha(loading.clamp(0.0, 1.0)),
                    );
                }
            }
        }
    }

    fn tooltip_content(&self) -> Option<TooltipContent> {
        let hovered = self.prepared.iter().find(|item| item.hovered)?;
        Some(TooltipContent {
            title: hovered.label.clone(),
            panels: vec![TooltipPanel {
                color: hovered.color,
                texts: vec![format!("Value: {}", hovered.value)],
                footer: None,
            }],
        })
    }
}
