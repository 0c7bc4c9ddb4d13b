//! canvas-chart: hover-animated charting engine.
//!
//! The crate splits chart-type geometry (pie/donut slices, funnel bands,
//! radar rings, combo series) from a shared lifecycle engine that owns
//! render scheduling, pointer tracking, the entrance animation, and
//! tooltip assembly. Rendering backends receive backend-agnostic frames.

pub mod api;
pub mod chart;
pub mod core;
pub mod error;
pub mod render;
pub mod settings;
pub mod telemetry;

pub use api::{ChartEngine, TooltipContent, TooltipPanel};
pub use chart::{ChartVariant, ComboChart, FunnelChart, RadarChart, RawDataPoint, SliceChart};
pub use core::{ChartKind, Color, Point, RenderReason, Viewport};
pub use error::{ChartError, ChartResult};
