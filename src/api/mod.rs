mod chart_state;
mod draw_pass;
mod engine;
mod scheduler;
mod tooltip;

pub use chart_state::{ChartState, FRAME_INTERVAL_MS, HOVER_EASING, LOADING_STEP};
pub use draw_pass::DrawPass;
pub use engine::ChartEngine;
pub use tooltip::{TooltipContent, TooltipLayout, TooltipPanel, estimate_text_width, layout_tooltip};
