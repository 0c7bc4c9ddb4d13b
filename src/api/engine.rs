use serde_json::Value;
use tracing::warn;

use crate::chart::ChartVariant;
use crate::core::{CursorPoint, RenderReason, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::chart_state::ChartState;
use super::draw_pass::DrawPass;
use super::scheduler::FrameScheduler;
use super::tooltip;

/// Safety valve for `render_to_completion`; the loading animation plus any
/// hover easing settles within a few hundred frames.
const MAX_COMPLETION_PASSES: usize = 10_000;

/// Type-independent chart lifecycle engine.
///
/// Owns render scheduling, pointer tracking, the entrance animation, and
/// tooltip assembly; the chart variant owns data preparation, geometry,
/// and draw order. One engine instance exclusively owns one renderer, one
/// variant, and one state; nothing is shared across chart instances.
pub struct ChartEngine<R: Renderer, V: ChartVariant> {
    renderer: R,
    variant: V,
    viewport: Viewport,
    state: ChartState,
    scheduler: FrameScheduler,
}

impl<R: Renderer, V: ChartVariant> ChartEngine<R, V> {
    /// Binds a variant to a drawing surface and schedules the initial frame.
    ///
    /// Fails when the surface reports zero pixel dimensions; this is the
    /// only construction-time error and the only error class that aborts
    /// chart creation.
    pub fn new(renderer: R, variant: V, viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let mut engine = Self {
            renderer,
            variant,
            viewport,
            state: ChartState::new(),
            scheduler: FrameScheduler::default(),
        };
        engine.scheduler.request(RenderReason::Init);
        Ok(engine)
    }

    /// Replaces the dataset and schedules a render.
    ///
    /// The variant rebuilds its prepared sequence wholesale; loading
    /// progress is deliberately not reset.
    pub fn set_data(&mut self, data: V::Data) {
        self.variant.set_data(data);
        self.scheduler.request(RenderReason::DataChange);
    }

    /// Deep-merges a partial settings override and schedules a render.
    ///
    /// On a shape error the previous settings stay in effect and no frame
    /// is scheduled.
    pub fn set_settings(&mut self, overrides: &Value) -> ChartResult<()> {
        self.variant.apply_settings(overrides)?;
        self.scheduler.request(RenderReason::SettingsChange);
        Ok(())
    }

    /// Applies new surface dimensions and schedules a render.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        self.scheduler.request(RenderReason::Resize);
        Ok(())
    }

    /// Updates the cursor from a pointer event in canvas-local coordinates.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.state.cursor = Some(CursorPoint::new(x, y));
        self.scheduler.request(RenderReason::HoverMove);
    }

    /// Clears the cursor and every hover flag.
    pub fn pointer_leave(&mut self) {
        self.state.cursor = None;
        self.variant.clear_hover();
        self.scheduler.request(RenderReason::HoverExit);
    }

    /// Cancels the pending frame, e.g. when the host detaches the surface.
    ///
    /// Dropping the engine cancels implicitly; the pending slot cannot
    /// outlive the instance, so no stale callback can reach a dead surface.
    pub fn cancel_pending(&mut self) {
        self.scheduler.cancel();
    }

    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.scheduler.has_pending()
    }

    /// Executes the pending frame, if any.
    ///
    /// The host calls this from its schedule-once-after-delay primitive
    /// (see `FRAME_INTERVAL_MS`). Returns whether a pass ran.
    pub fn fire_pending(&mut self) -> ChartResult<bool> {
        let Some(reason) = self.scheduler.take() else {
            return Ok(false);
        };
        self.render_pass(reason)?;
        Ok(true)
    }

    /// Pumps frames until the engine settles (no pending frame remains).
    ///
    /// Convenience for headless hosts and tests; returns the number of
    /// passes executed.
    pub fn render_to_completion(&mut self) -> ChartResult<usize> {
        let mut passes = 0usize;
        while self.fire_pending()? {
            passes += 1;
            if passes >= MAX_COMPLETION_PASSES {
                warn!(passes, "render_to_completion did not settle; stopping");
                break;
            }
        }
        Ok(passes)
    }

    fn render_pass(&mut self, reason: RenderReason) -> ChartResult<()> {
        self.state.render_reason = reason;
        let still_loading = self.state.advance_loading();

        let mut frame = RenderFrame::new(self.viewport);
        let mut pass = DrawPass::new(&mut frame, self.state.loading, self.state.cursor);
        self.variant.draw(&mut pass);
        let hover_animating = pass.is_animating();

        if let Some(cursor) = self.state.cursor {
            if let Some(content) = self.variant.tooltip_content() {
                tooltip::push_tooltip(&mut frame, self.viewport, cursor, &content);
            }
        }

        self.renderer.render(&frame)?;

        if still_loading || hover_animating {
            self.scheduler.request(RenderReason::LoadingTick);
        }
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> ChartState {
        self.state
    }

    #[must_use]
    pub fn loading(&self) -> f64 {
        self.state.loading
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn variant(&self) -> &V {
        &self.variant
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
