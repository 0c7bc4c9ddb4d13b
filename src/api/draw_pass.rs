use crate::core::{CursorPoint, Point, Viewport, point_in_polygon};
use crate::render::{
    ArcPrimitive, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame, TextPrimitive,
};

use super::chart_state::ease_hover;

/// Per-frame drawing context handed to a chart variant.
///
/// Owns the engine side of the hover contract: the variant reports each
/// primitive's hit result through `hover`, and the pass eases the item's
/// state toward 0 or 1 while tracking whether any transition is still
/// running (so the engine can schedule follow-up frames).
pub struct DrawPass<'a> {
    frame: &'a mut RenderFrame,
    loading: f64,
    cursor: Option<CursorPoint>,
    animating: bool,
}

impl<'a> DrawPass<'a> {
    pub(super) fn new(frame: &'a mut RenderFrame, loading: f64, cursor: Option<CursorPoint>) -> Self {
        Self {
            frame,
            loading,
            cursor,
            animating: false,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.frame.viewport
    }

    /// Entrance animation progress for this pass, in [0, 1].
    #[must_use]
    pub fn loading(&self) -> f64 {
        self.loading
    }

    #[must_use]
    pub fn cursor(&self) -> Option<CursorPoint> {
        self.cursor
    }

    /// Tests the cursor against a hit region; false when no cursor is known.
    #[must_use]
    pub fn cursor_hits(&self, polygon: &[Point]) -> bool {
        self.cursor
            .is_some_and(|cursor| point_in_polygon(cursor.x, cursor.y, polygon))
    }

    /// Advances one item's hover state toward its target and returns it.
    ///
    /// Called once per primitive in stable draw order.
    #[must_use]
    pub fn hover(&mut self, state: f64, is_hovered: bool) -> f64 {
        let target = if is_hovered { 1.0 } else { 0.0 };
        let next = ease_hover(state, target);
        if (next - state).abs() > f64::EPSILON {
            self.animating = true;
        }
        next
    }

    pub fn push_arc(&mut self, arc: ArcPrimitive) {
        self.frame.push_arc(arc);
    }

    pub fn push_polygon(&mut self, polygon: PolygonPrimitive) {
        self.frame.push_polygon(polygon);
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.frame.push_line(line);
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.frame.push_rect(rect);
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.frame.push_text(text);
    }

    pub(super) fn is_animating(&self) -> bool {
        self.animating
    }
}
