use crate::core::{CursorPoint, RenderReason};

/// Per-frame loading increment; 60 steps at the frame interval gives the
/// ~300ms entrance animation.
pub const LOADING_STEP: f64 = 1.0 / 60.0;

/// Suggested delay for the host's schedule-once-after-delay primitive.
pub const FRAME_INTERVAL_MS: f64 = 5.0;

/// Fraction of the remaining distance a hover state covers per frame.
pub const HOVER_EASING: f64 = 0.25;

const HOVER_SNAP_EPSILON: f64 = 1e-3;

/// Accumulated `LOADING_STEP` additions land within a few ulps of 1.0;
/// snap so the animation ends after exactly `1 / LOADING_STEP` frames.
const LOADING_SNAP_EPSILON: f64 = 1e-9;

/// Type-independent per-instance state, mutated only by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartState {
    /// Entrance animation progress in [0, 1]; all sizes and angles scale by it.
    pub loading: f64,
    pub cursor: Option<CursorPoint>,
    pub render_reason: RenderReason,
}

impl ChartState {
    #[must_use]
    pub(super) fn new() -> Self {
        Self {
            loading: 0.0,
            cursor: None,
            render_reason: RenderReason::Init,
        }
    }

    /// Advances loading by one step; returns whether the animation is still
    /// in progress after the advance.
    pub(super) fn advance_loading(&mut self) -> bool {
        if self.loading < 1.0 {
            self.loading = (self.loading + LOADING_STEP).min(1.0);
            if 1.0 - self.loading < LOADING_SNAP_EPSILON {
                self.loading = 1.0;
            }
        }
        self.loading < 1.0
    }
}

/// Eases a hover state toward its target instead of snapping.
///
/// Snaps once within `HOVER_SNAP_EPSILON` so the transition terminates.
#[must_use]
pub(crate) fn ease_hover(state: f64, target: f64) -> f64 {
    let next = state + (target - state) * HOVER_EASING;
    if (next - target).abs() <= HOVER_SNAP_EPSILON {
        target
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartState, LOADING_STEP, ease_hover};

    #[test]
    fn loading_advances_and_clamps() {
        let mut state = ChartState::new();
        let mut steps = 0;
        while state.advance_loading() {
            steps += 1;
            assert!(steps < 1_000, "loading must terminate");
        }
        assert!((state.loading - 1.0).abs() < 1e-12);
        assert_eq!(steps + 1, (1.0 / LOADING_STEP) as usize);

        state.advance_loading();
        assert!((state.loading - 1.0).abs() < 1e-12);
    }

    #[test]
    fn hover_easing_converges_to_target() {
        let mut state = 0.0;
        for _ in 0..100 {
            state = ease_hover(state, 1.0);
        }
        assert!((state - 1.0).abs() < 1e-12);

        for _ in 0..100 {
            state = ease_hover(state, 0.0);
        }
        assert!(state.abs() < 1e-12);
    }

    #[test]
    fn hover_easing_moves_monotonically() {
        let first = ease_hover(0.0, 1.0);
        let second = ease_hover(first, 1.0);
        assert!(first > 0.0 && first < 1.0);
        assert!(second > first);
    }
}
