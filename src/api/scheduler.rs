use crate::core::RenderReason;

/// Single-slot debounced frame queue.
///
/// A render request overwrites any not-yet-fired pending frame, so rapid
/// event bursts (resize plus pointer-move in one tick) coalesce into one
/// pass and only the latest-scheduled reason fires. Equivalent to a
/// cancelable one-shot timer, never an unbounded queue.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: Option<RenderReason>,
}

impl FrameScheduler {
    /// Schedules a frame, cancelling any pending one.
    pub fn request(&mut self, reason: RenderReason) {
        self.pending = Some(reason);
    }

    #[must_use]
    pub fn take(&mut self) -> Option<RenderReason> {
        self.pending.take()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
