/// Opaque handle to one pending frame callback. Acquired when the loop
/// schedules, released exactly once: either by the callback firing or by an
/// explicit cancel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScheduleToken(pub u64);

/// Per-frame scheduling seam. Hosts adapt their repaint callback mechanism
/// (requestAnimationFrame, a compositor vsync, a test clock) behind this so
/// the render loop is schedulable anywhere and deterministic under test.
///
/// At most one callback is in flight at a time; scheduling again before the
/// previous callback fired supersedes it.
pub trait FrameScheduler {
    /// Request one callback before the next repaint.
    fn schedule(&mut self) -> ScheduleToken;

    /// Cancel a pending callback. Cancelling a token that already fired or
    /// was superseded is a no-op.
    fn cancel(&mut self, token: ScheduleToken);
}

/// Hand-driven scheduler for tests and offline evaluation: the owner calls
/// [`ManualScheduler::take_pending`] to learn whether a callback is due and
/// then drives the loop itself.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<ScheduleToken>,
    scheduled: u64,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pending callback, if any. Simulates the host firing the
    /// scheduled repaint callback.
    pub fn take_pending(&mut self) -> Option<ScheduleToken> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn scheduled_count(&self) -> u64 {
        self.scheduled
    }

    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&mut self) -> ScheduleToken {
        self.next_id += 1;
        let token = ScheduleToken(self.next_id);
        self.pending = Some(token);
        self.scheduled += 1;
        token
    }

    fn cancel(&mut self, token: ScheduleToken) {
        if self.pending == Some(token) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}
