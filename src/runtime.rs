use tracing::{debug, trace};

use crate::{
    eval::{Evaluator, SceneFrame},
    foundation::{
        core::ScrollSample,
        error::{SundriftError, SundriftResult},
    },
    schedule::{FrameScheduler, ScheduleToken},
};

/// Scroll deltas below this are rescheduled without recomputation. Kept from
/// the observed behavior; see DESIGN.md for the open question around
/// sub-pixel deltas near the clamp boundaries.
pub const SCROLL_DELTA_THRESHOLD_PX: u32 = 1;

/// Where computed frames go. The engine stays pure; a sink adapts frames to
/// whatever surface the host renders with (styles, a terminal, a log).
pub trait FrameSink {
    fn publish(&mut self, frame: &SceneFrame);
}

/// Sink that keeps every published frame, in publication order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<SceneFrame>,
}

impl FrameSink for RecordingSink {
    fn publish(&mut self, frame: &SceneFrame) {
        self.frames.push(*frame);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// The per-frame driver: samples scroll once per display frame, evaluates,
/// publishes, reschedules.
///
/// State machine: Idle -> Running (once, on [`RenderLoop::start`]) ->
/// Stopped (on [`RenderLoop::stop`], which synchronously cancels the pending
/// callback). There is no way back to Idle, and a tick after stop is a
/// lifecycle error, not a tolerated no-op.
#[derive(Debug)]
pub struct RenderLoop<S, K> {
    evaluator: Evaluator,
    scheduler: S,
    sink: K,
    state: LoopState,
    pending: Option<ScheduleToken>,
    last_offset_px: Option<u32>,
}

impl<S, K> RenderLoop<S, K>
where
    S: FrameScheduler,
    K: FrameSink,
{
    pub fn new(evaluator: Evaluator, scheduler: S, sink: K) -> Self {
        Self {
            evaluator,
            scheduler,
            sink,
            state: LoopState::Idle,
            pending: None,
            last_offset_px: None,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Idle -> Running. Mounts the evaluator and schedules the first tick.
    pub fn start(&mut self) -> SundriftResult<()> {
        if self.state != LoopState::Idle {
            return Err(SundriftError::lifecycle(format!(
                "start requires Idle, loop is {:?}",
                self.state
            )));
        }
        self.evaluator.mount();
        self.state = LoopState::Running;
        self.pending = Some(self.scheduler.schedule());
        debug!("render loop running");
        Ok(())
    }

    /// One scheduled iteration. The host calls this when the callback
    /// requested via the scheduler fires, handing over the current scroll
    /// reading.
    ///
    /// Returns the published frame, or `None` when the scroll delta fell
    /// under [`SCROLL_DELTA_THRESHOLD_PX`] (the loop still reschedules, it
    /// never stops while Running).
    pub fn tick(&mut self, sample: ScrollSample) -> SundriftResult<Option<SceneFrame>> {
        if self.state != LoopState::Running {
            return Err(SundriftError::lifecycle(format!(
                "tick on a {:?} loop (missed cancellation?)",
                self.state
            )));
        }

        // The fired callback consumed the outstanding token.
        self.pending = None;

        if let Some(last) = self.last_offset_px
            && sample.scroll_offset_px.abs_diff(last) < SCROLL_DELTA_THRESHOLD_PX
        {
            trace!(offset = sample.scroll_offset_px, "scroll unchanged, rescheduling");
            self.pending = Some(self.scheduler.schedule());
            return Ok(None);
        }

        self.last_offset_px = Some(sample.scroll_offset_px);
        let frame = self.evaluator.eval_sample(sample);
        self.sink.publish(&frame);
        trace!(phase = frame.phase.value(), "frame published");
        self.pending = Some(self.scheduler.schedule());
        Ok(Some(frame))
    }

    /// Teardown. Cancels the pending callback synchronously; afterwards no
    /// iteration can run.
    pub fn stop(&mut self) {
        if self.state == LoopState::Running
            && let Some(token) = self.pending.take()
        {
            self.scheduler.cancel(token);
        }
        if self.state != LoopState::Stopped {
            debug!(was = ?self.state, "render loop stopped");
        }
        self.state = LoopState::Stopped;
    }
}
