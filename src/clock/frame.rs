use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle to an active frame subscription.
    pub struct ClockHandle;
    /// Handle to a pending one-shot timeout.
    pub struct TimerHandle;
}

/// Something the host loop delivers to the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClockEvent {
    /// One host frame for `handle`, `elapsed_ms` after its `start`.
    Tick { handle: ClockHandle, elapsed_ms: f64 },
    /// A one-shot timeout reached its deadline.
    Timeout { handle: TimerHandle },
}

/// Repeating per-frame delivery.
///
/// After `cancel` returns no `Tick` for that handle is ever delivered, even
/// one already pending for the current frame.
pub trait FrameClock {
    fn start(&mut self) -> ClockHandle;
    fn cancel(&mut self, handle: ClockHandle);
}

/// One-shot delayed delivery, independent of frame subscriptions.
pub trait Timer {
    fn set_timeout(&mut self, delay_ms: f64) -> TimerHandle;
    fn clear_timeout(&mut self, handle: TimerHandle);
}

/// A host event loop: a frame clock plus timers, drained one event at a time.
pub trait Scheduler: FrameClock + Timer {
    /// Monotonic host time in milliseconds.
    fn now_ms(&self) -> f64;

    /// Next due event, in time order. Timeouts due at or before the current
    /// frame are delivered before that frame's ticks.
    fn poll(&mut self) -> Option<ClockEvent>;
}

#[derive(Clone, Copy, Debug)]
struct FrameSub {
    started_at_ms: f64,
    // frame time of an undelivered tick
    pending_ms: Option<f64>,
}

/// Subscription bookkeeping shared by the concrete clocks. Time is passed
/// in by the owner; nothing here reads a clock.
#[derive(Debug, Default)]
pub(crate) struct Subscriptions {
    frames: SlotMap<ClockHandle, FrameSub>,
    timers: SlotMap<TimerHandle, f64>,
}

impl Subscriptions {
    pub(crate) fn start(&mut self, now_ms: f64) -> ClockHandle {
        self.frames.insert(FrameSub {
            started_at_ms: now_ms,
            pending_ms: None,
        })
    }

    pub(crate) fn cancel(&mut self, handle: ClockHandle) {
        self.frames.remove(handle);
    }

    pub(crate) fn set_timeout(&mut self, now_ms: f64, delay_ms: f64) -> TimerHandle {
        let delay = if delay_ms.is_finite() {
            delay_ms.max(0.0)
        } else if delay_ms > 0.0 {
            f64::INFINITY
        } else {
            0.0
        };
        self.timers.insert(now_ms + delay)
    }

    pub(crate) fn clear_timeout(&mut self, handle: TimerHandle) {
        self.timers.remove(handle);
    }

    /// Queue one tick at `frame_ms` for every active subscription.
    pub(crate) fn mark_frame(&mut self, frame_ms: f64) {
        for sub in self.frames.values_mut() {
            sub.pending_ms = Some(frame_ms);
        }
    }

    pub(crate) fn has_frames(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Earliest timeout deadline still pending.
    pub(crate) fn next_deadline(&self) -> Option<f64> {
        self.timers.values().copied().reduce(f64::min)
    }

    pub(crate) fn poll(&mut self, now_ms: f64) -> Option<ClockEvent> {
        let due = self
            .timers
            .iter()
            .filter(|(_, deadline)| **deadline <= now_ms)
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(handle, _)| handle);
        if let Some(handle) = due {
            self.timers.remove(handle);
            return Some(ClockEvent::Timeout { handle });
        }

        for (handle, sub) in self.frames.iter_mut() {
            if let Some(frame_ms) = sub.pending_ms.take() {
                return Some(ClockEvent::Tick {
                    handle,
                    elapsed_ms: (frame_ms - sub.started_at_ms).max(0.0),
                });
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/frame.rs"]
mod tests;
