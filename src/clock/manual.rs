use crate::clock::frame::{
    ClockEvent, ClockHandle, FrameClock, Scheduler, Subscriptions, Timer, TimerHandle,
};

/// Default synthetic frame interval (60 Hz).
pub const DEFAULT_FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// Synthetic clock for tests and offline simulation.
///
/// Time only moves through [`ManualClock::advance`]; each call is one host
/// frame landing exactly at the new time.
#[derive(Debug)]
pub struct ManualClock {
    now_ms: f64,
    frame_interval_ms: f64,
    subs: Subscriptions,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL_MS)
    }
}

impl ManualClock {
    pub fn new(frame_interval_ms: f64) -> Self {
        Self {
            now_ms: 0.0,
            frame_interval_ms,
            subs: Subscriptions::default(),
        }
    }

    pub fn frame_interval_ms(&self) -> f64 {
        self.frame_interval_ms
    }

    /// Move time forward by `dt_ms` (negative values are ignored) and
    /// present one frame at the new time.
    pub fn advance(&mut self, dt_ms: f64) {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.now_ms += dt_ms;
        }
        self.subs.mark_frame(self.now_ms);
    }

    /// Move time forward to `t_ms` (earlier times are ignored) and present
    /// one frame there.
    pub fn advance_to(&mut self, t_ms: f64) {
        if t_ms.is_finite() && t_ms > self.now_ms {
            self.now_ms = t_ms;
        }
        self.subs.mark_frame(self.now_ms);
    }

    /// Present one frame one frame interval from now.
    pub fn step(&mut self) {
        self.advance(self.frame_interval_ms);
    }
}

impl FrameClock for ManualClock {
    fn start(&mut self) -> ClockHandle {
        self.subs.start(self.now_ms)
    }

    fn cancel(&mut self, handle: ClockHandle) {
        self.subs.cancel(handle);
    }
}

impl Timer for ManualClock {
    fn set_timeout(&mut self, delay_ms: f64) -> TimerHandle {
        self.subs.set_timeout(self.now_ms, delay_ms)
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.subs.clear_timeout(handle);
    }
}

impl Scheduler for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn poll(&mut self) -> Option<ClockEvent> {
        self.subs.poll(self.now_ms)
    }
}
