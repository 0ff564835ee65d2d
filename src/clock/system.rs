use std::time::{Duration, Instant};

use crate::clock::frame::{
    ClockEvent, ClockHandle, FrameClock, Scheduler, Subscriptions, Timer, TimerHandle,
};
use crate::clock::manual::DEFAULT_FRAME_INTERVAL_MS;

/// Wall-clock scheduler backed by [`Instant`], presenting frames at a fixed
/// interval. Runs on the caller's thread; [`SystemClock::wait`] sleeps until
/// the next frame or timeout is due.
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
    frame_interval_ms: f64,
    next_frame_ms: f64,
    subs: Subscriptions,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL_MS)
    }
}

impl SystemClock {
    pub fn new(frame_interval_ms: f64) -> Self {
        let frame_interval_ms = if frame_interval_ms.is_finite() && frame_interval_ms > 0.0 {
            frame_interval_ms
        } else {
            DEFAULT_FRAME_INTERVAL_MS
        };
        Self {
            origin: Instant::now(),
            frame_interval_ms,
            next_frame_ms: frame_interval_ms,
            subs: Subscriptions::default(),
        }
    }

    /// True while a frame subscription or a timeout is outstanding.
    pub fn is_busy(&self) -> bool {
        self.subs.has_frames() || self.subs.next_deadline().is_some()
    }

    /// Block until the next frame boundary or timeout deadline.
    pub fn wait(&self) {
        let mut target = self.next_frame_ms;
        if let Some(deadline) = self.subs.next_deadline() {
            target = target.min(deadline);
        }
        let remaining = target - self.now_ms();
        if remaining > 0.0 {
            std::thread::sleep(Duration::from_secs_f64(remaining / 1000.0));
        }
    }

    fn present_due_frame(&mut self, now_ms: f64) {
        if now_ms < self.next_frame_ms {
            return;
        }
        self.subs.mark_frame(now_ms);
        // late frames are dropped, not replayed
        let missed = ((now_ms - self.next_frame_ms) / self.frame_interval_ms).floor();
        self.next_frame_ms += (missed + 1.0) * self.frame_interval_ms;
    }
}

impl FrameClock for SystemClock {
    fn start(&mut self) -> ClockHandle {
        self.subs.start(self.now_ms())
    }

    fn cancel(&mut self, handle: ClockHandle) {
        self.subs.cancel(handle);
    }
}

impl Timer for SystemClock {
    fn set_timeout(&mut self, delay_ms: f64) -> TimerHandle {
        self.subs.set_timeout(self.now_ms(), delay_ms)
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.subs.clear_timeout(handle);
    }
}

impl Scheduler for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    fn poll(&mut self) -> Option<ClockEvent> {
        let now = self.now_ms();
        self.present_due_frame(now);
        self.subs.poll(now)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/system.rs"]
mod tests;
