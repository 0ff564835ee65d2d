use std::sync::Arc;

use crate::animation::ease::Ease;
use crate::clock::frame::{ClockEvent, ClockHandle, Scheduler, TimerHandle};
use crate::engine::config::MotionConfig;
use crate::foundation::core::clamp_unit;
use crate::foundation::error::{MotionError, MotionResult};
use crate::path::definition::PathDefinition;
use crate::path::sampler::{Sample, sample};
use crate::path::trail::{TrailConfig, TrailPoint, trail};

/// Lifecycle of one engine. Exactly one phase is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    /// Arrived; waiting out the completion delay.
    Completing,
}

/// Progress of the current run, recomputed from elapsed time every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ProgressState {
    pub elapsed_ms: f64,
    /// `elapsed / duration`, clamped to `[0, 1]`.
    pub linear: f64,
    pub eased: f64,
}

impl ProgressState {
    /// Progress after `elapsed_ms` of a run lasting `total_ms`.
    ///
    /// Non-positive or NaN durations count as already finished.
    pub fn at(elapsed_ms: f64, total_ms: f64, ease: Ease) -> Self {
        let linear = if total_ms > 0.0 {
            clamp_unit(elapsed_ms / total_ms)
        } else {
            1.0
        };
        Self {
            elapsed_ms,
            linear,
            eased: ease.apply(linear),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.linear >= 1.0
    }
}

/// Inputs of one run, fixed when the run starts.
#[derive(Clone, Debug)]
pub struct AnimationRequest {
    pub path: Arc<PathDefinition>,
    pub total_duration_ms: f64,
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderSnapshot {
    pub head: Sample,
    /// Newest first.
    pub trail: Vec<TrailPoint>,
    /// Opacity of the whole trail group; multiplies each point's opacity.
    pub trail_opacity: f64,
    /// Eased progress as a whole percentage.
    pub progress_percent: u8,
    pub phase: Phase,
    pub progress: ProgressState,
}

impl RenderSnapshot {
    pub fn compute(
        path: &PathDefinition,
        progress: ProgressState,
        phase: Phase,
        trail_cfg: &TrailConfig,
    ) -> Self {
        Self {
            head: sample(path, progress.eased),
            trail: trail(path, progress.eased, trail_cfg),
            trail_opacity: trail_cfg.group_opacity(progress.eased),
            progress_percent: (clamp_unit(progress.eased) * 100.0).round() as u8,
            phase,
            progress,
        }
    }
}

/// Called once per successful run, after the completion delay.
pub type CompletionFn = Box<dyn FnMut() -> anyhow::Result<()>>;

/// Drives a marker along a route: `Idle -> Running -> Completing -> Idle`.
///
/// The engine owns its scheduler. The host presents frames on the scheduler
/// and calls [`MotionEngine::pump`] (or feeds events to
/// [`MotionEngine::handle`]); everything happens on the caller's thread.
pub struct MotionEngine<S: Scheduler> {
    scheduler: S,
    path: Arc<PathDefinition>,
    config: MotionConfig,
    phase: Phase,
    request: Option<AnimationRequest>,
    progress: ProgressState,
    clock: Option<ClockHandle>,
    timer: Option<TimerHandle>,
    snapshot: Option<RenderSnapshot>,
    on_complete: Option<CompletionFn>,
}

impl<S: Scheduler> std::fmt::Debug for MotionEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionEngine")
            .field("phase", &self.phase)
            .field("progress", &self.progress)
            .field("clock", &self.clock)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

impl<S: Scheduler> MotionEngine<S> {
    pub fn new(
        scheduler: S,
        path: impl Into<Arc<PathDefinition>>,
        config: MotionConfig,
    ) -> MotionResult<Self> {
        config.validate()?;
        Ok(Self {
            scheduler,
            path: path.into(),
            config,
            phase: Phase::Idle,
            request: None,
            progress: ProgressState::default(),
            clock: None,
            timer: None,
            snapshot: None,
            on_complete: None,
        })
    }

    /// Register the completion callback, replacing any previous one.
    pub fn on_complete(&mut self, f: impl FnMut() -> anyhow::Result<()> + 'static) {
        self.on_complete = Some(Box::new(f));
    }

    /// Route used by the next run. A run in flight keeps its own route.
    pub fn set_path(&mut self, path: impl Into<Arc<PathDefinition>>) {
        self.path = path.into();
    }

    pub fn path(&self) -> &Arc<PathDefinition> {
        &self.path
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    pub fn request(&self) -> Option<&AnimationRequest> {
        self.request.as_ref()
    }

    /// Latest snapshot; frozen at the end pose while completing.
    pub fn snapshot(&self) -> Option<&RenderSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Start a run from `Idle`. Returns `false` (and changes nothing) while
    /// a run is already active.
    pub fn play(&mut self) -> bool {
        if self.phase != Phase::Idle {
            tracing::trace!(phase = ?self.phase, "play ignored: run already active");
            return false;
        }
        self.release_handles();

        let request = AnimationRequest {
            path: Arc::clone(&self.path),
            total_duration_ms: self.config.duration_ms,
        };
        tracing::debug!(
            duration_ms = request.total_duration_ms,
            from = %request.path.origin().code,
            to = %request.path.destination().code,
            "motion run started"
        );
        self.request = Some(request);
        self.progress = ProgressState::default();
        self.snapshot = None;
        self.clock = Some(self.scheduler.start());
        self.phase = Phase::Running;
        true
    }

    /// Abort from any phase. Idempotent; no completion callback follows.
    pub fn stop(&mut self) {
        if self.phase == Phase::Idle && self.clock.is_none() && self.timer.is_none() {
            return;
        }
        tracing::debug!(phase = ?self.phase, "motion run stopped");
        self.release_handles();
        self.reset();
    }

    /// Follow a boolean play signal.
    pub fn set_playing(&mut self, playing: bool) {
        if playing {
            self.play();
        } else {
            self.stop();
        }
    }

    /// Drain every due scheduler event. Returns the snapshots emitted.
    ///
    /// A failing completion callback aborts the drain with
    /// [`MotionError::Completion`]; the engine is already idle by then.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn pump(&mut self) -> MotionResult<Vec<RenderSnapshot>> {
        let mut out = Vec::new();
        while let Some(event) = self.scheduler.poll() {
            if let Some(snap) = self.handle(event)? {
                out.push(snap);
            }
        }
        Ok(out)
    }

    /// Process one scheduler event. Events for handles the engine no longer
    /// holds are ignored.
    pub fn handle(&mut self, event: ClockEvent) -> MotionResult<Option<RenderSnapshot>> {
        match event {
            ClockEvent::Tick { handle, elapsed_ms } => {
                if self.phase != Phase::Running || self.clock != Some(handle) {
                    tracing::trace!(?handle, "stale tick dropped");
                    return Ok(None);
                }
                Ok(self.on_tick(elapsed_ms))
            }
            ClockEvent::Timeout { handle } => {
                if self.phase != Phase::Completing || self.timer != Some(handle) {
                    tracing::trace!(?handle, "stale timeout dropped");
                    return Ok(None);
                }
                self.timer = None;
                self.finish()?;
                Ok(None)
            }
        }
    }

    fn on_tick(&mut self, elapsed_ms: f64) -> Option<RenderSnapshot> {
        let request = self.request.as_ref()?;
        let progress = ProgressState::at(elapsed_ms, request.total_duration_ms, self.config.ease);
        let phase = if progress.is_finished() {
            Phase::Completing
        } else {
            Phase::Running
        };
        let snap = RenderSnapshot::compute(&request.path, progress, phase, &self.config.trail);

        self.progress = progress;
        self.snapshot = Some(snap.clone());
        if phase == Phase::Completing {
            self.enter_completing();
        }
        Some(snap)
    }

    fn enter_completing(&mut self) {
        if let Some(handle) = self.clock.take() {
            self.scheduler.cancel(handle);
        }
        self.timer = Some(self.scheduler.set_timeout(self.config.completion_delay_ms));
        self.phase = Phase::Completing;
        tracing::debug!(
            delay_ms = self.config.completion_delay_ms,
            "motion arrived; completion pending"
        );
    }

    fn finish(&mut self) -> MotionResult<()> {
        self.reset();
        tracing::debug!("motion run complete");
        if let Some(cb) = self.on_complete.as_mut()
            && let Err(err) = cb()
        {
            tracing::warn!(error = %err, "completion callback failed");
            return Err(MotionError::Completion(err));
        }
        Ok(())
    }

    fn release_handles(&mut self) {
        if let Some(handle) = self.clock.take() {
            self.scheduler.cancel(handle);
        }
        if let Some(handle) = self.timer.take() {
            self.scheduler.clear_timeout(handle);
        }
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.request = None;
        self.progress = ProgressState::default();
        self.snapshot = None;
    }
}

impl<S: Scheduler> Drop for MotionEngine<S> {
    fn drop(&mut self) {
        self.release_handles();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/lifecycle.rs"]
mod tests;
