//! pathmotion moves a marker along a curved route.
//!
//! A run turns elapsed time into a render snapshot every frame:
//!
//! 1. **Progress**: `elapsed / duration`, clamped, then eased ([`Ease`]).
//! 2. **Sample**: eased progress -> position and heading on a [`PathDefinition`],
//!    measured by arc length ([`sample`]).
//! 3. **Trail**: a fading echo of earlier samples ([`trail`]).
//!
//! [`MotionEngine`] owns the lifecycle (`Idle -> Running -> Completing -> Idle`)
//! and is driven by a [`Scheduler`]: [`ManualClock`] for tests and offline
//! simulation, [`SystemClock`] for real time. Everything runs on the caller's
//! thread.
//!
//! ```
//! use pathmotion::{Endpoint, ManualClock, MotionConfig, MotionEngine, PathDefinition, Phase};
//!
//! let path = PathDefinition::flight_arc(Endpoint::new("Lisbon", "LIS"), Endpoint::new("Tokyo", "HND"));
//! let mut engine = MotionEngine::new(ManualClock::default(), path, MotionConfig::default())?;
//! engine.play();
//! engine.scheduler_mut().advance(4000.0);
//! let frames = engine.pump()?;
//! assert_eq!(frames[0].phase, Phase::Running);
//! assert_eq!(frames[0].progress_percent, 50);
//! # Ok::<(), pathmotion::MotionError>(())
//! ```
#![forbid(unsafe_code)]

mod animation;
mod clock;
mod engine;
mod foundation;
mod path;

pub use animation::ease::{Ease, ease};
pub use clock::frame::{ClockEvent, ClockHandle, FrameClock, Scheduler, Timer, TimerHandle};
pub use clock::manual::{DEFAULT_FRAME_INTERVAL_MS, ManualClock};
pub use clock::system::SystemClock;
pub use engine::config::{MotionConfig, RouteFile};
pub use engine::lifecycle::{
    AnimationRequest, CompletionFn, MotionEngine, Phase, ProgressState, RenderSnapshot,
};
pub use foundation::core::{BezPath, Point, Vec2, clamp_unit, heading_deg};
pub use foundation::error::{MotionError, MotionResult};
pub use path::definition::{Endpoint, FLIGHT_ARC_SVG, PathDefinition};
pub use path::sampler::{HEADING_EPSILON, Sample, sample};
pub use path::trail::{MAX_TRAIL_COUNT, TrailConfig, TrailPoint, trail};
