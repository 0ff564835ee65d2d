use crate::foundation::error::{MotionError, MotionResult};
use crate::path::definition::PathDefinition;
use crate::path::sampler::{Sample, sample};

/// Upper bound on [`TrailConfig::count`].
pub const MAX_TRAIL_COUNT: usize = 1024;

/// Shape of the fading echo drawn behind the marker.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Maximum number of echo points, including the head position.
    pub count: usize,
    /// Progress distance between consecutive echo points.
    pub step: f64,
    /// Opacity of the newest point.
    pub base_opacity: f64,
    /// Opacity lost per point.
    pub decay_rate: f64,
    /// Radius of the newest point.
    pub base_radius: f64,
    /// Radius floor.
    pub min_radius: f64,
    /// Radius lost per point.
    pub radius_decay: f64,
    /// The trail group stays hidden up to this eased progress.
    pub min_visible_progress: f64,
    /// Group opacity per unit of eased progress.
    pub group_opacity_gain: f64,
    pub max_group_opacity: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            count: 20,
            step: 0.02,
            base_opacity: 0.4,
            decay_rate: 0.02,
            base_radius: 3.0,
            min_radius: 1.0,
            radius_decay: 0.1,
            min_visible_progress: 0.1,
            group_opacity_gain: 2.0,
            max_group_opacity: 0.6,
        }
    }
}

impl TrailConfig {
    pub fn validate(&self) -> MotionResult<()> {
        let non_negative = [
            ("step", self.step),
            ("base_opacity", self.base_opacity),
            ("decay_rate", self.decay_rate),
            ("base_radius", self.base_radius),
            ("min_radius", self.min_radius),
            ("radius_decay", self.radius_decay),
            ("min_visible_progress", self.min_visible_progress),
            ("group_opacity_gain", self.group_opacity_gain),
            ("max_group_opacity", self.max_group_opacity),
        ];
        for (name, v) in non_negative {
            if !v.is_finite() || v < 0.0 {
                return Err(MotionError::validation(format!(
                    "trail {name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        if self.count > MAX_TRAIL_COUNT {
            return Err(MotionError::validation(format!(
                "trail count must be <= {MAX_TRAIL_COUNT} (got {})",
                self.count
            )));
        }
        if self.base_opacity > 1.0 || self.max_group_opacity > 1.0 {
            return Err(MotionError::validation(
                "trail base_opacity and max_group_opacity must be <= 1",
            ));
        }
        Ok(())
    }

    /// Opacity applied to the whole trail group at `eased_progress`.
    pub fn group_opacity(&self, eased_progress: f64) -> f64 {
        if eased_progress.is_nan() || eased_progress <= self.min_visible_progress {
            return 0.0;
        }
        (eased_progress * self.group_opacity_gain).min(self.max_group_opacity)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TrailPoint {
    pub sample: Sample,
    pub opacity: f64,
    pub radius: f64,
}

/// Echo points behind the head at `eased_progress`, newest first.
///
/// Entries whose progress would be `<= 0` are skipped, and at most
/// [`MAX_TRAIL_COUNT`] entries are produced. The result depends
/// only on the arguments; nothing carries over between calls.
pub fn trail(path: &PathDefinition, eased_progress: f64, cfg: &TrailConfig) -> Vec<TrailPoint> {
    let count = cfg.count.min(MAX_TRAIL_COUNT);
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let fi = i as f64;
        let p = eased_progress - fi * cfg.step;
        if p <= 0.0 {
            continue;
        }
        out.push(TrailPoint {
            sample: sample(path, p),
            opacity: (cfg.base_opacity - fi * cfg.decay_rate).max(0.0),
            radius: (cfg.base_radius - fi * cfg.radius_decay).max(cfg.min_radius),
        });
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/path/trail.rs"]
mod tests;
