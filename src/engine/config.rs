use std::path::Path;

use crate::animation::ease::Ease;
use crate::foundation::error::{MotionError, MotionResult};
use crate::path::definition::{Endpoint, FLIGHT_ARC_SVG, PathDefinition};
use crate::path::trail::TrailConfig;

/// Timing and appearance knobs for one engine.
///
/// Missing JSON fields fall back to [`MotionConfig::default`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Length of one run. Values `<= 0` complete on the first tick.
    pub duration_ms: f64,
    /// Pause between reaching the destination and the completion callback.
    pub completion_delay_ms: f64,
    pub ease: Ease,
    pub trail: TrailConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 8000.0,
            completion_delay_ms: 1000.0,
            ease: Ease::default(),
            trail: TrailConfig::default(),
        }
    }
}

impl MotionConfig {
    /// Check fields that have no runtime fallback. `duration_ms` is never
    /// rejected.
    pub fn validate(&self) -> MotionResult<()> {
        if !self.completion_delay_ms.is_finite() || self.completion_delay_ms < 0.0 {
            return Err(MotionError::config(format!(
                "completion_delay_ms must be finite and >= 0 (got {})",
                self.completion_delay_ms
            )));
        }
        self.trail
            .validate()
            .map_err(|e| MotionError::config(e.to_string()))
    }

    pub fn from_json_str(s: &str) -> MotionResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> MotionResult<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| MotionError::config(format!("read '{}': {e}", path.display())))?;
        Self::from_json_str(&s)
    }
}

/// A route plus its engine configuration, as stored on disk.
///
/// ```json
/// { "from": { "name": "Lisbon", "code": "LIS" },
///   "to": { "name": "Tokyo", "code": "HND" },
///   "svg_path": "M 100 150 Q 400 -30 700 150",
///   "config": { "duration_ms": 4000 } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RouteFile {
    #[serde(default)]
    pub from: Endpoint,
    #[serde(default)]
    pub to: Endpoint,
    /// SVG path data; the built-in arc when absent.
    #[serde(default)]
    pub svg_path: Option<String>,
    #[serde(default)]
    pub config: MotionConfig,
}

impl RouteFile {
    pub fn from_json_str(s: &str) -> MotionResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> MotionResult<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| MotionError::config(format!("read '{}': {e}", path.display())))?;
        Self::from_json_str(&s)
    }

    /// Build the path and validate the configuration.
    pub fn resolve(&self) -> MotionResult<(PathDefinition, MotionConfig)> {
        self.config.validate()?;
        let d = self.svg_path.as_deref().unwrap_or(FLIGHT_ARC_SVG);
        let path = PathDefinition::from_svg(self.from.clone(), self.to.clone(), d)?;
        Ok((path, self.config))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/config.rs"]
mod tests;
