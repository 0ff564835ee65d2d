use crate::foundation::core::{clamp_unit, heading_deg};
use crate::path::definition::PathDefinition;

/// Progress offset used to look ahead (or back) when deriving heading.
pub const HEADING_EPSILON: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Position and travel direction at one point along a route.
pub struct Sample {
    pub x: f64,
    pub y: f64,
    /// Direction of travel in degrees, `atan2(dy, dx)`.
    pub heading_deg: f64,
}

/// Sample `path` at normalized arc length `progress`.
///
/// Heading comes from a look-ahead point at `progress + HEADING_EPSILON`.
/// Where that point collapses onto the current one (the route end) the
/// heading is taken looking back instead. Zero-length routes yield heading 0.
pub fn sample(path: &PathDefinition, progress: f64) -> Sample {
    let progress = clamp_unit(progress);
    let here = path.point_at(progress);
    if path.is_degenerate() {
        return Sample {
            x: here.x,
            y: here.y,
            heading_deg: 0.0,
        };
    }

    let ahead = path.point_at((progress + HEADING_EPSILON).min(1.0));
    let heading = heading_deg(here, ahead)
        .or_else(|| {
            let behind = path.point_at((progress - HEADING_EPSILON).max(0.0));
            heading_deg(behind, here)
        })
        .unwrap_or(0.0);

    Sample {
        x: here.x,
        y: here.y,
        heading_deg: heading,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/sampler.rs"]
mod tests;
