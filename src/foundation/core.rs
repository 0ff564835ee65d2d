pub use kurbo::{BezPath, Point, Vec2};

/// Distances below this are treated as "the same point".
pub(crate) const GEOM_EPSILON: f64 = 1e-9;

/// Clamp a progress value into `[0, 1]`, mapping NaN to `0`.
pub fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Direction of travel from `from` to `to`, in degrees.
///
/// Returns `None` when the two points are indistinguishable.
pub fn heading_deg(from: Point, to: Point) -> Option<f64> {
    let d = to - from;
    if d.hypot() <= GEOM_EPSILON {
        return None;
    }
    Some(d.y.atan2(d.x).to_degrees())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
