use kurbo::{ParamCurve, ParamCurveArclen, PathSeg};

use crate::foundation::core::{BezPath, GEOM_EPSILON, Point};
use crate::foundation::error::{MotionError, MotionResult};

/// Accuracy passed to kurbo's arc length solvers.
const ARCLEN_ACCURACY: f64 = 1e-9;

/// SVG path data of the built-in two-arc route.
pub const FLIGHT_ARC_SVG: &str = "M 100 150 Q 200 80 400 60 Q 600 80 700 150";

/// A named route endpoint, e.g. a city and its airport code.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Endpoint {
    pub name: String,
    pub code: String,
}

impl Endpoint {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// Immutable 2D route between two named endpoints.
///
/// Progress along the route is measured by arc length: `point_at(0.5)` is
/// the point halfway along the curve, not the point at parameter `t = 0.5`.
/// Segment lengths are measured once here and reused by every sample.
#[derive(Clone, Debug)]
pub struct PathDefinition {
    origin: Endpoint,
    destination: Endpoint,
    path: BezPath,
    segments: Vec<PathSeg>,
    // cumulative arc length at the end of each segment
    cumulative: Vec<f64>,
}

impl PathDefinition {
    /// Build from an arbitrary path. The path must contain at least one
    /// segment and only finite coordinates. A zero-length path is accepted.
    pub fn new(from: Endpoint, to: Endpoint, path: BezPath) -> MotionResult<Self> {
        let segments: Vec<PathSeg> = path.segments().collect();
        if segments.is_empty() {
            return Err(MotionError::validation(
                "path must contain at least one drawable segment",
            ));
        }
        if !path.is_finite() {
            return Err(MotionError::validation("path coordinates must be finite"));
        }
        Ok(Self::from_segments(from, to, path, segments))
    }

    /// Parse SVG path data (`d` attribute syntax).
    pub fn from_svg(from: Endpoint, to: Endpoint, d: &str) -> MotionResult<Self> {
        let path = BezPath::from_svg(d)
            .map_err(|e| MotionError::validation(format!("invalid svg path data: {e}")))?;
        Self::new(from, to, path)
    }

    /// Single straight segment. Fails on non-finite points.
    pub fn line(from: Endpoint, to: Endpoint, start: Point, end: Point) -> MotionResult<Self> {
        let mut path = BezPath::new();
        path.move_to(start);
        path.line_to(end);
        Self::new(from, to, path)
    }

    /// Single quadratic segment with an explicit control point.
    pub fn quadratic(
        from: Endpoint,
        to: Endpoint,
        start: Point,
        ctrl: Point,
        end: Point,
    ) -> MotionResult<Self> {
        let mut path = BezPath::new();
        path.move_to(start);
        path.quad_to(ctrl, end);
        Self::new(from, to, path)
    }

    /// Single quadratic segment whose curve passes through `via` at its
    /// parametric midpoint.
    pub fn quadratic_through(
        from: Endpoint,
        to: Endpoint,
        start: Point,
        via: Point,
        end: Point,
    ) -> MotionResult<Self> {
        let mid = start.midpoint(end);
        let ctrl = Point::new(2.0 * via.x - mid.x, 2.0 * via.y - mid.y);
        Self::quadratic(from, to, start, ctrl, end)
    }

    /// The built-in route: two quadratic arcs from `(100, 150)` over
    /// `(400, 60)` to `(700, 150)`.
    pub fn flight_arc(from: Endpoint, to: Endpoint) -> Self {
        let mut path = BezPath::new();
        path.move_to((100.0, 150.0));
        path.quad_to((200.0, 80.0), (400.0, 60.0));
        path.quad_to((600.0, 80.0), (700.0, 150.0));
        let segments = path.segments().collect();
        Self::from_segments(from, to, path, segments)
    }

    fn from_segments(from: Endpoint, to: Endpoint, path: BezPath, segments: Vec<PathSeg>) -> Self {
        let mut total = 0.0;
        let cumulative = segments
            .iter()
            .map(|seg| {
                total += segment_length(seg);
                total
            })
            .collect();
        Self {
            origin: from,
            destination: to,
            path,
            segments,
            cumulative,
        }
    }

    pub fn origin(&self) -> &Endpoint {
        &self.origin
    }

    pub fn destination(&self) -> &Endpoint {
        &self.destination
    }

    pub fn bez_path(&self) -> &BezPath {
        &self.path
    }

    /// Total arc length of the route.
    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// True when the route has (numerically) zero length.
    pub fn is_degenerate(&self) -> bool {
        self.length() <= GEOM_EPSILON
    }

    pub fn start_point(&self) -> Point {
        self.segments[0].start()
    }

    pub fn end_point(&self) -> Point {
        self.segments[self.segments.len() - 1].end()
    }

    /// Point at normalized arc length `progress` (clamped to `[0, 1]`).
    pub fn point_at(&self, progress: f64) -> Point {
        let progress = crate::foundation::core::clamp_unit(progress);
        if progress <= 0.0 || self.is_degenerate() {
            return self.start_point();
        }
        if progress >= 1.0 {
            return self.end_point();
        }

        let target = progress * self.length();
        let idx = self
            .cumulative
            .partition_point(|&end| end < target)
            .min(self.segments.len() - 1);
        let seg = self.segments[idx];
        let seg_start = if idx == 0 { 0.0 } else { self.cumulative[idx - 1] };
        let seg_len = self.cumulative[idx] - seg_start;
        if seg_len <= GEOM_EPSILON {
            return seg.start();
        }
        let t = seg.inv_arclen((target - seg_start).clamp(0.0, seg_len), ARCLEN_ACCURACY);
        seg.eval(t)
    }
}

fn segment_length(seg: &PathSeg) -> f64 {
    // The control polygon bounds the arc length from above; collapsed
    // segments are measured as zero without asking the solver.
    let hull = match seg {
        PathSeg::Line(l) => l.p0.distance(l.p1),
        PathSeg::Quad(q) => q.p0.distance(q.p1) + q.p1.distance(q.p2),
        PathSeg::Cubic(c) => c.p0.distance(c.p1) + c.p1.distance(c.p2) + c.p2.distance(c.p3),
    };
    if hull <= GEOM_EPSILON {
        return 0.0;
    }
    let len = seg.arclen(ARCLEN_ACCURACY);
    if len.is_finite() { len } else { hull }
}

#[cfg(test)]
#[path = "../../tests/unit/path/definition.rs"]
mod tests;
