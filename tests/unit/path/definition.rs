use super::*;

fn ends() -> (Endpoint, Endpoint) {
    (Endpoint::new("Lisbon", "LIS"), Endpoint::new("Tokyo", "HND"))
}

fn close(a: Point, b: Point, tol: f64) -> bool {
    a.distance(b) <= tol
}

#[test]
fn line_length_and_midpoint() {
    let (a, b) = ends();
    let p = PathDefinition::line(a, b, Point::new(0.0, 0.0), Point::new(30.0, 40.0)).unwrap();
    assert!((p.length() - 50.0).abs() < 1e-9);
    assert!(close(p.point_at(0.5), Point::new(15.0, 20.0), 1e-9));
}

#[test]
fn endpoints_are_exact() {
    let (a, b) = ends();
    let p = PathDefinition::flight_arc(a, b);
    assert_eq!(p.point_at(0.0), Point::new(100.0, 150.0));
    assert_eq!(p.point_at(1.0), Point::new(700.0, 150.0));
    assert_eq!(p.point_at(-1.0), p.start_point());
    assert_eq!(p.point_at(2.0), p.end_point());
}

#[test]
fn flight_arc_matches_its_svg_source() {
    let (a, b) = ends();
    let built = PathDefinition::flight_arc(a.clone(), b.clone());
    let parsed = PathDefinition::from_svg(a, b, FLIGHT_ARC_SVG).unwrap();
    assert!((built.length() - parsed.length()).abs() < 1e-9);
    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        assert!(close(built.point_at(t), parsed.point_at(t), 1e-9));
    }
}

#[test]
fn symmetric_route_is_halfway_at_apex() {
    let (a, b) = ends();
    let p = PathDefinition::flight_arc(a, b);
    assert!(close(p.point_at(0.5), Point::new(400.0, 60.0), 1e-4));
}

#[test]
fn quadratic_through_passes_via_point() {
    let (a, b) = ends();
    let p = PathDefinition::quadratic_through(
        a,
        b,
        Point::new(100.0, 150.0),
        Point::new(400.0, 60.0),
        Point::new(700.0, 150.0),
    )
    .unwrap();
    assert!(close(p.point_at(0.5), Point::new(400.0, 60.0), 1e-4));
}

#[test]
fn arc_length_progress_is_uniform() {
    let (a, b) = ends();
    let p = PathDefinition::flight_arc(a, b);
    let n = 50;
    let step = p.length() / f64::from(n);
    for i in 0..n {
        let p0 = p.point_at(f64::from(i) / f64::from(n));
        let p1 = p.point_at(f64::from(i + 1) / f64::from(n));
        // chord never exceeds the arc it spans, and is close to it at this resolution
        let chord = p0.distance(p1);
        assert!(chord <= step + 1e-6);
        assert!(chord >= step * 0.99);
    }
}

#[test]
fn collapsed_quadratic_is_degenerate() {
    let (a, b) = ends();
    let pt = Point::new(5.0, 5.0);
    let p = PathDefinition::quadratic(a, b, pt, pt, pt).unwrap();
    assert!(p.is_degenerate());
    assert_eq!(p.length(), 0.0);
    assert_eq!(p.point_at(0.3), pt);
}

#[test]
fn rejects_empty_and_non_finite_paths() {
    let (a, b) = ends();
    assert!(matches!(
        PathDefinition::from_svg(a.clone(), b.clone(), "M 10 10"),
        Err(MotionError::Validation(_))
    ));
    assert!(matches!(
        PathDefinition::from_svg(a.clone(), b.clone(), "M 10 10 Q oops"),
        Err(MotionError::Validation(_))
    ));

    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((f64::NAN, 1.0));
    assert!(matches!(
        PathDefinition::new(a, b, path),
        Err(MotionError::Validation(_))
    ));
}

#[test]
fn point_constructors_reject_non_finite_input() {
    let (a, b) = ends();
    let ok = Point::new(1.0, 1.0);
    let nan = Point::new(f64::NAN, 0.0);
    let inf = Point::new(0.0, f64::INFINITY);
    assert!(matches!(
        PathDefinition::line(a.clone(), b.clone(), ok, nan),
        Err(MotionError::Validation(_))
    ));
    assert!(matches!(
        PathDefinition::quadratic(a.clone(), b.clone(), ok, inf, ok),
        Err(MotionError::Validation(_))
    ));
    assert!(matches!(
        PathDefinition::quadratic_through(a, b, ok, nan, ok),
        Err(MotionError::Validation(_))
    ));
}

#[test]
fn endpoint_labels_are_kept() {
    let (a, b) = ends();
    let p = PathDefinition::flight_arc(a, b);
    assert_eq!(p.origin().code, "LIS");
    assert_eq!(p.destination().name, "Tokyo");
}
