use super::*;
use crate::foundation::core::Point;
use crate::path::definition::Endpoint;

fn arc() -> PathDefinition {
    PathDefinition::flight_arc(Endpoint::default(), Endpoint::default())
}

#[test]
fn endpoints_match_route() {
    let p = arc();
    let s0 = sample(&p, 0.0);
    let s1 = sample(&p, 1.0);
    assert!((s0.x - 100.0).abs() < 1e-6 && (s0.y - 150.0).abs() < 1e-6);
    assert!((s1.x - 700.0).abs() < 1e-6 && (s1.y - 150.0).abs() < 1e-6);
}

#[test]
fn heading_climbs_then_descends() {
    let p = arc();
    // screen space: y grows downward, so climbing is a negative angle
    assert!(sample(&p, 0.1).heading_deg < 0.0);
    assert!(sample(&p, 0.9).heading_deg > 0.0);
}

#[test]
fn heading_at_end_is_finite_and_continuous() {
    let p = arc();
    let end = sample(&p, 1.0).heading_deg;
    let near = sample(&p, 0.98).heading_deg;
    assert!(end.is_finite());
    assert!((end - near).abs() < 5.0);
}

#[test]
fn straight_line_heading_is_constant() {
    let p = PathDefinition::line(
        Endpoint::default(),
        Endpoint::default(),
        Point::new(0.0, 0.0),
        Point::new(0.0, 10.0),
    )
    .unwrap();
    for t in [0.0, 0.3, 0.999, 1.0] {
        assert!((sample(&p, t).heading_deg - 90.0).abs() < 1e-9);
    }
}

#[test]
fn degenerate_route_returns_fixed_point() {
    let pt = Point::new(42.0, 7.0);
    let p = PathDefinition::line(Endpoint::default(), Endpoint::default(), pt, pt).unwrap();
    for t in [0.0, 0.5, 1.0] {
        let s = sample(&p, t);
        assert_eq!((s.x, s.y, s.heading_deg), (42.0, 7.0, 0.0));
    }
}

#[test]
fn out_of_range_progress_is_clamped() {
    let p = arc();
    assert_eq!(sample(&p, -0.5), sample(&p, 0.0));
    assert_eq!(sample(&p, 1.5), sample(&p, 1.0));
}
