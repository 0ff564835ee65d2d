use super::*;

#[test]
fn defaults_match_observed_values() {
    let cfg = MotionConfig::default();
    assert_eq!(cfg.duration_ms, 8000.0);
    assert_eq!(cfg.completion_delay_ms, 1000.0);
    assert_eq!(cfg.ease, Ease::InOutCubic);
    assert_eq!(cfg.trail.count, 20);
    assert_eq!(cfg.trail.step, 0.02);
    assert_eq!(cfg.trail.decay_rate, 0.02);
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = MotionConfig::from_json_str(r#"{ "duration_ms": 2500, "trail": { "count": 5 } }"#)
        .unwrap();
    assert_eq!(cfg.duration_ms, 2500.0);
    assert_eq!(cfg.completion_delay_ms, 1000.0);
    assert_eq!(cfg.trail.count, 5);
    assert_eq!(cfg.trail.base_opacity, 0.4);
}

#[test]
fn ease_is_selectable_by_name() {
    let cfg = MotionConfig::from_json_str(r#"{ "ease": "InQuadOutCubic" }"#).unwrap();
    assert_eq!(cfg.ease, Ease::InQuadOutCubic);
}

#[test]
fn non_positive_duration_is_accepted() {
    assert!(MotionConfig::from_json_str(r#"{ "duration_ms": 0 }"#).is_ok());
    assert!(MotionConfig::from_json_str(r#"{ "duration_ms": -10 }"#).is_ok());
}

#[test]
fn invalid_values_are_config_errors() {
    assert!(matches!(
        MotionConfig::from_json_str(r#"{ "completion_delay_ms": -1 }"#),
        Err(MotionError::Config(_))
    ));
    assert!(matches!(
        MotionConfig::from_json_str(r#"{ "trail": { "decay_rate": -0.5 } }"#),
        Err(MotionError::Config(_))
    ));
    assert!(matches!(
        MotionConfig::from_json_str(r#"{ "trail": { "count": 18446744073709551615 } }"#),
        Err(MotionError::Config(_))
    ));
    assert!(matches!(
        MotionConfig::from_json_str("{ not json"),
        Err(MotionError::Serde(_))
    ));
}

#[test]
fn route_file_defaults_to_builtin_arc() {
    let route = RouteFile::from_json_str(r#"{ "from": { "name": "A", "code": "AAA" } }"#).unwrap();
    let (path, cfg) = route.resolve().unwrap();
    assert_eq!(path.origin().code, "AAA");
    assert_eq!(path.start_point(), crate::foundation::core::Point::new(100.0, 150.0));
    assert_eq!(path.end_point(), crate::foundation::core::Point::new(700.0, 150.0));
    assert_eq!(cfg, MotionConfig::default());
}

#[test]
fn route_file_rejects_bad_svg() {
    let route = RouteFile {
        svg_path: Some("M 0 0".to_string()),
        ..RouteFile::default()
    };
    assert!(matches!(route.resolve(), Err(MotionError::Validation(_))));
}

#[test]
fn missing_file_is_config_error() {
    let err = MotionConfig::from_path(Path::new("definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, MotionError::Config(_)));
}
