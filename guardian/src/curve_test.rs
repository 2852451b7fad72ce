#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn s_curve() -> CubicBezier {
    CubicBezier::new(
        Point::new(40.0, 320.0),
        Point::new(200.0, 40.0),
        Point::new(600.0, 400.0),
        Point::new(760.0, 120.0),
    )
}

fn straight_up() -> CubicBezier {
    CubicBezier::new(
        Point::new(150.0, 390.0),
        Point::new(150.0, 260.0),
        Point::new(150.0, 140.0),
        Point::new(150.0, 10.0),
    )
}

fn no_offset() -> HeadingParams {
    HeadingParams { delta: 0.005, offset_deg: 0.0, clamp: None }
}

fn angular_gap(a: f64, b: f64) -> f64 {
    normalize_degrees_180(a - b).abs()
}

// =============================================================
// point_at
// =============================================================

#[test]
fn point_at_endpoints_match_control_points() {
    let curve = s_curve();
    assert_eq!(curve.point_at(0.0), curve.p0);
    assert_eq!(curve.point_at(1.0), curve.p3);
}

#[test]
fn point_at_is_continuous_near_endpoints() {
    let curve = s_curve();
    let near_start = curve.point_at(1e-6);
    let near_end = curve.point_at(1.0 - 1e-6);
    assert!(near_start.distance_to(curve.p0) < 1e-2);
    assert!(near_end.distance_to(curve.p3) < 1e-2);
}

#[test]
fn point_at_midpoint_uses_bernstein_weights() {
    let curve = s_curve();
    let mid = curve.point_at(0.5);
    // (P0 + 3P1 + 3P2 + P3) / 8
    let expected_x = (40.0 + 3.0 * 200.0 + 3.0 * 600.0 + 760.0) / 8.0;
    let expected_y = (320.0 + 3.0 * 40.0 + 3.0 * 400.0 + 120.0) / 8.0;
    assert!((mid.x - expected_x).abs() < EPSILON);
    assert!((mid.y - expected_y).abs() < EPSILON);
}

#[test]
fn point_at_clamps_out_of_range_parameters() {
    let curve = s_curve();
    assert_eq!(curve.point_at(-0.5), curve.p0);
    assert_eq!(curve.point_at(1.7), curve.p3);
    assert_eq!(curve.point_at(f64::NAN), curve.p0);
}

#[test]
fn derivative_at_start_points_toward_first_handle() {
    let curve = s_curve();
    let d = curve.derivative_at(0.0);
    assert!((d.x - 3.0 * (200.0 - 40.0)).abs() < EPSILON);
    assert!((d.y - 3.0 * (40.0 - 320.0)).abs() < EPSILON);
}

#[test]
fn svg_path_lists_all_control_points() {
    assert_eq!(straight_up().to_svg_path(), "M150.0 390.0 C150.0 260.0, 150.0 140.0, 150.0 10.0");
}

// =============================================================
// heading_deg
// =============================================================

#[test]
fn heading_matches_analytic_derivative_direction() {
    let curve = s_curve();
    for step in 0..=100 {
        let t = f64::from(step) / 100.0;
        let sampled = heading_deg(&curve, t, &no_offset());
        let d = curve.derivative_at(t);
        let analytic = d.y.atan2(d.x).to_degrees();
        assert!(
            angular_gap(sampled, analytic) < 1.0,
            "t={t}: sampled {sampled:.3} vs analytic {analytic:.3}"
        );
    }
}

#[test]
fn heading_applies_offset_for_upward_marker() {
    // Travelling straight up is -90 degrees; the default offset turns it to 0.
    let params = HeadingParams { delta: 0.005, offset_deg: 90.0, clamp: None };
    let heading = heading_deg(&straight_up(), 0.5, &params);
    assert!(heading.abs() < EPSILON);
}

#[test]
fn heading_samples_backwards_at_curve_end() {
    let heading = heading_deg(&straight_up(), 1.0, &no_offset());
    assert!((heading + 90.0).abs() < EPSILON);
}

#[test]
fn heading_clamp_limits_rotation() {
    let params = HeadingParams {
        delta: 0.005,
        offset_deg: 90.0,
        clamp: Some(AngleClamp { min_deg: -30.0, max_deg: 30.0 }),
    };
    let curve = s_curve();
    for step in 0..=20 {
        let heading = heading_deg(&curve, f64::from(step) / 20.0, &params);
        assert!((-30.0..=30.0).contains(&heading));
    }
}

#[test]
fn normalize_degrees_stays_in_half_open_range() {
    assert_eq!(normalize_degrees_180(180.0), 180.0);
    assert_eq!(normalize_degrees_180(-180.0), 180.0);
    assert_eq!(normalize_degrees_180(270.0), -90.0);
    assert_eq!(normalize_degrees_180(-450.0), -90.0);
}

// =============================================================
// wrap_progress
// =============================================================

#[test]
fn wrap_progress_advances_without_wrapping() {
    let (t, wrapped) = wrap_progress(0.25, 0.25);
    assert_eq!(t, 0.5);
    assert!(!wrapped);
}

#[test]
fn wrap_progress_wraps_past_one() {
    let (t, wrapped) = wrap_progress(0.9, 0.25);
    assert!(wrapped);
    assert!((t - 0.15).abs() < EPSILON);
}

#[test]
fn wrap_progress_exactly_one_restarts_at_zero() {
    let (t, wrapped) = wrap_progress(0.75, 0.25);
    assert!(wrapped);
    assert_eq!(t, 0.0);
}

#[test]
fn wrap_progress_never_grows_unbounded() {
    let mut t = 0.0;
    for _ in 0..10_000 {
        t = wrap_progress(t, 0.0037).0;
        assert!((0.0..1.0).contains(&t));
    }
}
