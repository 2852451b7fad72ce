#![allow(clippy::float_cmp)]

use super::*;
use crate::geometry::Point;

fn route() -> Route {
    let line = |x0: f64, x1: f64| {
        CubicBezier::new(Point::new(x0, 0.0), Point::new(x0, 10.0), Point::new(x1, 20.0), Point::new(x1, 30.0))
    };
    Route {
        id: RouteId::Fastest,
        name: "Fastest Route",
        vertical: line(1.0, 2.0),
        horizontal: line(3.0, 4.0),
        distance_km: 3.6,
        eta_min: 11,
        traffic: TrafficLevel::Heavy,
    }
}

#[test]
fn curve_picks_orientation() {
    let r = route();
    assert_eq!(r.curve(Orientation::Vertical).p0.x, 1.0);
    assert_eq!(r.curve(Orientation::Horizontal).p0.x, 3.0);
}

#[test]
fn length_in_metres() {
    assert_eq!(route().length_m(), 3600.0);
}

#[test]
fn route_id_display_is_slug() {
    assert_eq!(RouteId::Scenic.to_string(), "scenic");
    assert_eq!(RouteId::default(), RouteId::Optimal);
}

#[test]
fn traffic_slug_is_a_single_css_token() {
    for (level, slug) in [
        (TrafficLevel::Light, "light"),
        (TrafficLevel::Moderate, "moderate"),
        (TrafficLevel::Heavy, "heavy"),
    ] {
        assert_eq!(level.slug(), slug);
        assert!(!level.slug().contains(' '));
        assert!(level.label().ends_with(" traffic"));
    }
}
