use std::collections::HashSet;

use super::*;
use crate::consts::DEFAULT_PROXIMITY_THRESHOLD;
use crate::geometry::Orientation;

#[test]
fn demo_has_one_route_per_id() {
    let catalog = Catalog::demo();
    assert_eq!(catalog.routes().len(), RouteId::ALL.len());
    for id in RouteId::ALL {
        assert_eq!(catalog.route(id).unwrap().id, id);
    }
}

#[test]
fn demo_hazard_ids_are_unique() {
    let ids = Catalog::demo().hazards().iter().map(|h| h.id).collect::<HashSet<_>>();
    assert_eq!(ids.len(), Catalog::demo().hazards().len());
}

#[test]
fn demo_hazards_sit_inside_their_routes() {
    for hazard in Catalog::demo().hazards() {
        assert!(hazard.progress > 0.0 && hazard.progress < 1.0, "hazard {} off the route", hazard.id);
    }
}

#[test]
fn demo_hazards_are_far_enough_apart_to_alert_separately() {
    let catalog = Catalog::demo();
    for route in catalog.routes() {
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            let curve = route.curve(orientation);
            let points = catalog.hazards_on(route.id).map(|h| h.position_on(curve)).collect::<Vec<_>>();
            for (i, a) in points.iter().enumerate() {
                assert!(a.distance_to(curve.p0) > DEFAULT_PROXIMITY_THRESHOLD);
                assert!(a.distance_to(curve.p3) > DEFAULT_PROXIMITY_THRESHOLD);
                for b in &points[i + 1..] {
                    assert!(a.distance_to(*b) > 2.0 * DEFAULT_PROXIMITY_THRESHOLD);
                }
            }
        }
    }
}

#[test]
fn hazards_on_returns_travel_order() {
    let progress = Catalog::demo()
        .hazards_on(RouteId::Optimal)
        .map(|h| h.progress)
        .collect::<Vec<_>>();
    assert_eq!(progress, vec![0.28, 0.62, 0.86]);
}

#[test]
fn hazard_count_is_derived_from_hazard_list() {
    let catalog = Catalog::demo();
    assert_eq!(catalog.hazard_count(RouteId::Optimal), 3);
    assert_eq!(catalog.hazard_count(RouteId::Fastest), 2);
    assert_eq!(catalog.hazard_count(RouteId::Scenic), 2);
}

#[test]
fn severity_counts_cover_every_hazard() {
    let counts = Catalog::demo().severity_counts();
    assert_eq!(counts.get(Severity::Critical), 1);
    assert_eq!(counts.get(Severity::High), 2);
    assert_eq!(counts.get(Severity::Medium), 2);
    assert_eq!(counts.get(Severity::Low), 2);
    assert_eq!(counts.total(), Catalog::demo().hazards().len());
}

#[test]
fn unknown_lookups_are_errors() {
    let catalog = Catalog::demo();
    assert_eq!(catalog.hazard(99), Err(GuardianError::UnknownHazard(99)));
    let empty = Catalog::new(Vec::new(), Vec::new());
    assert_eq!(empty.route(RouteId::Scenic), Err(GuardianError::UnknownRoute(RouteId::Scenic)));
}

#[test]
fn hazard_lookup_returns_literal_record() {
    let hazard = Catalog::demo().hazard(1).unwrap();
    assert_eq!(hazard.title, "Pothole #1");
    assert_eq!(hazard.dimensions.to_string(), "45cm × 30cm, 8cm deep");
}
