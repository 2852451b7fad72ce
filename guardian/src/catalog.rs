//! The fixed demo tables.
//!
//! Coordinates are hand-authored for the two view boxes in
//! [`crate::consts`]; hazards are pinned by progress along their route so the
//! same record lands on the right spot in either layout.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::sync::LazyLock;

use serde::Serialize;

use crate::curve::CubicBezier;
use crate::error::GuardianError;
use crate::geometry::Point;
use crate::hazard::{Dimensions, Hazard, HazardKind, Severity};
use crate::route::{Route, RouteId, TrafficLevel};

static DEMO: LazyLock<Catalog> = LazyLock::new(Catalog::build_demo);

/// Hazard totals per severity, for the report summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl SeverityCounts {
    #[must_use]
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
            Severity::Critical => self.critical,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.critical
    }

    fn bump(&mut self, severity: Severity) {
        match severity {
            Severity::Low => self.low += 1,
            Severity::Medium => self.medium += 1,
            Severity::High => self.high += 1,
            Severity::Critical => self.critical += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    routes: Vec<Route>,
    hazards: Vec<Hazard>,
}

impl Catalog {
    #[must_use]
    pub fn new(routes: Vec<Route>, hazards: Vec<Hazard>) -> Self {
        Self { routes, hazards }
    }

    /// The shared literal catalog used by the site.
    #[must_use]
    pub fn demo() -> &'static Catalog {
        &DEMO
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[must_use]
    pub fn hazards(&self) -> &[Hazard] {
        &self.hazards
    }

    /// # Errors
    ///
    /// Returns [`GuardianError::UnknownRoute`] when the catalog has no such route.
    pub fn route(&self, id: RouteId) -> Result<&Route, GuardianError> {
        self.routes
            .iter()
            .find(|route| route.id == id)
            .ok_or(GuardianError::UnknownRoute(id))
    }

    /// # Errors
    ///
    /// Returns [`GuardianError::UnknownHazard`] when no hazard has `id`.
    pub fn hazard(&self, id: u32) -> Result<&Hazard, GuardianError> {
        self.hazards
            .iter()
            .find(|hazard| hazard.id == id)
            .ok_or(GuardianError::UnknownHazard(id))
    }

    /// Hazards attached to `route`, in travel order.
    pub fn hazards_on(&self, route: RouteId) -> impl Iterator<Item = &Hazard> {
        let mut on_route = self.hazards.iter().filter(|h| h.route == route).collect::<Vec<_>>();
        on_route.sort_by(|a, b| a.progress.total_cmp(&b.progress));
        on_route.into_iter()
    }

    /// Derived rather than hand-authored so it always agrees with the hazard list.
    #[must_use]
    pub fn hazard_count(&self, route: RouteId) -> usize {
        self.hazards.iter().filter(|h| h.route == route).count()
    }

    #[must_use]
    pub fn severity_counts(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for hazard in &self.hazards {
            counts.bump(hazard.severity);
        }
        counts
    }

    fn build_demo() -> Self {
        Self::new(demo_routes(), demo_hazards())
    }
}

const fn curve(p: [(f64, f64); 4]) -> CubicBezier {
    CubicBezier::new(
        Point::new(p[0].0, p[0].1),
        Point::new(p[1].0, p[1].1),
        Point::new(p[2].0, p[2].1),
        Point::new(p[3].0, p[3].1),
    )
}

fn demo_routes() -> Vec<Route> {
    vec![
        Route {
            id: RouteId::Optimal,
            name: "Optimal Route",
            vertical: curve([(150.0, 390.0), (90.0, 280.0), (210.0, 120.0), (150.0, 10.0)]),
            horizontal: curve([(40.0, 320.0), (260.0, 380.0), (520.0, 60.0), (760.0, 120.0)]),
            distance_km: 4.2,
            eta_min: 14,
            traffic: TrafficLevel::Moderate,
        },
        Route {
            id: RouteId::Fastest,
            name: "Fastest Route",
            vertical: curve([(150.0, 390.0), (150.0, 260.0), (150.0, 140.0), (150.0, 10.0)]),
            horizontal: curve([(40.0, 320.0), (300.0, 300.0), (500.0, 140.0), (760.0, 120.0)]),
            distance_km: 3.6,
            eta_min: 12,
            traffic: TrafficLevel::Heavy,
        },
        Route {
            id: RouteId::Scenic,
            name: "Scenic Route",
            vertical: curve([(150.0, 390.0), (20.0, 250.0), (280.0, 150.0), (150.0, 10.0)]),
            horizontal: curve([(40.0, 320.0), (200.0, 40.0), (600.0, 400.0), (760.0, 120.0)]),
            distance_km: 5.1,
            eta_min: 17,
            traffic: TrafficLevel::Light,
        },
    ]
}

fn demo_hazards() -> Vec<Hazard> {
    vec![
        Hazard {
            id: 1,
            title: "Pothole #1",
            kind: HazardKind::Pothole,
            severity: Severity::Critical,
            route: RouteId::Optimal,
            progress: 0.28,
            location: "25.3176° N, 82.9739° E",
            dimensions: Dimensions::new(45, 30, 8),
            age_days: 12,
        },
        Hazard {
            id: 2,
            title: "Pothole #2",
            kind: HazardKind::Pothole,
            severity: Severity::Medium,
            route: RouteId::Optimal,
            progress: 0.62,
            location: "25.3142° N, 82.9812° E",
            dimensions: Dimensions::new(30, 25, 5),
            age_days: 5,
        },
        Hazard {
            id: 3,
            title: "Surface ravelling",
            kind: HazardKind::Ravelling,
            severity: Severity::Low,
            route: RouteId::Optimal,
            progress: 0.86,
            location: "25.3158° N, 82.9855° E",
            dimensions: Dimensions::new(120, 60, 2),
            age_days: 31,
        },
        Hazard {
            id: 4,
            title: "Pothole #3",
            kind: HazardKind::Pothole,
            severity: Severity::Low,
            route: RouteId::Fastest,
            progress: 0.45,
            location: "25.3201° N, 82.9768° E",
            dimensions: Dimensions::new(20, 15, 3),
            age_days: 2,
        },
        Hazard {
            id: 5,
            title: "Crack cluster",
            kind: HazardKind::Crack,
            severity: Severity::High,
            route: RouteId::Fastest,
            progress: 0.78,
            location: "25.3219° N, 82.9791° E",
            dimensions: Dimensions::new(150, 10, 4),
            age_days: 48,
        },
        Hazard {
            id: 6,
            title: "Pothole #4",
            kind: HazardKind::Pothole,
            severity: Severity::High,
            route: RouteId::Scenic,
            progress: 0.35,
            location: "25.3187° N, 82.9702° E",
            dimensions: Dimensions::new(38, 32, 7),
            age_days: 9,
        },
        Hazard {
            id: 7,
            title: "Edge subsidence",
            kind: HazardKind::Subsidence,
            severity: Severity::Medium,
            route: RouteId::Scenic,
            progress: 0.7,
            location: "25.3233° N, 82.9724° E",
            dimensions: Dimensions::new(80, 40, 6),
            age_days: 21,
        },
    ]
}
