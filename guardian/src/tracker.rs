//! Animated marker state and the hazard alert policy.
//!
//! ALERT POLICY
//! ============
//! Each hazard alerts exactly once per traversal: the first tick of a lap on
//! which the marker comes within range raises the alert, and the hazard stays
//! quiet until progress wraps, the route changes, or the tracker is reset.
//! A newer alert replaces one that is still on screen.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::DemoConfig;
use crate::consts::DISTANCE_ROUNDING_M;
use crate::curve::{CubicBezier, heading_deg, wrap_progress};
use crate::error::GuardianError;
use crate::geometry::{Orientation, Point};
use crate::hazard::Severity;
use crate::proximity::hazards_in_range;
use crate::route::RouteId;

/// A hazard of the active route, positioned for the active orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HazardPin {
    pub id: u32,
    pub severity: Severity,
    pub progress: f64,
    pub position: Point,
    pub damage_points: u32,
}

/// Where the vehicle is drawn and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Marker {
    pub position: Point,
    pub heading_deg: f64,
}

impl Marker {
    /// SVG `transform` placing an origin-centred marker on the route.
    #[must_use]
    pub fn svg_transform(&self) -> String {
        format!(
            "translate({:.1} {:.1}) rotate({:.1})",
            self.position.x, self.position.y, self.heading_deg
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub hazard_id: u32,
    pub severity: Severity,
    /// Road distance from the marker to the hazard when raised.
    pub distance_m: u32,
    pub ticks_remaining: u32,
}

/// Decorative trip counters shown beside the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TripStats {
    pub laps: u32,
    pub alerts_raised: u32,
    /// Sum of damage points of every hazard alerted so far.
    pub score: u32,
}

/// What a single tick changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TickReport {
    pub wrapped: bool,
    pub raised: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteTracker {
    config: DemoConfig,
    route: RouteId,
    orientation: Orientation,
    curve: CubicBezier,
    route_length_m: f64,
    pins: Vec<HazardPin>,
    progress: f64,
    running: bool,
    marker: Marker,
    active: Vec<u32>,
    alert: Option<Alert>,
    alerted: BTreeSet<u32>,
    stats: TripStats,
}

impl RouteTracker {
    /// Paused tracker at the start of `route`.
    ///
    /// # Errors
    ///
    /// Fails when `config` does not validate or `catalog` lacks `route`.
    pub fn new(
        catalog: &Catalog,
        route: RouteId,
        orientation: Orientation,
        config: DemoConfig,
    ) -> Result<Self, GuardianError> {
        let config = config.validate()?;
        let mut tracker = Self {
            config,
            route,
            orientation,
            curve: *catalog.route(route)?.curve(orientation),
            route_length_m: 0.0,
            pins: Vec::new(),
            progress: 0.0,
            running: false,
            marker: Marker::default(),
            active: Vec::new(),
            alert: None,
            alerted: BTreeSet::new(),
            stats: TripStats::default(),
        };
        tracker.load(catalog, route, orientation)?;
        tracker.restart_traversal();
        Ok(tracker)
    }

    // ── Accessors ───────────────────────────────────────────────

    #[must_use]
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    #[must_use]
    pub fn route(&self) -> RouteId {
        self.route
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn curve(&self) -> &CubicBezier {
        &self.curve
    }

    #[must_use]
    pub fn pins(&self) -> &[HazardPin] {
        &self.pins
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Hazards currently within range of the marker.
    #[must_use]
    pub fn active(&self) -> &[u32] {
        &self.active
    }

    #[must_use]
    pub fn is_active(&self, id: u32) -> bool {
        self.active.contains(&id)
    }

    #[must_use]
    pub fn alert(&self) -> Option<Alert> {
        self.alert
    }

    #[must_use]
    pub fn stats(&self) -> TripStats {
        self.stats
    }

    // ── Controls ────────────────────────────────────────────────

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Stop, rewind to the start of the route and zero the trip counters.
    pub fn reset(&mut self) {
        self.running = false;
        self.stats = TripStats::default();
        self.restart_traversal();
    }

    /// Switch route and restart the traversal; the running flag is kept.
    ///
    /// # Errors
    ///
    /// Returns [`GuardianError::UnknownRoute`] and leaves the tracker unchanged
    /// when `catalog` lacks `route`.
    pub fn select_route(&mut self, catalog: &Catalog, route: RouteId) -> Result<(), GuardianError> {
        self.load(catalog, route, self.orientation)?;
        self.restart_traversal();
        Ok(())
    }

    /// Redraw the same route for another layout without losing progress.
    ///
    /// # Errors
    ///
    /// Returns [`GuardianError::UnknownRoute`] when the active route vanished
    /// from `catalog`.
    pub fn set_orientation(&mut self, catalog: &Catalog, orientation: Orientation) -> Result<(), GuardianError> {
        self.load(catalog, self.route, orientation)?;
        self.refresh();
        Ok(())
    }

    /// Advance one animation step. Does nothing while paused.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        if !self.running {
            return report;
        }

        if let Some(alert) = self.alert.as_mut() {
            alert.ticks_remaining = alert.ticks_remaining.saturating_sub(1);
            if alert.ticks_remaining == 0 {
                self.alert = None;
            }
        }

        let (progress, wrapped) = wrap_progress(self.progress, self.config.step);
        self.progress = progress;
        if wrapped {
            report.wrapped = true;
            self.stats.laps += 1;
            self.alerted.clear();
        }

        self.refresh();

        let newly_in_range = self
            .active
            .iter()
            .copied()
            .filter(|id| !self.alerted.contains(id))
            .collect::<Vec<_>>();
        for id in newly_in_range {
            let Some(pin) = self.pins.iter().find(|pin| pin.id == id).copied() else {
                continue;
            };
            self.alerted.insert(id);
            self.stats.alerts_raised += 1;
            self.stats.score += pin.damage_points;
            self.alert = Some(Alert {
                hazard_id: id,
                severity: pin.severity,
                distance_m: self.distance_ahead_m(pin.progress),
                ticks_remaining: self.config.alert_hold_ticks,
            });
            report.raised.push(id);
        }

        report
    }

    /// Road distance from the marker to a point at `target` progress,
    /// rounded to [`DISTANCE_ROUNDING_M`]; zero once it is behind the marker.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn distance_ahead_m(&self, target: f64) -> u32 {
        let metres = (target - self.progress).max(0.0) * self.route_length_m;
        ((metres / DISTANCE_ROUNDING_M).round() * DISTANCE_ROUNDING_M) as u32
    }

    // ── Internals ───────────────────────────────────────────────

    fn load(&mut self, catalog: &Catalog, route: RouteId, orientation: Orientation) -> Result<(), GuardianError> {
        let record = catalog.route(route)?;
        let curve = *record.curve(orientation);
        self.pins = catalog
            .hazards_on(route)
            .map(|hazard| HazardPin {
                id: hazard.id,
                severity: hazard.severity,
                progress: hazard.progress,
                position: hazard.position_on(&curve),
                damage_points: hazard.damage_points(),
            })
            .collect();
        self.route = route;
        self.orientation = orientation;
        self.curve = curve;
        self.route_length_m = record.length_m();
        Ok(())
    }

    fn restart_traversal(&mut self) {
        self.progress = 0.0;
        self.alert = None;
        self.alerted.clear();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.marker = Marker {
            position: self.curve.point_at(self.progress),
            heading_deg: heading_deg(&self.curve, self.progress, &self.config.heading_params()),
        };
        self.active = hazards_in_range(
            self.marker.position,
            self.pins.iter().map(|pin| (pin.id, pin.position)),
            self.config.proximity_threshold,
        );
    }
}
