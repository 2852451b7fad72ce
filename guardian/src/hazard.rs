//! Hazard records and the metrics derived from them.

#[cfg(test)]
#[path = "hazard_test.rs"]
mod hazard_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::curve::CubicBezier;
use crate::geometry::Point;
use crate::route::RouteId;

/// Damage severity, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Severity::Low, Severity::Medium, Severity::High, Severity::Critical];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    /// Lowercase identifier, used for CSS modifiers.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Base damage points before depth is taken into account.
    #[must_use]
    pub fn weight(self) -> u32 {
        match self {
            Severity::Low => 10,
            Severity::Medium => 25,
            Severity::High => 50,
            Severity::Critical => 100,
        }
    }

    fn cost_multiplier(self) -> f64 {
        match self {
            Severity::Low => 1.0,
            Severity::Medium => 1.2,
            Severity::High => 1.5,
            Severity::Critical => 2.0,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardKind {
    Pothole,
    Crack,
    Subsidence,
    Ravelling,
}

impl HazardKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            HazardKind::Pothole => "Pothole",
            HazardKind::Crack => "Crack",
            HazardKind::Subsidence => "Subsidence",
            HazardKind::Ravelling => "Ravelling",
        }
    }
}

/// Measured size of a defect, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length_cm: u32,
    pub width_cm: u32,
    pub depth_cm: u32,
}

impl Dimensions {
    #[must_use]
    pub const fn new(length_cm: u32, width_cm: u32, depth_cm: u32) -> Self {
        Self { length_cm, width_cm, depth_cm }
    }

    /// Excavated volume in litres (1 L = 1000 cm³).
    #[must_use]
    pub fn volume_litres(self) -> f64 {
        f64::from(self.length_cm) * f64::from(self.width_cm) * f64::from(self.depth_cm) / 1000.0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}cm × {}cm, {}cm deep", self.length_cm, self.width_cm, self.depth_cm)
    }
}

/// Repair crews charge a flat call-out plus a per-litre fill rate.
const REPAIR_BASE_INR: f64 = 1500.0;
const REPAIR_PER_LITRE_INR: f64 = 120.0;

/// A fixed point of road damage attached to one route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hazard {
    pub id: u32,
    pub title: &'static str,
    pub kind: HazardKind,
    pub severity: Severity,
    pub route: RouteId,
    /// Where on the route curve the hazard sits, as `t` in `[0, 1]`.
    pub progress: f64,
    pub location: &'static str,
    pub dimensions: Dimensions,
    pub age_days: u32,
}

impl Hazard {
    /// Position on `curve`, i.e. on the route drawn for a given orientation.
    #[must_use]
    pub fn position_on(&self, curve: &CubicBezier) -> Point {
        curve.point_at(self.progress)
    }

    /// Gamified score contribution: severity weight plus two points per cm of depth.
    #[must_use]
    pub fn damage_points(&self) -> u32 {
        self.severity.weight() + 2 * self.dimensions.depth_cm
    }

    /// Estimated repair cost in rupees, rounded to the nearest 50.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn repair_cost_inr(&self) -> u32 {
        let raw = (REPAIR_BASE_INR + REPAIR_PER_LITRE_INR * self.dimensions.volume_litres())
            * self.severity.cost_multiplier();
        ((raw / 50.0).round() * 50.0).max(0.0) as u32
    }
}
