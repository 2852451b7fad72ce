#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::curve::CubicBezier;
use crate::geometry::Orientation;

/// The three predefined demo routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteId {
    #[default]
    Optimal,
    Fastest,
    Scenic,
}

impl RouteId {
    pub const ALL: [RouteId; 3] = [RouteId::Optimal, RouteId::Fastest, RouteId::Scenic];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            RouteId::Optimal => "optimal",
            RouteId::Fastest => "fastest",
            RouteId::Scenic => "scenic",
        }
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficLevel {
    Light,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TrafficLevel::Light => "Light traffic",
            TrafficLevel::Moderate => "Moderate traffic",
            TrafficLevel::Heavy => "Heavy traffic",
        }
    }

    /// Lowercase token for CSS modifiers.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            TrafficLevel::Light => "light",
            TrafficLevel::Moderate => "moderate",
            TrafficLevel::Heavy => "heavy",
        }
    }
}

/// A named path with hand-authored trip metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub id: RouteId,
    pub name: &'static str,
    pub vertical: CubicBezier,
    pub horizontal: CubicBezier,
    pub distance_km: f64,
    pub eta_min: u32,
    pub traffic: TrafficLevel,
}

impl Route {
    /// The curve drawn for `orientation`.
    #[must_use]
    pub fn curve(&self, orientation: Orientation) -> &CubicBezier {
        match orientation {
            Orientation::Vertical => &self.vertical,
            Orientation::Horizontal => &self.horizontal,
        }
    }

    /// Route length in metres.
    #[must_use]
    pub fn length_m(&self) -> f64 {
        self.distance_km * 1000.0
    }
}
