//! Route simulation core for the Path Guardian site.
//!
//! Everything the hero animation and the interactive demo compute lives here,
//! free of any browser or rendering dependency so it can be unit-tested
//! natively and shared by the SSR and hydrate builds of the client.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Points, distances and layout orientation |
//! | [`curve`] | Cubic Bézier evaluation, headings and progress wrapping |
//! | [`hazard`] | Hazard records, severities and derived repair metrics |
//! | [`route`] | Named routes with per-orientation curves and trip metrics |
//! | [`catalog`] | The fixed demo tables of routes and hazards |
//! | [`proximity`] | Marker-to-hazard range checks |
//! | [`tracker`] | Animated marker state and the alert policy |
//! | [`selection`] | Selected-hazard state for the damage report |
//! | [`config`] | Demo tuning knobs |
//! | [`consts`] | Shared numeric constants |
//! | [`error`] | Crate error type |

pub mod catalog;
pub mod config;
pub mod consts;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod hazard;
pub mod proximity;
pub mod route;
pub mod selection;
pub mod tracker;

pub use catalog::{Catalog, SeverityCounts};
pub use config::{AngleClamp, DemoConfig};
pub use curve::CubicBezier;
pub use error::GuardianError;
pub use geometry::{Orientation, Point};
pub use hazard::{Dimensions, Hazard, HazardKind, Severity};
pub use route::{Route, RouteId, TrafficLevel};
pub use selection::HazardSelection;
pub use tracker::{Alert, HazardPin, Marker, RouteTracker, TickReport, TripStats};
