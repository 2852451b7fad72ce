//! Cubic Bézier evaluation for the curve-following marker.
//!
//! Routes are single cubic segments. The marker's position is the textbook
//! Bernstein form; its heading is sampled from two nearby points so the same
//! code drives both the vertical hero road and the horizontal demo map.

#[cfg(test)]
#[path = "curve_test.rs"]
mod curve_test;

use serde::{Deserialize, Serialize};

use crate::config::AngleClamp;
use crate::geometry::Point;

/// Four control points: start, two interior handles, end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicBezier {
    #[must_use]
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Position at parameter `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point {
        let t = clamp_unit(t);
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point {
            x: b0 * self.p0.x + b1 * self.p1.x + b2 * self.p2.x + b3 * self.p3.x,
            y: b0 * self.p0.y + b1 * self.p1.y + b2 * self.p2.y + b3 * self.p3.y,
        }
    }

    /// First derivative `dB/dt` at `t`, clamped to `[0, 1]`, as a vector.
    #[must_use]
    pub fn derivative_at(&self, t: f64) -> Point {
        let t = clamp_unit(t);
        let u = 1.0 - t;
        let d0 = 3.0 * u * u;
        let d1 = 6.0 * u * t;
        let d2 = 3.0 * t * t;
        Point {
            x: d0 * (self.p1.x - self.p0.x) + d1 * (self.p2.x - self.p1.x) + d2 * (self.p3.x - self.p2.x),
            y: d0 * (self.p1.y - self.p0.y) + d1 * (self.p2.y - self.p1.y) + d2 * (self.p3.y - self.p2.y),
        }
    }

    /// SVG path data (`M … C …`) tracing this curve.
    #[must_use]
    pub fn to_svg_path(&self) -> String {
        format!(
            "M{:.1} {:.1} C{:.1} {:.1}, {:.1} {:.1}, {:.1} {:.1}",
            self.p0.x, self.p0.y, self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.p3.x, self.p3.y
        )
    }
}

/// Heading sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingParams {
    /// Look-ahead in `t` between the two sampled points.
    pub delta: f64,
    /// Added to the travel angle so the marker artwork faces forward.
    pub offset_deg: f64,
    /// Optional post-offset clamp for layouts where a sideways marker looks wrong.
    pub clamp: Option<AngleClamp>,
}

/// Marker rotation at `t`, in degrees within `(-180, 180]`.
///
/// Samples `p(t)` and `p(t + delta)`; near the end of the curve it samples
/// backwards instead so the heading never collapses to a zero-length vector.
#[must_use]
pub fn heading_deg(curve: &CubicBezier, t: f64, params: &HeadingParams) -> f64 {
    let t = clamp_unit(t);
    let delta = params.delta.abs().max(f64::EPSILON);
    let (from, to) = if t + delta <= 1.0 {
        (curve.point_at(t), curve.point_at(t + delta))
    } else {
        (curve.point_at(t - delta), curve.point_at(t))
    };
    let travel = (to.y - from.y).atan2(to.x - from.x).to_degrees();
    let heading = normalize_degrees_180(travel + params.offset_deg);
    match params.clamp {
        Some(clamp) => heading.clamp(clamp.min_deg, clamp.max_deg),
        None => heading,
    }
}

/// Advance `t` by `step`, wrapping back into `[0, 1)` once it reaches 1.
///
/// Returns the new progress and whether a wrap happened.
#[must_use]
pub fn wrap_progress(t: f64, step: f64) -> (f64, bool) {
    let next = clamp_unit(t) + step;
    if next >= 1.0 {
        (next.rem_euclid(1.0), true)
    } else {
        (next.max(0.0), false)
    }
}

/// Map any angle into `(-180, 180]`.
#[must_use]
pub fn normalize_degrees_180(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}
