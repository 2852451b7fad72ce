#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::{HORIZONTAL_VIEW_BOX, VERTICAL_VIEW_BOX};

/// A point in SVG view-box units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Layout a route is drawn for. Each route carries one curve per orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Portrait road (hero phone and side road).
    #[default]
    Vertical,
    /// Landscape map (interactive demo).
    Horizontal,
}

impl Orientation {
    /// `(width, height)` of the SVG view box for this layout.
    #[must_use]
    pub fn view_box(self) -> (f64, f64) {
        match self {
            Orientation::Vertical => VERTICAL_VIEW_BOX,
            Orientation::Horizontal => HORIZONTAL_VIEW_BOX,
        }
    }

    /// Value for an SVG `viewBox` attribute.
    #[must_use]
    pub fn view_box_attr(self) -> String {
        let (w, h) = self.view_box();
        format!("0 0 {w} {h}")
    }
}
