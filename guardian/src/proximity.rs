//! Marker-to-hazard range checks.

#[cfg(test)]
#[path = "proximity_test.rs"]
mod proximity_test;

use crate::geometry::Point;

/// True when `a` and `b` are strictly closer than `threshold`.
#[must_use]
pub fn within_range(a: Point, b: Point, threshold: f64) -> bool {
    a.distance_to(b) < threshold
}

/// Ids of every `(id, position)` pair within `threshold` of `marker`.
pub fn hazards_in_range<I>(marker: Point, hazards: I, threshold: f64) -> Vec<u32>
where
    I: IntoIterator<Item = (u32, Point)>,
{
    hazards
        .into_iter()
        .filter(|(_, position)| within_range(marker, *position, threshold))
        .map(|(id, _)| id)
        .collect()
}
