#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn distance_is_euclidean() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert_eq!(a.distance_to(b), 5.0);
}

#[test]
fn distance_is_symmetric() {
    let a = Point::new(140.0, 280.0);
    let b = Point::new(90.0, 400.0);
    assert_eq!(a.distance_to(b), b.distance_to(a));
}

#[test]
fn distance_to_self_is_zero() {
    let p = Point::new(12.5, -3.0);
    assert_eq!(p.distance_to(p), 0.0);
}

#[test]
fn orientation_view_boxes() {
    assert_eq!(Orientation::Vertical.view_box_attr(), "0 0 300 400");
    assert_eq!(Orientation::Horizontal.view_box_attr(), "0 0 800 400");
}

#[test]
fn orientation_default_is_vertical() {
    assert_eq!(Orientation::default(), Orientation::Vertical);
}
