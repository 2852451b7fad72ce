use super::*;

#[test]
fn marker_on_top_of_hazard_is_in_range() {
    assert!(within_range(Point::new(140.0, 280.0), Point::new(140.0, 280.0), 30.0));
}

#[test]
fn distant_hazard_is_out_of_range() {
    assert!(!within_range(Point::new(140.0, 280.0), Point::new(140.0, 400.0), 30.0));
}

#[test]
fn range_check_is_symmetric() {
    let a = Point::new(140.0, 280.0);
    let b = Point::new(158.0, 300.0);
    assert_eq!(within_range(a, b, 30.0), within_range(b, a, 30.0));
}

#[test]
fn threshold_is_exclusive() {
    assert!(!within_range(Point::new(0.0, 0.0), Point::new(30.0, 0.0), 30.0));
    assert!(within_range(Point::new(0.0, 0.0), Point::new(29.9, 0.0), 30.0));
}

#[test]
fn hazards_in_range_filters_by_distance() {
    let marker = Point::new(140.0, 280.0);
    let hazards = [(1, Point::new(140.0, 280.0)), (2, Point::new(140.0, 400.0)), (3, Point::new(160.0, 290.0))];
    assert_eq!(hazards_in_range(marker, hazards, 30.0), vec![1, 3]);
}
