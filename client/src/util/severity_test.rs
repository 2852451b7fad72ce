#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn every_severity_has_a_distinct_fill() {
    let fills = Severity::ALL.map(severity_fill);
    for (i, a) in fills.iter().enumerate() {
        assert!(a.starts_with('#'));
        assert!(fills[i + 1..].iter().all(|b| b != a));
    }
}

#[test]
fn pins_grow_with_severity() {
    let radii = Severity::ALL.map(pin_radius);
    assert!(radii.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(pin_radius(Severity::Critical), 10.0);
}

#[test]
fn badge_class_uses_slug_modifier() {
    assert_eq!(badge_class(Severity::High), "severity-badge severity-badge--high");
}
