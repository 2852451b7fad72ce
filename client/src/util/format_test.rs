use super::*;

// =============================================================
// Distances
// =============================================================

#[test]
fn distance_below_a_kilometre_uses_metres() {
    assert_eq!(format_distance_m(0), "0 m");
    assert_eq!(format_distance_m(315), "315 m");
    assert_eq!(format_distance_m(999), "999 m");
}

#[test]
fn distance_from_a_kilometre_uses_km() {
    assert_eq!(format_distance_m(1000), "1.0 km");
    assert_eq!(format_distance_m(1500), "1.5 km");
}

#[test]
fn km_has_one_decimal() {
    assert_eq!(format_km(4.2), "4.2 km");
    assert_eq!(format_km(5.0), "5.0 km");
}

// =============================================================
// Durations
// =============================================================

#[test]
fn eta_under_an_hour() {
    assert_eq!(format_eta(14), "14 min");
}

#[test]
fn eta_over_an_hour_pads_minutes() {
    assert_eq!(format_eta(65), "1 h 05 min");
    assert_eq!(format_eta(120), "2 h 00 min");
}

// =============================================================
// Rupees
// =============================================================

#[test]
fn inr_small_amounts_are_ungrouped() {
    assert_eq!(format_inr(0), "₹0");
    assert_eq!(format_inr(950), "₹950");
}

#[test]
fn inr_thousands() {
    assert_eq!(format_inr(5600), "₹5,600");
    assert_eq!(format_inr(99_999), "₹99,999");
}

#[test]
fn inr_lakhs_group_in_pairs() {
    assert_eq!(format_inr(125_000), "₹1,25,000");
    assert_eq!(format_inr(1_234_567), "₹12,34,567");
}

#[test]
fn age_wording() {
    assert_eq!(format_age_days(0), "Reported today");
    assert_eq!(format_age_days(1), "Reported yesterday");
    assert_eq!(format_age_days(12), "Reported 12 days ago");
}
