//! Severity presentation: pin colours, sizes and badge classes.

#[cfg(test)]
#[path = "severity_test.rs"]
mod severity_test;

use guardian::Severity;

pub fn severity_fill(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "#10B981",
        Severity::Medium => "#F59E0B",
        Severity::High => "#F97316",
        Severity::Critical => "#EF4444",
    }
}

/// Pin radius in view-box units; worse hazards draw larger.
pub fn pin_radius(severity: Severity) -> f64 {
    match severity {
        Severity::Low => 6.0,
        Severity::Medium => 7.0,
        Severity::High => 8.0,
        Severity::Critical => 10.0,
    }
}

pub fn badge_class(severity: Severity) -> String {
    format!("severity-badge severity-badge--{}", severity.slug())
}
