//! Shared numeric constants for the guardian crate.

// ── Animation ───────────────────────────────────────────────────

/// Interval between animation ticks, in milliseconds.
pub const DEFAULT_TICK_MS: u32 = 50;

/// Progress added to `t` on every tick (250 ticks per lap).
pub const DEFAULT_STEP: f64 = 0.004;

/// Look-ahead used when sampling the heading along a curve.
pub const DEFAULT_HEADING_DELTA: f64 = 0.005;

/// Rotation applied so a marker drawn pointing up faces its travel direction.
pub const DEFAULT_HEADING_OFFSET_DEG: f64 = 90.0;

// ── Hazards ─────────────────────────────────────────────────────

/// View-box distance under which a hazard counts as "in range" of the marker.
pub const DEFAULT_PROXIMITY_THRESHOLD: f64 = 30.0;

/// Ticks an alert stays on screen after it is raised (two seconds at 50 ms).
pub const DEFAULT_ALERT_HOLD_TICKS: u32 = 40;

/// Distances ahead are reported rounded to this many metres.
pub const DISTANCE_ROUNDING_M: f64 = 5.0;

// ── View boxes ──────────────────────────────────────────────────

/// Portrait road used by the hero animation.
pub const VERTICAL_VIEW_BOX: (f64, f64) = (300.0, 400.0);

/// Landscape map used by the interactive demo.
pub const HORIZONTAL_VIEW_BOX: (f64, f64) = (800.0, 400.0);
