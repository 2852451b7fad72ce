#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = DemoConfig::default().validate().unwrap();
    assert_eq!(cfg.tick_ms, 50);
    assert_eq!(cfg.step, 0.004);
    assert_eq!(cfg.proximity_threshold, 30.0);
    assert!(cfg.heading_clamp.is_none());
}

#[test]
fn validate_rejects_zero_tick() {
    let cfg = DemoConfig { tick_ms: 0, ..DemoConfig::default() };
    assert!(matches!(cfg.validate(), Err(GuardianError::InvalidConfig(_))));
}

#[test]
fn validate_rejects_zero_alert_hold() {
    let cfg = DemoConfig { alert_hold_ticks: 0, ..DemoConfig::default() };
    assert!(matches!(cfg.validate(), Err(GuardianError::InvalidConfig(_))));
    let cfg = DemoConfig { alert_hold_ticks: 1, ..DemoConfig::default() };
    assert!(cfg.validate().is_ok());
}

#[test]
fn validate_rejects_step_outside_unit_interval() {
    for step in [0.0, -0.1, 1.0, 2.5, f64::NAN] {
        let cfg = DemoConfig { step, ..DemoConfig::default() };
        assert!(cfg.validate().is_err(), "step {step} should be rejected");
    }
}

#[test]
fn validate_rejects_inverted_clamp() {
    let cfg = DemoConfig {
        heading_clamp: Some(AngleClamp { min_deg: 40.0, max_deg: -40.0 }),
        ..DemoConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("heading_clamp"));
}

#[test]
fn validate_rejects_non_positive_threshold() {
    let cfg = DemoConfig { proximity_threshold: 0.0, ..DemoConfig::default() };
    assert!(cfg.validate().is_err());
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg: DemoConfig = serde_json::from_str(r#"{"step": 0.01, "heading_clamp": {"min_deg": -45.0, "max_deg": 45.0}}"#)
        .unwrap();
    assert_eq!(cfg.step, 0.01);
    assert_eq!(cfg.tick_ms, 50);
    assert_eq!(cfg.heading_clamp, Some(AngleClamp { min_deg: -45.0, max_deg: 45.0 }));
    assert!(cfg.validate().is_ok());
}

#[test]
fn heading_params_mirror_config() {
    let cfg = DemoConfig { heading_delta: 0.01, heading_offset_deg: 45.0, ..DemoConfig::default() };
    let params = cfg.heading_params();
    assert_eq!(params.delta, 0.01);
    assert_eq!(params.offset_deg, 45.0);
}
