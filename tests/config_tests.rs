// SPDX-License-Identifier: MPL-2.0

//! Integration tests for configuration module

use shutter::{ConfigError, Rgba, ShutterConfig};

#[test]
fn test_config_default() {
    let config = ShutterConfig::default();

    assert_eq!(config.disk_diameter, 80.0);
    assert_eq!(config.disk_color, Rgba::WHITE);
    assert_eq!(config.idle_ring_color, Rgba::WHITE);
    assert_eq!(config.idle_ring_width, 5.0);
    assert_eq!(config.idle_ring_gap, 5.0);
    assert_eq!(config.recording_ring_color, Rgba::SYSTEM_BLUE);
    assert_eq!(config.recording_ring_width, 10.0);
    assert_eq!(config.recording_ring_gap, 10.0);
    assert_eq!(config.max_recording_seconds, 15);
}

#[test]
fn test_config_validation() {
    assert!(ShutterConfig::default().validate().is_ok());

    let negative_gap = ShutterConfig {
        idle_ring_gap: -1.0,
        ..Default::default()
    };
    assert!(matches!(
        negative_gap.validate(),
        Err(ConfigError::Negative(_, _))
    ));

    let no_duration = ShutterConfig {
        max_recording_seconds: 0,
        ..Default::default()
    };
    assert_eq!(no_duration.validate(), Err(ConfigError::ZeroMaxDuration));

    // Zero widths and gaps are allowed
    let flat = ShutterConfig {
        idle_ring_width: 0.0,
        recording_ring_gap: 0.0,
        ..Default::default()
    };
    assert!(flat.validate().is_ok());
}

#[test]
fn test_config_json_roundtrip_keeps_colors() {
    let config = ShutterConfig {
        disk_color: Rgba::RED,
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let parsed: ShutterConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}
