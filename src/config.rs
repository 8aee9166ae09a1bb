// SPDX-License-Identifier: GPL-3.0-only

use crate::constants::{defaults, limits};
use crate::errors::ConfigError;
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);
    /// Accent blue used for the recording ring
    pub const SYSTEM_BLUE: Rgba = Rgba::rgb(0.0, 0.478, 1.0);
    pub const RED: Rgba = Rgba::rgb(0.9, 0.1, 0.1);
    pub const YELLOW: Rgba = Rgba::rgb(1.0, 0.8, 0.0);

    /// Palette offered by the settings drawer
    pub const PALETTE: [(&'static str, Rgba); 4] = [
        ("White", Rgba::WHITE),
        ("Blue", Rgba::SYSTEM_BLUE),
        ("Red", Rgba::RED),
        ("Yellow", Rgba::YELLOW),
    ];

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with its alpha multiplied by `factor`
    pub fn faded(self, factor: f32) -> Self {
        Self {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..self
        }
    }
}

impl From<Rgba> for cosmic::iced::Color {
    fn from(color: Rgba) -> Self {
        cosmic::iced::Color::from_rgba(color.r, color.g, color.b, color.a)
    }
}

/// Appearance and limits of the shutter control
#[derive(Debug, Clone, CosmicConfigEntry, PartialEq, Serialize, Deserialize)]
#[version = 1]
pub struct ShutterConfig {
    /// Diameter of the inner disk
    pub disk_diameter: f32,
    /// Fill color of the inner disk
    pub disk_color: Rgba,
    pub idle_ring_color: Rgba,
    pub idle_ring_width: f32,
    /// Space between disk and idle ring
    pub idle_ring_gap: f32,
    pub recording_ring_color: Rgba,
    pub recording_ring_width: f32,
    /// Space between the enlarged disk and the recording ring
    pub recording_ring_gap: f32,
    /// Length of the progress sweep; recording ends on its own afterwards
    pub max_recording_seconds: u32,
}

impl Default for ShutterConfig {
    fn default() -> Self {
        Self {
            disk_diameter: defaults::DISK_DIAMETER,
            disk_color: Rgba::WHITE,
            idle_ring_color: Rgba::WHITE,
            idle_ring_width: defaults::IDLE_RING_WIDTH,
            idle_ring_gap: defaults::IDLE_RING_GAP,
            recording_ring_color: Rgba::SYSTEM_BLUE,
            recording_ring_width: defaults::RECORDING_RING_WIDTH,
            recording_ring_gap: defaults::RECORDING_RING_GAP,
            max_recording_seconds: defaults::MAX_RECORDING_SECONDS,
        }
    }
}

impl ShutterConfig {
    /// Check every value, reporting the first one that is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_diameter(self.disk_diameter)?;
        validate_length("idle ring width", self.idle_ring_width)?;
        validate_length("idle ring gap", self.idle_ring_gap)?;
        validate_length("recording ring width", self.recording_ring_width)?;
        validate_length("recording ring gap", self.recording_ring_gap)?;
        validate_max_seconds(self.max_recording_seconds)
    }
}

pub(crate) fn validate_diameter(value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite("disk diameter"));
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositiveDiameter(value));
    }
    if value > limits::MAX_DISK_DIAMETER {
        return Err(ConfigError::TooLarge(
            "disk diameter",
            value,
            limits::MAX_DISK_DIAMETER,
        ));
    }
    Ok(())
}

/// Widths and gaps: finite, not negative and within the ring limit
pub(crate) fn validate_length(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite(field));
    }
    if value < 0.0 {
        return Err(ConfigError::Negative(field, value));
    }
    if value > limits::MAX_RING_LENGTH {
        return Err(ConfigError::TooLarge(field, value, limits::MAX_RING_LENGTH));
    }
    Ok(())
}

pub(crate) fn validate_max_seconds(value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::ZeroMaxDuration);
    }
    Ok(())
}
