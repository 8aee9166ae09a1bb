// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for the shutter control
//!
//! This module provides command-line functionality for:
//! - Simulating a press on the shutter without a window
//! - Printing the default configuration

use shutter::config::ShutterConfig;
use shutter::errors::ShutterResult;
use shutter::simulation;
use shutter::{ShutterControl, ShutterIntent, ShutterListener};
use std::time::Duration;

/// Prints intents as the control reports them
struct ConsoleListener;

impl ShutterListener for ConsoleListener {
    fn recording_started(&mut self, control: &ShutterControl) {
        println!(
            "Recording started (up to {}s)",
            control.config().max_recording_seconds
        );
    }

    fn recording_ended(&mut self, _control: &ShutterControl, duration_secs: f64) {
        println!("Recording ended after {:.2}s", duration_secs);
    }

    fn tapped(&mut self, _control: &ShutterControl) {
        println!("Tapped");
    }
}

/// Press the shutter, hold it for `hold_ms` and release it
pub fn simulate(
    hold_ms: u64,
    max_seconds: Option<u32>,
    diameter: Option<f32>,
) -> ShutterResult<()> {
    let mut config = ShutterConfig::default();
    if let Some(seconds) = max_seconds {
        config.max_recording_seconds = seconds;
    }
    if let Some(diameter) = diameter {
        config.disk_diameter = diameter;
    }

    let mut control = ShutterControl::new(config)?.with_listener(ConsoleListener);
    println!(
        "Holding shutter for {}ms (diameter {}, max {}s)",
        hold_ms,
        control.config().disk_diameter,
        control.config().max_recording_seconds
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let intents = runtime.block_on(simulation::press_and_hold(
        &mut control,
        Duration::from_millis(hold_ms),
    ));

    let recordings = intents
        .iter()
        .filter(|intent| matches!(intent, ShutterIntent::RecordingEnded { .. }))
        .count();
    println!();
    println!("{} intent(s), {} recording(s)", intents.len(), recordings);

    Ok(())
}

/// Print the default configuration as JSON
pub fn print_default_config() -> ShutterResult<()> {
    let json = serde_json::to_string_pretty(&ShutterConfig::default())?;
    println!("{}", json);
    Ok(())
}
