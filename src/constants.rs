// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use std::time::Duration;

/// Default appearance of the shutter control
pub mod defaults {
    /// Diameter of the inner disk in logical pixels
    pub const DISK_DIAMETER: f32 = 80.0;

    pub const IDLE_RING_WIDTH: f32 = 5.0;

    /// Space between the disk edge and the idle ring
    pub const IDLE_RING_GAP: f32 = 5.0;

    pub const RECORDING_RING_WIDTH: f32 = 10.0;

    /// Space between the enlarged disk edge and the recording ring
    pub const RECORDING_RING_GAP: f32 = 10.0;

    /// Recording stops on its own after this many seconds
    pub const MAX_RECORDING_SECONDS: u32 = 15;
}

/// Largest accepted configuration values
pub mod limits {
    /// Upper bound for the disk diameter in logical pixels
    pub const MAX_DISK_DIAMETER: f32 = 1000.0;

    /// Upper bound for ring widths and gaps in logical pixels
    pub const MAX_RING_LENGTH: f32 = 500.0;
}

/// Timing of gestures, ticks and animations
pub mod timing {
    use super::Duration;

    /// Elapsed time is accumulated in steps of this interval
    pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

    /// Hold duration after which a press becomes a recording instead of a tap
    pub const LONG_PRESS_THRESHOLD: Duration = Duration::from_millis(500);

    /// Duration of the disk press/release feedback animation
    pub const FEEDBACK_DURATION: Duration = Duration::from_millis(300);

    /// Interval of frame instants fed to the control while something animates
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
}

/// Geometry and styling of the rendered control
pub mod ui {
    /// The recording ring is laid out around a disk this much larger than the real one
    pub const RECORDING_RING_SCALE: f32 = 1.2;

    /// Disk opacity while pressed
    pub const PRESSED_DISK_OPACITY: f32 = 0.5;

    /// Disk scale while pressed
    pub const PRESSED_DISK_SCALE: f32 = 1.2;

    /// Distance between stroke samples, as a fraction of the stroke width
    pub const STROKE_SAMPLE_SPACING: f32 = 0.35;

    /// Most dabs drawn for one stroke; long arcs space them further apart
    pub const MAX_STROKE_SAMPLES: usize = 4096;

    /// Empty space kept around the recording ring
    pub const WIDGET_PADDING: f32 = 8.0;

    /// Number of entries shown in the demo intent log
    pub const INTENT_LOG_LENGTH: usize = 8;
}

pub mod app_info {
    /// Version string baked in by the build script
    pub fn version() -> &'static str {
        env!("GIT_VERSION")
    }
}
