// SPDX-License-Identifier: MPL-2.0

//! Integration tests for constants module

use shutter::constants::{timing, ui};

#[test]
fn test_tick_interval_is_ten_milliseconds() {
    assert_eq!(timing::TICK_INTERVAL.as_millis(), 10);
}

#[test]
fn test_long_press_outlasts_feedback() {
    // The disk animation must finish within the long-press window
    assert!(timing::FEEDBACK_DURATION < timing::LONG_PRESS_THRESHOLD);
}

#[test]
fn test_frames_are_finer_than_feedback() {
    assert!(timing::FRAME_INTERVAL < timing::FEEDBACK_DURATION);
}

#[test]
fn test_pressed_disk_values() {
    assert_eq!(ui::PRESSED_DISK_OPACITY, 0.5);
    assert_eq!(ui::PRESSED_DISK_SCALE, 1.2);
    assert_eq!(ui::RECORDING_RING_SCALE, 1.2);
}
