// SPDX-License-Identifier: MPL-2.0

//! Shutter controls module
//!
//! - Shutter button
//! - Recording indicator and timer

pub mod capture_button;
pub mod recording_ui;
