// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::config::ShutterConfig;
use crate::shutter::{ShutterControl, ShutterInput, ShutterIntent};
use chrono::{DateTime, Local};
use cosmic::cosmic_config;
use std::collections::VecDeque;

/// One intent as shown in the event log
#[derive(Debug, Clone)]
pub struct LoggedIntent {
    /// Wall-clock time the intent was emitted
    pub at: DateTime<Local>,
    pub intent: ShutterIntent,
}

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    pub context_page: ContextPage,
    /// Configuration data that persists between application runs.
    pub config: ShutterConfig,
    /// Configuration handler for saving settings
    pub config_handler: Option<cosmic_config::Config>,
    /// The shutter being demonstrated
    pub shutter: ShutterControl,
    /// Most recent intents, newest first
    pub intent_log: VecDeque<LoggedIntent>,
    /// Names of the color palette for the dropdowns
    pub color_options: Vec<String>,
}

/// The context page to display in the context drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    Settings,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// Input for the shutter control (pointer, frame, tick, resize)
    Shutter(ShutterInput),
    /// Toggle context drawer page
    ToggleContextPage(ContextPage),
    /// Clear the intent log
    ClearLog,

    // ===== Shutter settings =====
    SetDiskDiameter(f32),
    SelectDiskColor(usize),
    SelectIdleRingColor(usize),
    SetIdleRingWidth(f32),
    SetIdleRingGap(f32),
    SelectRecordingRingColor(usize),
    SetRecordingRingWidth(f32),
    SetRecordingRingGap(f32),
    SetMaxRecordingSeconds(u32),
    /// Restore every setting to its default
    ResetConfig,

    /// Configuration changed on disk
    UpdateConfig(ShutterConfig),
}
