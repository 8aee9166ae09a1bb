// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! The main `update()` function routes each message to a handler in the
//! `handlers` submodules.

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== Shutter =====
            Message::Shutter(input) => self.handle_shutter_input(input),
            Message::ClearLog => self.handle_clear_log(),

            // ===== UI Navigation =====
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),

            // ===== Settings =====
            Message::SetDiskDiameter(diameter) => {
                self.apply_setting(|shutter| shutter.set_disk_diameter(diameter))
            }
            Message::SelectDiskColor(index) => {
                self.apply_palette_color(index, |shutter, color| shutter.set_disk_color(color))
            }
            Message::SelectIdleRingColor(index) => self
                .apply_palette_color(index, |shutter, color| shutter.set_idle_ring_color(color)),
            Message::SetIdleRingWidth(width) => {
                self.apply_setting(|shutter| shutter.set_idle_ring_width(width))
            }
            Message::SetIdleRingGap(gap) => {
                self.apply_setting(|shutter| shutter.set_idle_ring_gap(gap))
            }
            Message::SelectRecordingRingColor(index) => {
                self.apply_palette_color(index, |shutter, color| {
                    shutter.set_recording_ring_color(color)
                })
            }
            Message::SetRecordingRingWidth(width) => {
                self.apply_setting(|shutter| shutter.set_recording_ring_width(width))
            }
            Message::SetRecordingRingGap(gap) => {
                self.apply_setting(|shutter| shutter.set_recording_ring_gap(gap))
            }
            Message::SetMaxRecordingSeconds(seconds) => {
                self.apply_setting(|shutter| shutter.set_max_recording_seconds(seconds))
            }
            Message::ResetConfig => self.handle_reset_config(),
            Message::UpdateConfig(config) => self.handle_update_config(config),
        }
    }
}
