// SPDX-License-Identifier: GPL-3.0-only

//! Shutter input handlers
//!
//! The demo does not capture media; it records each intent in the on-screen log
//! where a camera application would start a capture.

use crate::app::state::{AppModel, LoggedIntent, Message};
use crate::constants::ui;
use crate::shutter::{ShutterInput, ShutterIntent};
use cosmic::Task;
use tracing::info;

impl AppModel {
    pub(crate) fn handle_shutter_input(
        &mut self,
        input: ShutterInput,
    ) -> Task<cosmic::Action<Message>> {
        for intent in self.shutter.update(input) {
            self.log_intent(intent);
        }
        Task::none()
    }

    pub(crate) fn handle_clear_log(&mut self) -> Task<cosmic::Action<Message>> {
        self.intent_log.clear();
        Task::none()
    }

    fn log_intent(&mut self, intent: ShutterIntent) {
        match intent {
            ShutterIntent::Tapped => info!("Photo requested"),
            ShutterIntent::RecordingStarted => info!("Video recording requested"),
            ShutterIntent::RecordingEnded { duration_secs } => {
                info!(duration_secs, "Video recording finished")
            }
        }

        self.intent_log.push_front(LoggedIntent {
            at: chrono::Local::now(),
            intent,
        });
        self.intent_log.truncate(ui::INTENT_LOG_LENGTH);
    }
}
