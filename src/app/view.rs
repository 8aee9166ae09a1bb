// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! Stacks the hint, the recording indicator, the shutter button and the intent log
//! in one centred column.

use crate::app::state::{AppModel, Message};
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

impl AppModel {
    /// Build the main application view
    pub fn view(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        // Keep the row height stable so the button does not jump when recording starts
        let status: Element<'_, Message> = match self.build_recording_indicator() {
            Some(indicator) => indicator,
            None => widget::text(fl!("hold-to-record")).size(14).into(),
        };

        let content = widget::column()
            .align_x(Alignment::Center)
            .spacing(spacing.space_m)
            .push(widget::container(status).height(Length::Fixed(24.0)))
            .push(self.build_capture_button())
            .push(self.build_intent_log());

        widget::container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}
