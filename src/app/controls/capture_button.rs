// SPDX-License-Identifier: MPL-2.0

//! Shutter button placement

use crate::app::state::{AppModel, Message};
use crate::shutter::shutter_button;
use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget;

impl AppModel {
    /// Build the shutter button, centred horizontally
    ///
    /// The widget sizes itself from the shutter configuration so the larger
    /// recording ring fits without shifting the layout.
    pub fn build_capture_button(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        widget::container(shutter_button(&self.shutter, Message::Shutter))
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding([spacing.space_xs, 0])
            .into()
    }
}
