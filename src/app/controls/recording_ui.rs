// SPDX-License-Identifier: MPL-2.0

//! Recording indicator and intent log

use crate::app::state::{AppModel, Message};
use crate::fl;
use crate::shutter::ShutterIntent;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length};
use cosmic::widget;

/// Format seconds as `MM:SS.cc`
pub fn format_elapsed(seconds: f64) -> String {
    let centis = (seconds * 100.0).round() as u64;
    format!(
        "{:02}:{:02}.{:02}",
        centis / 6000,
        (centis / 100) % 60,
        centis % 100
    )
}

impl AppModel {
    /// Build the recording indicator and timer widget
    ///
    /// Shows a red dot and the ticker's elapsed time while recording.
    /// Returns None when not recording.
    pub fn build_recording_indicator<'a>(&self) -> Option<Element<'a, Message>> {
        if !self.shutter.is_recording() {
            return None;
        }

        let spacing = cosmic::theme::spacing();

        let red_dot =
            widget::container(widget::Space::new(Length::Fixed(12.0), Length::Fixed(12.0))).style(
                |_theme| widget::container::Style {
                    background: Some(Background::Color(Color::from_rgb(1.0, 0.0, 0.0))),
                    border: cosmic::iced::Border {
                        radius: [6.0; 4].into(),
                        ..Default::default()
                    },
                    ..Default::default()
                },
            );

        let row = widget::row()
            .align_y(Alignment::Center)
            .spacing(spacing.space_xxs)
            .push(red_dot)
            .push(widget::text(fl!("recording")).size(14))
            .push(widget::text(format_elapsed(self.shutter.elapsed_seconds())).size(14));

        Some(row.into())
    }

    /// Build the list of recent intents, newest first
    pub fn build_intent_log(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let header = widget::row()
            .align_y(Alignment::Center)
            .push(widget::text(fl!("intent-log")).size(16).font(cosmic::font::bold()))
            .push(widget::horizontal_space().width(Length::Fill))
            .push(
                widget::button::icon(widget::icon::from_name("edit-clear-symbolic"))
                    .on_press(Message::ClearLog),
            );

        let entries = self.intent_log.iter().fold(
            widget::column().spacing(spacing.space_xxs),
            |column, entry| {
                let label = match entry.intent {
                    ShutterIntent::Tapped => fl!("intent-tapped"),
                    ShutterIntent::RecordingStarted => fl!("intent-recording-started"),
                    ShutterIntent::RecordingEnded { duration_secs } => fl!(
                        "intent-recording-ended",
                        seconds = format!("{:.2}", duration_secs)
                    ),
                };
                column.push(
                    widget::row()
                        .spacing(spacing.space_xs)
                        .push(
                            widget::text(entry.at.format("%H:%M:%S").to_string())
                                .size(12)
                                .class(cosmic::theme::Text::Accent),
                        )
                        .push(widget::text(label).size(12)),
                )
            },
        );

        widget::container(
            widget::column()
                .spacing(spacing.space_xs)
                .push(header)
                .push(entries),
        )
        .padding(spacing.space_s)
        .width(Length::Fixed(320.0))
        .class(cosmic::theme::Container::Card)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0.0), "00:00.00");
        assert_eq!(format_elapsed(2.01), "00:02.01");
        assert_eq!(format_elapsed(75.5), "01:15.50");
    }
}
