// SPDX-License-Identifier: MPL-2.0

//! Settings drawer view

use crate::app::state::{AppModel, ContextPage, Message};
use crate::config::Rgba;
use crate::constants::app_info;
use crate::fl;
use cosmic::Element;
use cosmic::app::context_drawer;
use cosmic::widget;

/// Slider bounds for lengths in logical pixels
const DIAMETER_RANGE: std::ops::RangeInclusive<f32> = 40.0..=160.0;
const WIDTH_RANGE: std::ops::RangeInclusive<f32> = 0.0..=20.0;
const GAP_RANGE: std::ops::RangeInclusive<f32> = 0.0..=30.0;
const MAX_SECONDS_RANGE: std::ops::RangeInclusive<u32> = 1..=60;

fn palette_index(color: Rgba) -> Option<usize> {
    Rgba::PALETTE.iter().position(|(_, entry)| *entry == color)
}

impl AppModel {
    /// Create the settings view for the context drawer
    pub fn settings_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let config = &self.config;

        let disk_section = widget::settings::section()
            .title(fl!("disk"))
            .add(
                widget::settings::item::builder(fl!("disk-diameter")).control(
                    widget::slider(
                        DIAMETER_RANGE,
                        config.disk_diameter,
                        Message::SetDiskDiameter,
                    )
                    .step(1.0),
                ),
            )
            .add(
                widget::settings::item::builder(fl!("color")).control(widget::dropdown(
                    &self.color_options,
                    palette_index(config.disk_color),
                    Message::SelectDiskColor,
                )),
            );

        let idle_section = widget::settings::section()
            .title(fl!("idle-ring"))
            .add(
                widget::settings::item::builder(fl!("color")).control(widget::dropdown(
                    &self.color_options,
                    palette_index(config.idle_ring_color),
                    Message::SelectIdleRingColor,
                )),
            )
            .add(
                widget::settings::item::builder(fl!("ring-width")).control(
                    widget::slider(WIDTH_RANGE, config.idle_ring_width, Message::SetIdleRingWidth)
                        .step(1.0),
                ),
            )
            .add(
                widget::settings::item::builder(fl!("ring-gap")).control(
                    widget::slider(GAP_RANGE, config.idle_ring_gap, Message::SetIdleRingGap)
                        .step(1.0),
                ),
            );

        let recording_section = widget::settings::section()
            .title(fl!("recording-ring"))
            .add(
                widget::settings::item::builder(fl!("color")).control(widget::dropdown(
                    &self.color_options,
                    palette_index(config.recording_ring_color),
                    Message::SelectRecordingRingColor,
                )),
            )
            .add(
                widget::settings::item::builder(fl!("ring-width")).control(
                    widget::slider(
                        WIDTH_RANGE,
                        config.recording_ring_width,
                        Message::SetRecordingRingWidth,
                    )
                    .step(1.0),
                ),
            )
            .add(
                widget::settings::item::builder(fl!("ring-gap")).control(
                    widget::slider(
                        GAP_RANGE,
                        config.recording_ring_gap,
                        Message::SetRecordingRingGap,
                    )
                    .step(1.0),
                ),
            )
            .add(
                widget::settings::item::builder(fl!("max-recording"))
                    .description(fl!("seconds", seconds = config.max_recording_seconds))
                    .control(widget::slider(
                        MAX_SECONDS_RANGE,
                        config.max_recording_seconds,
                        Message::SetMaxRecordingSeconds,
                    )),
            );

        let settings_column: Element<'_, Message> = widget::column()
            .spacing(spacing.space_m)
            .push(disk_section)
            .push(idle_section)
            .push(recording_section)
            .push(widget::button::standard(fl!("reset")).on_press(Message::ResetConfig))
            .push(
                widget::text(format!("{} {}", fl!("app-title"), app_info::version()))
                    .size(12)
                    .class(cosmic::theme::Text::Accent),
            )
            .into();

        context_drawer::context_drawer(
            settings_column,
            Message::ToggleContextPage(ContextPage::Settings),
        )
        .title(fl!("settings"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_index_matches_defaults() {
        assert_eq!(palette_index(Rgba::WHITE), Some(0));
        assert_eq!(palette_index(Rgba::SYSTEM_BLUE), Some(1));
        assert_eq!(palette_index(Rgba::rgb(0.1, 0.2, 0.3)), None);
    }

    #[test]
    fn test_default_lengths_fit_slider_ranges() {
        let config = crate::config::ShutterConfig::default();
        assert!(DIAMETER_RANGE.contains(&config.disk_diameter));
        assert!(WIDTH_RANGE.contains(&config.recording_ring_width));
        assert!(GAP_RANGE.contains(&config.recording_ring_gap));
        assert!(MAX_SECONDS_RANGE.contains(&config.max_recording_seconds));
    }
}
