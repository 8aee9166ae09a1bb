// SPDX-License-Identifier: MPL-2.0

//! Demo application hosting the shutter control
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, ContextPage)
//! - `controls`: Shutter button and recording indicator
//! - `settings`: Settings drawer UI
//! - `handlers`: Message handlers grouped by domain
//! - `view`: Main view rendering
//! - `update`: Message dispatch

mod controls;
mod handlers;
mod settings;
mod state;
mod update;
mod view;

use crate::config::{Rgba, ShutterConfig};
use crate::constants::timing;
use crate::shutter::ticker::tick_stream;
use crate::shutter::{ShutterControl, ShutterInput};
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::widget;
use cosmic::{Element, Task};
use futures::StreamExt;
pub use state::{AppModel, ContextPage, LoggedIntent, Message};
use std::collections::VecDeque;
use tracing::{error, info};

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.cosmic_utils.shutter";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Load configuration
        let (config_handler, config) =
            match cosmic_config::Config::new(Self::APP_ID, ShutterConfig::VERSION) {
                Ok(handler) => {
                    let config = match ShutterConfig::get_entry(&handler) {
                        Ok(config) => config,
                        Err((errors, config)) => {
                            error!(?errors, "Errors loading config");
                            config
                        }
                    };
                    (Some(handler), config)
                }
                Err(err) => {
                    error!(%err, "Failed to create config handler");
                    (None, ShutterConfig::default())
                }
            };

        let shutter = match ShutterControl::new(config.clone()) {
            Ok(shutter) => shutter,
            Err(err) => {
                error!(%err, "Stored shutter configuration is invalid, using defaults");
                ShutterControl::default()
            }
        };
        info!(config = ?shutter.config(), "Shutter ready");

        let app = AppModel {
            core,
            context_page: ContextPage::default(),
            config: shutter.config().clone(),
            config_handler,
            shutter,
            intent_log: VecDeque::new(),
            color_options: Rgba::PALETTE
                .iter()
                .map(|(name, _)| name.to_string())
                .collect(),
        };

        (app, Task::none())
    }

    /// Elements to pack at the end of the header bar.
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            widget::button::icon(widget::icon::from_name("preferences-system-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::Settings))
                .into(),
        ]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::Settings => self.settings_view(),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Register subscriptions for this application.
    ///
    /// Frames are only requested while the shutter animates, and the tick source
    /// exists only while a recording owns a ticker. A new ticker id replaces the
    /// subscription, which tears down the previous tick stream.
    fn subscription(&self) -> Subscription<Self::Message> {
        let config_sub = self
            .core()
            .watch_config::<ShutterConfig>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        let frame_sub = if self.shutter.wants_frames() {
            cosmic::iced::time::every(timing::FRAME_INTERVAL)
                .map(|now| Message::Shutter(ShutterInput::Frame(now)))
        } else {
            Subscription::none()
        };

        let ticker_sub = match self.shutter.ticker() {
            Some((id, interval)) => Subscription::run_with_id(
                ("shutter-ticker", id),
                tick_stream(id, interval).map(|id| Message::Shutter(ShutterInput::Tick(id))),
            ),
            None => Subscription::none(),
        };

        Subscription::batch([config_sub, frame_sub, ticker_sub])
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}
