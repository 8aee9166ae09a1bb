// SPDX-License-Identifier: GPL-3.0-only

//! Settings handlers
//!
//! Every write goes through the shutter control so its validation and ring
//! invalidation apply, then the accepted configuration is persisted.

use crate::app::state::{AppModel, ContextPage, Message};
use crate::config::{Rgba, ShutterConfig};
use crate::errors::{ConfigError, ShutterError, ShutterResult};
use crate::shutter::ShutterControl;
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use tracing::{error, info, warn};

impl AppModel {
    pub(crate) fn handle_toggle_context_page(
        &mut self,
        context_page: ContextPage,
    ) -> Task<cosmic::Action<Message>> {
        if self.context_page == context_page {
            self.core.window.show_context = !self.core.window.show_context;
        } else {
            self.context_page = context_page;
            self.core.window.show_context = true;
        }
        Task::none()
    }

    /// Apply one setting to the shutter and save the result
    pub(crate) fn apply_setting(
        &mut self,
        change: impl FnOnce(&mut ShutterControl) -> Result<(), ConfigError>,
    ) -> Task<cosmic::Action<Message>> {
        if let Err(err) = change(&mut self.shutter) {
            warn!(error = %err, "Rejected shutter setting");
            return Task::none();
        }

        self.config = self.shutter.config().clone();
        if let Err(err) = self.save_config() {
            error!(error = %err, "Failed to save config");
        }
        Task::none()
    }

    /// Apply a palette color picked from a dropdown
    pub(crate) fn apply_palette_color(
        &mut self,
        index: usize,
        set: impl FnOnce(&mut ShutterControl, Rgba),
    ) -> Task<cosmic::Action<Message>> {
        let Some((name, color)) = Rgba::PALETTE.get(index).copied() else {
            warn!(index, "Palette index out of range");
            return Task::none();
        };
        info!(color = name, "Shutter color selected");
        self.apply_setting(|shutter| {
            set(shutter, color);
            Ok(())
        })
    }

    pub(crate) fn handle_reset_config(&mut self) -> Task<cosmic::Action<Message>> {
        info!("Resetting shutter settings to defaults");
        self.apply_setting(|shutter| shutter.set_config(ShutterConfig::default()))
    }

    /// Configuration changed outside the app (another instance, manual edit)
    pub(crate) fn handle_update_config(
        &mut self,
        config: ShutterConfig,
    ) -> Task<cosmic::Action<Message>> {
        if config == self.config {
            return Task::none();
        }

        info!("UpdateConfig received");
        match self.shutter.set_config(config) {
            Ok(()) => self.config = self.shutter.config().clone(),
            Err(err) => error!(error = %err, "Ignoring invalid configuration update"),
        }
        Task::none()
    }

    fn save_config(&self) -> ShutterResult<()> {
        let Some(handler) = self.config_handler.as_ref() else {
            return Ok(());
        };
        self.config
            .write_entry(handler)
            .map_err(|err| ShutterError::Storage(format!("{:?}", err)))
    }
}
