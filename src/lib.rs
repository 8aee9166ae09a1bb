// SPDX-License-Identifier: MPL-2.0

//! Shutter - a press-and-hold capture control for the COSMIC desktop
//!
//! This library provides a circular shutter button that reports a tap as a photo
//! intent and a long press as a timed recording, together with a small demo
//! application hosting it.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`shutter`]: The control, its state machine, rings and widget
//! - [`app`]: Demo application and settings UI
//! - [`config`]: User configuration handling
//! - [`simulation`]: Headless driver for the control
//!
//! # Example
//!
//! ```ignore
//! let mut control = ShutterControl::new(ShutterConfig::default())?;
//! let intents = control.update(ShutterInput::PointerPressed(Instant::now()));
//! ```

pub mod app;
pub mod config;
pub mod constants;
pub mod errors;
pub mod i18n;
pub mod shutter;
pub mod simulation;

// Re-export commonly used types
pub use config::{Rgba, ShutterConfig};
pub use errors::{ConfigError, ShutterError, ShutterResult};
pub use shutter::{ShutterControl, ShutterInput, ShutterIntent, ShutterListener};
