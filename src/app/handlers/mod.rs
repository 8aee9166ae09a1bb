// SPDX-License-Identifier: GPL-3.0-only

//! Message handlers organized by functional domain
//!
//! - `shutter`: shutter inputs and the intent log
//! - `settings`: shutter appearance settings, context drawer, config sync

mod settings;
mod shutter;
