// SPDX-License-Identifier: GPL-3.0-only

//! Settings UI module
//!
//! Settings drawer for every shutter configuration property.

pub mod view;
