// SPDX-License-Identifier: MPL-2.0

//! Tap versus press-and-hold recognition
//!
//! Turns raw pointer presses and releases into [`Gesture`]s. A release before the
//! long-press threshold is a tap; holding past the threshold begins a press, and
//! the release that follows ends it without also producing a tap.

use std::time::{Duration, Instant};
use tracing::trace;

/// Recognized gesture fed into the shutter state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Quick press and release
    Tap,
    /// The hold crossed the long-press threshold at this instant
    PressBegan(Instant),
    /// An activated hold was released or lost at this instant
    PressEnded(Instant),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Released,
    /// Pointer is down but the hold is still shorter than the threshold
    Pending { pressed_at: Instant },
    /// Hold passed the threshold and `PressBegan` has been emitted
    Active,
}

/// Long-press recognizer with tap fallback
#[derive(Debug, Clone)]
pub struct PressRecognizer {
    threshold: Duration,
    phase: Phase,
}

impl PressRecognizer {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            phase: Phase::Released,
        }
    }

    /// Whether a pointer is currently held down on the control
    pub fn is_tracking(&self) -> bool {
        self.phase != Phase::Released
    }

    pub fn pointer_pressed(&mut self, at: Instant) {
        if self.phase != Phase::Released {
            trace!("Ignoring press while another press is tracked");
            return;
        }
        self.phase = Phase::Pending { pressed_at: at };
    }

    /// Check whether a pending press has been held long enough to begin
    pub fn poll(&mut self, now: Instant) -> Option<Gesture> {
        let Phase::Pending { pressed_at } = self.phase else {
            return None;
        };

        let began_at = pressed_at + self.threshold;
        if now < began_at {
            return None;
        }

        self.phase = Phase::Active;
        Some(Gesture::PressBegan(began_at))
    }

    /// Finish the tracked press
    ///
    /// Callers poll with the same instant first so a hold that crossed the threshold
    /// between frames still begins before it ends.
    pub fn pointer_released(&mut self, at: Instant) -> Option<Gesture> {
        match std::mem::take(&mut self.phase) {
            Phase::Released => None,
            Phase::Pending { .. } => Some(Gesture::Tap),
            Phase::Active => Some(Gesture::PressEnded(at)),
        }
    }

    /// Pointer left without a regular release (touch lost, window unfocused)
    ///
    /// An active hold still ends; a pending one is dropped without a tap.
    pub fn pointer_cancelled(&mut self, at: Instant) -> Option<Gesture> {
        match std::mem::take(&mut self.phase) {
            Phase::Active => Some(Gesture::PressEnded(at)),
            Phase::Released | Phase::Pending { .. } => None,
        }
    }
}
