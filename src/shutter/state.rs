// SPDX-License-Identifier: MPL-2.0

//! Recording state machine

use super::animation::ProgressAnimation;
use super::geometry::RingKind;
use super::ticker::{Ticker, TickerId};
use std::time::{Duration, Instant};

/// Why a recording left the Recording state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The hold was released
    Released,
    /// The progress sweep reached its end
    ProgressComplete,
}

/// Recording state machine
///
/// Simple two-state design: either recording or not. The Recording state owns the
/// elapsed-time ticker and the progress sweep, so leaving it cancels both.
#[derive(Debug, Default)]
pub enum RecordingState {
    /// Not recording
    #[default]
    Idle,
    /// Press-and-hold in progress
    Recording {
        /// Accumulates elapsed time
        ticker: Ticker,
        /// Fill of the recording ring
        progress: ProgressAnimation,
    },
}

impl RecordingState {
    /// Enter Recording with a fresh ticker and a sweep over `max_duration`
    pub fn start(at: Instant, tick_interval: Duration, max_duration: Duration) -> Self {
        RecordingState::Recording {
            ticker: Ticker::start(tick_interval),
            progress: ProgressAnimation::start(at, max_duration),
        }
    }

    /// Leave Recording, returning the seconds accumulated by the ticker
    ///
    /// Returns `None` when already Idle. The ticker is dropped, and thereby cancelled,
    /// exactly once.
    pub fn stop(&mut self) -> Option<f64> {
        match std::mem::take(self) {
            RecordingState::Idle => None,
            RecordingState::Recording { ticker, .. } => Some(ticker.elapsed_seconds()),
        }
    }

    /// Check if currently recording
    pub fn is_recording(&self) -> bool {
        matches!(self, RecordingState::Recording { .. })
    }

    /// Ring that belongs on screen in this state
    pub fn attached_ring(&self) -> RingKind {
        match self {
            RecordingState::Idle => RingKind::Idle,
            RecordingState::Recording { .. } => RingKind::Recording,
        }
    }

    /// Seconds accumulated by the ticker, 0 when Idle
    pub fn elapsed_seconds(&self) -> f64 {
        match self {
            RecordingState::Idle => 0.0,
            RecordingState::Recording { ticker, .. } => ticker.elapsed_seconds(),
        }
    }

    pub fn ticker(&self) -> Option<&Ticker> {
        match self {
            RecordingState::Idle => None,
            RecordingState::Recording { ticker, .. } => Some(ticker),
        }
    }

    pub fn ticker_id(&self) -> Option<TickerId> {
        self.ticker().map(Ticker::id)
    }

    /// Stroke end of the recording ring, 0 when Idle
    pub fn progress(&self) -> f32 {
        match self {
            RecordingState::Idle => 0.0,
            RecordingState::Recording { progress, .. } => progress.progress(),
        }
    }

    /// Count a tick; `false` when Idle or the tick is stale
    pub fn tick(&mut self, id: TickerId) -> bool {
        match self {
            RecordingState::Idle => false,
            RecordingState::Recording { ticker, .. } => ticker.tick(id),
        }
    }

    /// Move the sweep to `now`; returns `true` when it just reached its end
    pub fn advance(&mut self, now: Instant) -> bool {
        match self {
            RecordingState::Idle => false,
            RecordingState::Recording { progress, .. } => progress.advance(now),
        }
    }
}
