// SPDX-License-Identifier: MPL-2.0

//! Elapsed-time ticker
//!
//! A [`Ticker`] is owned by an active recording and counts ticks delivered by the
//! host. The host produces those ticks with [`tick_stream`], keyed by the ticker's
//! [`TickerId`] so that a restarted ticker never receives ticks meant for an older one.

use futures::Stream;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, trace};

static NEXT_TICKER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one started ticker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickerId(u64);

impl fmt::Display for TickerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ticker-{}", self.0)
    }
}

/// Handle to a running ticker
///
/// Dropping the handle cancels the ticker: its id is no longer accepted and the
/// host's tick source for it is torn down.
#[derive(Debug)]
pub struct Ticker {
    id: TickerId,
    interval: Duration,
    ticks: u64,
}

impl Ticker {
    /// Start a new ticker with zero accumulated ticks
    pub fn start(interval: Duration) -> Self {
        let id = TickerId(NEXT_TICKER_ID.fetch_add(1, Ordering::Relaxed));
        debug!(ticker = %id, interval_ms = interval.as_millis() as u64, "Ticker started");
        Self {
            id,
            interval,
            ticks: 0,
        }
    }

    pub fn id(&self) -> TickerId {
        self.id
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Count one tick
    ///
    /// Returns `false` and counts nothing when the tick was produced for another ticker.
    pub fn tick(&mut self, id: TickerId) -> bool {
        if id != self.id {
            trace!(ticker = %self.id, stale = %id, "Ignoring tick from a cancelled ticker");
            return false;
        }
        self.ticks += 1;
        true
    }

    /// Time accumulated so far
    pub fn elapsed(&self) -> Duration {
        u32::try_from(self.ticks)
            .ok()
            .and_then(|ticks| self.interval.checked_mul(ticks))
            .unwrap_or(Duration::MAX)
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        debug!(ticker = %self.id, ticks = self.ticks, "Ticker cancelled");
    }
}

/// Endless stream yielding `id` once per `interval`, starting one interval from now
///
/// Missed ticks are delivered in a burst so the count keeps up with wall-clock time.
/// The stream stops when its consumer drops it.
pub fn tick_stream(id: TickerId, interval: Duration) -> impl Stream<Item = TickerId> {
    async_stream::stream! {
        let start = tokio::time::Instant::now() + interval;
        let mut timer = tokio::time::interval_at(start, interval);
        loop {
            timer.tick().await;
            yield id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[test]
    fn test_ticker_ids_are_unique() {
        let first = Ticker::start(Duration::from_millis(10));
        let second = Ticker::start(Duration::from_millis(10));
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_elapsed_counts_own_ticks_only() {
        let old = Ticker::start(Duration::from_millis(10));
        let mut ticker = Ticker::start(Duration::from_millis(10));

        for _ in 0..25 {
            assert!(ticker.tick(ticker.id()));
        }
        assert!(!ticker.tick(old.id()));

        assert_eq!(ticker.ticks(), 25);
        assert_eq!(ticker.elapsed(), Duration::from_millis(250));
        assert!((ticker.elapsed_seconds() - 0.25).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_tick_stream_yields_its_id() {
        let ticker = Ticker::start(Duration::from_millis(1));
        let ticks: Vec<TickerId> = tick_stream(ticker.id(), ticker.interval())
            .take(3)
            .collect()
            .await;
        assert_eq!(ticks, vec![ticker.id(); 3]);
    }
}
