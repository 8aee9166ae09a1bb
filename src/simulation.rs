// SPDX-License-Identifier: MPL-2.0

//! Headless driver for the shutter control
//!
//! Presses the shutter, holds it for a given time and releases it, delivering frames
//! and ticker ticks on the tokio runtime the way a GUI host would. Used by the
//! `simulate` command and by tests that need real timing.

use crate::constants::timing;
use crate::shutter::ticker::{TickerId, tick_stream};
use crate::shutter::{ShutterControl, ShutterInput, ShutterIntent};
use futures::StreamExt;
use futures::stream::BoxStream;
use std::time::{Duration, Instant};
use tracing::debug;

/// Tick source following the control's current ticker
type TickSource = Option<(TickerId, BoxStream<'static, TickerId>)>;

/// Hold the shutter for `hold`, then release it and wait until it settles
///
/// Returns every intent in the order it was produced. The control's listener, if
/// any, is notified as well.
pub async fn press_and_hold(control: &mut ShutterControl, hold: Duration) -> Vec<ShutterIntent> {
    let mut intents = control.update(ShutterInput::PointerPressed(Instant::now()));

    let release = tokio::time::sleep(hold);
    tokio::pin!(release);
    let mut released = false;

    let mut frames = tokio::time::interval(timing::FRAME_INTERVAL);
    let mut ticks: TickSource = None;

    loop {
        follow_ticker(control, &mut ticks);

        if released && !control.wants_frames() {
            break;
        }

        tokio::select! {
            _ = &mut release, if !released => {
                released = true;
                debug!(hold_ms = hold.as_millis() as u64, "Releasing shutter");
                intents.extend(control.update(ShutterInput::PointerReleased(Instant::now())));
            }
            now = frames.tick() => {
                intents.extend(control.update(ShutterInput::Frame(now.into_std())));
            }
            Some(id) = next_tick(&mut ticks) => {
                intents.extend(control.update(ShutterInput::Tick(id)));
            }
        }
    }

    intents
}

/// Start a tick stream for a new ticker and drop the one of a cancelled ticker
fn follow_ticker(control: &ShutterControl, ticks: &mut TickSource) {
    match (control.ticker(), ticks.as_ref()) {
        (Some((id, _)), Some((current, _))) if id == *current => {}
        (Some((id, interval)), _) => *ticks = Some((id, tick_stream(id, interval).boxed())),
        (None, _) => *ticks = None,
    }
}

async fn next_tick(ticks: &mut TickSource) -> Option<TickerId> {
    match ticks {
        Some((_, stream)) => stream.next().await,
        None => std::future::pending().await,
    }
}
