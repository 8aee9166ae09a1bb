// SPDX-License-Identifier: MPL-2.0

//! Press-and-hold shutter control
//!
//! [`ShutterControl`] interprets taps and long presses on a circular shutter and
//! turns them into intents for its host:
//!
//! - a tap asks for a photo
//! - a long press starts a recording, shown by a ring that fills clockwise over
//!   the maximum recording length
//! - releasing the press, or the ring filling completely, ends the recording and
//!   reports how long it lasted
//!
//! The control never captures anything itself. It is driven entirely by
//! [`ShutterInput`]s (pointer events, frame instants and ticker ticks) which makes
//! every transition reproducible with simulated time.
//!
//! # Modules
//!
//! - `state`: the Idle/Recording state machine
//! - `gesture`: tap versus long-press recognition
//! - `ticker`: elapsed-time ticker and its async tick source
//! - `animation`: progress sweep and disk press feedback
//! - `geometry`: ring shapes and their dirty-tracked cache
//! - `widget`: libcosmic widget drawing the control

pub mod animation;
pub mod geometry;
pub mod gesture;
pub mod state;
pub mod ticker;
pub mod widget;

use crate::config::{self, Rgba, ShutterConfig};
use crate::constants::{timing, ui};
use crate::errors::ConfigError;
use animation::DiskFeedback;
use cosmic::iced::{Point, Size};
use geometry::{RingKind, RingShape, RingSlot};
use gesture::{Gesture, PressRecognizer};
use state::{ExitReason, RecordingState};
use std::fmt;
use std::time::{Duration, Instant};
use ticker::TickerId;
use tracing::{debug, info, trace, warn};

pub use widget::{ShutterButton, shutter_button};

/// Everything that can happen to the control
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShutterInput {
    /// Pointer or finger went down on the control
    PointerPressed(Instant),
    /// The pointer that went down on the control was released
    PointerReleased(Instant),
    /// The pointer was lost without a release
    PointerCancelled(Instant),
    /// Animation frame at this instant
    Frame(Instant),
    /// One tick of the elapsed-time ticker
    Tick(TickerId),
    /// Layout gave the control new bounds
    Resized(Size),
}

/// Notification for the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShutterIntent {
    /// Quick tap, typically a photo
    Tapped,
    /// A long press started recording
    RecordingStarted,
    /// Recording stopped after the given number of seconds
    RecordingEnded { duration_secs: f64 },
}

/// Receives the control's intents as they happen
///
/// Every method defaults to doing nothing, so listeners implement only what they
/// care about. Message-driven hosts can ignore listeners and use the intents
/// returned by [`ShutterControl::update`] instead.
pub trait ShutterListener {
    fn recording_started(&mut self, _control: &ShutterControl) {}

    fn recording_ended(&mut self, _control: &ShutterControl, _duration_secs: f64) {}

    fn tapped(&mut self, _control: &ShutterControl) {}
}

/// Circular shutter with tap and press-and-hold recording
pub struct ShutterControl {
    config: ShutterConfig,
    state: RecordingState,
    recognizer: PressRecognizer,
    disk: DiskFeedback,
    bounds: Size,
    idle_ring: RingSlot,
    recording_ring: RingSlot,
    tick_interval: Duration,
    listener: Option<Box<dyn ShutterListener>>,
}

impl fmt::Debug for ShutterControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShutterControl")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("bounds", &self.bounds)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for ShutterControl {
    fn default() -> Self {
        Self::from_valid_config(ShutterConfig::default())
    }
}

impl ShutterControl {
    /// Create an idle control, rejecting out-of-range configuration
    pub fn new(config: ShutterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ShutterConfig) -> Self {
        let side = preferred_side(&config);
        let mut control = Self {
            config,
            state: RecordingState::Idle,
            recognizer: PressRecognizer::new(timing::LONG_PRESS_THRESHOLD),
            disk: DiskFeedback::default(),
            bounds: Size::new(side, side),
            idle_ring: RingSlot::new(RingKind::Idle),
            recording_ring: RingSlot::new(RingKind::Recording),
            tick_interval: timing::TICK_INTERVAL,
            listener: None,
        };
        control.attach(RingKind::Idle);
        control
    }

    pub fn with_listener(mut self, listener: impl ShutterListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    // ===== State =====

    pub fn config(&self) -> &ShutterConfig {
        &self.config
    }

    pub fn state(&self) -> &RecordingState {
        &self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state.is_recording()
    }

    /// Seconds recorded so far, 0 while idle
    pub fn elapsed_seconds(&self) -> f64 {
        self.state.elapsed_seconds()
    }

    /// Fill of the recording ring, `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        self.state.progress()
    }

    /// Id and interval of the running ticker, for the host's tick source
    pub fn ticker(&self) -> Option<(TickerId, Duration)> {
        self.state
            .ticker()
            .map(|ticker| (ticker.id(), ticker.interval()))
    }

    pub fn ticker_id(&self) -> Option<TickerId> {
        self.state.ticker_id()
    }

    /// Whether the host should keep delivering [`ShutterInput::Frame`]s
    pub fn wants_frames(&self) -> bool {
        self.state.is_recording() || self.recognizer.is_tracking() || self.disk.is_animating()
    }

    pub fn disk(&self) -> &DiskFeedback {
        &self.disk
    }

    pub fn attached_ring(&self) -> RingKind {
        self.state.attached_ring()
    }

    /// Shape of the ring currently on screen
    pub fn attached_shape(&self) -> Option<&RingShape> {
        self.ring(self.attached_ring()).shape()
    }

    pub fn ring(&self, kind: RingKind) -> &RingSlot {
        match kind {
            RingKind::Idle => &self.idle_ring,
            RingKind::Recording => &self.recording_ring,
        }
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Centre of the bounds; both rings and the disk are centred here
    pub fn center(&self) -> Point {
        Point::new(self.bounds.width / 2.0, self.bounds.height / 2.0)
    }

    /// Side of the square that fits the control in every state
    pub fn preferred_size(&self) -> f32 {
        preferred_side(&self.config)
    }

    /// Distance from the centre within which presses land on the control
    pub fn hit_radius(&self) -> f32 {
        let idle = RingShape::idle(&self.config, Point::ORIGIN).outer_extent() / 2.0;
        idle.max(self.config.disk_diameter / 2.0)
    }

    // ===== Events =====

    /// Apply one input; returns the intents it produced, in order
    pub fn update(&mut self, input: ShutterInput) -> Vec<ShutterIntent> {
        let mut intents = Vec::new();

        match input {
            ShutterInput::PointerPressed(at) => self.recognizer.pointer_pressed(at),
            ShutterInput::PointerReleased(at) => {
                intents.extend(self.recognizer.poll(at).and_then(|g| self.handle_gesture(g)));
                intents.extend(
                    self.recognizer
                        .pointer_released(at)
                        .and_then(|g| self.handle_gesture(g)),
                );
            }
            ShutterInput::PointerCancelled(at) => {
                intents.extend(self.recognizer.poll(at).and_then(|g| self.handle_gesture(g)));
                intents.extend(
                    self.recognizer
                        .pointer_cancelled(at)
                        .and_then(|g| self.handle_gesture(g)),
                );
            }
            ShutterInput::Frame(now) => {
                intents.extend(self.recognizer.poll(now).and_then(|g| self.handle_gesture(g)));
                self.disk.advance(now);
                if self.state.advance(now) {
                    intents.extend(self.finish(ExitReason::ProgressComplete, now));
                }
            }
            ShutterInput::Tick(id) => {
                if !self.state.tick(id) {
                    trace!(ticker = %id, "Tick without a matching recording");
                }
            }
            ShutterInput::Resized(size) => self.set_bounds(size),
        }

        intents
    }

    /// Feed a recognized gesture straight into the state machine
    ///
    /// Hosts with their own tap and long-press recognizers use this instead of
    /// sending pointer events through [`ShutterControl::update`].
    pub fn handle_gesture(&mut self, gesture: Gesture) -> Option<ShutterIntent> {
        match gesture {
            Gesture::Tap => {
                debug!(recording = self.is_recording(), "Shutter tapped");
                self.notify(ShutterIntent::Tapped)
            }
            Gesture::PressBegan(at) => self.begin_recording(at),
            Gesture::PressEnded(at) => self.finish(ExitReason::Released, at),
        }
    }

    /// End the recording as if the press was released; no-op while idle
    pub fn stop(&mut self, at: Instant) -> Option<ShutterIntent> {
        self.finish(ExitReason::Released, at)
    }

    fn begin_recording(&mut self, at: Instant) -> Option<ShutterIntent> {
        if self.state.is_recording() {
            warn!("Press began while already recording, ignoring");
            return None;
        }

        let max_duration = Duration::from_secs(u64::from(self.config.max_recording_seconds));
        self.disk.press(at);
        self.state = RecordingState::start(at, self.tick_interval, max_duration);
        self.attach(RingKind::Recording);

        info!(
            ticker = ?self.ticker_id(),
            max_seconds = self.config.max_recording_seconds,
            "Recording started"
        );
        self.notify(ShutterIntent::RecordingStarted)
    }

    /// Single exit path out of Recording, shared by release and sweep completion
    fn finish(&mut self, reason: ExitReason, at: Instant) -> Option<ShutterIntent> {
        let Some(duration_secs) = self.state.stop() else {
            trace!(?reason, "Already idle, nothing to stop");
            return None;
        };

        match reason {
            ExitReason::Released => self.disk.release(at),
            ExitReason::ProgressComplete => self.disk.snap_to_rest(),
        }
        self.attach(RingKind::Idle);

        info!(?reason, duration_secs, "Recording ended");
        self.notify(ShutterIntent::RecordingEnded { duration_secs })
    }

    fn notify(&mut self, intent: ShutterIntent) -> Option<ShutterIntent> {
        if let Some(mut listener) = self.listener.take() {
            match intent {
                ShutterIntent::Tapped => listener.tapped(self),
                ShutterIntent::RecordingStarted => listener.recording_started(self),
                ShutterIntent::RecordingEnded { duration_secs } => {
                    listener.recording_ended(self, duration_secs)
                }
            }
            self.listener = Some(listener);
        }
        Some(intent)
    }

    // ===== Rings =====

    /// Make `kind` the ring on screen, regenerating it if its cache is stale
    fn attach(&mut self, kind: RingKind) {
        let center = self.center();
        let slot = match kind {
            RingKind::Idle => &mut self.idle_ring,
            RingKind::Recording => &mut self.recording_ring,
        };
        if slot.refresh(&self.config, center) {
            trace!(?kind, generation = slot.generation(), "Ring regenerated");
        }
    }

    /// Mark the affected rings stale and redraw the attached one if among them
    fn restyle(&mut self, affected: &[RingKind]) {
        for kind in affected {
            match kind {
                RingKind::Idle => self.idle_ring.invalidate(),
                RingKind::Recording => self.recording_ring.invalidate(),
            }
        }

        let attached = self.attached_ring();
        if affected.contains(&attached) {
            self.attach(attached);
        }
    }

    pub fn set_bounds(&mut self, bounds: Size) {
        if bounds == self.bounds {
            return;
        }
        debug!(width = bounds.width, height = bounds.height, "Shutter bounds changed");
        self.bounds = bounds;
        self.restyle(&[RingKind::Idle, RingKind::Recording]);
    }

    // ===== Configuration =====

    /// Replace the whole configuration
    ///
    /// Only rings whose inputs changed are invalidated. A new maximum length applies
    /// from the next recording on.
    pub fn set_config(&mut self, config: ShutterConfig) -> Result<(), ConfigError> {
        config.validate()?;

        let diameter_changed = config.disk_diameter != self.config.disk_diameter;
        let idle_changed = diameter_changed
            || config.idle_ring_color != self.config.idle_ring_color
            || config.idle_ring_width != self.config.idle_ring_width
            || config.idle_ring_gap != self.config.idle_ring_gap;
        let recording_changed = diameter_changed
            || config.recording_ring_color != self.config.recording_ring_color
            || config.recording_ring_width != self.config.recording_ring_width
            || config.recording_ring_gap != self.config.recording_ring_gap;

        self.config = config;

        let mut affected = Vec::with_capacity(2);
        if idle_changed {
            affected.push(RingKind::Idle);
        }
        if recording_changed {
            affected.push(RingKind::Recording);
        }
        self.restyle(&affected);
        Ok(())
    }

    pub fn set_disk_diameter(&mut self, diameter: f32) -> Result<(), ConfigError> {
        config::validate_diameter(diameter)?;
        debug!(diameter, "Disk diameter changed");
        self.config.disk_diameter = diameter;
        self.restyle(&[RingKind::Idle, RingKind::Recording]);
        Ok(())
    }

    pub fn set_disk_color(&mut self, color: Rgba) {
        self.config.disk_color = color;
    }

    pub fn set_idle_ring_color(&mut self, color: Rgba) {
        self.config.idle_ring_color = color;
        self.restyle(&[RingKind::Idle]);
    }

    pub fn set_idle_ring_width(&mut self, width: f32) -> Result<(), ConfigError> {
        config::validate_length("idle ring width", width)?;
        debug!(width, "Idle ring width changed");
        self.config.idle_ring_width = width;
        self.restyle(&[RingKind::Idle]);
        Ok(())
    }

    pub fn set_idle_ring_gap(&mut self, gap: f32) -> Result<(), ConfigError> {
        config::validate_length("idle ring gap", gap)?;
        debug!(gap, "Idle ring gap changed");
        self.config.idle_ring_gap = gap;
        self.restyle(&[RingKind::Idle]);
        Ok(())
    }

    pub fn set_recording_ring_color(&mut self, color: Rgba) {
        self.config.recording_ring_color = color;
        self.restyle(&[RingKind::Recording]);
    }

    /// Takes effect on the ring immediately, also mid-recording; the sweep keeps
    /// its progress
    pub fn set_recording_ring_width(&mut self, width: f32) -> Result<(), ConfigError> {
        config::validate_length("recording ring width", width)?;
        debug!(width, "Recording ring width changed");
        self.config.recording_ring_width = width;
        self.restyle(&[RingKind::Recording]);
        Ok(())
    }

    pub fn set_recording_ring_gap(&mut self, gap: f32) -> Result<(), ConfigError> {
        config::validate_length("recording ring gap", gap)?;
        debug!(gap, "Recording ring gap changed");
        self.config.recording_ring_gap = gap;
        self.restyle(&[RingKind::Recording]);
        Ok(())
    }

    /// Applies from the next recording on; a running sweep keeps its length
    pub fn set_max_recording_seconds(&mut self, seconds: u32) -> Result<(), ConfigError> {
        config::validate_max_seconds(seconds)?;
        debug!(seconds, "Maximum recording length changed");
        self.config.max_recording_seconds = seconds;
        Ok(())
    }
}

/// Square side fitting the pressed disk and both rings, plus padding
fn preferred_side(config: &ShutterConfig) -> f32 {
    let origin = Point::ORIGIN;
    let rings = RingShape::idle(config, origin)
        .outer_extent()
        .max(RingShape::recording(config, origin).outer_extent());
    let pressed_disk = config.disk_diameter * ui::PRESSED_DISK_SCALE;
    rings.max(pressed_disk) + 2.0 * ui::WIDGET_PADDING
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const TICK: Duration = Duration::from_millis(10);

    #[derive(Debug, Clone, PartialEq)]
    enum Heard {
        Started { elapsed: f64 },
        Ended { duration: f64, elapsed: f64 },
        Tapped { recording: bool },
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Heard>>>);

    impl ShutterListener for Recorder {
        fn recording_started(&mut self, control: &ShutterControl) {
            self.0.borrow_mut().push(Heard::Started {
                elapsed: control.elapsed_seconds(),
            });
        }

        fn recording_ended(&mut self, control: &ShutterControl, duration_secs: f64) {
            self.0.borrow_mut().push(Heard::Ended {
                duration: duration_secs,
                elapsed: control.elapsed_seconds(),
            });
        }

        fn tapped(&mut self, control: &ShutterControl) {
            self.0.borrow_mut().push(Heard::Tapped {
                recording: control.is_recording(),
            });
        }
    }

    /// Deliver a tick and a frame every 10 ms for `duration` after `from`
    fn run_for(control: &mut ShutterControl, from: Instant, duration: Duration) -> Vec<ShutterIntent> {
        let steps = (duration.as_millis() / TICK.as_millis()) as u32;
        let mut intents = Vec::new();
        for step in 1..=steps {
            if let Some(id) = control.ticker_id() {
                intents.extend(control.update(ShutterInput::Tick(id)));
            }
            intents.extend(control.update(ShutterInput::Frame(from + TICK * step)));
        }
        intents
    }

    #[test]
    fn test_press_hold_release_scenario() {
        let recorder = Recorder::default();
        let config = ShutterConfig {
            max_recording_seconds: 15,
            disk_diameter: 80.0,
            ..Default::default()
        };
        let mut control = ShutterControl::new(config)
            .unwrap()
            .with_listener(recorder.clone());
        let start = Instant::now();

        assert_eq!(
            control.handle_gesture(Gesture::PressBegan(start)),
            Some(ShutterIntent::RecordingStarted)
        );
        assert!(control.is_recording());
        assert_eq!(control.attached_ring(), RingKind::Recording);
        assert_eq!(control.elapsed_seconds(), 0.0);

        assert!(run_for(&mut control, start, Duration::from_secs(2)).is_empty());
        assert!((control.elapsed_seconds() - 2.0).abs() <= TICK.as_secs_f64());

        let intent = control.handle_gesture(Gesture::PressEnded(start + Duration::from_secs(2)));
        let Some(ShutterIntent::RecordingEnded { duration_secs }) = intent else {
            panic!("expected RecordingEnded, got {:?}", intent);
        };
        assert!((duration_secs - 2.0).abs() <= TICK.as_secs_f64());
        assert!(!control.is_recording());
        assert_eq!(control.attached_ring(), RingKind::Idle);
        assert_eq!(control.elapsed_seconds(), 0.0);

        let heard = recorder.0.borrow();
        assert_eq!(heard.len(), 2);
        assert_eq!(heard[0], Heard::Started { elapsed: 0.0 });
        assert!(matches!(heard[1], Heard::Ended { elapsed, .. } if elapsed == 0.0));
    }

    #[test]
    fn test_sweep_completion_ends_recording() {
        let mut control = ShutterControl::default();
        let start = Instant::now();
        control.handle_gesture(Gesture::PressBegan(start));

        let intents = run_for(&mut control, start, Duration::from_secs(16));
        assert_eq!(intents.len(), 1);
        let ShutterIntent::RecordingEnded { duration_secs } = intents[0] else {
            panic!("expected RecordingEnded, got {:?}", intents[0]);
        };
        assert!((duration_secs - 15.0).abs() <= TICK.as_secs_f64());
        assert!(!control.is_recording());
        assert_eq!(control.attached_ring(), RingKind::Idle);
        // Completion restores the disk without animating
        assert!(!control.disk().is_animating());
        assert_eq!(control.disk().opacity(), 1.0);
    }

    #[test]
    fn test_stop_twice_reports_once() {
        let recorder = Recorder::default();
        let mut control = ShutterControl::default().with_listener(recorder.clone());
        let start = Instant::now();
        control.handle_gesture(Gesture::PressBegan(start));
        run_for(&mut control, start, Duration::from_millis(300));

        assert!(control.stop(start + Duration::from_millis(300)).is_some());
        assert_eq!(control.ticker_id(), None);
        assert_eq!(control.stop(start + Duration::from_millis(310)), None);
        assert_eq!(recorder.0.borrow().len(), 2);
    }

    #[test]
    fn test_quick_tap_only_taps() {
        let recorder = Recorder::default();
        let mut control = ShutterControl::default().with_listener(recorder.clone());
        let start = Instant::now();

        assert!(control.update(ShutterInput::PointerPressed(start)).is_empty());
        assert!(control
            .update(ShutterInput::Frame(start + Duration::from_millis(100)))
            .is_empty());
        assert!(!control.is_recording());
        assert_eq!(
            control.update(ShutterInput::PointerReleased(start + Duration::from_millis(200))),
            vec![ShutterIntent::Tapped]
        );
        assert!(!control.is_recording());
        assert_eq!(
            *recorder.0.borrow(),
            vec![Heard::Tapped { recording: false }]
        );
    }

    #[test]
    fn test_long_press_through_pointer_events() {
        let mut control = ShutterControl::default();
        let start = Instant::now();
        control.update(ShutterInput::PointerPressed(start));

        let intents = run_for(&mut control, start, Duration::from_millis(600));
        assert_eq!(intents, vec![ShutterIntent::RecordingStarted]);
        assert!(control.is_recording());

        let intents =
            control.update(ShutterInput::PointerReleased(start + Duration::from_millis(600)));
        assert_eq!(intents.len(), 1);
        assert!(matches!(intents[0], ShutterIntent::RecordingEnded { .. }));
    }

    #[test]
    fn test_begin_while_recording_is_ignored() {
        let mut control = ShutterControl::default();
        let start = Instant::now();
        control.handle_gesture(Gesture::PressBegan(start));
        let ticker = control.ticker_id();

        assert_eq!(control.handle_gesture(Gesture::PressBegan(start)), None);
        assert_eq!(control.ticker_id(), ticker);
    }

    #[test]
    fn test_stale_ticks_are_discarded() {
        let mut control = ShutterControl::default();
        let start = Instant::now();
        control.handle_gesture(Gesture::PressBegan(start));
        let old = control.ticker_id().unwrap();
        control.stop(start);

        control.handle_gesture(Gesture::PressBegan(start));
        control.update(ShutterInput::Tick(old));
        assert_eq!(control.elapsed_seconds(), 0.0);
    }

    #[test]
    fn test_diameter_write_while_idle_redraws_idle_ring_only() {
        let mut control = ShutterControl::default();
        let recording_generation = control.ring(RingKind::Recording).generation();

        control.set_disk_diameter(100.0).unwrap();

        let shape = control.attached_shape().unwrap();
        assert_eq!(shape.radius, 100.0 / 2.0 + control.config().idle_ring_gap);
        assert_eq!(
            control.ring(RingKind::Recording).generation(),
            recording_generation
        );
        assert!(control.ring(RingKind::Recording).is_dirty());
    }

    #[test]
    fn test_idle_style_write_while_recording_is_deferred() {
        let mut control = ShutterControl::default();
        let start = Instant::now();
        control.handle_gesture(Gesture::PressBegan(start));
        let idle_generation = control.ring(RingKind::Idle).generation();

        control.set_idle_ring_color(Rgba::RED);
        assert_eq!(control.ring(RingKind::Idle).generation(), idle_generation);
        assert!(control.ring(RingKind::Idle).is_dirty());

        control.stop(start + Duration::from_secs(1));
        assert_eq!(control.attached_shape().unwrap().color, Rgba::RED);
    }

    #[test]
    fn test_recording_style_write_keeps_sweep_progress() {
        let mut control = ShutterControl::default();
        let start = Instant::now();
        control.handle_gesture(Gesture::PressBegan(start));
        run_for(&mut control, start, Duration::from_secs(3));
        let progress = control.progress();
        let generation = control.ring(RingKind::Recording).generation();

        control.set_recording_ring_width(20.0).unwrap();

        assert_eq!(control.attached_shape().unwrap().stroke_width, 20.0);
        assert_eq!(
            control.ring(RingKind::Recording).generation(),
            generation + 1
        );
        assert_eq!(control.progress(), progress);
        assert!((progress - 0.2).abs() < 0.01);
    }

    #[test]
    fn test_max_length_change_applies_to_next_recording() {
        let mut control = ShutterControl::default();
        let start = Instant::now();
        control.handle_gesture(Gesture::PressBegan(start));
        control.set_max_recording_seconds(5).unwrap();

        control.update(ShutterInput::Frame(start + Duration::from_secs(6)));
        assert!(control.is_recording());
    }

    #[test]
    fn test_invalid_writes_leave_config_untouched() {
        let mut control = ShutterControl::default();
        let before = control.config().clone();

        assert!(control.set_disk_diameter(-1.0).is_err());
        assert!(control.set_idle_ring_gap(f32::INFINITY).is_err());
        assert!(control.set_max_recording_seconds(0).is_err());
        assert_eq!(control.config(), &before);
    }

    #[test]
    fn test_oversized_lengths_are_rejected() {
        let mut control = ShutterControl::default();
        let before = control.config().clone();

        assert!(matches!(
            control.set_disk_diameter(f32::MAX),
            Err(ConfigError::TooLarge("disk diameter", _, _))
        ));
        assert!(control.set_recording_ring_width(1.0e7).is_err());
        assert!(control.set_idle_ring_gap(f32::MAX).is_err());
        assert_eq!(control.config(), &before);
    }

    #[test]
    fn test_resize_recentres_attached_ring() {
        let mut control = ShutterControl::default();
        control.update(ShutterInput::Resized(Size::new(300.0, 200.0)));
        assert_eq!(
            control.attached_shape().unwrap().center,
            Point::new(150.0, 100.0)
        );
    }

    #[test]
    fn test_tap_while_recording_does_not_transition() {
        let recorder = Recorder::default();
        let mut control = ShutterControl::default().with_listener(recorder.clone());
        control.handle_gesture(Gesture::PressBegan(Instant::now()));

        assert_eq!(
            control.handle_gesture(Gesture::Tap),
            Some(ShutterIntent::Tapped)
        );
        assert!(control.is_recording());
        assert_eq!(
            recorder.0.borrow().last(),
            Some(&Heard::Tapped { recording: true })
        );
    }
}
