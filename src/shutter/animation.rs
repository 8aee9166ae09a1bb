// SPDX-License-Identifier: MPL-2.0

//! Time-based animations advanced by frame instants

use crate::constants::{timing, ui};
use std::time::{Duration, Instant};

/// Linear 0 → 1 sweep of the recording ring
///
/// Independent of the elapsed-time ticker: the sweep follows frame instants and
/// finishes by itself once `duration` has passed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressAnimation {
    started_at: Instant,
    duration: Duration,
    progress: f32,
}

impl ProgressAnimation {
    pub fn start(at: Instant, duration: Duration) -> Self {
        Self {
            started_at: at,
            duration,
            progress: 0.0,
        }
    }

    /// Move the sweep to `now`; returns `true` once it has reached the end
    pub fn advance(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.started_at);
        self.progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32
        };
        self.is_finished()
    }

    /// Stroke end of the recording ring, `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Pressed look of the disk while recording: faded to half opacity and enlarged to
/// 1.2 times its diameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskFeedback {
    from: f32,
    to: f32,
    changed_at: Option<Instant>,
    /// 0.0 at rest, 1.0 fully pressed
    amount: f32,
}

impl Default for DiskFeedback {
    fn default() -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            changed_at: None,
            amount: 0.0,
        }
    }
}

impl DiskFeedback {
    /// Ease into the pressed look, starting at `at`
    pub fn press(&mut self, at: Instant) {
        self.animate_to(1.0, at);
    }

    /// Ease back to rest, starting at `at`
    pub fn release(&mut self, at: Instant) {
        self.animate_to(0.0, at);
    }

    /// Jump back to rest without animating
    pub fn snap_to_rest(&mut self) {
        *self = Self::default();
    }

    fn animate_to(&mut self, target: f32, at: Instant) {
        self.from = self.amount;
        self.to = target;
        self.changed_at = Some(at);
    }

    pub fn advance(&mut self, now: Instant) {
        let Some(changed_at) = self.changed_at else {
            return;
        };

        let elapsed = now.saturating_duration_since(changed_at);
        let t = (elapsed.as_secs_f32() / timing::FEEDBACK_DURATION.as_secs_f32()).min(1.0);
        self.amount = self.from + (self.to - self.from) * ease_out(t);

        if t >= 1.0 {
            self.amount = self.to;
            self.changed_at = None;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.changed_at.is_some()
    }

    pub fn opacity(&self) -> f32 {
        1.0 + (ui::PRESSED_DISK_OPACITY - 1.0) * self.amount
    }

    pub fn scale(&self) -> f32 {
        1.0 + (ui::PRESSED_DISK_SCALE - 1.0) * self.amount
    }
}

/// Cubic ease-out
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_linear_and_clamped() {
        let start = Instant::now();
        let mut sweep = ProgressAnimation::start(start, Duration::from_secs(10));

        assert!(!sweep.advance(start + Duration::from_secs(5)));
        assert!((sweep.progress() - 0.5).abs() < 1e-6);

        assert!(sweep.advance(start + Duration::from_secs(12)));
        assert_eq!(sweep.progress(), 1.0);
    }

    #[test]
    fn test_progress_ignores_instants_before_start() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut sweep = ProgressAnimation::start(start, Duration::from_secs(10));
        assert!(!sweep.advance(start - Duration::from_millis(500)));
        assert_eq!(sweep.progress(), 0.0);
    }

    #[test]
    fn test_feedback_reaches_pressed_look() {
        let start = Instant::now();
        let mut disk = DiskFeedback::default();
        assert_eq!(disk.opacity(), 1.0);

        disk.press(start);
        disk.advance(start + Duration::from_millis(150));
        assert!(disk.is_animating());
        assert!(disk.opacity() < 1.0 && disk.opacity() > ui::PRESSED_DISK_OPACITY);

        disk.advance(start + timing::FEEDBACK_DURATION);
        assert!(!disk.is_animating());
        assert_eq!(disk.opacity(), ui::PRESSED_DISK_OPACITY);
        assert_eq!(disk.scale(), ui::PRESSED_DISK_SCALE);
    }

    #[test]
    fn test_release_mid_press_eases_back_from_current_amount() {
        let start = Instant::now();
        let mut disk = DiskFeedback::default();
        disk.press(start);
        disk.advance(start + Duration::from_millis(100));
        let midway = disk.scale();

        disk.release(start + Duration::from_millis(100));
        disk.advance(start + Duration::from_millis(101));
        assert!(disk.scale() <= midway);

        disk.advance(start + Duration::from_secs(1));
        assert_eq!(disk.scale(), 1.0);
        assert_eq!(disk.opacity(), 1.0);
        assert!(!disk.is_animating());
    }
}
