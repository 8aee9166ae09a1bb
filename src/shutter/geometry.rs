// SPDX-License-Identifier: MPL-2.0

//! Ring geometry
//!
//! Both rings are circles around the centre of the control's bounds. The idle ring
//! hugs the disk; the recording ring is laid out around a disk enlarged by
//! [`ui::RECORDING_RING_SCALE`] and its stroke starts at the top and runs clockwise.

use crate::config::{Rgba, ShutterConfig};
use crate::constants::ui;
use cosmic::iced::Point;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Which of the two rings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingKind {
    Idle,
    Recording,
}

/// Resolved geometry and stroke style of one ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingShape {
    pub center: Point,
    pub radius: f32,
    /// Angle of the stroke start in radians, screen coordinates (y down)
    pub start_angle: f32,
    pub stroke_width: f32,
    pub color: Rgba,
}

impl RingShape {
    /// Static ring around the disk: `diameter / 2 + gap`, no start bias
    pub fn idle(config: &ShutterConfig, center: Point) -> Self {
        Self {
            center,
            radius: config.disk_diameter / 2.0 + config.idle_ring_gap,
            start_angle: 0.0,
            stroke_width: config.idle_ring_width,
            color: config.idle_ring_color,
        }
    }

    /// Progress ring: `diameter * 1.2 / 2 + gap`, starting at the top
    pub fn recording(config: &ShutterConfig, center: Point) -> Self {
        Self {
            center,
            radius: config.disk_diameter * ui::RECORDING_RING_SCALE / 2.0
                + config.recording_ring_gap,
            start_angle: -FRAC_PI_2,
            stroke_width: config.recording_ring_width,
            color: config.recording_ring_color,
        }
    }

    pub fn for_kind(kind: RingKind, config: &ShutterConfig, center: Point) -> Self {
        match kind {
            RingKind::Idle => Self::idle(config, center),
            RingKind::Recording => Self::recording(config, center),
        }
    }

    /// Point on the ring after `fraction` of a clockwise turn from the start angle
    pub fn point_at(&self, fraction: f32) -> Point {
        let angle = self.start_angle + TAU * fraction;
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Side length of the square the stroked ring occupies
    pub fn outer_extent(&self) -> f32 {
        2.0 * self.radius + self.stroke_width
    }

    /// Centres of round stroke dabs covering the ring from its start up to `stroke_end`
    ///
    /// Dabs are spaced closely enough relative to the stroke width to read as one
    /// continuous round-capped line, up to [`ui::MAX_STROKE_SAMPLES`]. Empty when
    /// nothing is to be drawn.
    pub fn stroke_samples(&self, stroke_end: f32) -> Vec<Point> {
        let stroke_end = stroke_end.clamp(0.0, 1.0);
        if stroke_end <= 0.0 || self.stroke_width <= 0.0 || self.radius <= 0.0 {
            return Vec::new();
        }

        let spacing = (self.stroke_width * ui::STROKE_SAMPLE_SPACING).max(0.5);
        let arc_length = TAU * self.radius * stroke_end;
        let steps = ((arc_length / spacing).ceil().max(1.0) as usize).min(ui::MAX_STROKE_SAMPLES);

        (0..=steps)
            .map(|step| self.point_at(stroke_end * step as f32 / steps as f32))
            .collect()
    }
}

/// Cached shape of one ring with a dirty flag
///
/// Styling writes only invalidate the slot; the shape is regenerated when the ring
/// is (or becomes) the attached one.
#[derive(Debug, Clone)]
pub struct RingSlot {
    kind: RingKind,
    shape: Option<RingShape>,
    dirty: bool,
    generation: u64,
}

impl RingSlot {
    pub fn new(kind: RingKind) -> Self {
        Self {
            kind,
            shape: None,
            dirty: true,
            generation: 0,
        }
    }

    /// Last generated shape, possibly stale when [`RingSlot::is_dirty`]
    pub fn shape(&self) -> Option<&RingShape> {
        self.shape.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of times the shape has been regenerated
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Regenerate the shape if it is dirty; returns whether it was regenerated
    pub fn refresh(&mut self, config: &ShutterConfig, center: Point) -> bool {
        if !self.dirty && self.shape.is_some() {
            return false;
        }
        self.shape = Some(RingShape::for_kind(self.kind, config, center));
        self.dirty = false;
        self.generation += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn test_ring_radii() {
        let config = ShutterConfig::default();
        let center = Point::new(100.0, 100.0);

        assert_eq!(RingShape::idle(&config, center).radius, 45.0);
        assert!((RingShape::recording(&config, center).radius - 58.0).abs() < 1e-4);
    }

    #[test]
    fn test_recording_stroke_starts_at_top_and_runs_clockwise() {
        let shape = RingShape::recording(&ShutterConfig::default(), Point::new(0.0, 0.0));
        let samples = shape.stroke_samples(1.0);

        assert!(close(samples[0], Point::new(0.0, -shape.radius)));
        // Screen y grows downwards, so clockwise from the top heads right
        assert!(samples[1].x > samples[0].x);
        assert!(close(shape.point_at(0.25), Point::new(shape.radius, 0.0)));
        assert!(close(*samples.last().unwrap(), samples[0]));
    }

    #[test]
    fn test_idle_ring_starts_at_zero_angle() {
        let shape = RingShape::idle(&ShutterConfig::default(), Point::new(0.0, 0.0));
        assert!(close(shape.point_at(0.0), Point::new(shape.radius, 0.0)));
    }

    #[test]
    fn test_stroke_samples_follow_stroke_end() {
        let shape = RingShape::recording(&ShutterConfig::default(), Point::new(0.0, 0.0));
        assert!(shape.stroke_samples(0.0).is_empty());

        let half = shape.stroke_samples(0.5);
        assert!(close(*half.last().unwrap(), Point::new(0.0, shape.radius)));
        assert!(half.len() < shape.stroke_samples(1.0).len());
    }

    #[test]
    fn test_huge_ring_sample_count_is_capped() {
        let shape = RingShape {
            center: Point::ORIGIN,
            radius: 1.0e9,
            start_angle: 0.0,
            stroke_width: 1.0,
            color: Rgba::WHITE,
        };
        assert_eq!(shape.stroke_samples(1.0).len(), ui::MAX_STROKE_SAMPLES + 1);

        let unbounded = RingShape {
            radius: f32::INFINITY,
            ..shape
        };
        assert_eq!(
            unbounded.stroke_samples(0.5).len(),
            ui::MAX_STROKE_SAMPLES + 1
        );
    }

    #[test]
    fn test_slot_regenerates_only_when_dirty() {
        let config = ShutterConfig::default();
        let center = Point::new(50.0, 50.0);
        let mut slot = RingSlot::new(RingKind::Idle);

        assert!(slot.refresh(&config, center));
        assert!(!slot.refresh(&config, center));
        assert_eq!(slot.generation(), 1);

        slot.invalidate();
        assert!(slot.is_dirty());
        assert!(slot.refresh(&config, center));
        assert_eq!(slot.generation(), 2);
    }
}
