// SPDX-License-Identifier: MPL-2.0

//! Shutter button widget
//!
//! Draws a [`ShutterControl`] directly with the renderer and reports pointer and
//! touch events back as [`ShutterInput`] messages. The widget holds no state of its
//! own beyond which pointer, if any, started the current press.

use super::geometry::{RingKind, RingShape};
use super::{ShutterControl, ShutterInput};
use cosmic::iced::advanced::widget::tree::{self, Tree};
use cosmic::iced::advanced::{Clipboard, Layout, Shell, Widget, layout, mouse, renderer};
use cosmic::iced::event::Status;
use cosmic::iced::{
    Border, Color, Element, Event, Length, Point, Rectangle, Size, Vector, touch,
};
use cosmic::{Renderer, Theme};
use std::time::Instant;

/// Source of a press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pointer {
    Mouse,
    Finger(touch::Finger),
}

/// The pointer whose press started on this widget
#[derive(Debug, Default)]
struct State {
    press: Option<Pointer>,
}

impl State {
    /// Track `pointer` unless another press is already tracked
    fn begin(&mut self, pointer: Pointer) -> bool {
        if self.press.is_some() {
            return false;
        }
        self.press = Some(pointer);
        true
    }

    /// Stop tracking if `pointer` is the one that pressed; other pointers are ignored
    fn end(&mut self, pointer: Pointer) -> bool {
        if self.press != Some(pointer) {
            return false;
        }
        self.press = None;
        true
    }
}

/// Widget rendering a shutter control
pub struct ShutterButton<'a, Message> {
    control: &'a ShutterControl,
    on_input: Box<dyn Fn(ShutterInput) -> Message + 'a>,
    size: Option<f32>,
}

/// Create a shutter button for `control`, mapping its inputs to host messages
pub fn shutter_button<'a, Message>(
    control: &'a ShutterControl,
    on_input: impl Fn(ShutterInput) -> Message + 'a,
) -> ShutterButton<'a, Message> {
    ShutterButton {
        control,
        on_input: Box::new(on_input),
        size: None,
    }
}

impl<'a, Message> ShutterButton<'a, Message> {
    /// Override the square side; defaults to the control's preferred size
    pub fn size(mut self, side: f32) -> Self {
        self.size = Some(side);
        self
    }

    fn side(&self) -> f32 {
        self.size.unwrap_or_else(|| self.control.preferred_size())
    }

    fn hits(&self, bounds: Rectangle, position: Point) -> bool {
        position.distance(bounds.center()) <= self.control.hit_radius()
    }

    /// Offset from control coordinates to screen coordinates
    fn offset(&self, bounds: Rectangle) -> Vector {
        let center = self.control.center();
        let target = bounds.center();
        Vector::new(target.x - center.x, target.y - center.y)
    }

    fn publish(&self, shell: &mut Shell<'_, Message>, input: ShutterInput) {
        shell.publish((self.on_input)(input));
    }
}

/// Complete static ring as a bordered circle
fn draw_full_ring(renderer: &mut Renderer, shape: &RingShape, offset: Vector) {
    use cosmic::iced::advanced::Renderer as _;

    let side = shape.outer_extent();
    let center = shape.center + offset;
    renderer.fill_quad(
        renderer::Quad {
            bounds: Rectangle {
                x: center.x - side / 2.0,
                y: center.y - side / 2.0,
                width: side,
                height: side,
            },
            border: Border {
                color: shape.color.into(),
                width: shape.stroke_width,
                radius: (side / 2.0).into(),
            },
            shadow: Default::default(),
        },
        Color::TRANSPARENT,
    );
}

/// Partial ring as round dabs from the start angle up to `stroke_end`
fn draw_sweep(renderer: &mut Renderer, shape: &RingShape, stroke_end: f32, offset: Vector) {
    use cosmic::iced::advanced::Renderer as _;

    let width = shape.stroke_width;
    let color: Color = shape.color.into();
    for sample in shape.stroke_samples(stroke_end) {
        let sample = sample + offset;
        renderer.fill_quad(
            renderer::Quad {
                bounds: Rectangle {
                    x: sample.x - width / 2.0,
                    y: sample.y - width / 2.0,
                    width,
                    height: width,
                },
                border: Border {
                    radius: (width / 2.0).into(),
                    ..Default::default()
                },
                shadow: Default::default(),
            },
            color,
        );
    }
}

impl<'a, Message> Widget<Message, Theme, Renderer> for ShutterButton<'a, Message> {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        let side = self.side();
        Size::new(Length::Fixed(side), Length::Fixed(side))
    }

    fn layout(
        &self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let side = self.side();
        let size = limits.resolve(
            Length::Fixed(side),
            Length::Fixed(side),
            Size::new(side, side),
        );
        layout::Node::new(size)
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        use cosmic::iced::advanced::Renderer as _;

        let bounds = layout.bounds();
        let offset = self.offset(bounds);
        let config = self.control.config();

        if let Some(shape) = self.control.attached_shape() {
            match self.control.attached_ring() {
                RingKind::Idle => draw_full_ring(renderer, shape, offset),
                RingKind::Recording => {
                    draw_sweep(renderer, shape, self.control.progress(), offset)
                }
            }
        }

        let disk = self.control.disk();
        let diameter = config.disk_diameter * disk.scale();
        let center = bounds.center();
        renderer.fill_quad(
            renderer::Quad {
                bounds: Rectangle {
                    x: center.x - diameter / 2.0,
                    y: center.y - diameter / 2.0,
                    width: diameter,
                    height: diameter,
                },
                border: Border {
                    radius: (diameter / 2.0).into(),
                    ..Default::default()
                },
                shadow: Default::default(),
            },
            Color::from(config.disk_color.faded(disk.opacity())),
        );
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) -> Status {
        let bounds = layout.bounds();
        let state = tree.state.downcast_mut::<State>();

        // Ring geometry is computed in control coordinates; keep them in sync
        if bounds.size() != self.control.bounds() {
            self.publish(shell, ShutterInput::Resized(bounds.size()));
        }

        let now = Instant::now();
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if cursor
                    .position()
                    .is_some_and(|position| self.hits(bounds, position))
                    && state.begin(Pointer::Mouse)
                {
                    self.publish(shell, ShutterInput::PointerPressed(now));
                    return Status::Captured;
                }
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if self.hits(bounds, position) && state.begin(Pointer::Finger(id)) {
                    self.publish(shell, ShutterInput::PointerPressed(now));
                    return Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.end(Pointer::Mouse) {
                    self.publish(shell, ShutterInput::PointerReleased(now));
                    return Status::Captured;
                }
            }
            Event::Touch(touch::Event::FingerLifted { id, .. }) => {
                if state.end(Pointer::Finger(id)) {
                    self.publish(shell, ShutterInput::PointerReleased(now));
                    return Status::Captured;
                }
            }
            Event::Touch(touch::Event::FingerLost { id, .. }) => {
                if state.end(Pointer::Finger(id)) {
                    self.publish(shell, ShutterInput::PointerCancelled(now));
                    return Status::Captured;
                }
            }
            _ => {}
        }

        Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        match cursor.position() {
            Some(position) if self.hits(layout.bounds(), position) => {
                mouse::Interaction::Pointer
            }
            _ => mouse::Interaction::default(),
        }
    }
}

impl<'a, Message: 'a> From<ShutterButton<'a, Message>> for Element<'a, Message, Theme, Renderer> {
    fn from(widget: ShutterButton<'a, Message>) -> Self {
        Element::new(widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_the_pressing_finger_releases() {
        let mut state = State::default();
        let holder = Pointer::Finger(touch::Finger(1));
        let other = Pointer::Finger(touch::Finger(2));

        assert!(state.begin(holder));
        assert!(!state.begin(other));
        assert!(!state.end(other));
        assert!(!state.end(Pointer::Mouse));
        assert!(state.end(holder));
        assert!(!state.end(holder));
    }

    #[test]
    fn test_mouse_press_ignores_finger_release() {
        let mut state = State::default();

        assert!(state.begin(Pointer::Mouse));
        assert!(!state.end(Pointer::Finger(touch::Finger(7))));
        assert!(state.end(Pointer::Mouse));
    }
}
