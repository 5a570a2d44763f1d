//! Test trace_ui widgets in headless mode.
//!
//! A [`Simulator`] plays the part of the window host: it owns a theme, a
//! deterministic [`Monospace`] shaper and the [`Input`] of the next frame.
//! Tests queue pointer and keyboard events, build frames with
//! [`Simulator::frame`] and inspect what the last frame recorded.
//!
//! ```
//! use trace_ui_core::{Dimensions, Point, Size};
//! use trace_ui_test::Simulator;
//!
//! let mut simulator = Simulator::new(Size::new(400.0, 300.0));
//!
//! let _ = simulator.frame(|window, ctx| {
//!     ctx.fill_text("Hello", Point::new(4.0, 4.0), 12.0, window.theme.background.on);
//!     Dimensions::ZERO
//! });
//!
//! assert_eq!(simulator.text("Hello"), Some(Point::new(4.0, 4.0)));
//! ```
use trace_ui_core::keyboard::{self, Key, Named};
use trace_ui_core::mouse::{self, Button, Cursor};
use trace_ui_core::renderer::Primitive;
use trace_ui_core::text::Monospace;
use trace_ui_core::{Color, Context, Event, Input, Limits, Ops, Point, Rectangle, Size, Theme, Window};

/// A headless window host.
#[derive(Debug)]
pub struct Simulator {
    theme: Theme,
    shaper: Monospace,
    size: Size,
    input: Input,
    frames: usize,
    last: Ops,
}

impl Simulator {
    /// Creates a [`Simulator`] for a window of the given [`Size`] with the
    /// light theme and the cursor outside the window.
    pub fn new(size: Size) -> Self {
        Simulator {
            theme: Theme::light(),
            shaper: Monospace::default(),
            size,
            input: Input::new(Cursor::Unavailable),
            frames: 0,
            last: Ops::new(),
        }
    }

    /// Sets the [`Theme`] frames are built with.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Returns the [`Theme`] frames are built with.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Queues an [`Event`] for the next frame.
    pub fn event(&mut self, event: impl Into<Event>) {
        self.input.handle(&event.into());
    }

    /// Moves the cursor to `position`.
    pub fn move_to(&mut self, position: Point) {
        self.event(mouse::Event::CursorMoved { position });
    }

    /// Moves the cursor out of the window.
    pub fn leave(&mut self) {
        self.event(mouse::Event::CursorLeft);
    }

    /// Presses the left mouse button.
    pub fn press(&mut self) {
        self.event(mouse::Event::ButtonPressed(Button::Left));
    }

    /// Releases the left mouse button.
    pub fn release(&mut self) {
        self.event(mouse::Event::ButtonReleased(Button::Left));
    }

    /// Moves to `position`, then presses and releases the left button, all
    /// within the next frame.
    pub fn click_at(&mut self, position: Point) {
        self.move_to(position);
        self.press();
        self.release();
    }

    /// Presses <kbd>Esc</kbd>.
    pub fn escape(&mut self) {
        self.event(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
        });
    }

    /// Builds a frame with `view` as the root and returns what it returned.
    ///
    /// The queued events are consumed; the cursor stays where it was.
    pub fn frame<T>(&mut self, view: impl FnOnce(&Window<'_>, &mut Context<'_>) -> T) -> T {
        let window = Window::new(&self.theme, &self.shaper);
        let mut ops = Ops::new();

        let output = {
            let mut ctx = Context::new(
                &mut ops,
                Limits::new(Size::ZERO, self.size),
                Some(&mut self.input),
            );

            view(&window, &mut ctx)
        };

        self.input.next_frame();
        self.frames += 1;
        self.last = ops;

        log::trace!("frame {} recorded {} primitives", self.frames, self.last.len());

        output
    }

    /// Returns the number of frames built so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Returns the [`Ops`] recorded by the last frame.
    pub fn ops(&self) -> &Ops {
        &self.last
    }

    /// Returns the position of the first line of text equal to `content` in
    /// the last frame.
    pub fn text(&self, content: &str) -> Option<Point> {
        self.last
            .texts()
            .find(|(text, _)| *text == content)
            .map(|(_, position)| position)
    }

    /// Returns the color the first line of text equal to `content` was drawn
    /// with in the last frame.
    pub fn text_color(&self, content: &str) -> Option<Color> {
        self.last.iter().find_map(|primitive| match primitive {
            Primitive::Text {
                content: text,
                color,
                ..
            } if text == content => Some(*color),
            Primitive::Text { .. } | Primitive::Quad { .. } => None,
        })
    }

    /// Returns the bounds of every quad filled with `color` in the last
    /// frame, in drawing order.
    pub fn quads(&self, color: Color) -> Vec<Rectangle> {
        self.last
            .iter()
            .filter_map(|primitive| match primitive {
                Primitive::Quad { quad, background } if *background == color => Some(quad.bounds),
                Primitive::Quad { .. } | Primitive::Text { .. } => None,
            })
            .collect()
    }

    /// Returns the bounds of the topmost quad filled with `color` that lies
    /// under `position` in the last frame.
    pub fn quad_at(&self, color: Color, position: Point) -> Option<Rectangle> {
        self.quads(color)
            .into_iter()
            .rev()
            .find(|bounds| bounds.contains(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trace_ui_core::{Clickable, Dimensions};

    #[test]
    fn clicks_reach_the_next_frame() {
        let mut simulator = Simulator::new(Size::new(100.0, 100.0));
        let mut clickable = Clickable::new();

        simulator.click_at(Point::new(5.0, 5.0));
        let _ = simulator.frame(|_, ctx| {
            clickable.layout(ctx, |_| Dimensions::new(Size::new(10.0, 10.0)))
        });

        assert!(clickable.clicked());
        assert_eq!(simulator.frames(), 1);
    }

    #[test]
    fn events_are_consumed_by_the_frame() {
        let mut simulator = Simulator::new(Size::new(100.0, 100.0));
        let mut clickable = Clickable::new();

        simulator.click_at(Point::new(5.0, 5.0));
        let _ = simulator.frame(|_, _| Dimensions::ZERO);
        let _ = simulator.frame(|_, ctx| {
            clickable.layout(ctx, |_| Dimensions::new(Size::new(10.0, 10.0)))
        });

        assert!(!clickable.clicked());
        assert!(clickable.hovered());
    }
}
