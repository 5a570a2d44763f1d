//! Sample the pointer and keyboard once per frame.
//!
//! An [`Input`] is the snapshot of everything that happened since the previous
//! frame. It carries edges (a press, a release, an <kbd>Escape</kbd>) rather
//! than a queue: whichever widget claims an edge while the frame is being laid
//! out consumes it, and edges nobody claims are dropped with the next
//! [`Input::next_frame`].
use crate::keyboard::{self, Key, Named};
use crate::mouse::{self, Cursor};
use crate::{Event, Rectangle};

/// The input of a single frame.
#[derive(Debug, Clone, Default)]
pub struct Input {
    cursor: Cursor,
    pressed: bool,
    released: bool,
    press_claimed: bool,
    escape: bool,
    occluded: Vec<Rectangle>,
    /// Releases of finished frames, counting at most one per frame.
    releases: u64,
}

impl Input {
    /// Creates an [`Input`] with the cursor at the given position and no
    /// pending edges.
    pub fn new(cursor: Cursor) -> Self {
        Input {
            cursor,
            ..Self::default()
        }
    }

    /// Accumulates an [`Event`] into the snapshot.
    pub fn handle(&mut self, event: &Event) {
        match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor = Cursor::Available(*position);
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                self.cursor = Cursor::Unavailable;
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                self.pressed = true;
                self.press_claimed = false;
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.released = true;
            }
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
            }) => {
                self.escape = true;
            }
            Event::Mouse(_) | Event::Keyboard(_) => {}
        }
    }

    /// Drops every edge of the finished frame, keeping the cursor position.
    pub fn next_frame(&mut self) {
        self.releases += u64::from(self.released);
        self.pressed = false;
        self.released = false;
        self.press_claimed = false;
        self.escape = false;
        self.occluded.clear();
    }

    /// Returns the [`Cursor`] of the frame.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns true if the cursor is over `bounds` and no overlay laid out
    /// earlier in the frame covers that position.
    pub fn is_over(&self, bounds: Rectangle) -> bool {
        self.cursor.position().is_some_and(|position| {
            bounds.contains(position) && !self.occluded.iter().any(|area| area.contains(position))
        })
    }

    /// Claims the left press of the frame if it happened over `bounds`.
    ///
    /// Only one region can claim a press; later claims fail.
    pub fn claim_press(&mut self, bounds: Rectangle) -> bool {
        if self.pressed && !self.press_claimed && self.is_over(bounds) {
            self.press_claimed = true;
            return true;
        }

        false
    }

    /// Returns true if the left button was released during the frame.
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Returns the number of frames with a left release so far, this one
    /// included.
    ///
    /// Regions that hold a press compare it between layouts to find out
    /// whether the button was released while they were not laid out.
    pub fn release_count(&self) -> u64 {
        self.releases + u64::from(self.released)
    }

    /// Claims the <kbd>Escape</kbd> press of the frame, if any.
    pub fn claim_escape(&mut self) -> bool {
        std::mem::take(&mut self.escape)
    }

    /// Hides `bounds` from the hover and press tests of every region laid out
    /// after this call in the same frame.
    pub fn occlude(&mut self, bounds: Rectangle) {
        self.occluded.push(bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, Size};

    fn area(x: f32) -> Rectangle {
        Rectangle::new(Point::new(x, 0.0), Size::new(10.0, 10.0))
    }

    #[test]
    fn a_press_is_claimed_once() {
        let mut input = Input::new(Cursor::Available(Point::new(5.0, 5.0)));
        input.handle(&Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)));

        assert!(input.claim_press(area(0.0)));
        assert!(!input.claim_press(area(0.0)));
    }

    #[test]
    fn occluded_regions_are_not_hovered() {
        let mut input = Input::new(Cursor::Available(Point::new(5.0, 5.0)));
        assert!(input.is_over(area(0.0)));

        input.occlude(area(0.0));
        assert!(!input.is_over(area(0.0)));

        input.next_frame();
        assert!(input.is_over(area(0.0)));
    }

    #[test]
    fn right_button_is_ignored() {
        let mut input = Input::new(Cursor::Available(Point::new(5.0, 5.0)));
        input.handle(&Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right)));

        assert!(!input.claim_press(area(0.0)));
    }

    #[test]
    fn releases_are_counted_once_per_frame() {
        let mut input = Input::new(Cursor::Unavailable);
        let release = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));

        input.handle(&release);
        input.handle(&release);
        assert_eq!(input.release_count(), 1);

        input.next_frame();
        assert_eq!(input.release_count(), 1);

        input.next_frame();
        input.handle(&release);
        assert_eq!(input.release_count(), 2);
    }

    #[test]
    fn edges_do_not_survive_the_frame() {
        let mut input = Input::new(Cursor::Unavailable);
        input.handle(&Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
        }));
        input.next_frame();

        assert!(!input.claim_escape());
    }
}
