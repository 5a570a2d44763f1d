//! Handle events of a user interface.
use crate::keyboard;
use crate::mouse;

/// A user interface event.
///
/// Hosts translate their windowing events into [`Event`]s and feed them to
/// an [`Input`](crate::Input) before building a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A keyboard event
    Keyboard(keyboard::Event),

    /// A mouse event
    Mouse(mouse::Event),
}

impl From<mouse::Event> for Event {
    fn from(event: mouse::Event) -> Self {
        Event::Mouse(event)
    }
}

impl From<keyboard::Event> for Event {
    fn from(event: keyboard::Event) -> Self {
        Event::Keyboard(event)
    }
}
