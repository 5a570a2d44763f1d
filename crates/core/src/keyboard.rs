//! Listen to keyboard events.
use smol_str::SmolStr;

/// A key on the keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A key with an established name.
    Named(Named),

    /// A key string that corresponds to the character typed by the user.
    Character(SmolStr),
}

/// A named key.
///
/// Only the keys the widgets react to are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Named {
    /// The <kbd>Escape</kbd> key.
    Escape,
    /// The <kbd>Enter</kbd> key.
    Enter,
    /// The <kbd>Tab</kbd> key.
    Tab,
}

/// A keyboard event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard key was pressed.
    KeyPressed {
        /// The key pressed.
        key: Key,
    },

    /// A keyboard key was released.
    KeyReleased {
        /// The key released.
        key: Key,
    },
}
