//! A dropdown menu bar.
//!
//! A [`Menu`] is a row of [`MenuGroup`] labels. Each group owns a column of
//! [`Item`]s: clickable [`MenuItem`]s with an optional shortcut hint,
//! [`MenuDivider`]s and arbitrary widgets.
//!
//! The menu is laid out every frame. After laying it out, the host asks it
//! for the message of the item the user picked:
//!
//! ```
//! use trace_ui_test::Simulator;
//! use trace_ui_widget::core::Size;
//! use trace_ui_widget::{Menu, MenuGroup, MenuItem};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Message {
//!     Open,
//! }
//!
//! let mut menu = Menu::new(vec![
//!     MenuGroup::new("File").item(MenuItem::new("Open", Message::Open)),
//! ]);
//! let mut simulator = Simulator::new(Size::new(640.0, 480.0));
//!
//! let _ = simulator.frame(|window, ctx| menu.layout(window, ctx));
//!
//! assert_eq!(menu.selected(), None);
//! ```
mod bar;
mod divider;
mod group;
mod item;

pub mod style;


pub use bar::Menu;
pub use divider::MenuDivider;
pub use group::{Item, MenuGroup};
pub use item::MenuItem;
pub use style::{Appearance, Style, StyleSheet};
