//! trace_ui is a small immediate-mode widget toolkit for the menus and panels
//! of a trace viewer.
//!
//! The host owns its widgets and lays them out once per frame. A frame is a
//! [`Context`] over a list of drawing operations, built from the input that
//! arrived since the previous frame. After laying a widget out, the host polls
//! it for what the user did:
//!
//! ```
//! use trace_ui::core::{Context, Input, Limits, Ops, Size};
//! use trace_ui::core::text::Monospace;
//! use trace_ui::{Menu, MenuGroup, MenuItem, Theme, Window};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Message {
//!     Open,
//!     Quit,
//! }
//!
//! let mut menu = Menu::new(vec![
//!     MenuGroup::new("File")
//!         .item(MenuItem::new("Open", Message::Open).shortcut("Ctrl+O"))
//!         .divider()
//!         .item(MenuItem::new("Quit", Message::Quit)),
//! ]);
//!
//! let theme = Theme::default();
//! let shaper = Monospace::default();
//! let window = Window::new(&theme, &shaper);
//! let mut input = Input::default();
//!
//! // Every frame:
//! let mut ops = Ops::new();
//! let mut ctx = Context::new(
//!     &mut ops,
//!     Limits::new(Size::ZERO, Size::new(1024.0, 768.0)),
//!     Some(&mut input),
//! );
//! let _ = menu.layout(&window, &mut ctx);
//!
//! if let Some(message) = menu.selected() {
//!     println!("{message:?}");
//! }
//!
//! input.next_frame();
//! ```
//!
//! # Themes
//! Colors come from a [`Theme`]. The built-in light theme reproduces the
//! classic pale cyan look; with the `serde` feature, themes can be loaded from
//! RON files with [`theme::load_theme_from_file`], or picked up from the
//! `TRACE_UI_THEME` environment variable with [`theme::load_system_theme`].
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use trace_ui_core as core;
pub use trace_ui_widget as widget;

pub use crate::core::theme;
pub use crate::core::{Clickable, Color, Context, Dimensions, Event, Input, Theme, Window};
pub use crate::widget::menu;
pub use crate::widget::panel;
pub use crate::widget::{
    Menu, MenuDivider, MenuGroup, MenuItem, Modal, Panel, PanelButtons, Widget, WidgetPanel,
};
