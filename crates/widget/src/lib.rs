//! The widgets of trace_ui: a dropdown [`Menu`] bar and decorated
//! [`Panel`]s.
//!
//! Every widget is laid out once per frame against a [`Window`] and a
//! [`Context`]. Widgets keep their interaction state (which group is open,
//! which button was pressed) in themselves, so the host creates them once and
//! lays the same values out again every frame.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use trace_ui_core as core;

pub mod button;
pub mod container;
pub mod menu;
pub mod overlay;
pub mod panel;
pub mod text;

mod widget;

pub use button::{Button, button};
pub use menu::{Menu, MenuDivider, MenuGroup, MenuItem};
pub use overlay::modal::Modal;
pub use panel::{Panel, PanelButtons, WidgetPanel};
pub use text::TextLine;
pub use widget::{FromFn, Widget, from_fn};

pub use crate::core::{Context, Dimensions, Theme, Window};
