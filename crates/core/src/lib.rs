//! The core library of trace_ui.
//!
//! This library holds the basic types that the widgets of trace_ui are built
//! on: geometry, colors, layout [`Limits`] and [`Dimensions`], the recorded
//! drawing [`Ops`] of a frame, the per-frame [`Input`] snapshot and the
//! [`Clickable`] primitive that turns it into click and hover edges.
//!
//! Widgets are laid out every frame. A frame is built by creating a
//! [`Context`] over an [`Ops`] list and an [`Input`] and handing it to the
//! root widget:
//!
//! ```
//! use trace_ui_core::{Context, Cursor, Input, Limits, Ops, Point, Size};
//!
//! let mut ops = Ops::new();
//! let mut input = Input::new(Cursor::Available(Point::new(10.0, 4.0)));
//! let mut ctx = Context::new(
//!     &mut ops,
//!     Limits::new(Size::ZERO, Size::new(800.0, 600.0)),
//!     Some(&mut input),
//! );
//!
//! assert!(ctx.is_interactive());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod clickable;
pub mod context;
pub mod event;
pub mod input;
pub mod keyboard;
pub mod layout;
pub mod mouse;
pub mod renderer;
pub mod text;
pub mod theme;
pub mod window;

mod color;
mod padding;
mod point;
mod rectangle;
mod size;
mod vector;

pub use clickable::{Clickable, Edges};
pub use color::Color;
pub use context::Context;
pub use event::Event;
pub use input::Input;
pub use layout::{Dimensions, Limits};
pub use mouse::Cursor;
pub use padding::Padding;
pub use point::Point;
pub use rectangle::Rectangle;
pub use renderer::{Border, Ops, Primitive, Quad};
pub use size::Size;
pub use text::Shaper;
pub use theme::Theme;
pub use vector::Vector;
pub use window::Window;
