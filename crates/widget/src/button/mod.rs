//! Buttons allow your users to perform actions by pressing them.
//!
//! A [`Button`] does not own its click state. It borrows a
//! [`Clickable`](crate::core::Clickable) that the caller keeps across frames
//! and polls after laying the button out:
//!
//! ```
//! use trace_ui_widget::button;
//! use trace_ui_widget::core::Clickable;
//!
//! struct Toolbar {
//!     refresh: Clickable,
//! }
//!
//! # fn frame(toolbar: &mut Toolbar, window: &trace_ui_widget::Window<'_>, ctx: &mut trace_ui_widget::Context<'_>) {
//! let _ = button(&mut toolbar.refresh, "Refresh").layout(window, ctx);
//!
//! if toolbar.refresh.clicked() {
//!     // reload the trace
//! }
//! # }
//! ```
mod widget;

pub use widget::*;
