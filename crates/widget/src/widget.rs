use crate::core::{Context, Dimensions, Window};

/// A value that can be laid out for a frame.
///
/// Laying out both measures the widget and records its drawing operations
/// into the [`Context`]. Implementors keep their retained state in `self`.
pub trait Widget {
    /// Lays out the widget within the limits of `ctx`.
    fn layout(&mut self, window: &Window<'_>, ctx: &mut Context<'_>) -> Dimensions;
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn layout(&mut self, window: &Window<'_>, ctx: &mut Context<'_>) -> Dimensions {
        self.as_mut().layout(window, ctx)
    }
}

/// Turns a closure into a [`Widget`].
///
/// ```
/// use trace_ui_widget::core::{Dimensions, Size};
/// use trace_ui_widget::{Widget, from_fn};
///
/// let spacer = from_fn(|_window, _ctx| Dimensions::new(Size::new(4.0, 4.0)));
/// # let _: &dyn Widget = &spacer;
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut(&Window<'_>, &mut Context<'_>) -> Dimensions,
{
    FromFn(f)
}

/// A [`Widget`] backed by a closure. See [`from_fn`].
pub struct FromFn<F>(F);

impl<F> Widget for FromFn<F>
where
    F: FnMut(&Window<'_>, &mut Context<'_>) -> Dimensions,
{
    fn layout(&mut self, window: &Window<'_>, ctx: &mut Context<'_>) -> Dimensions {
        (self.0)(window, ctx)
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FromFn")
    }
}
