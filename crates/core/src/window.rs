//! The window a frame is built for.
use crate::Theme;
use crate::text::Shaper;

/// The window-wide collaborators of a frame.
///
/// A [`Window`] is handed to every widget next to its
/// [`Context`](crate::Context). It is cheap to copy.
#[derive(Clone, Copy)]
pub struct Window<'a> {
    /// The [`Theme`] widgets take their colors from.
    pub theme: &'a Theme,
    /// The [`Shaper`] used to measure text.
    pub shaper: &'a dyn Shaper,
    /// The number of physical pixels per density-independent pixel.
    pub scale_factor: f32,
}

impl<'a> Window<'a> {
    /// Creates a [`Window`] with a scale factor of one.
    pub fn new(theme: &'a Theme, shaper: &'a dyn Shaper) -> Self {
        Window {
            theme,
            shaper,
            scale_factor: 1.0,
        }
    }

    /// Sets the scale factor of the [`Window`].
    #[must_use]
    pub fn scale_factor(self, scale_factor: f32) -> Self {
        Window {
            scale_factor,
            ..self
        }
    }

    /// Converts density-independent pixels into pixels, rounding to the
    /// nearest whole pixel.
    pub fn dp(&self, value: f32) -> f32 {
        (value * self.scale_factor).round()
    }
}

impl std::fmt::Debug for Window<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("theme", &self.theme.name)
            .field("scale_factor", &self.scale_factor)
            .finish_non_exhaustive()
    }
}
