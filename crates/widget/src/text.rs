//! Draw single lines of text.
use crate::core::text::Measurement;
use crate::core::{Color, Context, Dimensions, Point, Window};

/// A single line of text in one color and size.
///
/// # Example
/// ```
/// use trace_ui_widget::TextLine;
/// use trace_ui_widget::core::Color;
///
/// let label = TextLine::new(Color::BLACK, 12.0);
/// # let _ = label;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLine {
    /// The color of the text.
    pub color: Color,
    /// The font size, in logical pixels.
    pub size: f32,
}

impl TextLine {
    /// Creates a new [`TextLine`].
    pub fn new(color: Color, size: f32) -> Self {
        TextLine { color, size }
    }

    /// Measures `content` without drawing it.
    pub fn measure(&self, window: &Window<'_>, content: &str) -> Measurement {
        window.shaper.measure(content, self.size)
    }

    /// Draws `content` at the origin of `ctx` and returns its natural size.
    pub fn layout(&self, window: &Window<'_>, ctx: &mut Context<'_>, content: &str) -> Dimensions {
        let measurement = self.measure(window, content);

        if !content.is_empty() {
            ctx.fill_text(content, Point::ORIGIN, self.size, self.color);
        }

        Dimensions {
            size: ctx.limits.constrain(measurement.size),
            baseline: measurement.baseline,
        }
    }
}
