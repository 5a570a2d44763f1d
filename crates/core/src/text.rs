//! Measure text.
use crate::Size;

/// The measured extent of a line of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurement {
    /// The size of the line box.
    pub size: Size,
    /// The distance from the top of the line box to the baseline.
    pub baseline: f32,
}

/// A text shaper.
///
/// Widgets use it to find out how much space a single line of text takes
/// before recording it.
pub trait Shaper {
    /// Measures `content` set at the given font `size`.
    fn measure(&self, content: &str, size: f32) -> Measurement;
}

/// A [`Shaper`] for fixed-width fonts.
///
/// Every character advances by the same amount, which makes layouts
/// predictable. It is the shaper used in headless tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monospace {
    /// The advance of a character, as a fraction of the font size.
    pub advance: f32,
    /// The height of a line, as a fraction of the font size.
    pub line_height: f32,
    /// The ascent of the font, as a fraction of the font size.
    pub ascent: f32,
}

impl Default for Monospace {
    fn default() -> Self {
        Monospace {
            advance: 0.5,
            line_height: 1.25,
            ascent: 1.0,
        }
    }
}

impl Shaper for Monospace {
    fn measure(&self, content: &str, size: f32) -> Measurement {
        let characters = content.chars().count() as f32;

        Measurement {
            size: Size::new(
                (characters * self.advance * size).ceil(),
                (self.line_height * size).ceil(),
            ),
            baseline: (self.ascent * size).ceil(),
        }
    }
}
