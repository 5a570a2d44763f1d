use crate::Size;

/// The result of laying out a widget: its final size and text baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    /// The size the widget occupies.
    pub size: Size,
    /// The distance from the top of the widget to the baseline of its first
    /// line of text, or zero when the widget has no text.
    pub baseline: f32,
}

impl Dimensions {
    /// Zero-sized [`Dimensions`] without a baseline.
    pub const ZERO: Dimensions = Dimensions {
        size: Size::ZERO,
        baseline: 0.0,
    };

    /// Creates new [`Dimensions`] of the given [`Size`] without a baseline.
    pub const fn new(size: Size) -> Self {
        Dimensions {
            size,
            baseline: 0.0,
        }
    }

    /// Sets the baseline of the [`Dimensions`].
    #[must_use]
    pub const fn with_baseline(self, baseline: f32) -> Self {
        Dimensions { baseline, ..self }
    }
}
