use crate::{Padding, Size};

/// A set of size constraints for layouting.
///
/// A widget laid out under some [`Limits`] must produce a size between
/// [`Limits::min`] and [`Limits::max`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    /// The minimum size a widget may take.
    pub min: Size,
    /// The maximum size a widget may take.
    pub max: Size,
}

impl Limits {
    /// No limits
    pub const NONE: Limits = Limits {
        min: Size::ZERO,
        max: Size::INFINITY,
    };

    /// Creates new [`Limits`] with the given minimum and maximum [`Size`].
    pub const fn new(min: Size, max: Size) -> Limits {
        Limits { min, max }
    }

    /// Returns [`Limits`] with the same maximum and no minimum.
    #[must_use]
    pub fn loose(self) -> Limits {
        Limits::new(Size::ZERO, self.max)
    }

    /// Pins both the minimum and the maximum width to `width`.
    #[must_use]
    pub fn fixed_width(self, width: f32) -> Limits {
        Limits {
            min: Size::new(width, self.min.height),
            max: Size::new(width, self.max.height),
        }
    }

    /// Lifts the maximum width, leaving the minimum at zero.
    #[must_use]
    pub fn unbounded_width(self) -> Limits {
        Limits {
            min: Size::new(0.0, self.min.height),
            max: Size::new(f32::INFINITY, self.max.height),
        }
    }

    /// Shrinks the maximum height by `amount`, stopping at zero.
    #[must_use]
    pub fn shrink_height(self, amount: f32) -> Limits {
        let max_height = (self.max.height - amount).max(0.0);

        Limits {
            min: Size::new(self.min.width, self.min.height.min(max_height)),
            max: Size::new(self.max.width, max_height),
        }
    }

    /// Shrinks both bounds by the given [`Padding`].
    #[must_use]
    pub fn shrink(self, padding: Padding) -> Limits {
        Limits {
            min: self.min.shrink(padding),
            max: self.max.shrink(padding),
        }
    }

    /// Clamps the given [`Size`] into these [`Limits`].
    pub fn constrain(&self, size: Size) -> Size {
        size.max(self.min).min(self.max)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits::NONE
    }
}
