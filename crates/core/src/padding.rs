use crate::Vector;

/// An amount of space to pad for each side of a box.
///
/// ```
/// # use trace_ui_core::Padding;
/// #
/// let padding = Padding::from(2.0);
///
/// assert_eq!(padding.horizontal(), 4.0);
/// assert_eq!(padding.offset(), trace_ui_core::Vector::new(2.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    /// Top padding
    pub top: f32,
    /// Right padding
    pub right: f32,
    /// Bottom padding
    pub bottom: f32,
    /// Left padding
    pub left: f32,
}

impl Padding {
    /// Padding of zero
    pub const ZERO: Padding = Padding::new(0.0);

    /// Create a [`Padding`] that is equal on all sides.
    pub const fn new(padding: f32) -> Padding {
        Padding {
            top: padding,
            right: padding,
            bottom: padding,
            left: padding,
        }
    }

    /// Returns the total amount of horizontal [`Padding`].
    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }

    /// Returns the total amount of vertical [`Padding`].
    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }

    /// Returns the offset of the padded content from the outer top-left corner.
    pub fn offset(self) -> Vector {
        Vector::new(self.left, self.top)
    }
}

impl From<f32> for Padding {
    fn from(padding: f32) -> Self {
        Padding::new(padding)
    }
}
