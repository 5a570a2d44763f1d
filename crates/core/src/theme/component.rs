//! Component styling for widget states.
//!
//! A Component defines colors for all interactive states of a widget.
use crate::Color;

use super::Palette;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Colors for a component/widget across all interaction states.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Component {
    /// Base/normal state background color.
    pub base: Color,

    /// Hovered state background color.
    pub hover: Color,

    /// Pressed state background color.
    pub pressed: Color,

    /// Selected state background color.
    pub selected: Color,

    /// Divider/separator color within the component.
    pub divider: Color,

    /// Text/icon color on the component.
    pub on: Color,

    /// Text color when disabled.
    pub on_disabled: Color,

    /// Border color.
    pub border: Color,
}

impl Component {
    /// Create a new component with all state colors set to `base`.
    pub fn new(base: Color, on: Color) -> Self {
        Self {
            base,
            hover: base,
            pressed: base,
            selected: base,
            divider: on,
            on,
            on_disabled: on.scale_alpha(0.5),
            border: Color::TRANSPARENT,
        }
    }

    /// The window background.
    pub fn background(palette: &Palette) -> Self {
        Self::new(palette.neutral(0), palette.neutral(10))
    }

    /// Menu bars and dropdowns: the surface color, highlighted with the soft
    /// accent, bordered with it too.
    pub fn menu(palette: &Palette) -> Self {
        Self {
            hover: palette.highlight,
            pressed: palette.highlight,
            selected: palette.highlight,
            border: palette.highlight,
            on_disabled: palette.neutral(5),
            ..Self::new(palette.surface, palette.neutral(10))
        }
    }

    /// Standard buttons.
    pub fn button(palette: &Palette) -> Self {
        Self {
            hover: palette.neutral(3),
            pressed: palette.neutral(4),
            selected: palette.highlight,
            border: palette.neutral(6),
            on_disabled: palette.neutral(5),
            ..Self::new(palette.neutral(2), palette.neutral(10))
        }
    }

    /// Accent-colored buttons, with text in the background color.
    pub fn accent(palette: &Palette) -> Self {
        let on = palette.neutral(0);

        Self {
            hover: palette.accent.scale_alpha(0.9),
            pressed: palette.accent.scale_alpha(0.8),
            selected: palette.accent,
            border: palette.accent,
            ..Self::new(palette.accent, on)
        }
    }
}
