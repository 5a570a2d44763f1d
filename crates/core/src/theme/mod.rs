//! Colors for the widgets of a window.
//!
//! The theme is organized into:
//! - **Palette**: the raw color values
//! - **Component**: widget state colors (base, hover, pressed, disabled, etc.)
//!
//! Themes can be loaded from RON files with [`load_theme_from_file`].
mod component;
mod loader;
pub mod palette;


pub use component::Component;
pub use loader::{LoadError, THEME_ENV, load_system_theme, load_theme_from_file};
pub use palette::Palette;

use crate::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The colors of every widget of a window.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Theme {
    /// The name of the theme.
    pub name: String,

    /// The window background and its text.
    pub background: Component,

    /// Menu bars and their dropdowns.
    pub menu: Component,

    /// Standard buttons.
    pub button: Component,

    /// Accent buttons.
    pub accent: Component,

    /// The underlying color palette.
    pub palette: Palette,

    /// Whether this is a dark theme.
    pub is_dark: bool,

    /// Overlay shade color, for modals that dim what is behind them.
    pub shade: Color,
}

impl Theme {
    /// The default light theme.
    pub fn light() -> Self {
        Self::from_palette(Palette::light(), false)
    }

    /// The default dark theme.
    pub fn dark() -> Self {
        Self::from_palette(Palette::dark(), true)
    }

    /// Creates a custom theme with the given name and palette.
    pub fn custom(name: impl Into<String>, palette: Palette) -> Self {
        let is_dark = palette.is_dark();
        let mut theme = Self::from_palette(palette, is_dark);
        theme.name = name.into();
        theme
    }

    /// Create a theme from a palette.
    pub fn from_palette(palette: Palette, is_dark: bool) -> Self {
        Self {
            name: palette.name.clone(),
            background: Component::background(&palette),
            menu: Component::menu(&palette),
            button: Component::button(&palette),
            accent: Component::accent(&palette),
            shade: if is_dark {
                Color::from_rgba(0.0, 0.0, 0.0, 0.5)
            } else {
                Color::from_rgba(0.0, 0.0, 0.0, 0.3)
            },
            palette,
            is_dark,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
