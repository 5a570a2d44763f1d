//! Color palette for the theme.
use crate::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The raw colors a [`Theme`](super::Theme) is derived from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Palette {
    /// Palette name.
    pub name: String,

    /// Eleven neutral levels, from the background end (0) to the text end
    /// (10).
    pub neutrals: [Color; 11],

    /// Surface color of popups and bars.
    pub surface: Color,

    /// Strong accent, used for primary buttons.
    pub accent: Color,

    /// Soft accent, used to highlight hovered and selected entries.
    pub highlight: Color,

    /// Color of destructive actions.
    pub destructive: Color,
}

impl Palette {
    /// The light palette of the trace viewer: pale cyan surfaces with a
    /// cyan highlight.
    pub fn light() -> Self {
        Self {
            name: "Light".into(),
            neutrals: [
                Color::WHITE,
                Color::from_packed(0xF7F7F7FF),
                Color::from_packed(0xEEEEEEFF),
                Color::from_packed(0xDDDDDDFF),
                Color::from_packed(0xCCCCCCFF),
                Color::from_packed(0xAAAAAAFF),
                Color::from_packed(0x888888FF),
                Color::from_packed(0x666666FF),
                Color::from_packed(0x444444FF),
                Color::from_packed(0x222222FF),
                Color::BLACK,
            ],
            surface: Color::from_packed(0xEFFFFFFF),
            accent: Color::from_packed(0x2A8C8CFF),
            highlight: Color::from_packed(0x9CEFEFFF),
            destructive: Color::from_packed(0xD33F3FFF),
        }
    }

    /// The dark palette.
    pub fn dark() -> Self {
        Self {
            name: "Dark".into(),
            neutrals: [
                Color::from_packed(0x121212FF),
                Color::from_packed(0x1C1C1CFF),
                Color::from_packed(0x262626FF),
                Color::from_packed(0x333333FF),
                Color::from_packed(0x444444FF),
                Color::from_packed(0x5E5E5EFF),
                Color::from_packed(0x7A7A7AFF),
                Color::from_packed(0x9E9E9EFF),
                Color::from_packed(0xBDBDBDFF),
                Color::from_packed(0xDDDDDDFF),
                Color::WHITE,
            ],
            surface: Color::from_packed(0x1E2828FF),
            accent: Color::from_packed(0x5CC8C8FF),
            highlight: Color::from_packed(0x2E5C5CFF),
            destructive: Color::from_packed(0xFF7A70FF),
        }
    }

    /// Returns the neutral at `index`, clamping to the text end.
    pub fn neutral(&self, index: usize) -> Color {
        self.neutrals[index.min(self.neutrals.len() - 1)]
    }

    /// Returns true if the palette's background end is dark.
    pub fn is_dark(&self) -> bool {
        self.neutrals[0].luminance() < 0.5
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}
