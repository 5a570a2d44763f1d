//! Styling for menu bars.
use crate::core::{Color, Theme};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The appearance of a menu bar and its dropdowns.
///
/// Besides colors it carries the metrics of the menu, so a loaded
/// appearance can reproduce a classic look exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Appearance {
    /// The background of the bar, its labels and the dropdowns.
    pub background: Color,
    /// The background of the active group label and hovered items.
    pub selected: Color,
    /// The border [`Color`] of a dropdown.
    pub border_color: Color,
    /// The border width of a dropdown.
    pub border_width: f32,
    /// The color of labels and shortcut hints.
    pub text_color: Color,
    /// The color of disabled items.
    pub disabled_text_color: Color,
    /// The color of the rule drawn by a divider.
    pub divider_color: Color,
    /// The font size of every label.
    pub text_size: f32,
    /// The padding around a group label in the bar.
    pub label_padding: f32,
    /// The padding around an item in a dropdown.
    pub item_padding: f32,
    /// The horizontal space between group labels.
    pub group_spacing: f32,
    /// The space between an item label and its shortcut hint, in unscaled
    /// units.
    pub shortcut_spacing: f32,
    /// The height of a divider.
    pub divider_height: f32,
}

impl Appearance {
    /// The classic look: a pale surface, a cyan highlight and black text.
    pub fn classic() -> Self {
        let text_color = Color::from_packed(0x000000FF);

        Self {
            background: Color::from_packed(0xEFFFFFFF),
            selected: Color::from_packed(0x9CEFEFFF),
            border_color: Color::from_packed(0x9CEFEFFF),
            text_color,
            disabled_text_color: Color::from_packed(0xAAAAAAFF),
            divider_color: text_color,
            ..Self::METRICS
        }
    }

    const METRICS: Appearance = Appearance {
        background: Color::WHITE,
        selected: Color::WHITE,
        border_color: Color::BLACK,
        border_width: 1.0,
        text_color: Color::BLACK,
        disabled_text_color: Color::BLACK,
        divider_color: Color::BLACK,
        text_size: 12.0,
        label_padding: 1.0,
        item_padding: 2.0,
        group_spacing: 5.0,
        shortcut_spacing: 10.0,
        divider_height: 15.0,
    };
}

impl Default for Appearance {
    fn default() -> Self {
        Self::classic()
    }
}

/// The style sheet of a menu bar and its dropdowns.
pub trait StyleSheet {
    /// The supported style of the [`StyleSheet`].
    type Style: Default + Clone;

    /// Produces the [`Appearance`] of a menu bar and its dropdowns.
    fn appearance(&self, style: &Self::Style) -> Appearance;
}

/// The style of a menu bar.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub enum Style {
    /// Colors taken from the menu component of the [`Theme`].
    #[default]
    Default,
    /// The classic look, whatever the theme.
    Classic,
    /// A fixed [`Appearance`].
    Custom(Appearance),
}

impl StyleSheet for Theme {
    type Style = Style;

    fn appearance(&self, style: &Self::Style) -> Appearance {
        match style {
            Style::Default => {
                let menu = &self.menu;

                Appearance {
                    background: menu.base,
                    selected: menu.selected,
                    border_color: menu.border,
                    text_color: menu.on,
                    disabled_text_color: menu.on_disabled,
                    divider_color: menu.divider,
                    ..Appearance::METRICS
                }
            }
            Style::Classic => Appearance::classic(),
            Style::Custom(appearance) => *appearance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_matches_the_classic_colors() {
        let appearance = Theme::light().appearance(&Style::Default);

        assert_eq!(appearance.background, Appearance::classic().background);
        assert_eq!(appearance.selected, Appearance::classic().selected);
        assert_eq!(appearance.text_size, 12.0);
    }

    #[test]
    fn custom_style_is_used_as_is() {
        let appearance = Appearance {
            group_spacing: 8.0,
            ..Appearance::classic()
        };

        assert_eq!(
            Theme::dark().appearance(&Style::Custom(appearance)),
            appearance
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_appearances_fill_in_defaults() {
        let appearance: Appearance = ron::from_str("(group_spacing: 8.0)").expect("valid RON");

        assert_eq!(appearance.group_spacing, 8.0);
        assert_eq!(appearance.divider_height, 15.0);
    }
}
