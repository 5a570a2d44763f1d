use super::style::Appearance;
use crate::core::renderer::Quad;
use crate::core::{Context, Dimensions, Point, Rectangle, Size};

/// A thin horizontal rule separating entries of a dropdown.
///
/// A divider takes the full minimum width it is given and
/// [`Appearance::divider_height`] vertically, with a one pixel rule across
/// its middle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuDivider;

impl MenuDivider {
    /// Creates a new [`MenuDivider`].
    pub fn new() -> Self {
        MenuDivider
    }

    /// Lays out the divider.
    pub fn layout(&self, ctx: &mut Context<'_>, appearance: &Appearance) -> Dimensions {
        let width = ctx.limits.min.width;
        let height = appearance.divider_height;

        ctx.fill_quad(
            Quad::new(Rectangle::new(
                Point::new(0.0, (height / 2.0).floor()),
                Size::new(width, 1.0),
            )),
            appearance.divider_color,
        );

        Dimensions::new(Size::new(width, height))
    }
}
