//! Decorate content with backgrounds, borders and padding.
//!
//! These helpers lay out their content first and then draw beneath or
//! around it, so the decoration always matches the size the content
//! actually took.
use crate::core::renderer::{Border, Quad};
use crate::core::{Color, Context, Dimensions, Ops, Padding, Rectangle};

/// Lays out `content` and fills the area it took with `color`, beneath it.
pub fn background(
    ctx: &mut Context<'_>,
    color: Color,
    content: impl FnOnce(&mut Context<'_>) -> Dimensions,
) -> Dimensions {
    let mut recorded = Ops::new();
    let dimensions = content(&mut ctx.record(&mut recorded));

    ctx.fill_quad(Quad::new(Rectangle::with_size(dimensions.size)), color);
    ctx.ops().extend(recorded);

    dimensions
}

/// Lays out `content` inside a border of the given `width` and `color`.
///
/// The border adds `width` on every side.
pub fn bordered(
    ctx: &mut Context<'_>,
    color: Color,
    width: f32,
    content: impl FnOnce(&mut Context<'_>) -> Dimensions,
) -> Dimensions {
    let padding = Padding::new(width);
    let dimensions = inset(ctx, padding, content);

    ctx.fill_quad(
        Quad::new(Rectangle::with_size(dimensions.size)).border(Border { color, width }),
        Color::TRANSPARENT,
    );

    dimensions
}

/// Lays out `content` with the given `padding` around it.
pub fn inset(
    ctx: &mut Context<'_>,
    padding: Padding,
    content: impl FnOnce(&mut Context<'_>) -> Dimensions,
) -> Dimensions {
    let limits = ctx.limits.shrink(padding);
    let inner = content(&mut ctx.child(padding.offset(), limits));

    Dimensions {
        size: ctx.limits.constrain(inner.size.expand(padding)),
        baseline: inner.baseline + padding.top,
    }
}
