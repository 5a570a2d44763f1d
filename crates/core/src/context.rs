//! The per-frame layout context.
use crate::renderer::{Ops, Primitive, Quad};
use crate::{Color, Input, Limits, Point, Rectangle, Vector};

/// The state a widget is laid out with.
///
/// A [`Context`] carries the [`Limits`] of the widget, its absolute origin,
/// the [`Ops`] list it records into and, unless the widget is only being
/// measured, the [`Input`] of the frame.
///
/// Contexts for children are derived with [`Context::child`],
/// [`Context::record`] and [`Context::measure`]; they borrow from their
/// parent and never outlive it.
#[derive(Debug)]
pub struct Context<'a> {
    /// The constraints of the widget being laid out.
    pub limits: Limits,
    origin: Point,
    ops: &'a mut Ops,
    input: Option<&'a mut Input>,
}

impl<'a> Context<'a> {
    /// Creates a root [`Context`] at the origin.
    ///
    /// Passing `None` as `input` lays out a frame that reacts to nothing.
    pub fn new(ops: &'a mut Ops, limits: Limits, input: Option<&'a mut Input>) -> Self {
        Context {
            limits,
            origin: Point::ORIGIN,
            ops,
            input,
        }
    }

    /// Returns the absolute position of the widget being laid out.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns true if the context reacts to input.
    ///
    /// Contexts created by [`Context::measure`] never do.
    pub fn is_interactive(&self) -> bool {
        self.input.is_some()
    }

    /// Returns the [`Input`] of the frame, unless the context is measuring.
    pub fn input(&mut self) -> Option<&mut Input> {
        self.input.as_deref_mut()
    }

    /// Returns the [`Ops`] list of the context.
    pub fn ops(&mut self) -> &mut Ops {
        self.ops
    }

    /// Derives a context for a child placed at `offset` from this origin.
    pub fn child(&mut self, offset: Vector, limits: Limits) -> Context<'_> {
        Context {
            limits,
            origin: self.origin + offset,
            ops: &mut *self.ops,
            input: self.input.as_deref_mut(),
        }
    }

    /// Derives a context that records into `ops` instead, keeping origin,
    /// limits and input.
    ///
    /// This is how widgets draw something beneath content whose size is only
    /// known after laying it out.
    pub fn record<'b>(&'b mut self, ops: &'b mut Ops) -> Context<'b> {
        Context {
            limits: self.limits,
            origin: self.origin,
            ops,
            input: self.input.as_deref_mut(),
        }
    }

    /// Derives a context for measuring.
    ///
    /// It records into the given scratch `ops` and has no input, so laying out
    /// with it changes no retained widget state.
    pub fn measure<'b>(&self, ops: &'b mut Ops) -> Context<'b> {
        Context {
            limits: self.limits,
            origin: self.origin,
            ops,
            input: None,
        }
    }

    /// Returns the absolute bounds of a region of `size` placed at the origin.
    pub fn bounds(&self, size: crate::Size) -> Rectangle {
        Rectangle::new(self.origin, size)
    }

    /// Records a [`Quad`] given in coordinates relative to the origin.
    pub fn fill_quad(&mut self, quad: Quad, background: Color) {
        let quad = Quad {
            bounds: quad.bounds + (self.origin - Point::ORIGIN),
            ..quad
        };

        self.ops.push(Primitive::Quad { quad, background });
    }

    /// Records a line of text whose top-left corner is at `position`, relative
    /// to the origin.
    pub fn fill_text(&mut self, content: impl Into<String>, position: Point, size: f32, color: Color) {
        self.ops.push(Primitive::Text {
            content: content.into(),
            position: position + (self.origin - Point::ORIGIN),
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Size;

    #[test]
    fn children_draw_at_absolute_positions() {
        let mut ops = Ops::new();
        let mut ctx = Context::new(&mut ops, Limits::NONE, None);

        {
            let mut child = ctx.child(Vector::new(10.0, 5.0), Limits::NONE);
            let mut grandchild = child.child(Vector::new(1.0, 1.0), Limits::NONE);
            grandchild.fill_quad(Quad::new(Rectangle::with_size(Size::new(2.0, 2.0))), Color::BLACK);
        }

        let Some(Primitive::Quad { quad, .. }) = ops.iter().next() else {
            panic!("expected a quad");
        };

        assert_eq!(quad.bounds.position(), Point::new(11.0, 6.0));
    }

    #[test]
    fn measuring_contexts_have_no_input() {
        let mut ops = Ops::new();
        let mut input = Input::default();
        let ctx = Context::new(&mut ops, Limits::NONE, Some(&mut input));
        assert!(ctx.is_interactive());

        let mut scratch = Ops::new();
        let mut measure = ctx.measure(&mut scratch);
        assert!(!measure.is_interactive());
        assert!(measure.input().is_none());
    }
}
