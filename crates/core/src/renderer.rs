//! Record the drawing output of a frame.
//!
//! Widgets do not draw directly. They push [`Primitive`]s into an [`Ops`]
//! list, which a rendering backend replays once the frame is complete.
//! Positions are absolute: the [`Context`](crate::Context) translates every
//! primitive by its origin when recording.
use crate::{Color, Point, Rectangle};

/// The border of a [`Quad`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Border {
    /// The color of the border.
    pub color: Color,
    /// The width of the border, drawn inside the bounds of the quad.
    pub width: f32,
}

/// A rectangular primitive, optionally bordered.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quad {
    /// The bounds of the [`Quad`].
    pub bounds: Rectangle,
    /// The [`Border`] of the [`Quad`].
    pub border: Border,
}

impl Quad {
    /// Creates a borderless [`Quad`] covering the given bounds.
    pub fn new(bounds: Rectangle) -> Self {
        Quad {
            bounds,
            border: Border::default(),
        }
    }

    /// Sets the [`Border`] of the [`Quad`].
    #[must_use]
    pub fn border(self, border: Border) -> Self {
        Quad { border, ..self }
    }
}

/// A recorded drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A filled quad.
    Quad {
        /// The shape and border.
        quad: Quad,
        /// The fill color.
        background: Color,
    },
    /// A single line of text.
    Text {
        /// The text to draw.
        content: String,
        /// The top-left corner of the line.
        position: Point,
        /// The font size in logical pixels.
        size: f32,
        /// The text color.
        color: Color,
    },
}

/// The list of drawing instructions of a frame.
///
/// Primitives pushed through [`Ops::defer`] are replayed after every regular
/// primitive, so they end up on top regardless of where in the widget tree
/// they were recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ops {
    primitives: Vec<Primitive>,
    deferred: Vec<Primitive>,
}

impl Ops {
    /// Creates an empty [`Ops`] list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a [`Primitive`].
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Appends all the operations of `other`, keeping its deferred part
    /// deferred.
    pub fn extend(&mut self, other: Ops) {
        self.primitives.extend(other.primitives);
        self.deferred.extend(other.deferred);
    }

    /// Appends all the operations of `other` to the deferred part.
    pub fn defer(&mut self, other: Ops) {
        self.deferred.extend(other.primitives);
        self.deferred.extend(other.deferred);
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty() && self.deferred.is_empty()
    }

    /// Returns the number of recorded primitives, deferred ones included.
    pub fn len(&self) -> usize {
        self.primitives.len() + self.deferred.len()
    }

    /// Iterates over the primitives in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().chain(self.deferred.iter())
    }

    /// Iterates over the text primitives in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> {
        self.iter().filter_map(|primitive| match primitive {
            Primitive::Text {
                content, position, ..
            } => Some((content.as_str(), *position)),
            Primitive::Quad { .. } => None,
        })
    }

    /// Consumes the list, returning the primitives in drawing order.
    pub fn into_primitives(self) -> Vec<Primitive> {
        let mut primitives = self.primitives;
        primitives.extend(self.deferred);
        primitives
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Size;

    fn quad(x: f32) -> Primitive {
        Primitive::Quad {
            quad: Quad::new(Rectangle::new(Point::new(x, 0.0), Size::new(1.0, 1.0))),
            background: Color::BLACK,
        }
    }

    #[test]
    fn deferred_primitives_are_drawn_last() {
        let mut overlay = Ops::new();
        overlay.push(quad(1.0));

        let mut ops = Ops::new();
        ops.defer(overlay);
        ops.push(quad(2.0));

        assert_eq!(ops.into_primitives(), vec![quad(2.0), quad(1.0)]);
    }

    #[test]
    fn extend_keeps_deferred_part_deferred() {
        let mut inner = Ops::new();
        let mut overlay = Ops::new();
        overlay.push(quad(1.0));
        inner.defer(overlay);
        inner.push(quad(2.0));

        let mut ops = Ops::new();
        ops.push(quad(3.0));
        ops.extend(inner);
        ops.push(quad(4.0));

        assert_eq!(ops.len(), 4);
        assert_eq!(
            ops.into_primitives(),
            vec![quad(3.0), quad(2.0), quad(4.0), quad(1.0)]
        );
    }
}
