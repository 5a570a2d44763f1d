//! Turn pointer input into click and hover edges.
use crate::{Context, Dimensions, Input, Rectangle};

/// The edges a [`Clickable`] reports for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    /// A full press and release happened over the region.
    pub clicked: bool,
    /// The cursor was over the region the last time it was laid out.
    pub hovered: bool,
}

/// The retained state of a clickable screen region.
///
/// A [`Clickable`] is updated while it is laid out: [`Clickable::layout`]
/// lays out its content, hit-tests the resulting bounds against the frame's
/// [`Input`] and stores the outcome. The outcome can then be polled with
/// [`Clickable::clicked`], [`Clickable::hovered`] or [`Clickable::poll`].
///
/// Edges are sampled, not queued. A click is visible from the layout that
/// registered it until the next layout, and exactly one consumer may poll it.
/// Polling before laying out in a frame observes the previous frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Clickable {
    pressed: bool,
    clicked: bool,
    hovered: bool,
    bounds: Option<Rectangle>,
    /// [`Input::release_count`] as of the last layout.
    releases: u64,
}

impl Clickable {
    /// Creates a new [`Clickable`] that has never been laid out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays out `content` and makes its bounds clickable.
    ///
    /// When `ctx` is not interactive the retained state is left untouched.
    pub fn layout(
        &mut self,
        ctx: &mut Context<'_>,
        content: impl FnOnce(&mut Context<'_>) -> Dimensions,
    ) -> Dimensions {
        let dimensions = content(ctx);
        let bounds = ctx.bounds(dimensions.size);

        if let Some(input) = ctx.input() {
            self.update(input, bounds);
        }

        dimensions
    }

    fn update(&mut self, input: &mut Input, bounds: Rectangle) {
        // A click that nobody polled since the last layout is lost.
        self.clicked = false;

        // So is a press whose release happened while the region was not
        // laid out.
        let settled = input.release_count() - u64::from(input.is_released());
        if self.pressed && settled > self.releases {
            self.pressed = false;
        }

        self.hovered = input.is_over(bounds);
        self.bounds = Some(bounds);

        if input.claim_press(bounds) {
            self.pressed = true;
        }

        if input.is_released() && self.pressed {
            self.pressed = false;
            self.clicked = input.cursor().is_over(bounds);
        }

        self.releases = input.release_count();
    }

    /// Returns true, once, if the region was clicked.
    pub fn clicked(&mut self) -> bool {
        std::mem::take(&mut self.clicked)
    }

    /// Returns true if the cursor was over the region when it was last laid
    /// out.
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Returns true while a press that started over the region is held.
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Returns the bounds the region had when it was last laid out.
    pub fn bounds(&self) -> Option<Rectangle> {
        self.bounds
    }

    /// Consumes the click edge and returns it together with the hover state.
    pub fn poll(&mut self) -> Edges {
        Edges {
            clicked: self.clicked(),
            hovered: self.hovered,
        }
    }

    /// Forgets every edge and the pressed state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mouse::{self, Button, Cursor};
    use crate::{Event, Limits, Ops, Point, Size};

    fn frame(clickable: &mut Clickable, input: &mut Input) {
        let mut ops = Ops::new();
        let mut ctx = Context::new(&mut ops, Limits::NONE, Some(input));

        let _ = clickable.layout(&mut ctx, |_| Dimensions::new(Size::new(20.0, 10.0)));
    }

    fn at(x: f32, y: f32) -> Input {
        Input::new(Cursor::Available(Point::new(x, y)))
    }

    #[test]
    fn press_and_release_inside_clicks() {
        let mut clickable = Clickable::new();
        let mut input = at(5.0, 5.0);
        input.handle(&Event::Mouse(mouse::Event::ButtonPressed(Button::Left)));
        frame(&mut clickable, &mut input);
        assert!(clickable.pressed());
        assert!(!clickable.clicked());

        input.next_frame();
        input.handle(&Event::Mouse(mouse::Event::ButtonReleased(Button::Left)));
        frame(&mut clickable, &mut input);

        assert!(clickable.clicked());
        assert!(!clickable.clicked());
    }

    #[test]
    fn release_outside_does_not_click() {
        let mut clickable = Clickable::new();
        let mut input = at(5.0, 5.0);
        input.handle(&Event::Mouse(mouse::Event::ButtonPressed(Button::Left)));
        frame(&mut clickable, &mut input);

        input.next_frame();
        input.handle(&Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(50.0, 5.0),
        }));
        input.handle(&Event::Mouse(mouse::Event::ButtonReleased(Button::Left)));
        frame(&mut clickable, &mut input);

        assert!(!clickable.clicked());
        assert!(!clickable.pressed());
    }

    #[test]
    fn unpolled_clicks_are_dropped_by_the_next_layout() {
        let mut clickable = Clickable::new();
        let mut input = at(5.0, 5.0);
        input.handle(&Event::Mouse(mouse::Event::ButtonPressed(Button::Left)));
        input.handle(&Event::Mouse(mouse::Event::ButtonReleased(Button::Left)));
        frame(&mut clickable, &mut input);

        input.next_frame();
        frame(&mut clickable, &mut input);

        assert_eq!(
            clickable.poll(),
            Edges {
                clicked: false,
                hovered: true
            }
        );
    }

    #[test]
    fn releases_missed_while_hidden_drop_the_press() {
        let mut clickable = Clickable::new();
        let mut input = at(5.0, 5.0);
        input.handle(&Event::Mouse(mouse::Event::ButtonPressed(Button::Left)));
        frame(&mut clickable, &mut input);
        assert!(clickable.pressed());

        // Released during a frame that did not lay the region out.
        input.next_frame();
        input.handle(&Event::Mouse(mouse::Event::ButtonReleased(Button::Left)));
        input.next_frame();
        frame(&mut clickable, &mut input);

        assert!(!clickable.pressed());

        input.next_frame();
        input.handle(&Event::Mouse(mouse::Event::ButtonReleased(Button::Left)));
        frame(&mut clickable, &mut input);

        assert!(!clickable.clicked());
    }

    #[test]
    fn measuring_leaves_state_untouched() {
        let mut clickable = Clickable::new();
        let mut ops = Ops::new();
        let ctx = Context::new(&mut ops, Limits::NONE, None);
        let mut scratch = Ops::new();
        let mut measure = ctx.measure(&mut scratch);

        let _ = clickable.layout(&mut measure, |_| Dimensions::new(Size::new(20.0, 10.0)));

        assert_eq!(clickable, Clickable::new());
    }
}
