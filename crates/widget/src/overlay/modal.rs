//! A modal overlay helper.
//!
//! A [`Modal`] lays its content out on top of everything else in the frame
//! and covers the rest of its area with a backdrop. Pressing the backdrop or
//! hitting <kbd>Esc</kbd> dismisses it; the owner finds out by polling
//! [`Modal::cancelled`] and decides what dismissal means.
use crate::core::renderer::Quad;
use crate::core::{Color, Context, Dimensions, Ops, Rectangle, Window};

/// The retained state of a dismissible overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Modal {
    cancelled: bool,
    shade: Option<Color>,
}

impl Modal {
    /// Creates a new [`Modal`] with a transparent backdrop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dims everything behind the modal with `color`.
    #[must_use]
    pub fn shade(mut self, color: Color) -> Self {
        self.shade = Some(color);
        self
    }

    /// Lays out `content` as an overlay anchored at the origin of `ctx`.
    ///
    /// The backdrop spans the maximum limits of `ctx`; when those are
    /// unbounded it shrinks to the content. Widgets laid out by `content` see
    /// input first; presses they do not claim and that land on the backdrop
    /// dismiss the modal. After this call the backdrop hides the cursor from
    /// everything laid out later in the frame.
    pub fn layout(
        &mut self,
        window: &Window<'_>,
        ctx: &mut Context<'_>,
        content: impl FnOnce(&Window<'_>, &mut Context<'_>) -> Dimensions,
    ) -> Dimensions {
        let _span = tracing::trace_span!("modal.layout").entered();

        let mut recorded = Ops::new();
        let content = content(window, &mut ctx.record(&mut recorded));

        let max = ctx.limits.max;
        let size = if max.width.is_finite() && max.height.is_finite() {
            max
        } else {
            content.size
        };

        if let Some(shade) = self.shade {
            ctx.fill_quad(Quad::new(Rectangle::with_size(size)), shade);
        }
        ctx.ops().extend(recorded);

        let bounds = ctx.bounds(size);

        if let Some(input) = ctx.input() {
            let pressed = input.claim_press(bounds);
            let escaped = input.claim_escape();

            if pressed || escaped {
                log::debug!("modal dismissed (backdrop press: {pressed}, escape: {escaped})");
                self.cancelled = true;
            }

            input.occlude(bounds);
        }

        Dimensions::new(size)
    }

    /// Returns true, once, if the modal was dismissed since the last call.
    pub fn cancelled(&mut self) -> bool {
        std::mem::take(&mut self.cancelled)
    }

    /// Forgets a pending dismissal.
    pub fn reset(&mut self) {
        self.cancelled = false;
    }
}
