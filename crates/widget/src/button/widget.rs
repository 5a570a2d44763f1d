use crate::container;
use crate::core::renderer::{Border, Quad};
use crate::core::{
    Clickable, Color, Context, Dimensions, Ops, Padding, Rectangle, Theme, Window, theme,
};
use crate::text::TextLine;

/// A labeled button drawn with the theme.
///
/// Built with [`button`]; consumed by [`Button::layout`].
pub struct Button<'a> {
    clickable: &'a mut Clickable,
    label: &'a str,
    padding: Padding,
    text_size: f32,
    enabled: bool,
    class: StyleFn<'a>,
}

/// Creates a [`Button`] that reports its clicks through `clickable`.
pub fn button<'a>(clickable: &'a mut Clickable, label: &'a str) -> Button<'a> {
    Button {
        clickable,
        label,
        padding: DEFAULT_PADDING,
        text_size: DEFAULT_TEXT_SIZE,
        enabled: true,
        class: Box::new(secondary),
    }
}

impl<'a> Button<'a> {
    /// Sets the [`Padding`] of the [`Button`].
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Sets the font size of the label.
    #[must_use]
    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    /// Sets whether the [`Button`] can be pressed.
    ///
    /// A disabled button is drawn muted and never updates its clickable.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the style of the [`Button`].
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme, Status) -> Style + 'a) -> Self {
        self.class = Box::new(style);
        self
    }

    /// Returns the [`Status`] the button is drawn with this frame.
    ///
    /// Hover and press come from the previous layout of the clickable.
    pub fn status(&self) -> Status {
        if !self.enabled {
            Status::Disabled
        } else if self.clickable.pressed() {
            Status::Pressed
        } else if self.clickable.hovered() {
            Status::Hovered
        } else {
            Status::Active
        }
    }

    /// Lays out and draws the [`Button`].
    pub fn layout(self, window: &Window<'_>, ctx: &mut Context<'_>) -> Dimensions {
        let _span = tracing::trace_span!("button.layout", label = self.label).entered();

        let style = (self.class)(window.theme, self.status());
        let text = TextLine::new(style.text_color, self.text_size);
        let (label, padding) = (self.label, self.padding);

        if self.enabled {
            self.clickable.layout(ctx, |ctx| {
                draw(window, ctx, &style, text, label, padding)
            })
        } else {
            draw(window, ctx, &style, text, label, padding)
        }
    }
}

fn draw(
    window: &Window<'_>,
    ctx: &mut Context<'_>,
    style: &Style,
    text: TextLine,
    label: &str,
    padding: Padding,
) -> Dimensions {
    let mut recorded = Ops::new();
    let dimensions = container::inset(&mut ctx.record(&mut recorded), padding, |ctx| {
        text.layout(window, ctx, label)
    });

    ctx.fill_quad(
        Quad::new(Rectangle::with_size(dimensions.size)).border(style.border),
        style.background,
    );
    ctx.ops().extend(recorded);

    dimensions
}

impl std::fmt::Debug for Button<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

/// The default [`Padding`] of a [`Button`].
pub const DEFAULT_PADDING: Padding = Padding {
    top: 2.0,
    bottom: 2.0,
    right: 6.0,
    left: 6.0,
};

/// The default font size of a [`Button`] label.
pub const DEFAULT_TEXT_SIZE: f32 = 12.0;

/// The possible status of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The [`Button`] can be pressed.
    Active,
    /// The [`Button`] can be pressed and it is being hovered.
    Hovered,
    /// The [`Button`] is being pressed.
    Pressed,
    /// The [`Button`] cannot be pressed.
    Disabled,
}

/// The style of a button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// The background [`Color`] of the button.
    pub background: Color,
    /// The text [`Color`] of the button.
    pub text_color: Color,
    /// The [`Border`] of the button.
    pub border: Border,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Color::TRANSPARENT,
            text_color: Color::BLACK,
            border: Border::default(),
        }
    }
}

/// A styling function for a [`Button`].
pub type StyleFn<'a> = Box<dyn Fn(&Theme, Status) -> Style + 'a>;

/// A secondary button; the default for panel actions.
pub fn secondary(theme: &Theme, status: Status) -> Style {
    styled(&theme.button, status)
}

/// A danger button; denoting a destructive action, such as closing.
pub fn danger(theme: &Theme, status: Status) -> Style {
    let style = styled(&theme.button, status);

    match status {
        Status::Disabled => style,
        Status::Active | Status::Hovered | Status::Pressed => Style {
            text_color: theme.palette.destructive,
            ..style
        },
    }
}

fn styled(component: &theme::Component, status: Status) -> Style {
    let base = Style {
        background: component.base,
        text_color: component.on,
        border: Border {
            color: component.border,
            width: 1.0,
        },
    };

    match status {
        Status::Active => base,
        Status::Hovered => Style {
            background: component.hover,
            ..base
        },
        Status::Pressed => Style {
            background: component.pressed,
            ..base
        },
        Status::Disabled => Style {
            background: base.background.scale_alpha(0.5),
            text_color: component.on_disabled,
            ..base
        },
    }
}
