use std::borrow::Cow;
use std::fmt;

use smol_str::SmolStr;

use super::style::Appearance;
use crate::container;
use crate::core::{Clickable, Context, Dimensions, Padding, Point, Size, Window};
use crate::text::TextLine;

/// A clickable entry of a dropdown.
///
/// An item shows a label on the left and an optional shortcut hint on the
/// right. Its label and its disabled state may be computed from live host
/// state; both are evaluated again every time the item is laid out.
///
/// ```
/// use trace_ui_widget::MenuItem;
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Message {
///     Open,
/// }
///
/// let item = MenuItem::new("Open", Message::Open).shortcut("Ctrl+O");
///
/// assert_eq!(item.label(), "Open");
/// assert_eq!(item.shortcut_hint(), "Ctrl+O");
/// assert!(!item.is_disabled());
/// ```
pub struct MenuItem<Message> {
    label: Label,
    shortcut: SmolStr,
    disabled: Option<Box<dyn Fn() -> bool>>,
    message: Message,
    click: Clickable,
}

enum Label {
    Static(String),
    Dynamic(Box<dyn Fn() -> String>),
}

impl Label {
    fn get(&self) -> Cow<'_, str> {
        match self {
            Label::Static(label) => Cow::Borrowed(label),
            Label::Dynamic(label) => Cow::Owned(label()),
        }
    }
}

impl<Message> MenuItem<Message> {
    /// Creates a new [`MenuItem`] with a fixed label that produces `message`
    /// when clicked.
    pub fn new(label: impl Into<String>, message: Message) -> Self {
        Self::with_label(Label::Static(label.into()), message)
    }

    /// Creates a new [`MenuItem`] whose label is produced by `label` every
    /// frame.
    pub fn dynamic(label: impl Fn() -> String + 'static, message: Message) -> Self {
        Self::with_label(Label::Dynamic(Box::new(label)), message)
    }

    fn with_label(label: Label, message: Message) -> Self {
        MenuItem {
            label,
            shortcut: SmolStr::default(),
            disabled: None,
            message,
            click: Clickable::new(),
        }
    }

    /// Sets the shortcut hint shown right-aligned next to the label.
    ///
    /// The hint is only displayed; binding the key is up to the host.
    #[must_use]
    pub fn shortcut(mut self, shortcut: impl Into<SmolStr>) -> Self {
        self.shortcut = shortcut.into();
        self
    }

    /// Disables the item whenever `predicate` returns true.
    #[must_use]
    pub fn disabled_when(mut self, predicate: impl Fn() -> bool + 'static) -> Self {
        self.disabled = Some(Box::new(predicate));
        self
    }

    /// Returns the current label.
    pub fn label(&self) -> Cow<'_, str> {
        self.label.get()
    }

    /// Returns the shortcut hint, or an empty string.
    pub fn shortcut_hint(&self) -> &str {
        &self.shortcut
    }

    /// Returns the message the item produces.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Returns true if the item is disabled right now.
    pub fn is_disabled(&self) -> bool {
        self.disabled.as_ref().is_some_and(|disabled| disabled())
    }

    /// Returns true if the cursor was over the item when it was last laid out.
    pub fn is_hovered(&self) -> bool {
        self.click.hovered()
    }

    /// Returns true, once, if the item was clicked while enabled.
    ///
    /// A click on a disabled item is consumed all the same.
    pub fn clicked(&mut self) -> bool {
        let clicked = self.click.clicked();

        clicked && !self.is_disabled()
    }

    /// Lays out the item.
    ///
    /// The item is as wide as the minimum width of `ctx` or its natural
    /// width, whichever is larger. The shortcut hint is aligned to the right
    /// edge.
    pub fn layout(
        &mut self,
        window: &Window<'_>,
        ctx: &mut Context<'_>,
        appearance: &Appearance,
    ) -> Dimensions {
        let disabled = self.is_disabled();

        let color = if disabled {
            appearance.disabled_text_color
        } else {
            appearance.text_color
        };

        // Hover is the one recorded by the previous layout.
        let background = if !disabled && self.click.hovered() {
            appearance.selected
        } else {
            appearance.background
        };

        let text = TextLine::new(color, appearance.text_size);
        let label = self.label.get();
        let shortcut = self.shortcut.as_str();
        let spacing = if shortcut.is_empty() {
            0.0
        } else {
            window.dp(appearance.shortcut_spacing)
        };
        let padding = Padding::new(appearance.item_padding);

        container::background(ctx, background, |ctx| {
            self.click.layout(ctx, |ctx| {
                container::inset(ctx, padding, |ctx| {
                    row(window, ctx, text, &label, spacing, shortcut)
                })
            })
        })
    }
}

fn row(
    window: &Window<'_>,
    ctx: &mut Context<'_>,
    text: TextLine,
    label: &str,
    spacing: f32,
    shortcut: &str,
) -> Dimensions {
    let left = text.measure(window, label);
    let right = text.measure(window, shortcut);

    let size = ctx.limits.constrain(Size::new(
        left.size.width + spacing + right.size.width,
        left.size.height.max(right.size.height),
    ));

    if !label.is_empty() {
        ctx.fill_text(label, Point::ORIGIN, text.size, text.color);
    }

    if !shortcut.is_empty() {
        ctx.fill_text(
            shortcut,
            Point::new(size.width - right.size.width, 0.0),
            text.size,
            text.color,
        );
    }

    Dimensions {
        size,
        baseline: left.baseline,
    }
}

impl<Message: fmt::Debug> fmt::Debug for MenuItem<Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label())
            .field("shortcut", &self.shortcut)
            .field("disabled", &self.is_disabled())
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
