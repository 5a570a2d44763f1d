use std::fmt;

use super::style::Appearance;
use super::{MenuDivider, MenuItem};
use crate::container;
use crate::core::{
    Clickable, Color, Context, Dimensions, Edges, Limits, Ops, Padding, Size, Vector, Window,
};
use crate::text::TextLine;
use crate::widget::Widget;

/// An entry of a dropdown.
pub enum Item<Message> {
    /// A clickable [`MenuItem`].
    Entry(MenuItem<Message>),
    /// A [`MenuDivider`].
    Divider(MenuDivider),
    /// Any other [`Widget`], laid out in the dropdown column.
    Widget(Box<dyn Widget>),
}

impl<Message> Item<Message> {
    /// Wraps an arbitrary [`Widget`] into an [`Item`].
    pub fn widget(widget: impl Widget + 'static) -> Self {
        Item::Widget(Box::new(widget))
    }

    /// Returns the [`MenuItem`], if this is one.
    pub fn as_entry(&self) -> Option<&MenuItem<Message>> {
        match self {
            Item::Entry(item) => Some(item),
            Item::Divider(_) | Item::Widget(_) => None,
        }
    }

    /// Returns the [`MenuItem`] mutably, if this is one.
    pub fn as_entry_mut(&mut self) -> Option<&mut MenuItem<Message>> {
        match self {
            Item::Entry(item) => Some(item),
            Item::Divider(_) | Item::Widget(_) => None,
        }
    }

    fn layout(
        &mut self,
        window: &Window<'_>,
        ctx: &mut Context<'_>,
        appearance: &Appearance,
    ) -> Dimensions {
        match self {
            Item::Entry(item) => item.layout(window, ctx, appearance),
            Item::Divider(divider) => divider.layout(ctx, appearance),
            Item::Widget(widget) => widget.layout(window, ctx),
        }
    }
}

impl<Message> From<MenuItem<Message>> for Item<Message> {
    fn from(item: MenuItem<Message>) -> Self {
        Item::Entry(item)
    }
}

impl<Message> From<MenuDivider> for Item<Message> {
    fn from(divider: MenuDivider) -> Self {
        Item::Divider(divider)
    }
}

impl<Message: fmt::Debug> fmt::Debug for Item<Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Entry(item) => item.fmt(f),
            Item::Divider(divider) => divider.fmt(f),
            Item::Widget(_) => f.write_str("Widget"),
        }
    }
}

/// A labelled dropdown of a [`Menu`](super::Menu).
///
/// The label sits in the menu bar; the entries are stacked in a column that
/// is as wide as the widest of them.
pub struct MenuGroup<Message> {
    label: String,
    items: Vec<Item<Message>>,
    click: Clickable,
}

impl<Message> MenuGroup<Message> {
    /// Creates a new, empty [`MenuGroup`] with the given bar label.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_items(label, Vec::new())
    }

    /// Creates a new [`MenuGroup`] with the given entries.
    pub fn with_items(label: impl Into<String>, items: Vec<Item<Message>>) -> Self {
        MenuGroup {
            label: label.into(),
            items,
            click: Clickable::new(),
        }
    }

    /// Appends an entry.
    #[must_use]
    pub fn item(mut self, item: impl Into<Item<Message>>) -> Self {
        self.push(item);
        self
    }

    /// Appends a [`MenuDivider`].
    #[must_use]
    pub fn divider(self) -> Self {
        self.item(MenuDivider)
    }

    /// Appends an entry in place.
    pub fn push(&mut self, item: impl Into<Item<Message>>) {
        self.items.push(item.into());
    }

    /// Returns the bar label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the entries.
    pub fn items(&self) -> &[Item<Message>] {
        &self.items
    }

    /// Returns the entries mutably.
    pub fn items_mut(&mut self) -> &mut [Item<Message>] {
        &mut self.items
    }

    /// Returns the [`MenuItem`]s of the group, skipping other entries.
    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut MenuItem<Message>> {
        self.items.iter_mut().filter_map(Item::as_entry_mut)
    }

    /// Lays out the dropdown column.
    ///
    /// Entries are measured once with unbounded width, then laid out top to
    /// bottom with their width pinned to the widest of them, inside a
    /// bordered background. A group without entries takes no space.
    pub fn layout(
        &mut self,
        window: &Window<'_>,
        ctx: &mut Context<'_>,
        appearance: &Appearance,
    ) -> Dimensions {
        let _span = tracing::trace_span!("menu_group.layout", label = %self.label).entered();

        if self.items.is_empty() {
            return Dimensions::ZERO;
        }

        let width = {
            let mut scratch = Ops::new();
            let mut measure = ctx.measure(&mut scratch);
            measure.limits = measure.limits.unbounded_width();

            self.items
                .iter_mut()
                .map(|item| item.layout(window, &mut measure, appearance).size.width)
                .fold(0.0, f32::max)
        };

        let items = &mut self.items;

        container::bordered(ctx, appearance.border_color, appearance.border_width, |ctx| {
            container::background(ctx, appearance.background, |ctx| {
                let limits = Limits::NONE.fixed_width(width);
                let mut height: f32 = 0.0;

                for item in items.iter_mut() {
                    let dimensions =
                        item.layout(window, &mut ctx.child(Vector::new(0.0, height), limits), appearance);

                    height += dimensions.size.height;
                }

                Dimensions::new(Size::new(width, height))
            })
        })
    }

    pub(super) fn layout_label(
        &mut self,
        window: &Window<'_>,
        ctx: &mut Context<'_>,
        appearance: &Appearance,
        background: Color,
    ) -> Dimensions {
        let text = TextLine::new(appearance.text_color, appearance.text_size);
        let padding = Padding::new(appearance.label_padding);
        let label = self.label.as_str();

        container::background(ctx, background, |ctx| {
            self.click.layout(ctx, |ctx| {
                container::inset(ctx, padding, |ctx| text.layout(window, ctx, label))
            })
        })
    }

    pub(super) fn poll(&mut self) -> Edges {
        self.click.poll()
    }
}

impl<Message: fmt::Debug> fmt::Debug for MenuGroup<Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuGroup")
            .field("label", &self.label)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}
