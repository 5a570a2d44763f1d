use std::fmt;

use super::style::{Appearance, Style, StyleSheet};
use super::MenuGroup;
use crate::core::renderer::Quad;
use crate::core::{Context, Dimensions, Limits, Ops, Rectangle, Size, Vector, Window};
use crate::overlay::modal::Modal;
use crate::widget::Widget;

/// The group whose dropdown is shown.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Active {
    index: usize,
    /// Horizontal offset of the group label within the bar.
    offset: f32,
    /// The value of [`Menu::generation`] when the group became active.
    generation: u64,
}

/// A horizontal bar of [`MenuGroup`] labels with one dropdown at a time.
///
/// Clicking a label toggles the menu open or closed. While the menu is open,
/// the group under the cursor becomes the active one and its dropdown is
/// shown below the bar, on top of everything else. Pressing anywhere outside
/// the bar and the dropdown, or hitting <kbd>Esc</kbd>, closes the menu.
///
/// Hover and click state is sampled from the previous layout of each label,
/// so opening and switching groups shows up one frame after the input.
///
/// ```
/// use trace_ui_widget::{Menu, MenuGroup, MenuItem};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Message {
///     Open,
///     Quit,
/// }
///
/// let menu = Menu::new(vec![
///     MenuGroup::new("File")
///         .item(MenuItem::new("Open", Message::Open).shortcut("Ctrl+O"))
///         .divider()
///         .item(MenuItem::new("Quit", Message::Quit)),
/// ]);
///
/// assert!(!menu.is_open());
/// assert_eq!(menu.groups().len(), 1);
/// ```
pub struct Menu<Message> {
    groups: Vec<MenuGroup<Message>>,
    open: bool,
    active: Option<Active>,
    generation: u64,
    modal: Modal,
    style: Style,
}

impl<Message> Menu<Message> {
    /// Creates a new, closed [`Menu`] with the given groups.
    pub fn new(groups: Vec<MenuGroup<Message>>) -> Self {
        Menu {
            groups,
            open: false,
            active: None,
            generation: 0,
            modal: Modal::new(),
            style: Style::default(),
        }
    }

    /// Sets the [`Style`] of the [`Menu`].
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Returns true if the menu is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the index of the group whose dropdown is shown, if any.
    pub fn active_group(&self) -> Option<usize> {
        if self.open {
            self.active().map(|active| active.index)
        } else {
            None
        }
    }

    /// Closes the menu.
    pub fn close(&mut self) {
        self.open = false;
        self.active = None;
    }

    /// Returns the groups of the menu.
    pub fn groups(&self) -> &[MenuGroup<Message>] {
        &self.groups
    }

    /// Returns the group at `index` mutably.
    ///
    /// Entries may be edited in place; the set of groups itself only changes
    /// through [`Menu::push`] and [`Menu::remove`].
    pub fn group_mut(&mut self, index: usize) -> Option<&mut MenuGroup<Message>> {
        self.groups.get_mut(index)
    }

    /// Appends a group.
    ///
    /// An open dropdown is closed on the next layout.
    pub fn push(&mut self, group: MenuGroup<Message>) {
        self.groups.push(group);
        self.generation = self.generation.wrapping_add(1);
    }

    /// Removes the group at `index`.
    ///
    /// An open dropdown is closed on the next layout.
    pub fn remove(&mut self, index: usize) -> Option<MenuGroup<Message>> {
        if index >= self.groups.len() {
            return None;
        }

        self.generation = self.generation.wrapping_add(1);

        Some(self.groups.remove(index))
    }

    /// Returns the message of the first enabled item clicked since the last
    /// layout, closing the menu if there is one.
    ///
    /// Every item is polled, so clicks are never reported twice.
    pub fn selected(&mut self) -> Option<Message>
    where
        Message: Clone,
    {
        let mut selected = None;

        for group in &mut self.groups {
            for item in group.entries_mut() {
                if item.clicked() && selected.is_none() {
                    selected = Some(item.message().clone());
                }
            }
        }

        if selected.is_some() {
            log::debug!("menu item selected, closing");
            self.close();
        }

        selected
    }

    fn active(&self) -> Option<Active> {
        self.active
            .filter(|active| active.generation == self.generation && active.index < self.groups.len())
    }

    /// Lays out the bar and, when the menu is open, the dropdown of the
    /// active group.
    ///
    /// The bar spans the maximum width of `ctx`, or just its labels when that
    /// is unbounded. The dropdown is deferred, so it is drawn after
    /// everything else in the frame. A menu without groups takes no space
    /// and draws nothing.
    pub fn layout(&mut self, window: &Window<'_>, ctx: &mut Context<'_>) -> Dimensions {
        let _span = tracing::trace_span!("menu.layout").entered();

        if self.modal.cancelled() {
            log::debug!("menu dismissed");
            self.close();
        }

        if self.active.is_some() && self.active().is_none() {
            log::debug!("menu groups changed, closing");
            self.close();
        }

        if self.groups.is_empty() {
            self.close();
            return Dimensions::ZERO;
        }

        let appearance = window.theme.appearance(&self.style);
        let max = ctx.limits.max;

        let mut labels = Ops::new();
        let mut offset = 0.0;
        let mut last = Dimensions::ZERO;

        {
            let mut bar = ctx.record(&mut labels);

            for (index, group) in self.groups.iter_mut().enumerate() {
                let edges = group.poll();

                if edges.clicked {
                    self.open = !self.open;
                    self.active = None;
                    log::debug!(
                        "menu {} from {:?}",
                        if self.open { "opened" } else { "closed" },
                        group.label()
                    );
                }

                if self.open && edges.hovered {
                    self.active = Some(Active {
                        index,
                        offset,
                        generation: self.generation,
                    });
                }

                let background = if self.active.is_some_and(|active| active.index == index) {
                    appearance.selected
                } else {
                    appearance.background
                };

                last = group.layout_label(
                    window,
                    &mut bar.child(Vector::new(offset, 0.0), Limits::new(Size::ZERO, max)),
                    &appearance,
                    background,
                );

                offset += last.size.width + appearance.group_spacing;
            }
        }

        let width = if max.width.is_finite() {
            max.width
        } else {
            (offset - appearance.group_spacing).max(0.0)
        };
        let size = Size::new(width, last.size.height);

        ctx.fill_quad(Quad::new(Rectangle::with_size(size)), appearance.background);
        ctx.ops().extend(labels);

        if self.open
            && let Some(active) = self.active
        {
            self.layout_dropdown(window, ctx, active, size.height, &appearance);
        }

        Dimensions {
            size,
            baseline: last.baseline,
        }
    }

    /// Lays out the dropdown of `active` below the bar.
    ///
    /// The dropdown floats over the frame, so its size does not count
    /// toward the size of the bar.
    fn layout_dropdown(
        &mut self,
        window: &Window<'_>,
        ctx: &mut Context<'_>,
        active: Active,
        bar_height: f32,
        appearance: &Appearance,
    ) {
        let Some(group) = self.groups.get_mut(active.index) else {
            return;
        };

        let limits = Limits::new(Size::ZERO, ctx.limits.max).shrink_height(bar_height);
        let mut dropdown = Ops::new();

        {
            let mut overlay = ctx.record(&mut dropdown);
            let mut below = overlay.child(Vector::new(0.0, bar_height), limits);

            let _ = self.modal.layout(window, &mut below, |window, ctx| {
                let limits = ctx.limits.loose();

                group.layout(
                    window,
                    &mut ctx.child(Vector::new(active.offset, 0.0), limits),
                    appearance,
                )
            });
        }

        ctx.ops().defer(dropdown);
    }
}

impl<Message> Widget for Menu<Message> {
    fn layout(&mut self, window: &Window<'_>, ctx: &mut Context<'_>) -> Dimensions {
        Menu::layout(self, window, ctx)
    }
}

impl<Message> Default for Menu<Message> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<Message: fmt::Debug> fmt::Debug for Menu<Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("groups", &self.groups)
            .field("open", &self.open)
            .field("active", &self.active_group())
            .finish_non_exhaustive()
    }
}

impl<Message> FromIterator<MenuGroup<Message>> for Menu<Message> {
    fn from_iter<I: IntoIterator<Item = MenuGroup<Message>>>(groups: I) -> Self {
        Self::new(groups.into_iter().collect())
    }
}
