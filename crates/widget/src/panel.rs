//! Decorate widgets with docking buttons.
//!
//! A [`Panel`] is a titled piece of UI that can live docked inside the main
//! window or detached in a window of its own. [`PanelButtons`] draws the
//! buttons that move it around; [`WidgetPanel`] turns any [`Widget`] into a
//! [`Panel`] by putting the buttons above it.
//!
//! Panels only report which button was clicked. Docking, detaching and
//! closing are up to the host:
//!
//! ```
//! use trace_ui_widget::core::{Dimensions, Size};
//! use trace_ui_widget::{Panel, WidgetPanel, from_fn};
//!
//! let mut panel = WidgetPanel::new(
//!     "Statistics",
//!     from_fn(|_window, ctx| Dimensions::new(ctx.limits.constrain(Size::new(200.0, 120.0)))),
//! );
//!
//! assert_eq!(panel.title(), "Statistics");
//! assert!(!panel.closed());
//! ```
use std::fmt;

use crate::button::{self, button};
use crate::core::{Clickable, Context, Dimensions, Size, Vector, Window};
use crate::widget::Widget;

/// A dockable piece of UI.
pub trait Panel {
    /// Lays out the panel, its buttons included.
    fn layout(&mut self, window: &Window<'_>, ctx: &mut Context<'_>) -> Dimensions;

    /// Returns the title of the panel.
    fn title(&self) -> &str;

    /// Returns true, once, if the close button was clicked.
    fn closed(&mut self) -> bool;

    /// Returns true, once, if the detach button was clicked.
    fn detached(&mut self) -> bool;

    /// Returns true, once, if the attach button was clicked.
    fn attached(&mut self) -> bool;

    /// Tells the panel whether it lives in a window of its own.
    fn set_windowed(&mut self, windowed: bool);
}

/// A button of a [`PanelButtons`] row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Go back to what was shown before the panel.
    Back,
    /// Move the panel into a window of its own.
    Detach,
    /// Move the panel back into the main window.
    Attach,
    /// Close the panel.
    Close,
}

impl Action {
    /// Returns the label of the button.
    pub fn label(self) -> &'static str {
        match self {
            Action::Back => "Back",
            Action::Detach => "Detach",
            Action::Attach => "Attach",
            Action::Close => "Close",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const DOCKED: &[Action] = &[Action::Back, Action::Detach, Action::Close];
const WINDOWED: &[Action] = &[Action::Attach, Action::Close];

/// The horizontal gap between two panel buttons.
pub const SPACING: f32 = 5.0;

/// The row of buttons of a [`Panel`].
///
/// Docked panels show <kbd>Back</kbd>, <kbd>Detach</kbd> and
/// <kbd>Close</kbd>; windowed ones show <kbd>Attach</kbd> and
/// <kbd>Close</kbd>. Buttons that are not shown never report a click.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelButtons {
    back: Clickable,
    detach: Clickable,
    attach: Clickable,
    close: Clickable,
    windowed: bool,
}

impl PanelButtons {
    /// Creates the buttons of a docked panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the panel lives in a window of its own.
    pub fn is_windowed(&self) -> bool {
        self.windowed
    }

    /// Switches between the docked and the windowed button sets.
    ///
    /// Switching forgets every pending click and press, so nothing from the
    /// previous set leaks into the new one.
    pub fn set_windowed(&mut self, windowed: bool) {
        if self.windowed == windowed {
            return;
        }

        log::debug!("panel buttons switched to {}", if windowed { "windowed" } else { "docked" });

        *self = PanelButtons {
            windowed,
            ..Self::default()
        };
    }

    /// Returns the buttons shown in the current mode, from left to right.
    pub fn actions(&self) -> &'static [Action] {
        if self.windowed { WINDOWED } else { DOCKED }
    }

    /// Returns true, once, if `action` was clicked.
    ///
    /// Always false for a button that is not shown in the current mode.
    pub fn clicked(&mut self, action: Action) -> bool {
        if !self.actions().contains(&action) {
            return false;
        }

        self.clickable(action).clicked()
    }

    /// Returns true, once, if the close button was clicked.
    pub fn closed(&mut self) -> bool {
        self.clicked(Action::Close)
    }

    /// Returns true, once, if the detach button was clicked.
    pub fn detached(&mut self) -> bool {
        self.clicked(Action::Detach)
    }

    /// Returns true, once, if the attach button was clicked.
    pub fn attached(&mut self) -> bool {
        self.clicked(Action::Attach)
    }

    /// Returns true, once, if the back button was clicked.
    pub fn backed(&mut self) -> bool {
        self.clicked(Action::Back)
    }

    fn clickable(&mut self, action: Action) -> &mut Clickable {
        match action {
            Action::Back => &mut self.back,
            Action::Detach => &mut self.detach,
            Action::Attach => &mut self.attach,
            Action::Close => &mut self.close,
        }
    }

    /// Lays out the buttons of the current mode from left to right.
    pub fn layout(&mut self, window: &Window<'_>, ctx: &mut Context<'_>) -> Dimensions {
        let _span = tracing::trace_span!("panel_buttons.layout", windowed = self.windowed).entered();

        let limits = ctx.limits.loose();
        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;
        let mut baseline = 0.0;

        for (i, &action) in self.actions().iter().enumerate() {
            if i > 0 {
                width += SPACING;
            }

            let widget = button(self.clickable(action), action.label());
            let widget = if action == Action::Close {
                widget.style(button::danger)
            } else {
                widget
            };

            let dimensions = widget.layout(window, &mut ctx.child(Vector::new(width, 0.0), limits));

            if i == 0 {
                baseline = dimensions.baseline;
            }

            width += dimensions.size.width;
            height = height.max(dimensions.size.height);
        }

        Dimensions {
            size: ctx.limits.constrain(Size::new(width, height)),
            baseline,
        }
    }
}

/// A [`Panel`] made of any [`Widget`] below a row of [`PanelButtons`].
///
/// The panel does not act on its buttons; poll them through the [`Panel`]
/// methods and [`WidgetPanel::backed`].
pub struct WidgetPanel<W> {
    title: String,
    content: W,
    buttons: PanelButtons,
}

impl<W: Widget> WidgetPanel<W> {
    /// Creates a new, docked [`WidgetPanel`].
    pub fn new(title: impl Into<String>, content: W) -> Self {
        WidgetPanel {
            title: title.into(),
            content,
            buttons: PanelButtons::new(),
        }
    }

    /// Returns the content of the panel.
    pub fn content(&self) -> &W {
        &self.content
    }

    /// Returns the content of the panel mutably.
    pub fn content_mut(&mut self) -> &mut W {
        &mut self.content
    }

    /// Returns the buttons of the panel.
    pub fn buttons(&self) -> &PanelButtons {
        &self.buttons
    }

    /// Returns the buttons of the panel mutably.
    pub fn buttons_mut(&mut self) -> &mut PanelButtons {
        &mut self.buttons
    }

    /// Returns true, once, if the back button was clicked.
    pub fn backed(&mut self) -> bool {
        self.buttons.backed()
    }
}

impl<W: Widget> Panel for WidgetPanel<W> {
    fn layout(&mut self, window: &Window<'_>, ctx: &mut Context<'_>) -> Dimensions {
        let _span = tracing::trace_span!("widget_panel.layout", title = %self.title).entered();

        let limits = ctx.limits.loose();
        let header = self.buttons.layout(window, &mut ctx.child(Vector::ZERO, limits));

        let below = header.size.height;
        let content = self.content.layout(
            window,
            &mut ctx.child(Vector::new(0.0, below), limits.shrink_height(below)),
        );

        Dimensions {
            size: ctx.limits.constrain(Size::new(
                header.size.width.max(content.size.width),
                below + content.size.height,
            )),
            baseline: header.baseline,
        }
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn closed(&mut self) -> bool {
        self.buttons.closed()
    }

    fn detached(&mut self) -> bool {
        self.buttons.detached()
    }

    fn attached(&mut self) -> bool {
        self.buttons.attached()
    }

    fn set_windowed(&mut self, windowed: bool) {
        self.buttons.set_windowed(windowed);
    }
}

impl<W> fmt::Debug for WidgetPanel<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetPanel")
            .field("title", &self.title)
            .field("buttons", &self.buttons)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Point, Theme};
    use crate::from_fn;
    use trace_ui_test::Simulator;

    const WINDOW: Size = Size::new(400.0, 300.0);

    const BACK: Point = Point::new(5.0, 5.0);
    const CLOSE_DOCKED: Point = Point::new(110.0, 5.0);
    const CLOSE_WINDOWED: Point = Point::new(60.0, 5.0);

    fn frame(simulator: &mut Simulator, buttons: &mut PanelButtons) -> Dimensions {
        simulator.frame(|window, ctx| buttons.layout(window, ctx))
    }

    #[test]
    fn docked_panels_go_back_detach_and_close() {
        let mut simulator = Simulator::new(WINDOW);
        let mut buttons = PanelButtons::new();

        let dimensions = frame(&mut simulator, &mut buttons);

        assert_eq!(buttons.actions(), &[Action::Back, Action::Detach, Action::Close]);
        assert_eq!(dimensions.size, Size::new(136.0, 19.0));
        assert_eq!(simulator.text("Back"), Some(Point::new(6.0, 2.0)));
        assert_eq!(simulator.text("Detach"), Some(Point::new(47.0, 2.0)));
        assert_eq!(simulator.text("Close"), Some(Point::new(100.0, 2.0)));
        assert_eq!(simulator.text("Attach"), None);
    }

    #[test]
    fn windowed_panels_attach_and_close() {
        let mut simulator = Simulator::new(WINDOW);
        let mut buttons = PanelButtons::new();
        buttons.set_windowed(true);

        let dimensions = frame(&mut simulator, &mut buttons);

        assert_eq!(buttons.actions(), &[Action::Attach, Action::Close]);
        assert_eq!(dimensions.size, Size::new(95.0, 19.0));
        assert_eq!(simulator.text("Attach"), Some(Point::new(6.0, 2.0)));
        assert_eq!(simulator.text("Close"), Some(Point::new(59.0, 2.0)));
        assert_eq!(simulator.text("Back"), None);
    }

    #[test]
    fn close_is_drawn_as_a_danger_button() {
        let mut simulator = Simulator::new(WINDOW);
        let mut buttons = PanelButtons::new();

        let _ = frame(&mut simulator, &mut buttons);

        let theme = Theme::light();
        assert_eq!(simulator.text_color("Close"), Some(theme.palette.destructive));
        assert_eq!(simulator.text_color("Back"), Some(theme.button.on));
    }

    #[test]
    fn clicks_are_reported_once() {
        let mut simulator = Simulator::new(WINDOW);
        let mut buttons = PanelButtons::new();

        let _ = frame(&mut simulator, &mut buttons);
        simulator.click_at(BACK);
        let _ = frame(&mut simulator, &mut buttons);

        assert!(!buttons.closed());
        assert!(buttons.backed());
        assert!(!buttons.backed());
    }

    #[test]
    fn hidden_buttons_never_click() {
        let mut simulator = Simulator::new(WINDOW);
        let mut buttons = PanelButtons::new();

        let _ = frame(&mut simulator, &mut buttons);
        simulator.click_at(BACK);
        let _ = frame(&mut simulator, &mut buttons);

        assert!(!buttons.attached());

        buttons.set_windowed(true);
        let _ = frame(&mut simulator, &mut buttons);
        simulator.click_at(BACK);
        let _ = frame(&mut simulator, &mut buttons);

        assert!(!buttons.backed());
        assert!(!buttons.detached());
        assert!(buttons.attached());
    }

    #[test]
    fn switching_modes_drops_pending_clicks() {
        let mut simulator = Simulator::new(WINDOW);
        let mut buttons = PanelButtons::new();

        let _ = frame(&mut simulator, &mut buttons);
        simulator.click_at(CLOSE_DOCKED);
        let _ = frame(&mut simulator, &mut buttons);

        buttons.set_windowed(true);

        assert!(!buttons.closed());
    }

    #[test]
    fn setting_the_same_mode_keeps_pending_clicks() {
        let mut simulator = Simulator::new(WINDOW);
        let mut buttons = PanelButtons::new();

        let _ = frame(&mut simulator, &mut buttons);
        simulator.click_at(CLOSE_DOCKED);
        let _ = frame(&mut simulator, &mut buttons);

        buttons.set_windowed(false);

        assert!(buttons.closed());
    }

    #[test]
    fn presses_do_not_survive_a_mode_switch() {
        let mut simulator = Simulator::new(WINDOW);
        let mut buttons = PanelButtons::new();

        // Both close buttons cover this point.
        let overlap = Point::new(94.5, 5.0);

        let _ = frame(&mut simulator, &mut buttons);
        simulator.move_to(overlap);
        simulator.press();
        let _ = frame(&mut simulator, &mut buttons);

        buttons.set_windowed(true);
        simulator.release();
        let _ = frame(&mut simulator, &mut buttons);

        assert!(!buttons.closed());
    }

    #[test]
    fn windowed_close_clicks() {
        let mut simulator = Simulator::new(WINDOW);
        let mut buttons = PanelButtons::new();
        buttons.set_windowed(true);

        let _ = frame(&mut simulator, &mut buttons);
        simulator.click_at(CLOSE_WINDOWED);
        let _ = frame(&mut simulator, &mut buttons);

        assert!(buttons.closed());
        assert!(buttons.is_windowed());
    }

    #[test]
    fn widget_panels_put_content_below_the_buttons() {
        let mut simulator = Simulator::new(WINDOW);
        let mut panel = WidgetPanel::new(
            "Timeline",
            from_fn(|window, ctx| {
                ctx.fill_text("content", Point::ORIGIN, 12.0, window.theme.background.on);
                Dimensions::new(ctx.limits.constrain(Size::new(200.0, 50.0)))
            }),
        );

        let dimensions = simulator.frame(|window, ctx| panel.layout(window, ctx));

        assert_eq!(panel.title(), "Timeline");
        assert_eq!(simulator.text("content"), Some(Point::new(0.0, 19.0)));
        assert_eq!(dimensions.size, Size::new(200.0, 69.0));
    }

    #[test]
    fn widget_panels_forward_their_buttons() {
        let mut simulator = Simulator::new(WINDOW);
        let mut panel = WidgetPanel::new("Timeline", from_fn(|_, _| Dimensions::ZERO));

        let _ = simulator.frame(|window, ctx| panel.layout(window, ctx));
        simulator.click_at(BACK);
        let _ = simulator.frame(|window, ctx| panel.layout(window, ctx));

        assert!(!panel.closed());
        assert!(panel.backed());

        panel.set_windowed(true);

        assert!(panel.buttons().is_windowed());
        assert!(!panel.attached());
    }
}
