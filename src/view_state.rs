use std::rc::Rc;

use yew::prelude::*;

use crate::theme::{derived_tokens, ThemeTokens};

/// Scroll offset (in CSS pixels) past which the nav bar counts as scrolled.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// The only mutable state on the page. Each transition returns a new value,
/// so the render layer always receives a complete snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub scrolled: bool,
    pub dark_mode: bool,
    pub menu_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scrolled: false,
            dark_mode: true,
            menu_open: false,
        }
    }
}

impl ViewState {
    pub fn on_scroll(self, offset: f64) -> Self {
        Self {
            scrolled: offset > SCROLL_THRESHOLD,
            ..self
        }
    }

    pub fn toggle_dark_mode(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            ..self
        }
    }

    pub fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }

    pub fn close_menu(self) -> Self {
        Self {
            menu_open: false,
            ..self
        }
    }

    pub fn tokens(&self) -> ThemeTokens {
        derived_tokens(self.dark_mode)
    }

    /// The nav bar uses its solid style while scrolled or while the drawer is open.
    pub fn nav_elevated(&self) -> bool {
        self.scrolled || self.menu_open
    }

    pub fn apply(self, action: ViewAction) -> Self {
        match action {
            ViewAction::Scroll(offset) => self.on_scroll(offset),
            ViewAction::ToggleDarkMode => self.toggle_dark_mode(),
            ViewAction::ToggleMenu => self.toggle_menu(),
            ViewAction::CloseMenu => self.close_menu(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewAction {
    Scroll(f64),
    ToggleDarkMode,
    ToggleMenu,
    CloseMenu,
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            // Scroll events fire constantly; skip the re-render when nothing changed.
            return self;
        }
        match action {
            ViewAction::Scroll(_) => log::debug!("scrolled: {}", next.scrolled),
            _ => log::debug!("view state {:?} -> {:?}", action, next),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_dark_closed_and_unscrolled() {
        let state = ViewState::default();
        assert!(state.dark_mode);
        assert!(!state.menu_open);
        assert!(!state.scrolled);
        assert_eq!(state.tokens(), crate::theme::DARK);
    }

    #[test]
    fn scrolled_tracks_threshold() {
        let state = ViewState::default();
        for offset in [-10.0, 0.0, 10.0, 49.9, 50.0] {
            assert!(!state.on_scroll(offset).scrolled, "offset {offset}");
        }
        for offset in [50.1, 51.0, 120.0, 10_000.0] {
            assert!(state.on_scroll(offset).scrolled, "offset {offset}");
        }
    }

    #[test]
    fn scroll_down_then_back_up() {
        let state = ViewState::default().on_scroll(120.0);
        assert!(state.scrolled);
        let state = state.on_scroll(10.0);
        assert!(!state.scrolled);
    }

    #[test]
    fn scroll_is_idempotent() {
        let once = ViewState::default().on_scroll(80.0);
        assert_eq!(once, once.on_scroll(80.0));
    }

    #[test]
    fn toggles_are_involutions() {
        let start = ViewState::default();
        assert_eq!(start.toggle_dark_mode().toggle_dark_mode(), start);
        assert_eq!(start.toggle_menu().toggle_menu(), start);

        let other = ViewState {
            scrolled: true,
            dark_mode: false,
            menu_open: true,
        };
        assert_eq!(other.toggle_dark_mode().toggle_dark_mode(), other);
        assert_eq!(other.toggle_menu().toggle_menu(), other);
    }

    #[test]
    fn flags_are_independent() {
        let state = ViewState::default().on_scroll(200.0).toggle_menu();
        let toggled = state.toggle_dark_mode();
        assert_eq!(toggled.scrolled, state.scrolled);
        assert_eq!(toggled.menu_open, state.menu_open);
    }

    #[test]
    fn nav_link_closes_open_menu() {
        let open = ViewState::default().toggle_menu();
        assert!(open.menu_open);
        assert!(!open.apply(ViewAction::CloseMenu).menu_open);
        // Closing an already closed drawer is a no-op.
        let closed = ViewState::default();
        assert_eq!(closed.close_menu(), closed);
    }

    #[test]
    fn dark_mode_toggle_swaps_tokens() {
        let light = ViewState::default().apply(ViewAction::ToggleDarkMode);
        assert_eq!(light.tokens(), crate::theme::LIGHT);
        let dark = light.apply(ViewAction::ToggleDarkMode);
        assert_eq!(dark.tokens(), crate::theme::DARK);
    }

    #[test]
    fn nav_elevated_when_scrolled_or_menu_open() {
        let state = ViewState::default();
        assert!(!state.nav_elevated());
        assert!(state.on_scroll(60.0).nav_elevated());
        assert!(state.toggle_menu().nav_elevated());
    }

    #[test]
    fn apply_matches_direct_transitions() {
        let state = ViewState::default().toggle_menu();
        assert_eq!(state.apply(ViewAction::Scroll(75.0)), state.on_scroll(75.0));
        assert_eq!(state.apply(ViewAction::ToggleDarkMode), state.toggle_dark_mode());
        assert_eq!(state.apply(ViewAction::ToggleMenu), state.toggle_menu());
        assert_eq!(state.apply(ViewAction::CloseMenu), state.close_menu());
    }

    #[test]
    fn scroll_within_same_side_of_threshold_reuses_state() {
        // Only crossing the threshold yields a new state for the page to render.
        let state = Rc::new(ViewState::default().on_scroll(120.0));
        let next = state.clone().reduce(ViewAction::Scroll(300.0));
        assert!(Rc::ptr_eq(&state, &next));
        let next = state.clone().reduce(ViewAction::Scroll(20.0));
        assert!(!Rc::ptr_eq(&state, &next));
        assert!(!next.scrolled);
    }

    #[test]
    fn reducer_keeps_same_rc_when_unchanged() {
        let state = Rc::new(ViewState::default());
        let next = state.clone().reduce(ViewAction::Scroll(5.0));
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(ViewAction::ToggleMenu);
        assert!(!Rc::ptr_eq(&state, &next));
        assert!(next.menu_open);
    }
}
