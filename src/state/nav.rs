//! Shared navigation state for the page.
//! Every behavior writes through `NavAction`; the controller renders the result.

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    /// Mobile menu open/closed. Drives both `aria-expanded` and the menu class.
    pub menu_open: bool,
    /// Id of the section whose nav link carries the active class.
    pub active_section: Option<String>,
    pub back_to_top_visible: bool,
    // copied from config so the reducer stays self-contained
    pub back_to_top_threshold: f64,
    pub desktop_breakpoint: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    ToggleMenu,
    CloseMenu,
    /// Result of a polling pass; `None` means "between sections".
    SetActiveSection(Option<String>),
    /// A section entered the observer band.
    SectionIntersected(String),
    Scrolled { scroll_y: f64 },
    Resized { width: f64 },
}

/// What the DOM must show for the menu. Both halves come from one boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuView {
    pub aria_expanded: &'static str,
    pub class_present: bool,
}

impl NavState {
    pub fn new(menu_open: bool, back_to_top_threshold: f64, desktop_breakpoint: f64) -> Self {
        Self {
            menu_open,
            active_section: None,
            back_to_top_visible: false,
            back_to_top_threshold,
            desktop_breakpoint,
        }
    }

    pub fn menu_view(&self) -> MenuView {
        MenuView {
            aria_expanded: if self.menu_open { "true" } else { "false" },
            class_present: self.menu_open,
        }
    }

    /// The nav link href that should carry the active class, if any.
    pub fn active_href(&self) -> Option<String> {
        self.active_section.as_ref().map(|id| format!("#{id}"))
    }
}

/// DOM writes needed to go from one state to the next. `None` fields are unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Changes {
    pub menu: Option<MenuView>,
    pub active_href: Option<Option<String>>,
    pub back_to_top_visible: Option<bool>,
}

impl NavState {
    /// With no previous state (startup) every part is written once.
    pub fn changes_since(&self, prev: Option<&NavState>) -> Changes {
        Changes {
            menu: prev
                .is_none_or(|p| p.menu_open != self.menu_open)
                .then(|| self.menu_view()),
            active_href: prev
                .is_none_or(|p| p.active_section != self.active_section)
                .then(|| self.active_href()),
            back_to_top_visible: prev
                .is_none_or(|p| p.back_to_top_visible != self.back_to_top_visible)
                .then_some(self.back_to_top_visible),
        }
    }
}

pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use NavAction::*;
        let mut new = (*self).clone();
        match action {
            ToggleMenu => new.menu_open = !new.menu_open,
            CloseMenu => {
                if !new.menu_open {
                    return self;
                }
                new.menu_open = false;
            }
            SetActiveSection(id) => new.active_section = id,
            SectionIntersected(id) => new.active_section = Some(id),
            Scrolled { scroll_y } => {
                new.back_to_top_visible = back_to_top_visible(scroll_y, new.back_to_top_threshold);
            }
            Resized { width } => {
                // narrowing never opens a closed menu
                if width > new.desktop_breakpoint && new.menu_open {
                    new.menu_open = false;
                } else {
                    return self;
                }
            }
        }
        if new == *self { self } else { Rc::new(new) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Rc<NavState> {
        Rc::new(NavState::new(false, 300.0, 768.0))
    }

    fn apply(state: Rc<NavState>, actions: impl IntoIterator<Item = NavAction>) -> Rc<NavState> {
        actions.into_iter().fold(state, |s, a| s.reduce(a))
    }

    #[test]
    fn toggle_open_close_open_matches_first_open() {
        let opened = base().reduce(NavAction::ToggleMenu);
        let again = apply(opened.clone(), [NavAction::ToggleMenu, NavAction::ToggleMenu]);
        assert_eq!(*opened, *again);
        assert!(again.menu_open);
    }

    #[test]
    fn aria_and_class_always_agree() {
        let actions = [
            NavAction::ToggleMenu,
            NavAction::Resized { width: 500.0 },
            NavAction::SetActiveSection(Some("about".into())),
            NavAction::Resized { width: 1024.0 },
            NavAction::ToggleMenu,
            NavAction::CloseMenu,
            NavAction::CloseMenu,
            NavAction::ToggleMenu,
        ];
        let mut state = base();
        for a in actions {
            state = state.reduce(a);
            let view = state.menu_view();
            assert_eq!(view.aria_expanded == "true", view.class_present);
            assert_eq!(view.class_present, state.menu_open);
        }
    }

    #[test]
    fn resize_above_breakpoint_closes_open_menu() {
        let state = apply(base(), [NavAction::ToggleMenu, NavAction::Resized { width: 769.0 }]);
        assert!(!state.menu_open);
    }

    #[test]
    fn resize_at_or_below_breakpoint_keeps_state() {
        let open = apply(base(), [NavAction::ToggleMenu, NavAction::Resized { width: 768.0 }]);
        assert!(open.menu_open);
        let closed = apply(base(), [NavAction::Resized { width: 320.0 }]);
        assert!(!closed.menu_open);
    }

    #[test]
    fn back_to_top_threshold_is_strict() {
        assert!(!back_to_top_visible(0.0, 300.0));
        assert!(!back_to_top_visible(300.0, 300.0));
        assert!(back_to_top_visible(300.5, 300.0));
        let s = apply(base(), [NavAction::Scrolled { scroll_y: 301.0 }]);
        assert!(s.back_to_top_visible);
        let s = s.reduce(NavAction::Scrolled { scroll_y: 12.0 });
        assert!(!s.back_to_top_visible);
    }

    #[test]
    fn last_scrollspy_write_wins() {
        let s = apply(
            base(),
            [
                NavAction::SetActiveSection(Some("intro".into())),
                NavAction::SectionIntersected("about".into()),
            ],
        );
        assert_eq!(s.active_href().as_deref(), Some("#about"));
        let s = s.reduce(NavAction::SetActiveSection(None));
        assert_eq!(s.active_href(), None);
    }

    #[test]
    fn startup_writes_aria_from_menu_class() {
        let open = NavState::new(true, 300.0, 768.0);
        let changes = open.changes_since(None);
        assert_eq!(
            changes.menu,
            Some(MenuView { aria_expanded: "true", class_present: true })
        );
        let closed = NavState::new(false, 300.0, 768.0);
        assert_eq!(
            closed.changes_since(None).menu,
            Some(MenuView { aria_expanded: "false", class_present: false })
        );
        assert_eq!(closed.changes_since(None).active_href, Some(None));
    }

    #[test]
    fn only_changed_parts_are_rewritten() {
        let prev = base();
        let next = prev.clone().reduce(NavAction::SectionIntersected("about".into()));
        let changes = next.changes_since(Some(&prev));
        assert_eq!(changes.menu, None);
        assert_eq!(changes.back_to_top_visible, None);
        assert_eq!(changes.active_href, Some(Some("#about".to_string())));
    }

    #[test]
    fn unchanged_state_is_not_reallocated() {
        let s = base();
        let same = s.clone().reduce(NavAction::CloseMenu);
        assert!(Rc::ptr_eq(&s, &same));
    }
}
