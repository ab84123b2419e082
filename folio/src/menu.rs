//! Collapsible navigation for narrow viewports.

use crate::config::MenuConfig;
use crate::dom::ClassList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Drives the hamburger button and the navigation panel together.
pub struct MenuController<E> {
    state: MenuState,
    toggle: E,
    panel: E,
    active_class: String,
}

impl<E: ClassList> MenuController<E> {
    pub fn new(toggle: E, panel: E, config: &MenuConfig) -> Self {
        Self {
            state: MenuState::Closed,
            toggle,
            panel,
            active_class: config.active_class.clone(),
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Hamburger click.
    pub fn toggle(&mut self) -> MenuState {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.render();
        self.state
    }

    /// Navigation link click. Closing a closed menu changes nothing.
    pub fn close(&mut self) {
        self.state = MenuState::Closed;
        self.render();
    }

    fn render(&self) {
        let open = self.state == MenuState::Open;
        self.toggle.set_class(&self.active_class, open);
        self.panel.set_class(&self.active_class, open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeElement;

    fn menu() -> (MenuController<FakeElement>, FakeElement, FakeElement) {
        let toggle = FakeElement::with_classes(&["menu-toggle"]);
        let panel = FakeElement::with_classes(&["nav-links"]);
        let ctl = MenuController::new(toggle.clone(), panel.clone(), &MenuConfig::default());
        (ctl, toggle, panel)
    }

    #[test]
    fn toggle_flips_both_elements() {
        let (mut ctl, toggle, panel) = menu();
        assert_eq!(ctl.toggle(), MenuState::Open);
        assert!(toggle.has_class("active") && panel.has_class("active"));
        assert_eq!(ctl.toggle(), MenuState::Closed);
        assert!(!toggle.has_class("active") && !panel.has_class("active"));
    }

    #[test]
    fn link_click_always_closes() {
        for opens in 1..=5 {
            let (mut ctl, toggle, panel) = menu();
            for _ in 0..opens {
                if ctl.state() == MenuState::Closed {
                    ctl.toggle();
                }
            }
            ctl.close();
            assert_eq!(ctl.state(), MenuState::Closed);
            assert!(!toggle.has_class("active"));
            assert!(!panel.has_class("active"));
        }
    }

    #[test]
    fn repeated_close_is_a_no_op() {
        let (mut ctl, toggle, panel) = menu();
        ctl.close();
        ctl.close();
        assert_eq!(ctl.state(), MenuState::Closed);
        assert_eq!(toggle.classes(), vec!["menu-toggle"]);
        assert_eq!(panel.classes(), vec!["nav-links"]);
    }
}
