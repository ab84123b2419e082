//! Floating "back to top" button.

use crate::config::BackToTopConfig;
use crate::dom::{ClassList, Scroller};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    /// Shown strictly above the threshold.
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }
}

pub struct BackToTopController<E, S> {
    button: E,
    scroller: S,
    threshold: f64,
    visible_class: String,
    visibility: Visibility,
}

impl<E: ClassList, S: Scroller> BackToTopController<E, S> {
    pub fn new(button: E, scroller: S, config: &BackToTopConfig) -> Self {
        Self {
            button,
            scroller,
            threshold: config.threshold_px,
            visible_class: config.visible_class.clone(),
            visibility: Visibility::Hidden,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Window scroll with the current vertical offset.
    pub fn on_scroll(&mut self, offset: f64) -> Visibility {
        self.visibility = Visibility::for_offset(offset, self.threshold);
        self.button
            .set_class(&self.visible_class, self.visibility == Visibility::Shown);
        self.visibility
    }

    /// Button click.
    pub fn activate(&self) {
        self.scroller.smooth_scroll_to(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::{FakeElement, FakeScroller};

    fn controller() -> (
        BackToTopController<FakeElement, FakeScroller>,
        FakeElement,
        FakeScroller,
    ) {
        let button = FakeElement::default();
        let scroller = FakeScroller::default();
        let ctl = BackToTopController::new(
            button.clone(),
            scroller.clone(),
            &BackToTopConfig::default(),
        );
        (ctl, button, scroller)
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(Visibility::for_offset(300.0, 300.0), Visibility::Hidden);
        assert_eq!(Visibility::for_offset(300.5, 300.0), Visibility::Shown);
        assert_eq!(Visibility::for_offset(0.0, 300.0), Visibility::Hidden);
    }

    #[test]
    fn scrolling_down_and_back_toggles_class() {
        let (mut ctl, button, _) = controller();
        assert_eq!(ctl.on_scroll(301.0), Visibility::Shown);
        assert!(button.has_class("show"));
        assert_eq!(ctl.on_scroll(300.0), Visibility::Hidden);
        assert!(!button.has_class("show"));
        ctl.on_scroll(1500.0);
        ctl.on_scroll(1200.0);
        assert!(button.has_class("show"));
    }

    #[test]
    fn click_scrolls_to_top() {
        let (ctl, _, scroller) = controller();
        ctl.activate();
        assert_eq!(scroller.calls(), vec![0.0]);
    }
}
