//! In-page fragment links scroll smoothly and land below the fixed header.

use tracing::debug;

use crate::dom::Scroller;

/// What the host page can tell us about fragment targets.
pub trait FragmentHost: Scroller {
    /// Document offset of the element selected by `selector` (`"#about"`),
    /// or `None` if nothing matches.
    fn target_top(&self, selector: &str) -> Option<f64>;

    /// Rendered height of the fixed header.
    fn header_height(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollOutcome {
    /// Not a same-document fragment; the browser handles it.
    NotFragment,
    /// Bare `#`; default cancelled, nothing else.
    BareRoot,
    /// No element matches the fragment; default cancelled, nothing else.
    NoTarget,
    Scrolled { top: f64 },
}

impl ScrollOutcome {
    /// Whether the link's default jump must be cancelled.
    pub fn cancels_default(self) -> bool {
        !matches!(self, ScrollOutcome::NotFragment)
    }
}

/// Fragment identifier of an in-page href. `"#"` yields `Some("")`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Where to scroll so the target sits just under the header.
pub fn scroll_offset(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height
}

pub struct SmoothScrollController<H> {
    host: H,
}

impl<H: FragmentHost> SmoothScrollController<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Link activation with the link's raw `href` attribute.
    pub fn activate(&self, href: &str) -> ScrollOutcome {
        let Some(id) = fragment_id(href) else {
            return ScrollOutcome::NotFragment;
        };
        if id.is_empty() {
            return ScrollOutcome::BareRoot;
        }
        let Some(target_top) = self.host.target_top(href) else {
            debug!(href, "fragment has no target");
            return ScrollOutcome::NoTarget;
        };
        let top = scroll_offset(target_top, self.host.header_height());
        self.host.smooth_scroll_to(top);
        ScrollOutcome::Scrolled { top }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeScroller;
    use std::collections::HashMap;

    struct Page {
        targets: HashMap<&'static str, f64>,
        header: f64,
        scroller: FakeScroller,
    }

    impl Page {
        fn new(targets: &[(&'static str, f64)], header: f64) -> Self {
            Self {
                targets: targets.iter().copied().collect(),
                header,
                scroller: FakeScroller::default(),
            }
        }
    }

    impl Scroller for Page {
        fn smooth_scroll_to(&self, top: f64) {
            self.scroller.smooth_scroll_to(top);
        }
    }

    impl FragmentHost for Page {
        fn target_top(&self, selector: &str) -> Option<f64> {
            self.targets.get(selector).copied()
        }

        fn header_height(&self) -> f64 {
            self.header
        }
    }

    #[test]
    fn scrolls_to_target_minus_header() {
        let page = Page::new(&[("#projects", 1200.0)], 80.0);
        let scroller = page.scroller.clone();
        let ctl = SmoothScrollController::new(page);

        assert_eq!(ctl.activate("#projects"), ScrollOutcome::Scrolled { top: 1120.0 });
        assert_eq!(scroller.calls(), vec![1120.0]);
    }

    #[test]
    fn missing_target_is_a_silent_no_op() {
        let page = Page::new(&[("#about", 400.0)], 80.0);
        let scroller = page.scroller.clone();
        let ctl = SmoothScrollController::new(page);

        let outcome = ctl.activate("#nowhere");
        assert_eq!(outcome, ScrollOutcome::NoTarget);
        assert!(outcome.cancels_default());
        assert!(scroller.calls().is_empty());
    }

    #[test]
    fn bare_hash_does_nothing() {
        let page = Page::new(&[], 80.0);
        let scroller = page.scroller.clone();
        let ctl = SmoothScrollController::new(page);

        assert_eq!(ctl.activate("#"), ScrollOutcome::BareRoot);
        assert!(scroller.calls().is_empty());
    }

    #[test]
    fn other_links_keep_default_navigation() {
        let ctl = SmoothScrollController::new(Page::new(&[], 0.0));
        let outcome = ctl.activate("/resume.pdf");
        assert_eq!(outcome, ScrollOutcome::NotFragment);
        assert!(!outcome.cancels_default());
    }

    #[test]
    fn target_above_header_gives_negative_offset() {
        assert_eq!(scroll_offset(20.0, 80.0), -60.0);
        assert_eq!(fragment_id("#contact"), Some("contact"));
        assert_eq!(fragment_id("contact"), None);
    }
}
