//! Port traits between the controllers and whatever renders the page.
//!
//! The browser adapter implements these over `web_sys::Element` and
//! `web_sys::Window`; tests implement them over in-memory fakes.

/// A set of CSS classes on one element.
pub trait ClassList {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    /// Make the presence of `class` match `present`.
    fn set_class(&self, class: &str, present: bool) {
        if present {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// Inline style access on one element.
pub trait InlineStyle {
    fn set_style(&self, property: &str, value: &str);
}

/// Animated scrolling of the page viewport.
pub trait Scroller {
    fn smooth_scroll_to(&self, top: f64);
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory element used across the controller tests.

    use super::{ClassList, InlineStyle, Scroller};
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};
    use std::rc::Rc;

    #[derive(Debug, Clone, Default)]
    pub struct FakeElement {
        inner: Rc<RefCell<FakeState>>,
    }

    #[derive(Debug, Default)]
    struct FakeState {
        classes: BTreeSet<String>,
        style: BTreeMap<String, String>,
        style_writes: usize,
    }

    impl FakeElement {
        pub fn with_classes(classes: &[&str]) -> Self {
            let el = Self::default();
            for class in classes {
                el.add_class(class);
            }
            el
        }

        pub fn classes(&self) -> Vec<String> {
            self.inner.borrow().classes.iter().cloned().collect()
        }

        pub fn style(&self, property: &str) -> Option<String> {
            self.inner.borrow().style.get(property).cloned()
        }

        pub fn style_writes(&self) -> usize {
            self.inner.borrow().style_writes
        }
    }

    impl PartialEq for FakeElement {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.inner, &other.inner)
        }
    }

    impl ClassList for FakeElement {
        fn add_class(&self, class: &str) {
            self.inner.borrow_mut().classes.insert(class.to_string());
        }

        fn remove_class(&self, class: &str) {
            self.inner.borrow_mut().classes.remove(class);
        }

        fn has_class(&self, class: &str) -> bool {
            self.inner.borrow().classes.contains(class)
        }
    }

    impl InlineStyle for FakeElement {
        fn set_style(&self, property: &str, value: &str) {
            let mut state = self.inner.borrow_mut();
            state.style.insert(property.to_string(), value.to_string());
            state.style_writes += 1;
        }
    }

    /// Records every scroll request.
    #[derive(Debug, Clone, Default)]
    pub struct FakeScroller {
        pub calls: Rc<RefCell<Vec<f64>>>,
    }

    impl FakeScroller {
        pub fn calls(&self) -> Vec<f64> {
            self.calls.borrow().clone()
        }
    }

    impl Scroller for FakeScroller {
        fn smooth_scroll_to(&self, top: f64) {
            self.calls.borrow_mut().push(top);
        }
    }
}
