//! Entrance animation for content sections.
//!
//! Each element gains the animated class the first time enough of it is
//! visible and keeps it for good. The observation is detached after the class
//! lands, same as the skill bars.

use tracing::trace;

use crate::dom::ClassList;
use crate::watch::OneShotWatcher;

pub struct RevealController<E> {
    elements: Vec<E>,
    watcher: OneShotWatcher<usize>,
    animated_class: String,
}

impl<E: ClassList + PartialEq> RevealController<E> {
    pub fn new(elements: Vec<E>, animated_class: impl Into<String>) -> Self {
        let mut watcher = OneShotWatcher::new();
        for index in 0..elements.len() {
            watcher.watch(index);
        }
        Self {
            elements,
            watcher,
            animated_class: animated_class.into(),
        }
    }

    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// Visibility sample for `element`. Returns true when the class was added
    /// and the host should stop observing it.
    pub fn on_visibility(&mut self, element: &E, intersecting: bool) -> bool {
        let Some(index) = self.elements.iter().position(|el| el == element) else {
            return false;
        };
        if !self.watcher.record(&index, intersecting) {
            return false;
        }
        self.elements[index].add_class(&self.animated_class);
        trace!(index, "section revealed");
        true
    }
}
