//! Skill bars that fill to their target level the first time they scroll
//! into view.

use tracing::debug;

use crate::dom::InlineStyle;
use crate::watch::OneShotWatcher;

/// One bar and the width it animates to, taken verbatim from its
/// level attribute (`"85%"`).
#[derive(Debug, Clone)]
pub struct SkillBar<E> {
    pub element: E,
    pub level: String,
}

pub struct SkillRevealController<E> {
    bars: Vec<SkillBar<E>>,
    watcher: OneShotWatcher<usize>,
}

impl<E: InlineStyle + PartialEq> SkillRevealController<E> {
    /// Bars without a level attribute have nothing to animate and are left
    /// out. Present values are kept as written.
    pub fn new(candidates: impl IntoIterator<Item = (E, Option<String>)>) -> Self {
        let bars: Vec<_> = candidates
            .into_iter()
            .filter_map(|(element, level)| Some(SkillBar { element, level: level? }))
            .collect();

        let mut watcher = OneShotWatcher::new();
        for index in 0..bars.len() {
            watcher.watch(index);
        }
        Self { bars, watcher }
    }

    /// Elements the host should start observing.
    pub fn elements(&self) -> impl Iterator<Item = &E> {
        self.bars.iter().map(|bar| &bar.element)
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Visibility sample for `element`. Returns true when the bar was filled
    /// and the host should stop observing it.
    pub fn on_visibility(&mut self, element: &E, intersecting: bool) -> bool {
        let Some(index) = self.bars.iter().position(|bar| &bar.element == element) else {
            return false;
        };
        if !self.watcher.record(&index, intersecting) {
            return false;
        }
        let bar = &self.bars[index];
        bar.element.set_style("width", &bar.level);
        debug!(index, level = %bar.level, "skill bar filled");
        true
    }
}
