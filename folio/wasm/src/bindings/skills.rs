use folio::Result;
use folio::config::SkillsConfig;
use folio::skills::SkillRevealController;
use tracing::debug;
use web_sys::{Document, Element};

use crate::dom::{DomElement, query_all};
use crate::observer::observe_until;

pub fn init(document: &Document, config: &SkillsConfig) -> Result<()> {
    let candidates = query_all(document, &config.selector)?
        .into_iter()
        .map(|el| {
            let level = el.get_attribute(&config.level_attribute);
            (DomElement(el), level)
        });

    let mut controller = SkillRevealController::new(candidates);
    if controller.is_empty() {
        debug!(selector = %config.selector, "no skill bars on this page");
        return Ok(());
    }

    let elements: Vec<Element> = controller.elements().map(|el| el.0.clone()).collect();
    debug!(bars = elements.len(), "skill bars observed");

    observe_until(&elements, &config.watch, move |target, intersecting| {
        controller.on_visibility(&DomElement(target.clone()), intersecting)
    })?;
    Ok(())
}
