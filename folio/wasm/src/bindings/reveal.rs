use folio::Result;
use folio::config::RevealConfig;
use folio::reveal::RevealController;
use tracing::debug;
use web_sys::Document;

use crate::dom::{DomElement, inject_style, query_all};
use crate::observer::observe_until;

pub fn init(document: &Document, config: &RevealConfig) -> Result<()> {
    if config.inject_style {
        inject_style(document, &config.animated_style())?;
    }
    if config.selectors.is_empty() {
        return Ok(());
    }

    let elements = query_all(document, &config.selector_group())?;
    debug!(sections = elements.len(), "reveal-on-scroll observed");

    let mut controller = RevealController::new(
        elements.iter().cloned().map(DomElement).collect(),
        config.animated_class.clone(),
    );
    observe_until(&elements, &config.watch, move |target, intersecting| {
        controller.on_visibility(&DomElement(target.clone()), intersecting)
    })?;
    Ok(())
}
