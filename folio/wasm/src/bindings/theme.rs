use folio::Result;
use folio::config::ThemeConfig;
use folio::theme::ThemeController;
use tracing::debug;
use web_sys::{Document, Window};

use crate::dom::{DomElement, body, by_id, listen, query_in};
use crate::storage::LocalStore;

pub fn init(window: &Window, document: &Document, config: &ThemeConfig) -> Result<()> {
    let toggle = by_id(document, &config.toggle_id)?;
    let icon = query_in(&toggle, &config.icon_selector)?;
    let prefers_dark = window
        .match_media(&config.media_query)
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches());

    let mut controller = ThemeController::new(
        DomElement(body(document)?),
        DomElement(icon),
        LocalStore::open(window),
        config.clone(),
    );
    let mode = controller.restore(prefers_dark);
    debug!(mode = mode.as_str(), "theme toggle wired");

    listen(&toggle, "click", move |_| {
        controller.toggle();
    })
}
