use folio::Result;
use folio::config::MenuConfig;
use folio::menu::MenuController;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use web_sys::Document;

use crate::dom::{DomElement, by_id, listen, query, query_all};

pub fn init(document: &Document, config: &MenuConfig) -> Result<()> {
    let toggle = by_id(document, &config.toggle_id)?;
    let panel = query(document, &config.panel_selector)?;
    let links = query_all(document, &config.link_selector)?;

    let menu = Rc::new(RefCell::new(MenuController::new(
        DomElement(toggle.clone()),
        DomElement(panel),
        config,
    )));

    {
        let menu = Rc::clone(&menu);
        listen(&toggle, "click", move |_| {
            menu.borrow_mut().toggle();
        })?;
    }

    for link in &links {
        let menu = Rc::clone(&menu);
        listen(link, "click", move |_| menu.borrow_mut().close())?;
    }

    debug!(links = links.len(), "mobile menu wired");
    Ok(())
}
