use folio::config::SmoothScrollConfig;
use folio::dom::Scroller;
use folio::smooth_scroll::{FragmentHost, SmoothScrollController};
use folio::{FolioError, Result};
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, Window};

use crate::dom::{listen, query, query_all, smooth_scroll};

struct PageFragments {
    window: Window,
    document: Document,
    header: HtmlElement,
}

impl Scroller for PageFragments {
    fn smooth_scroll_to(&self, top: f64) {
        smooth_scroll(&self.window, top);
    }
}

impl FragmentHost for PageFragments {
    fn target_top(&self, selector: &str) -> Option<f64> {
        // Fragments that are not valid selectors throw here; treat them as
        // having no target.
        let target = self.document.query_selector(selector).ok().flatten()?;
        target
            .dyn_ref::<HtmlElement>()
            .map(|el| f64::from(el.offset_top()))
    }

    fn header_height(&self) -> f64 {
        f64::from(self.header.offset_height())
    }
}

pub fn init(window: &Window, document: &Document, config: &SmoothScrollConfig) -> Result<()> {
    let header = query(document, &config.header_selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| FolioError::missing(config.header_selector.as_str()))?;

    let controller = Rc::new(SmoothScrollController::new(PageFragments {
        window: window.clone(),
        document: document.clone(),
        header,
    }));

    let links = query_all(document, &config.link_selector)?;
    for link in &links {
        let controller = Rc::clone(&controller);
        let anchor = link.clone();
        listen(link, "click", move |event: Event| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            if controller.activate(&href).cancels_default() {
                event.prevent_default();
            }
        })?;
    }

    debug!(links = links.len(), "fragment links wired");
    Ok(())
}
