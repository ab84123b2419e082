use folio::Result;
use folio::back_to_top::BackToTopController;
use folio::config::BackToTopConfig;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Window};

use crate::dom::{DomElement, WindowScroller, by_id, listen};

pub fn init(window: &Window, document: &Document, config: &BackToTopConfig) -> Result<()> {
    let button = by_id(document, &config.button_id)?;
    let controller = Rc::new(RefCell::new(BackToTopController::new(
        DomElement(button.clone()),
        WindowScroller(window.clone()),
        config,
    )));

    {
        let controller = Rc::clone(&controller);
        let viewport = window.clone();
        listen(window, "scroll", move |_| {
            let offset = viewport.page_y_offset().unwrap_or(0.0);
            controller.borrow_mut().on_scroll(offset);
        })?;
    }

    listen(&button, "click", move |_| controller.borrow().activate())
}
