//! The contact form is optional: pages without one skip this unit.

use folio::config::ContactConfig;
use folio::contact::{ContactController, ContactView, FormFields};
use folio::dom::ClassList;
use folio::{FolioError, Result};
use js_sys::Array;
use std::rc::Rc;
use tracing::{debug, error, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, FormData, HtmlButtonElement, HtmlFormElement, Window};

use crate::dom::{DomElement, JsResultExt, describe, listen, optional, query_in};
use crate::net::{FetchTransport, TimerSleeper};

struct FormDom {
    window: Window,
    document: Document,
    form: HtmlFormElement,
    button: HtmlButtonElement,
    popup_id: String,
    popup_class: String,
}

impl FormDom {
    /// Looked up on use; a page without the popup still submits.
    fn popup(&self) -> Option<DomElement> {
        let popup = self.document.get_element_by_id(&self.popup_id);
        if popup.is_none() {
            warn!(id = %self.popup_id, "success popup not found");
        }
        popup.map(DomElement)
    }
}

impl ContactView for FormDom {
    fn submit_label(&self) -> String {
        self.button.inner_html()
    }

    fn set_submit_label(&self, markup: &str) {
        self.button.set_inner_html(markup);
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.button.set_disabled(!enabled);
    }

    fn show_popup(&self) {
        if let Some(popup) = self.popup() {
            popup.add_class(&self.popup_class);
        }
    }

    fn hide_popup(&self) {
        if let Some(popup) = self.popup() {
            popup.remove_class(&self.popup_class);
        }
    }

    fn reset_form(&self) {
        self.form.reset();
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            warn!(error = %describe(&e), "alert failed");
        }
    }
}

/// Text entries of the form in document order. File inputs are left out.
fn capture_fields(form: &HtmlFormElement) -> Result<FormFields> {
    let data = FormData::new_with_form(form).or_js()?;
    let mut fields = FormFields::new();
    let Some(entries) = js_sys::try_iter(&data).or_js()? else {
        return Ok(fields);
    };
    for entry in entries {
        let entry: Array = entry.or_js()?.unchecked_into();
        if let (Some(name), Some(value)) = (entry.get(0).as_string(), entry.get(1).as_string()) {
            fields.push((name, value));
        }
    }
    Ok(fields)
}

pub fn init(window: &Window, document: &Document, config: &ContactConfig) -> Result<()> {
    let Some(form) = optional(document, &config.form_selector)? else {
        debug!(selector = %config.form_selector, "no contact form, skipping");
        return Ok(());
    };
    let form = form
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| FolioError::missing(format!("form{}", config.form_selector)))?;
    let button = query_in(&form, &config.submit_selector)?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| FolioError::missing(config.submit_selector.as_str()))?;
    if document.get_element_by_id(&config.popup_id).is_none() {
        warn!(id = %config.popup_id, "contact form has no success popup");
    }

    let view = FormDom {
        window: window.clone(),
        document: document.clone(),
        form: form.clone(),
        button,
        popup_id: config.popup_id.clone(),
        popup_class: config.popup_class.clone(),
    };
    let controller = Rc::new(ContactController::new(
        view,
        FetchTransport,
        TimerSleeper,
        config.clone(),
    ));

    let target = form.clone();
    listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        let fields = match capture_fields(&target) {
            Ok(fields) => fields,
            Err(e) => {
                error!(error = %e, "could not read contact form fields");
                return;
            }
        };
        let action = target.action();
        let controller = Rc::clone(&controller);
        spawn_local(async move {
            controller.submit(&action, &fields).await;
        });
    })?;

    debug!(action = %form.action(), "contact form wired");
    Ok(())
}
