//! web-sys glue: element lookup, listeners, and the port implementations the
//! controllers render through.

use folio::dom::{ClassList, InlineStyle, Scroller};
use folio::{FolioError, Result};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window,
};

/// Browser errors arrive as `JsValue`; the controllers speak `FolioError`.
pub trait JsResultExt<T> {
    fn or_js(self) -> Result<T>;
}

impl<T> JsResultExt<T> for std::result::Result<T, JsValue> {
    fn or_js(self) -> Result<T> {
        self.map_err(|e| FolioError::Js(describe(&e)))
    }
}

/// Best-effort text of a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

/// Hand an error back to JavaScript as a thrown `Error`.
pub fn to_js(err: FolioError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

pub fn by_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| FolioError::missing(format!("#{id}")))
}

pub fn query(document: &Document, selector: &str) -> Result<Element> {
    optional(document, selector)?.ok_or_else(|| FolioError::missing(selector))
}

pub fn optional(document: &Document, selector: &str) -> Result<Option<Element>> {
    document.query_selector(selector).or_js()
}

pub fn query_in(scope: &Element, selector: &str) -> Result<Element> {
    scope
        .query_selector(selector)
        .or_js()?
        .ok_or_else(|| FolioError::missing(selector))
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document.query_selector_all(selector).or_js()?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn body(document: &Document) -> Result<Element> {
    document
        .body()
        .map(Element::from)
        .ok_or_else(|| FolioError::missing("body"))
}

/// Attach `handler` for the page's lifetime.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .or_js()?;
    closure.forget();
    Ok(())
}

/// Append a `<style>` block to `<head>`.
pub fn inject_style(document: &Document, css: &str) -> Result<()> {
    let style = document.create_element("style").or_js()?;
    style.set_text_content(Some(css));
    let head = document.head().ok_or_else(|| FolioError::missing("head"))?;
    head.append_child(&style).or_js()?;
    Ok(())
}

pub fn smooth_scroll(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// An element as seen by the controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement(pub Element);

impl ClassList for DomElement {
    fn add_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().add_1(class) {
            warn!(class, error = %describe(&e), "classList.add failed");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().remove_1(class) {
            warn!(class, error = %describe(&e), "classList.remove failed");
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

impl InlineStyle for DomElement {
    fn set_style(&self, property: &str, value: &str) {
        let Some(el) = self.0.dyn_ref::<HtmlElement>() else {
            warn!(property, "inline style on a non-HTML element");
            return;
        };
        if let Err(e) = el.style().set_property(property, value) {
            warn!(property, value, error = %describe(&e), "style.setProperty failed");
        }
    }
}

/// The page viewport.
#[derive(Debug, Clone)]
pub struct WindowScroller(pub Window);

impl Scroller for WindowScroller {
    fn smooth_scroll_to(&self, top: f64) {
        smooth_scroll(&self.0, top);
    }
}
