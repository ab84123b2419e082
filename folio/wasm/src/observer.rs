//! IntersectionObserver hookup for the one-shot watchers.

use folio::Result;
use folio::config::WatchOptions;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::JsResultExt;

/// Observe `elements` and feed every entry to `on_sample`. An element is
/// unobserved as soon as `on_sample` returns true for it.
pub fn observe_until(
    elements: &[Element],
    options: &WatchOptions,
    mut on_sample: impl FnMut(&Element, bool) -> bool + 'static,
) -> Result<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                if on_sample(&target, entry.is_intersecting()) {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).or_js()?;
    callback.forget();

    for element in elements {
        observer.observe(element);
    }
    Ok(observer)
}
