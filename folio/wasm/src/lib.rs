//! Browser entry point for folio.
//!
//! Loaded as an ES module next to the portfolio's static HTML. On start it
//! waits for the document structure, reads the optional configuration island,
//! installs console logging and wires every page unit.
//!
//! A required element missing from the page is a hosting error: the start
//! function (or the `DOMContentLoaded` handler) throws, and the units after
//! the faulting one stay unwired.

pub mod bindings;
pub mod dom;
pub mod logging;
pub mod net;
pub mod observer;
pub mod storage;

use folio::FolioConfig;
use folio::config::CONFIG_ISLAND_ID;
use tracing::{error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::dom::to_js;

/// Initialize panic hook and schedule page setup.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let target = document.clone();
        let on_ready = Closure::<dyn FnMut() -> Result<(), JsValue>>::new(move || {
            boot(&window, &document).map(|_| ()).map_err(to_js)
        });
        target.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
        Ok(())
    } else {
        boot(&window, &document).map(|_| ()).map_err(to_js)
    }
}

/// Read configuration, install logging and wire all units.
pub fn boot(window: &Window, document: &Document) -> folio::Result<FolioConfig> {
    let island = document
        .get_element_by_id(CONFIG_ISLAND_ID)
        .and_then(|el| el.text_content());
    let (config, config_error) = FolioConfig::load_or_default(island.as_deref());

    logging::init(&config.log_level);
    if let Some(e) = config_error {
        warn!(error = %e, "ignoring configuration island, using defaults");
    }
    info!("folio v{} starting", env!("CARGO_PKG_VERSION"));

    bindings::init_all(window, document, &config)
        .inspect_err(|e| error!(error = %e, "page initialization aborted"))?;
    Ok(config)
}

/// Check if the module is loaded and functional.
#[wasm_bindgen]
pub fn health_check() -> String {
    format!("folio-wasm v{} ready", env!("CARGO_PKG_VERSION"))
}
