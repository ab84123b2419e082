//! `localStorage` as a preference store.

use folio::theme::PreferenceStore;
use folio::{FolioError, Result};
use tracing::warn;
use web_sys::{Storage, Window};

use crate::dom::{JsResultExt, describe};

/// Storage can be missing (privacy modes, sandboxed iframes); reads then
/// behave as if nothing was stored and writes fail softly.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                warn!(error = %describe(&e), "localStorage unavailable");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let Some(storage) = &self.storage else {
            return Err(FolioError::Js("localStorage unavailable".into()));
        };
        storage.set_item(key, value).or_js()
    }
}
