//! One initializer per page unit.
//!
//! Each `init` looks up the elements its controller needs, builds the
//! controller and attaches the listeners. Units share nothing; they run in a
//! fixed order and the first one that faults stops the rest.

pub mod back_to_top;
pub mod contact;
pub mod menu;
pub mod reveal;
pub mod skills;
pub mod smooth_scroll;
pub mod theme;

use folio::{FolioConfig, Result};
use tracing::debug;
use web_sys::{Document, Window};

pub fn init_all(window: &Window, document: &Document, config: &FolioConfig) -> Result<()> {
    theme::init(window, document, &config.theme)?;
    menu::init(document, &config.menu)?;
    skills::init(document, &config.skills)?;
    smooth_scroll::init(window, document, &config.smooth_scroll)?;
    back_to_top::init(window, document, &config.back_to_top)?;
    contact::init(window, document, &config.contact)?;
    reveal::init(document, &config.reveal)?;
    debug!("all page units wired");
    Ok(())
}
