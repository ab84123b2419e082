//! # folio
//!
//! Host-independent controllers for a static portfolio page.
//!
//! Every interactive piece of the page (theme switch, mobile menu, skill bars,
//! in-page scrolling, back-to-top button, contact form, entrance animations)
//! is an owned controller holding an explicit state enum. Controllers never
//! look anything up on their own: the elements they drive are handed in at
//! construction through small port traits, and rendering is a projection of
//! the current state onto those ports.
//!
//! The browser adapter lives in the `folio-wasm` crate. Tests in this crate
//! drive the controllers with in-memory fakes.
//!
//! ## Architecture
//!
//! - [`dom`] - port traits for class lists, inline style and scrolling
//! - [`theme`] - light/dark mode with a persisted preference
//! - [`menu`] - collapsible navigation
//! - [`watch`] - "observe until first match, then detach" bookkeeping
//! - [`skills`] - one-shot skill bar fill
//! - [`smooth_scroll`] - fragment link handling
//! - [`back_to_top`] - scroll threshold visibility
//! - [`contact`] - asynchronous form submission state machine
//! - [`reveal`] - one-shot entrance animation class
//! - [`config`] - selectors, thresholds and timings
//! - [`error`] - the crate error type

pub mod back_to_top;
pub mod config;
pub mod contact;
pub mod dom;
pub mod error;
pub mod menu;
pub mod reveal;
pub mod skills;
pub mod smooth_scroll;
pub mod theme;
pub mod watch;

pub use config::FolioConfig;
pub use error::{FolioError, Result};
