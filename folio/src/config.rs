//! Page configuration.
//!
//! The defaults describe the stock portfolio markup. A host page can override
//! any subset of them with a JSON island:
//!
//! ```html
//! <script type="application/json" id="folio-config">
//!   { "back_to_top": { "threshold_px": 500 } }
//! </script>
//! ```

use serde::Deserialize;
use std::time::Duration;

use crate::error::{FolioError, Result};

/// Element id of the optional JSON configuration island.
pub const CONFIG_ISLAND_ID: &str = "folio-config";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// `tracing` filter directive, e.g. `"info"` or `"folio=debug"`
    pub log_level: String,
    pub theme: ThemeConfig,
    pub menu: MenuConfig,
    pub skills: SkillsConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub back_to_top: BackToTopConfig,
    pub contact: ContactConfig,
    pub reveal: RevealConfig,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            theme: ThemeConfig::default(),
            menu: MenuConfig::default(),
            skills: SkillsConfig::default(),
            smooth_scroll: SmoothScrollConfig::default(),
            back_to_top: BackToTopConfig::default(),
            contact: ContactConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

impl FolioConfig {
    /// Parse a configuration island. Missing keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| FolioError::Config(e.to_string()))
    }

    /// Parse the island if there is one; fall back to defaults otherwise.
    ///
    /// The parse error is handed back alongside the defaults so the caller can
    /// report it once logging is up.
    pub fn load_or_default(raw: Option<&str>) -> (Self, Option<FolioError>) {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => (Self::default(), None),
            Some(raw) => match Self::from_json(raw) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
        }
    }
}

/// Visibility detection options for an intersection watcher.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WatchOptions {
    /// Fraction of the element that must be visible, `0.0..=1.0`
    pub threshold: f64,
    /// CSS margin applied to the detection region
    pub root_margin: String,
}

impl WatchOptions {
    pub fn new(threshold: f64, root_margin: impl Into<String>) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin: root_margin.into(),
        }
    }
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self::new(0.0, "0px")
    }
}

/// Bottom edge of the detection region pulled in by 50px.
const BOTTOM_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub toggle_id: String,
    /// Selector of the icon inside the toggle
    pub icon_selector: String,
    pub storage_key: String,
    /// Class put on `<body>` in dark mode
    pub dark_class: String,
    /// Icon class shown while the page is light
    pub light_icon: String,
    /// Icon class shown while the page is dark
    pub dark_icon: String,
    pub media_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: "theme-toggle".into(),
            icon_selector: "i".into(),
            storage_key: "theme".into(),
            dark_class: "dark-mode".into(),
            light_icon: "fa-moon".into(),
            dark_icon: "fa-sun".into(),
            media_query: "(prefers-color-scheme: dark)".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub toggle_id: String,
    pub panel_selector: String,
    pub link_selector: String,
    pub active_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toggle_id: "mobile-menu".into(),
            panel_selector: ".nav-links".into(),
            link_selector: ".nav-links a".into(),
            active_class: "active".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    pub selector: String,
    /// Attribute holding the target width, e.g. `data-level="85%"`
    pub level_attribute: String,
    pub watch: WatchOptions,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            selector: ".skill-level".into(),
            level_attribute: "data-level".into(),
            watch: WatchOptions::new(0.5, BOTTOM_MARGIN),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    pub link_selector: String,
    /// The fixed header whose height is subtracted from every target offset
    pub header_selector: String,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            link_selector: r##"a[href^="#"]"##.into(),
            header_selector: "header".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackToTopConfig {
    pub button_id: String,
    /// The button shows strictly above this vertical offset
    pub threshold_px: f64,
    pub visible_class: String,
}

impl Default for BackToTopConfig {
    fn default() -> Self {
        Self {
            button_id: "backToTop".into(),
            threshold_px: 300.0,
            visible_class: "show".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub form_selector: String,
    pub submit_selector: String,
    pub popup_id: String,
    pub popup_class: String,
    /// Markup swapped into the submit button while a request is in flight
    pub loading_label: String,
    pub failure_message: String,
    pub popup_dismiss_ms: u64,
    /// `None` waits for the browser's own network timeout
    pub submit_timeout_ms: Option<u64>,
}

impl ContactConfig {
    pub fn popup_dismiss(&self) -> Duration {
        Duration::from_millis(self.popup_dismiss_ms)
    }

    pub fn submit_timeout(&self) -> Option<Duration> {
        self.submit_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_selector: ".contact-form".into(),
            submit_selector: r#"button[type="submit"]"#.into(),
            popup_id: "successPopup".into(),
            popup_class: "show".into(),
            loading_label: r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#.into(),
            failure_message: "Something went wrong. Please try again.".into(),
            popup_dismiss_ms: 3000,
            submit_timeout_ms: Some(15_000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    pub animated_class: String,
    /// Append the `.animated` keyframe rule to `<head>` at startup
    pub inject_style: bool,
    pub watch: WatchOptions,
}

impl RevealConfig {
    /// All reveal selectors as one selector group.
    pub fn selector_group(&self) -> String {
        self.selectors.join(", ")
    }

    /// Stylesheet rule that gives the animated class its effect.
    pub fn animated_style(&self) -> String {
        format!(
            ".{} {{ animation: fadeInUp 0.8s ease forwards; }}",
            self.animated_class
        )
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: [
                ".about-content",
                ".skill-card",
                ".project-card",
                ".timeline-content",
                ".contact-card",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            animated_class: "animated".into(),
            inject_style: true,
            watch: WatchOptions::new(0.1, BOTTOM_MARGIN),
        }
    }
}
