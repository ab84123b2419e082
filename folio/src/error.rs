//! Error type shared by every controller.

use thiserror::Error;

/// Everything that can go wrong while wiring or running the page controllers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FolioError {
    /// A required element is absent from the host page.
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },

    /// The contact endpoint answered with a non-success status.
    #[error("form submission failed with status {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("form submission timed out after {0} ms")]
    Timeout(u64),

    /// The configuration island could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A browser API call threw.
    #[error("browser API error: {0}")]
    Js(String),
}

impl FolioError {
    pub fn missing(selector: impl Into<String>) -> Self {
        FolioError::MissingElement {
            selector: selector.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_the_selector() {
        let err = FolioError::missing("#backToTop");
        assert_eq!(err.to_string(), "required element not found: #backToTop");
    }

    #[test]
    fn timeout_reports_the_limit() {
        assert_eq!(
            FolioError::Timeout(15_000).to_string(),
            "form submission timed out after 15000 ms"
        );
    }
}
