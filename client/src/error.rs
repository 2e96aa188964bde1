//! Error type shared by all view helpers.
//!
//! ERROR HANDLING
//! ==============
//! A missing page element is a broken contract between the markup and the
//! script, so it surfaces as an error instead of a silent no-op. Browser API
//! failures are stringified because `JsValue` is neither `Send` nor `Display`.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("required element not found: #{id}")]
    MissingElement { id: String },
    #[error("session storage unavailable: {0}")]
    Storage(String),
    #[error("navigation failed: {0}")]
    Navigation(String),
    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl ViewError {
    pub(crate) fn missing(id: &str) -> Self {
        Self::MissingElement { id: id.to_owned() }
    }
}
