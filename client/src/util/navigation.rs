//! Full-page navigation.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::cell::RefCell;

use crate::error::ViewError;

pub trait Navigator {
    /// Replace the current location with `path`, triggering a page load.
    fn navigate(&self, path: &str) -> Result<(), ViewError>;
}

/// Records requested paths instead of leaving the page.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visits.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) -> Result<(), ViewError> {
        self.visits.borrow_mut().push(path.to_owned());
        Ok(())
    }
}

/// `window.location.replace`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct BrowserNavigator {
    location: web_sys::Location,
}

#[cfg(feature = "hydrate")]
impl BrowserNavigator {
    /// # Errors
    ///
    /// Returns `ViewError::Navigation` outside a browser window.
    pub fn from_window() -> Result<Self, ViewError> {
        let location = web_sys::window()
            .map(|w| w.location())
            .ok_or_else(|| ViewError::Navigation("no window".to_owned()))?;
        Ok(Self { location })
    }
}

#[cfg(feature = "hydrate")]
impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) -> Result<(), ViewError> {
        self.location
            .replace(path)
            .map_err(|e| ViewError::Navigation(crate::util::js_message(&e)))
    }
}
