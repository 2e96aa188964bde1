//! Chat view controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChatView` is the single entry point for page helpers: the error banner,
//! session identity, message rendering, and navigation. It owns no DOM or
//! storage itself; every effect goes through the injected capabilities so
//! the same code runs against the live page or the in-memory fakes.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::rc::Rc;

use crate::config::ViewConfig;
use crate::error::ViewError;
use crate::state::banner::ErrorBanner;
use crate::state::chat::MessageEntry;
use crate::util::dom::Document;
use crate::util::navigation::Navigator;
use crate::util::session::SessionStorage;
use crate::util::timer::Timers;

pub struct ChatView {
    config: ViewConfig,
    document: Rc<dyn Document>,
    storage: Rc<dyn SessionStorage>,
    navigator: Rc<dyn Navigator>,
    banner: ErrorBanner,
}

impl ChatView {
    pub fn new(
        config: ViewConfig,
        document: Rc<dyn Document>,
        storage: Rc<dyn SessionStorage>,
        navigator: Rc<dyn Navigator>,
        timers: Rc<dyn Timers>,
    ) -> Self {
        let banner = ErrorBanner::new(
            Rc::clone(&document),
            timers,
            config.error_region.clone(),
            config.clear_after,
            config.clear_policy,
        );
        Self { config, document, storage, navigator, banner }
    }

    /// Controller bound to the live page, session storage, and `setTimeout`.
    ///
    /// # Errors
    ///
    /// Fails when called outside a browser window or when session storage
    /// is unavailable.
    #[cfg(feature = "hydrate")]
    pub fn browser(config: ViewConfig) -> Result<Self, ViewError> {
        use crate::util::dom::BrowserDocument;
        use crate::util::navigation::BrowserNavigator;
        use crate::util::session::BrowserSessionStorage;
        use crate::util::timer::BrowserTimers;

        Ok(Self::new(
            config,
            Rc::new(BrowserDocument::from_window()?),
            Rc::new(BrowserSessionStorage::from_window()?),
            Rc::new(BrowserNavigator::from_window()?),
            Rc::new(BrowserTimers),
        ))
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Show `message` in the error banner; it clears itself later.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::MissingElement` if the banner element is absent.
    pub fn set_error(&self, message: &str) -> Result<(), ViewError> {
        self.banner.set_error(message)
    }

    /// Current banner text.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::MissingElement` if the banner element is absent.
    pub fn error_text(&self) -> Result<String, ViewError> {
        self.banner.text()
    }

    /// Leave the page for `path`.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Navigation` if the location change is rejected.
    pub fn navigate(&self, path: &str) -> Result<(), ViewError> {
        log::debug!("navigate: {path}");
        self.navigator.navigate(path)
    }

    /// Remember `username` for the rest of this tab's session.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Storage` if session storage rejects the write.
    pub fn save_username(&self, username: &str) -> Result<(), ViewError> {
        self.storage.set_item(&self.config.username_key, username)
    }

    /// The session username, or `None` before the first save.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Storage` if session storage cannot be read.
    pub fn get_username(&self) -> Result<Option<String>, ViewError> {
        self.storage.get_item(&self.config.username_key)
    }

    /// Append a message to the list, marked as mine when `username` is the
    /// session user. Returns the entry that was rendered.
    ///
    /// # Errors
    ///
    /// Fails if the session cannot be read or the list element is absent.
    pub fn add_message(&self, username: &str, message: &str) -> Result<MessageEntry, ViewError> {
        let current = self.get_username()?;
        let entry = MessageEntry::new(username, message, current.as_deref());
        self.document.append_entry(&self.config.messages_list, &entry)?;
        log::debug!("message appended (mine: {})", entry.is_mine);
        Ok(entry)
    }

    /// Number of messages currently rendered in the list.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::MissingElement` if the list element is absent.
    pub fn get_messages_count(&self) -> Result<usize, ViewError> {
        self.document.count_entries(&self.config.messages_list)
    }
}
