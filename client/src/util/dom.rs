//! Render target: named text regions and message lists.
//!
//! SYSTEM CONTEXT
//! ==============
//! The view never touches `document` directly. It asks a `Document` to set
//! region text, append an entry, or count entries, so the same controller
//! drives the live page (`BrowserDocument`) and tests (`MemoryDocument`).
//!
//! TRADE-OFFS
//! ==========
//! Counts are recomputed from the current tree on every call. There is no
//! cached counter to drift out of sync with appends.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::{ERROR_REGION_ID, MESSAGES_LIST_ID};
use crate::error::ViewError;
use crate::state::chat::MessageEntry;

/// Operations the chat view needs from the page.
pub trait Document {
    /// Replace all content of element `id` with literal `text`.
    fn set_text(&self, id: &str, text: &str) -> Result<(), ViewError>;

    /// Current text content of element `id`.
    fn text(&self, id: &str) -> Result<String, ViewError>;

    /// Append one rendered entry as the last `<li>` of list `list_id`.
    fn append_entry(&self, list_id: &str, entry: &MessageEntry) -> Result<(), ViewError>;

    /// Number of `<li>` children currently in list `list_id`.
    fn count_entries(&self, list_id: &str) -> Result<usize, ViewError>;
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Element tree stand-in keyed by element id.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    regions: RefCell<HashMap<String, Region>>,
}

#[derive(Debug, Default)]
struct Region {
    text: String,
    entries: Vec<MessageEntry>,
}

impl MemoryDocument {
    /// Empty document with no elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Document with an empty element for each id.
    pub fn with_regions<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let regions = ids.into_iter().map(|id| (id.into(), Region::default())).collect();
        Self { regions: RefCell::new(regions) }
    }

    /// Document shaped like the served chat page: `#error` and `#messages`.
    pub fn chat_page() -> Self {
        Self::with_regions([ERROR_REGION_ID, MESSAGES_LIST_ID])
    }

    pub fn insert_region(&self, id: &str) {
        self.regions.borrow_mut().entry(id.to_owned()).or_default();
    }

    /// Remove element `id`. Returns whether it existed.
    pub fn remove_region(&self, id: &str) -> bool {
        self.regions.borrow_mut().remove(id).is_some()
    }

    /// Snapshot of the entries rendered into list `list_id`, in order.
    pub fn entries(&self, list_id: &str) -> Result<Vec<MessageEntry>, ViewError> {
        self.with_region(list_id, |region| region.entries.clone())
    }

    fn with_region<T>(&self, id: &str, f: impl FnOnce(&mut Region) -> T) -> Result<T, ViewError> {
        let mut regions = self.regions.borrow_mut();
        let region = regions.get_mut(id).ok_or_else(|| ViewError::missing(id))?;
        Ok(f(region))
    }
}

impl Document for MemoryDocument {
    fn set_text(&self, id: &str, text: &str) -> Result<(), ViewError> {
        // Setting text replaces children, as `textContent` does.
        self.with_region(id, |region| {
            region.text = text.to_owned();
            region.entries.clear();
        })
    }

    fn text(&self, id: &str) -> Result<String, ViewError> {
        self.with_region(id, |region| {
            let mut out = region.text.clone();
            for entry in &region.entries {
                out.push_str(&entry.username);
                out.push_str(&entry.message);
            }
            out
        })
    }

    fn append_entry(&self, list_id: &str, entry: &MessageEntry) -> Result<(), ViewError> {
        self.with_region(list_id, |region| region.entries.push(entry.clone()))
    }

    fn count_entries(&self, list_id: &str) -> Result<usize, ViewError> {
        self.with_region(list_id, |region| region.entries.len())
    }
}

// =============================================================================
// BROWSER
// =============================================================================

#[cfg(feature = "hydrate")]
pub use browser::BrowserDocument;

#[cfg(feature = "hydrate")]
mod browser {
    use super::Document;
    use crate::error::ViewError;
    use crate::state::chat::{MessageEntry, TEXT_CLASS, USERNAME_CLASS};
    use crate::util::js_message;

    fn dom_error(err: &wasm_bindgen::JsValue) -> ViewError {
        ViewError::Dom(js_message(err))
    }

    /// `Document` backed by the live page.
    #[derive(Debug, Clone)]
    pub struct BrowserDocument {
        document: web_sys::Document,
    }

    impl BrowserDocument {
        /// Bind to `window.document`.
        ///
        /// # Errors
        ///
        /// Returns `ViewError::Dom` outside a browser window.
        pub fn from_window() -> Result<Self, ViewError> {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or_else(|| ViewError::Dom("window.document unavailable".to_owned()))?;
            Ok(Self { document })
        }

        fn element(&self, id: &str) -> Result<web_sys::Element, ViewError> {
            self.document.get_element_by_id(id).ok_or_else(|| ViewError::missing(id))
        }

        fn text_element(&self, tag: &str, class: &str, text: &str) -> Result<web_sys::Element, ViewError> {
            let el = self.document.create_element(tag).map_err(|e| dom_error(&e))?;
            el.set_class_name(class);
            el.set_text_content(Some(text));
            Ok(el)
        }
    }

    impl Document for BrowserDocument {
        fn set_text(&self, id: &str, text: &str) -> Result<(), ViewError> {
            self.element(id)?.set_text_content(Some(text));
            Ok(())
        }

        fn text(&self, id: &str) -> Result<String, ViewError> {
            Ok(self.element(id)?.text_content().unwrap_or_default())
        }

        fn append_entry(&self, list_id: &str, entry: &MessageEntry) -> Result<(), ViewError> {
            let list = self.element(list_id)?;
            let item = self.document.create_element("li").map_err(|e| dom_error(&e))?;
            item.set_class_name(entry.class_name());

            let name = self.text_element("span", USERNAME_CLASS, &entry.username)?;
            let text = self.text_element("span", TEXT_CLASS, &entry.message)?;
            item.append_child(&name).map_err(|e| dom_error(&e))?;
            item.append_child(&text).map_err(|e| dom_error(&e))?;

            list.append_child(&item).map_err(|e| dom_error(&e))?;
            Ok(())
        }

        fn count_entries(&self, list_id: &str) -> Result<usize, ViewError> {
            let items = self
                .element(list_id)?
                .query_selector_all(":scope > li")
                .map_err(|e| dom_error(&e))?;
            Ok(items.length() as usize)
        }
    }
}
