//! Transient error banner.
//!
//! DESIGN
//! ======
//! Each `set_error` shows the text immediately and schedules a clear after
//! `clear_after`. Under `ClearPolicy::Replace` the banner tracks the one
//! pending clear and cancels it on the next message; under
//! `ClearPolicy::Stack` earlier clears stay scheduled and the first to fire
//! wins.
//!
//! ERROR HANDLING
//! ==============
//! A missing banner element fails `set_error` synchronously. If the element
//! disappears before a deferred clear fires, the clear logs and gives up.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::config::ClearPolicy;
use crate::error::ViewError;
use crate::util::dom::Document;
use crate::util::timer::{TimerHandle, Timers};

pub struct ErrorBanner {
    document: Rc<dyn Document>,
    timers: Rc<dyn Timers>,
    region: String,
    clear_after: Duration,
    policy: ClearPolicy,
    pending_clear: RefCell<Option<TimerHandle>>,
}

impl ErrorBanner {
    pub fn new(
        document: Rc<dyn Document>,
        timers: Rc<dyn Timers>,
        region: impl Into<String>,
        clear_after: Duration,
        policy: ClearPolicy,
    ) -> Self {
        Self {
            document,
            timers,
            region: region.into(),
            clear_after,
            policy,
            pending_clear: RefCell::new(None),
        }
    }

    /// Show `message` now and blank the banner after `clear_after`.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::MissingElement` if the banner element is absent.
    pub fn set_error(&self, message: &str) -> Result<(), ViewError> {
        self.document.set_text(&self.region, message)?;

        if self.policy == ClearPolicy::Replace {
            if let Some(previous) = self.pending_clear.borrow_mut().take() {
                log::debug!("banner: replacing pending clear");
                previous.cancel();
            }
        }

        let document = Rc::clone(&self.document);
        let region = self.region.clone();
        let handle = self.timers.schedule(
            self.clear_after,
            Box::new(move || {
                if let Err(e) = document.set_text(&region, "") {
                    log::warn!("banner: deferred clear failed: {e}");
                }
            }),
        );
        log::debug!("banner: clear scheduled in {}ms", self.clear_after.as_millis());

        match self.policy {
            ClearPolicy::Replace => *self.pending_clear.borrow_mut() = Some(handle),
            ClearPolicy::Stack => handle.detach(),
        }
        Ok(())
    }

    /// Current banner text.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::MissingElement` if the banner element is absent.
    pub fn text(&self) -> Result<String, ViewError> {
        self.document.text(&self.region)
    }

    pub fn policy(&self) -> ClearPolicy {
        self.policy
    }
}
