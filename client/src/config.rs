//! Element ids, storage keys, and banner timing for the chat view.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Id of the banner element that shows transient errors.
pub const ERROR_REGION_ID: &str = "error";

/// Id of the `<ul>` that holds rendered chat messages.
pub const MESSAGES_LIST_ID: &str = "messages";

/// Session storage key for the current chat username.
pub const USERNAME_KEY: &str = "username";

pub const DEFAULT_CLEAR_AFTER_MS: u64 = 5000;

/// What happens to a pending banner clear when a new error arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClearPolicy {
    /// Cancel the pending clear; the newest message gets the full window.
    #[default]
    Replace,
    /// Leave earlier clears scheduled. The first one to fire blanks the
    /// banner even if a newer message is showing.
    Stack,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewConfig {
    pub error_region: String,
    pub messages_list: String,
    pub username_key: String,
    pub clear_after: Duration,
    pub clear_policy: ClearPolicy,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            error_region: ERROR_REGION_ID.to_owned(),
            messages_list: MESSAGES_LIST_ID.to_owned(),
            username_key: USERNAME_KEY.to_owned(),
            clear_after: Duration::from_millis(DEFAULT_CLEAR_AFTER_MS),
            clear_policy: ClearPolicy::Replace,
        }
    }
}

impl ViewConfig {
    #[must_use]
    pub fn with_clear_policy(mut self, policy: ClearPolicy) -> Self {
        self.clear_policy = policy;
        self
    }

    #[must_use]
    pub fn with_clear_after(mut self, delay: Duration) -> Self {
        self.clear_after = delay;
        self
    }
}
