#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Class on every rendered message `<li>`.
pub const ENTRY_CLASS: &str = "message";

/// Extra class on messages sent by the current session's user.
pub const MINE_CLASS: &str = "message--mine";

/// Class on the sender-name `<span>`.
pub const USERNAME_CLASS: &str = "message__username";

/// Class on the message-text `<span>`.
pub const TEXT_CLASS: &str = "message__text";

/// A single rendered chat message.
///
/// Both `username` and `message` are plain text. Renderers insert them as
/// text nodes, never as markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub username: String,
    pub message: String,
    pub is_mine: bool,
}

impl MessageEntry {
    /// Build an entry, marking it as mine when `username` equals the
    /// session user. No session user means nothing is mine.
    pub fn new(username: impl Into<String>, message: impl Into<String>, current_user: Option<&str>) -> Self {
        let username = username.into();
        let is_mine = current_user == Some(username.as_str());
        Self { username, message: message.into(), is_mine }
    }

    /// Full `class` attribute for the entry's `<li>`.
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        if self.is_mine { "message message--mine" } else { ENTRY_CLASS }
    }
}
