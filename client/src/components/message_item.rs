//! One rendered chat message.

#[cfg(test)]
#[path = "message_item_test.rs"]
mod message_item_test;

use leptos::prelude::*;

use crate::state::chat::{MessageEntry, TEXT_CLASS, USERNAME_CLASS};

/// `<li>` with sender and text spans. Both fields render as escaped text.
#[component]
pub fn MessageItem(entry: MessageEntry) -> impl IntoView {
    let class = entry.class_name();
    view! {
        <li class=class>
            <span class=USERNAME_CLASS>{entry.username}</span>
            <span class=TEXT_CLASS>{entry.message}</span>
        </li>
    }
}

/// Server-side HTML for a single entry.
pub fn render_message_html(entry: &MessageEntry) -> String {
    let entry = entry.clone();
    view! { <MessageItem entry=entry/> }.to_html()
}
