//! Chat page markup rendered on the server.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;

use crate::config::{ERROR_REGION_ID, MESSAGES_LIST_ID};

/// Default location of the `wasm-bindgen` bundle that exports the helpers.
pub const DEFAULT_CLIENT_SCRIPT: &str = "/static/pkg/client.js";

/// Inputs for the server-rendered document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    pub title: String,
    pub script_src: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self { title: "Chat".to_owned(), script_src: DEFAULT_CLIENT_SCRIPT.to_owned() }
    }
}

/// Inline module that loads the bundle, runs its `init()` (and with it the
/// start hook), then exposes the exported helpers as `window.chat`.
pub fn boot_script(script_src: &str) -> String {
    format!("import init, * as chat from {script_src:?};\nawait init();\nwindow.chat = chat;")
}

/// HTML shell rendered on the server.
pub fn shell(options: PageOptions) -> impl IntoView {
    let PageOptions { title, script_src } = options;
    let heading = title.clone();
    let boot = boot_script(&script_src);
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <script type="module" inner_html=boot></script>
            </head>
            <body>
                <ChatPage title=heading/>
            </body>
        </html>
    }
}

/// The chat surface: error banner plus the empty message list the client
/// script appends into.
#[component]
pub fn ChatPage(title: String) -> impl IntoView {
    view! {
        <main class="chat-page">
            <h1 class="chat-page__title">{title}</h1>
            <p id=ERROR_REGION_ID class="chat-page__error" role="alert"></p>
            <ul id=MESSAGES_LIST_ID class="chat-page__messages"></ul>
        </main>
    }
}

/// Render the full document to a string.
pub fn render_page(options: PageOptions) -> String {
    shell(options).to_html()
}
