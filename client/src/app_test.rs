use super::*;

#[test]
fn page_contains_banner_and_message_list() {
    let html = render_page(PageOptions::default());
    assert!(html.contains(r#"id="error""#));
    assert!(html.contains(r#"id="messages""#));
    assert!(html.contains("<ul"));
}

#[test]
fn page_loads_client_script() {
    let html = render_page(PageOptions::default());
    assert!(html.contains(DEFAULT_CLIENT_SCRIPT));
    assert!(html.contains(r#"type="module""#));
}

#[test]
fn page_title_is_escaped_text() {
    let html = render_page(PageOptions {
        title: "<Chat & co>".to_owned(),
        script_src: "/app.js".to_owned(),
    });
    assert!(html.contains("&lt;Chat &amp; co&gt;"));
    assert!(!html.contains("<Chat"));
    assert!(html.contains("/app.js"));
}

#[test]
fn page_starts_empty() {
    let html = render_page(PageOptions::default());
    assert!(!html.contains("<li"));
}

#[test]
fn page_initializes_bundle_before_exposing_helpers() {
    let html = render_page(PageOptions::default());
    let import = html.find(r#"import init, * as chat from "/static/pkg/client.js";"#).unwrap();
    let init = html.find("await init();").unwrap();
    let expose = html.find("window.chat = chat;").unwrap();
    assert!(import < init && init < expose);
}

#[test]
fn boot_script_quotes_custom_source() {
    let script = boot_script("/assets/chat.js");
    assert!(script.starts_with(r#"import init, * as chat from "/assets/chat.js";"#));
    assert!(script.contains("init()"));
}
