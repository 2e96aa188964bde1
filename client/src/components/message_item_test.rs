use super::*;

#[test]
fn renders_list_item_with_sender_and_text() {
    let html = render_message_html(&MessageEntry::new("bob", "yo", Some("alice")));
    assert!(html.contains("<li"));
    assert!(html.contains(r#"class="message""#));
    assert!(html.contains(r#"class="message__username""#));
    assert!(html.contains(r#"class="message__text""#));
    assert!(html.contains("bob"));
    assert!(html.contains("yo"));
}

#[test]
fn mine_entry_carries_modifier_class() {
    let html = render_message_html(&MessageEntry::new("alice", "hi", Some("alice")));
    assert!(html.contains(r#"class="message message--mine""#));
}

#[test]
fn markup_in_fields_is_escaped() {
    let html = render_message_html(&MessageEntry::new("<i>eve</i>", "<b>hi</b>", None));
    assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
    assert!(html.contains("&lt;i&gt;eve&lt;/i&gt;"));
    assert!(!html.contains("<b>"));
    assert!(!html.contains("<i>"));
}

#[test]
fn script_payload_is_not_emitted_as_element() {
    let html = render_message_html(&MessageEntry::new("x", "<script>alert(1)</script>", None));
    assert!(!html.contains("<script>"));
}
