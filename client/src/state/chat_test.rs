use super::*;

// =============================================================
// Mine marking
// =============================================================

#[test]
fn entry_is_mine_when_username_matches_session_user() {
    let entry = MessageEntry::new("alice", "hi", Some("alice"));
    assert!(entry.is_mine);
}

#[test]
fn entry_is_not_mine_for_other_sender() {
    let entry = MessageEntry::new("bob", "hi", Some("alice"));
    assert!(!entry.is_mine);
}

#[test]
fn entry_is_not_mine_without_session_user() {
    let entry = MessageEntry::new("alice", "hi", None);
    assert!(!entry.is_mine);
}

#[test]
fn mine_marking_is_case_sensitive() {
    let entry = MessageEntry::new("Alice", "hi", Some("alice"));
    assert!(!entry.is_mine);
}

#[test]
fn empty_username_matches_empty_session_user() {
    let entry = MessageEntry::new("", "hi", Some(""));
    assert!(entry.is_mine);
}

// =============================================================
// Classes
// =============================================================

#[test]
fn class_name_includes_mine_modifier() {
    let entry = MessageEntry::new("alice", "hi", Some("alice"));
    assert_eq!(entry.class_name(), "message message--mine");
    assert!(entry.class_name().split(' ').any(|c| c == MINE_CLASS));
}

#[test]
fn class_name_for_others_is_base_class() {
    let entry = MessageEntry::new("bob", "yo", Some("alice"));
    assert_eq!(entry.class_name(), ENTRY_CLASS);
}

#[test]
fn fields_are_kept_verbatim() {
    let entry = MessageEntry::new("<i>eve</i>", "<b>hi</b> & bye", None);
    assert_eq!(entry.username, "<i>eve</i>");
    assert_eq!(entry.message, "<b>hi</b> & bye");
}
