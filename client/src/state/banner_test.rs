use super::*;
use crate::config::{DEFAULT_CLEAR_AFTER_MS, ERROR_REGION_ID};
use crate::util::dom::MemoryDocument;
use crate::util::timer::ManualTimers;

fn banner(policy: ClearPolicy) -> (ErrorBanner, Rc<MemoryDocument>, Rc<ManualTimers>) {
    let doc = Rc::new(MemoryDocument::chat_page());
    let timers = Rc::new(ManualTimers::new());
    let banner = ErrorBanner::new(
        Rc::clone(&doc) as Rc<dyn Document>,
        Rc::clone(&timers) as Rc<dyn Timers>,
        ERROR_REGION_ID,
        Duration::from_millis(DEFAULT_CLEAR_AFTER_MS),
        policy,
    );
    (banner, doc, timers)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// =============================================================
// Single message
// =============================================================

#[test]
fn set_error_shows_message_immediately() {
    let (banner, doc, _timers) = banner(ClearPolicy::Replace);
    banner.set_error("connection lost").unwrap();
    assert_eq!(doc.text("error").unwrap(), "connection lost");
    assert_eq!(banner.text().unwrap(), "connection lost");
}

#[test]
fn set_error_clears_after_five_seconds() {
    let (banner, doc, timers) = banner(ClearPolicy::Replace);
    banner.set_error("connection lost").unwrap();

    timers.advance(ms(4999));
    assert_eq!(doc.text("error").unwrap(), "connection lost");

    timers.advance(ms(1));
    assert_eq!(doc.text("error").unwrap(), "");
}

#[test]
fn set_error_accepts_empty_and_markup_verbatim() {
    let (banner, doc, _timers) = banner(ClearPolicy::Replace);
    banner.set_error("").unwrap();
    assert_eq!(doc.text("error").unwrap(), "");

    banner.set_error("<script>alert(1)</script>").unwrap();
    assert_eq!(doc.text("error").unwrap(), "<script>alert(1)</script>");
}

#[test]
fn set_error_without_banner_element_fails_and_schedules_nothing() {
    let doc = Rc::new(MemoryDocument::new());
    let timers = Rc::new(ManualTimers::new());
    let banner = ErrorBanner::new(
        doc,
        Rc::clone(&timers) as Rc<dyn Timers>,
        "error",
        ms(5000),
        ClearPolicy::Replace,
    );
    assert_eq!(banner.set_error("x"), Err(ViewError::MissingElement { id: "error".to_owned() }));
    assert_eq!(timers.pending(), 0);
}

#[test]
fn deferred_clear_tolerates_removed_element() {
    let (banner, doc, timers) = banner(ClearPolicy::Replace);
    banner.set_error("bye").unwrap();
    doc.remove_region("error");
    timers.advance(ms(5000));
    assert_eq!(timers.pending(), 0);
}

// =============================================================
// Repeated messages
// =============================================================

#[test]
fn replace_policy_gives_newest_message_full_window() {
    let (banner, doc, timers) = banner(ClearPolicy::Replace);
    banner.set_error("first").unwrap();
    timers.advance(ms(3000));
    banner.set_error("second").unwrap();
    assert_eq!(timers.pending(), 1);

    timers.advance(ms(2000));
    assert_eq!(doc.text("error").unwrap(), "second");

    timers.advance(ms(2999));
    assert_eq!(doc.text("error").unwrap(), "second");

    timers.advance(ms(1));
    assert_eq!(doc.text("error").unwrap(), "");
}

#[test]
fn stack_policy_lets_earliest_clear_win() {
    let (banner, doc, timers) = banner(ClearPolicy::Stack);
    assert_eq!(banner.policy(), ClearPolicy::Stack);
    banner.set_error("first").unwrap();
    timers.advance(ms(3000));
    banner.set_error("second").unwrap();
    assert_eq!(timers.pending(), 2);

    timers.advance(ms(2000));
    assert_eq!(doc.text("error").unwrap(), "");
    assert_eq!(timers.pending(), 1);

    timers.advance(ms(3000));
    assert_eq!(doc.text("error").unwrap(), "");
    assert_eq!(timers.pending(), 0);
}

#[test]
fn stack_policy_later_clear_blanks_message_set_after_first_clear() {
    let (banner, doc, timers) = banner(ClearPolicy::Stack);
    banner.set_error("first").unwrap();
    timers.advance(ms(3000));
    banner.set_error("second").unwrap();
    timers.advance(ms(2000));
    banner.set_error("third").unwrap();

    // Second message's clear fires at t=8000, three seconds into "third".
    timers.advance(ms(3000));
    assert_eq!(doc.text("error").unwrap(), "");
}

#[test]
fn replace_policy_after_clear_schedules_fresh_window() {
    let (banner, doc, timers) = banner(ClearPolicy::Replace);
    banner.set_error("first").unwrap();
    timers.advance(ms(6000));
    assert_eq!(doc.text("error").unwrap(), "");

    banner.set_error("again").unwrap();
    timers.advance(ms(4999));
    assert_eq!(doc.text("error").unwrap(), "again");
    timers.advance(ms(1));
    assert_eq!(doc.text("error").unwrap(), "");
}

#[test]
fn replace_policy_keeps_one_pending_clear_across_many_messages() {
    let (banner, doc, timers) = banner(ClearPolicy::Replace);
    for n in 0..50 {
        banner.set_error(&format!("error {n}")).unwrap();
        timers.advance(ms(10));
    }
    assert_eq!(timers.pending(), 1);

    drop(banner);
    assert_eq!(timers.pending(), 0);
    timers.advance(ms(10_000));
    assert_eq!(doc.text("error").unwrap(), "error 49");
}
