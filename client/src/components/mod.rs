//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components describe the same markup `BrowserDocument` builds by hand, so
//! server-rendered and script-appended messages look identical.

pub mod message_item;
