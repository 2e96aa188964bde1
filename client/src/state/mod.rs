//! Chat view state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`banner`, `chat`) so the controller in
//! `view` stays a thin composition of small focused models.

pub mod banner;
pub mod chat;
