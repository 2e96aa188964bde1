//! # client
//!
//! Browser-side helpers for the chat page: a transient error banner, the
//! session username, the rendered message list, and page navigation.
//!
//! Every helper runs against small capability traits (`Document`,
//! `SessionStorage`, `Timers`, `Navigator`) instead of ambient browser
//! globals. The `hydrate` feature supplies `web-sys` implementations and the
//! `wasm-bindgen` exports the page script calls. Tests and SSR use the
//! in-memory fakes.

pub mod app;
#[cfg(feature = "hydrate")]
pub mod bindings;
pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod util;
pub mod view;
