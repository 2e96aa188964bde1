//! Capability traits the chat view runs against.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from the view
//! controller. Each exposes a trait, an in-memory implementation for tests
//! and SSR, and a `web-sys` implementation behind the `hydrate` feature.

pub mod dom;
pub mod navigation;
pub mod session;
pub mod timer;

/// Best-effort text for a thrown JS value.
#[cfg(feature = "hydrate")]
pub(crate) fn js_message(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
