//! JS-facing exports for the chat page script.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page's module script imports these by their camelCase names. Each
//! call runs against one browser-bound `ChatView`, built on first use and
//! kept for the life of the page.
//!
//! ERROR HANDLING
//! ==============
//! `ViewError`s become thrown JS `Error`s so page code can `try`/`catch`
//! like any other DOM failure.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::ViewConfig;
use crate::error::ViewError;
use crate::view::ChatView;

thread_local! {
    static VIEW: RefCell<Option<Rc<ChatView>>> = const { RefCell::new(None) };
}

impl From<ViewError> for JsValue {
    fn from(err: ViewError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

fn view() -> Result<Rc<ChatView>, ViewError> {
    VIEW.with(|slot| {
        if let Some(view) = slot.borrow().as_ref() {
            return Ok(Rc::clone(view));
        }
        let view = Rc::new(ChatView::browser(ViewConfig::default())?);
        *slot.borrow_mut() = Some(Rc::clone(&view));
        Ok(view)
    })
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        // Only fails when a logger is already installed; report through it.
        log::warn!("console logger not installed: {e}");
    }
}

#[wasm_bindgen(js_name = setError)]
pub fn set_error(message: &str) -> Result<(), JsValue> {
    Ok(view()?.set_error(message)?)
}

#[wasm_bindgen]
pub fn navigate(path: &str) -> Result<(), JsValue> {
    Ok(view()?.navigate(path)?)
}

#[wasm_bindgen(js_name = saveUsername)]
pub fn save_username(username: &str) -> Result<(), JsValue> {
    Ok(view()?.save_username(username)?)
}

#[wasm_bindgen(js_name = getUsername)]
pub fn get_username() -> Result<Option<String>, JsValue> {
    Ok(view()?.get_username()?)
}

#[wasm_bindgen(js_name = addMessage)]
pub fn add_message(username: &str, message: &str) -> Result<(), JsValue> {
    view()?.add_message(username, message)?;
    Ok(())
}

#[wasm_bindgen(js_name = getMessagesCount)]
pub fn get_messages_count() -> Result<usize, JsValue> {
    Ok(view()?.get_messages_count()?)
}
