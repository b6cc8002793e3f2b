//! Native file picker via a temporary `<input type="file">`.
//!
//! Dioxus has no API for opening the file chooser programmatically.
//! This module creates a hidden input per request, clicks it, and
//! waits for either `change` (files chosen) or `cancel` (dialog
//! dismissed). The input and its listeners are owned by a
//! [`PickerGuard`] and removed from the document on every exit path:
//! selection, cancellation, error, or the future being dropped.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target) and a user-gesture context.

use std::cell::RefCell;
use std::rc::Rc;

use dropzone_core::{PickerOutcome, PickerRequest};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::file::{BrowserFile, FileReadError};

/// Errors that can occur while running the file picker.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// A browser API call returned an error or a required object was missing.
    #[error("file picker error: {0}")]
    JsError(String),

    /// A chosen file could not be normalized.
    #[error(transparent)]
    Read(#[from] FileReadError),
}

impl From<JsValue> for PickerError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// A hidden file input attached to `<body>` for the lifetime of one
/// picker interaction.
///
/// Dropping the guard detaches its listeners and removes the input.
struct PickerGuard {
    body: web_sys::HtmlElement,
    input: web_sys::HtmlInputElement,
    listeners: Vec<(&'static str, Listener)>,
}

impl PickerGuard {
    /// Create, configure, and attach the hidden input.
    fn acquire(request: &PickerRequest) -> Result<Self, PickerError> {
        let window =
            web_sys::window().ok_or_else(|| PickerError::JsError("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| PickerError::JsError("no document".into()))?;
        let body = document
            .body()
            .ok_or_else(|| PickerError::JsError("no document body".into()))?;

        let input: web_sys::HtmlInputElement = document
            .create_element("input")?
            .dyn_into::<web_sys::HtmlInputElement>()
            .map_err(|e| PickerError::JsError(format!("failed to cast element: {e:?}")))?;
        input.set_type("file");
        input.set_multiple(request.multiple);
        input.set_accept(&request.accept);
        input.style().set_property("display", "none")?;

        // Some browsers only open the dialog for inputs in the document.
        body.append_child(&input)?;

        Ok(Self {
            body,
            input,
            listeners: Vec::new(),
        })
    }

    /// Attach a listener that lives as long as the guard.
    fn listen(&mut self, event: &'static str, listener: Listener) -> Result<(), PickerError> {
        self.input
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        self.listeners.push((event, listener));
        Ok(())
    }

    /// Files currently selected in the input, normalized.
    fn selected_files(&self) -> Result<Vec<BrowserFile>, PickerError> {
        let Some(list) = self.input.files() else {
            return Ok(Vec::new());
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(|file| BrowserFile::from_web_file(file).map_err(PickerError::from))
            .collect()
    }
}

impl Drop for PickerGuard {
    fn drop(&mut self) {
        for (event, listener) in &self.listeners {
            let _ = self
                .input
                .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        }
        let _ = self.body.remove_child(&self.input);
    }
}

/// Open the native file chooser and wait for the user.
///
/// Resolves to [`PickerOutcome::Selected`] when the user confirms a
/// selection and [`PickerOutcome::Cancelled`] when the dialog is
/// dismissed. The temporary input is removed before this returns.
///
/// Browsers without the `cancel` event on file inputs never resolve a
/// dismissed dialog; the input is then removed when the future is
/// dropped.
///
/// # Errors
///
/// Returns [`PickerError::JsError`] if the input cannot be created or
/// attached, and [`PickerError::Read`] if a chosen file reports
/// unusable metadata.
#[allow(clippy::future_not_send)] // WASM is single-threaded; DOM handles are !Send
pub async fn pick_files(
    request: &PickerRequest,
) -> Result<PickerOutcome<BrowserFile>, PickerError> {
    let mut guard = PickerGuard::acquire(request)?;
    let (promise, resolve) = new_promise()?;

    let on_change = {
        let resolve = resolve.clone();
        Listener::new(move |_event: web_sys::Event| {
            let _ = resolve.call1(&JsValue::NULL, &JsValue::TRUE);
        })
    };
    let on_cancel = Listener::new(move |_event: web_sys::Event| {
        let _ = resolve.call1(&JsValue::NULL, &JsValue::FALSE);
    });
    guard.listen("change", on_change)?;
    guard.listen("cancel", on_cancel)?;

    guard.input.click();

    let confirmed = wasm_bindgen_futures::JsFuture::from(promise)
        .await?
        .as_bool()
        .unwrap_or(false);

    let outcome = if confirmed {
        PickerOutcome::Selected(guard.selected_files()?)
    } else {
        PickerOutcome::Cancelled
    };
    drop(guard);
    Ok(outcome)
}

/// Create a JS Promise along with its resolve function.
fn new_promise() -> Result<(js_sys::Promise, js_sys::Function), PickerError> {
    let resolve = Rc::new(RefCell::new(None::<js_sys::Function>));
    let resolve_clone = Rc::clone(&resolve);

    let promise = js_sys::Promise::new(&mut move |res, _rej| {
        *resolve_clone.borrow_mut() = Some(res);
    });

    let resolve_fn = resolve
        .borrow_mut()
        .take()
        .ok_or_else(|| PickerError::JsError("promise resolver not captured".into()))?;

    Ok((promise, resolve_fn))
}
