//! Cloud Document Mirror
//!
//! Boundary to the remote document store. The host page installs a
//! `window.cloudStore` glue object over the store SDK; this module binds to
//! it and handles (de)serialization. The reconciliation policy is "last
//! writer wins, whole-document replace": every local mutation overwrites the
//! entire remote document, every remote snapshot replaces the local shared
//! state verbatim.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::models::SharedDocument;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "cloudStore"], js_name = isConfigured)]
    fn is_configured() -> bool;

    #[wasm_bindgen(js_namespace = ["window", "cloudStore"], js_name = setDocument, catch)]
    async fn set_document(data: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "cloudStore"], js_name = subscribe)]
    fn subscribe_raw(on_snapshot: &js_sys::Function, on_error: &js_sys::Function);
}

/// Whether the host page provides a configured document store
pub fn available() -> bool {
    let Some(win) = web_sys::window() else {
        return false;
    };
    match js_sys::Reflect::get(&win, &JsValue::from_str("cloudStore")) {
        Ok(glue) if !glue.is_undefined() && !glue.is_null() => is_configured(),
        _ => false,
    }
}

/// Overwrite the whole remote document. Best effort: callers fire this from
/// a detached task and only log failures.
pub async fn write_document(doc: &SharedDocument) -> Result<(), String> {
    let data = serde_wasm_bindgen::to_value(doc).map_err(|e| e.to_string())?;
    set_document(data)
        .await
        .map_err(|e| format!("{:?}", e))
        .map(|_| ())
}

/// A snapshot delivered by the standing subscription
pub enum Snapshot {
    /// The document exists; here is its full content
    Document(SharedDocument),
    /// The document does not exist yet (first run)
    Missing,
}

/// Open the standing subscription on the shared document. Each remote write
/// (our own included) is delivered as a full snapshot. Stays open for the
/// rest of the session.
pub fn subscribe(
    on_snapshot: impl Fn(Snapshot) + 'static,
    on_error: impl Fn(String) + 'static,
) {
    let snap_cb = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
        if value.is_null() || value.is_undefined() {
            on_snapshot(Snapshot::Missing);
            return;
        }
        match serde_wasm_bindgen::from_value::<SharedDocument>(value) {
            Ok(doc) => on_snapshot(Snapshot::Document(doc)),
            // A document we cannot read is not "missing": treating it as
            // missing would overwrite it with the empty default. Keep the
            // last known state instead.
            Err(err) => {
                web_sys::console::error_1(&format!("壊れたスナップショットを無視: {err}").into());
            }
        }
    });
    let err_cb = Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
        on_error(format!("{:?}", err));
    });

    subscribe_raw(snap_cb.as_ref().unchecked_ref(), err_cb.as_ref().unchecked_ref());
    snap_cb.forget();
    err_cb.forget();
}
