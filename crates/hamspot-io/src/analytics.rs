//! Lightweight Simple Analytics event tracking.
//!
//! Calls the global `sa_event` function injected by the Simple
//! Analytics `<script>` tag.  Silently no-ops when the script is
//! absent (e.g., blocked by an ad-blocker or during tests).

use wasm_bindgen::prelude::*;

/// Fired when a detection completes and the annotated image is shown.
pub const EVENT_DETECTION: &str = "detection_complete";

/// Fired when a result is published and a CID comes back.
pub const EVENT_PUBLISH: &str = "result_published";

/// Fire a Simple Analytics custom event.
///
/// Event names follow Simple Analytics conventions: lowercase
/// alphanumeric with underscores. Silently does nothing when the
/// analytics script is absent.
pub fn track(name: &str) {
    debug_assert!(
        name.bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_'),
        "event name must be lowercase alphanumeric or underscore, got: {name:?}"
    );
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(func) = js_sys::Reflect::get(&window, &JsValue::from_str("sa_event")) else {
        return;
    };
    if !func.is_function() {
        return;
    }
    let func: js_sys::Function = func.unchecked_into();
    let _ = func.call1(&JsValue::NULL, &JsValue::from_str(name));
}
