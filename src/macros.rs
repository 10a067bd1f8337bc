//! Small crate-wide convenience macros.

/// Log a formatted line to the browser console in debug builds only.
///
/// Release builds compile the call away entirely, so it is fine to leave
/// tracing of request/response flow in place.
///
/// ```rust,ignore
/// debug_log!("CBC response: {:?}", prediction);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(all(debug_assertions, target_arch = "wasm32"))]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        };
        #[cfg(not(all(debug_assertions, target_arch = "wasm32")))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        };
    }};
}

/// Grab an element by id from the document or bail out with a `JsValue`
/// error naming the missing id.
///
/// ```rust,ignore
/// let banner = require_element!(document, "cbc-error");
/// ```
#[macro_export]
macro_rules! require_element {
    ($document:expr, $id:expr) => {
        $document
            .get_element_by_id($id)
            .ok_or_else(|| wasm_bindgen::JsValue::from_str(&format!("#{} not found", $id)))?
    };
}
