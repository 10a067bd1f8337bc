//! Error type shared by the network and camera layers.
//!
//! DOM plumbing keeps returning `Result<_, JsValue>`; an `AppError` is turned
//! into a `JsValue` (or into the banner text via `Display`) at that boundary.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum AppError {
    /// Prediction service answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The request never produced a response (offline, CORS, DNS ...).
    #[error("{0}")]
    Network(String),

    /// The service answered 2xx but the body did not match the expected shape.
    #[error("Unexpected response from the prediction service: {0}")]
    Decode(#[from] serde_json::Error),

    /// Endpoint URL was neither baked in at build time nor set at runtime.
    #[error("Prediction endpoint is not configured (set {0})")]
    MissingEndpoint(&'static str),

    #[error("Camera unavailable: {0}")]
    Camera(String),

    #[error("{0}")]
    Dom(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Wrap a rejected fetch promise. JS `Error` objects keep their message,
    /// anything else falls back to a debug rendering.
    pub fn network(value: JsValue) -> Self {
        AppError::Network(describe_js_error(&value, "Network request failed"))
    }

    pub fn camera(value: JsValue) -> Self {
        AppError::Camera(describe_js_error(&value, "unknown camera error"))
    }

    pub fn dom(value: JsValue) -> Self {
        AppError::Dom(describe_js_error(&value, "DOM operation failed"))
    }

    /// Camera errors are the only recoverable-by-retry category.
    pub fn is_camera(&self) -> bool {
        matches!(self, AppError::Camera(_))
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Extract a human readable message from an arbitrary thrown JS value.
pub fn describe_js_error(value: &JsValue, fallback: &str) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        let msg: String = err.message().into();
        if !msg.is_empty() {
            return msg;
        }
    }
    if let Some(text) = value.as_string() {
        if !text.is_empty() {
            return text;
        }
    }
    fallback.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_renders_status() {
        let err = AppError::Http { status: 503 };
        assert_eq!(err.to_string(), "HTTP error! status: 503");
        assert!(!err.is_camera());
    }

    #[test]
    fn missing_endpoint_names_the_variable() {
        let err = AppError::MissingEndpoint("CBC_API_URL");
        assert!(err.to_string().contains("CBC_API_URL"));
    }

    #[test]
    fn decode_error_wraps_serde() {
        let serde_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: AppError = serde_err.into();
        assert!(matches!(err, AppError::Decode(_)));
        assert!(err.to_string().starts_with("Unexpected response"));
    }

    #[test]
    fn camera_errors_are_flagged() {
        assert!(AppError::Camera("denied".into()).is_camera());
    }
}
