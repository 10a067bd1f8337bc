use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::error::{AppError, AppResult};

pub const CBC_ENV_VAR: &str = "CBC_API_URL";
pub const VISUAL_ENV_VAR: &str = "VISUAL_API_URL";

/// Prediction endpoint configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiConfig {
    cbc_url: Option<String>,
    visual_url: Option<String>,
}

impl ApiConfig {
    /// Create a new ApiConfig from the `CBC_API_URL` / `VISUAL_API_URL`
    /// variables captured at build time. Either may be missing; it can still
    /// be supplied at runtime through `init_api_config_js()`.
    pub fn from_build_env() -> Self {
        Self::from_urls(option_env!("CBC_API_URL"), option_env!("VISUAL_API_URL"))
    }

    /// Create a new ApiConfig from URL strings. Blank values count as unset.
    pub fn from_urls(cbc_url: Option<&str>, visual_url: Option<&str>) -> Self {
        Self {
            cbc_url: normalize(cbc_url),
            visual_url: normalize(visual_url),
        }
    }

    pub fn cbc_url(&self) -> AppResult<&str> {
        self.cbc_url.as_deref().ok_or(AppError::MissingEndpoint(CBC_ENV_VAR))
    }

    pub fn visual_url(&self) -> AppResult<&str> {
        self.visual_url.as_deref().ok_or(AppError::MissingEndpoint(VISUAL_ENV_VAR))
    }

    /// Names of the variables that still lack a value.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.cbc_url.is_none() {
            missing.push(CBC_ENV_VAR);
        }
        if self.visual_url.is_none() {
            missing.push(VISUAL_ENV_VAR);
        }
        missing
    }
}

fn normalize(url: Option<&str>) -> Option<String> {
    url.map(str::trim)
        .filter(|u| !u.is_empty())
        .map(|u| u.trim_end_matches('/').to_string())
}

thread_local! {
    static API_CONFIG: RefCell<ApiConfig> = RefCell::new(ApiConfig::default());
}

/// Load the build-time configuration. Values already set at runtime win.
pub fn init_api_config() {
    let built = ApiConfig::from_build_env();
    API_CONFIG.with(|cfg| {
        let mut cfg = cfg.borrow_mut();
        if cfg.cbc_url.is_none() {
            cfg.cbc_url = built.cbc_url;
        }
        if cfg.visual_url.is_none() {
            cfg.visual_url = built.visual_url;
        }
    });
}

/// Runtime override for hosts that inject endpoint URLs from the page, e.g.
/// `init_api_config_js(window.CBC_URL, window.VISUAL_URL)` right after the
/// module is initialised. Empty strings leave the existing value untouched.
#[wasm_bindgen]
pub fn init_api_config_js(cbc_url: &str, visual_url: &str) {
    let update = ApiConfig::from_urls(Some(cbc_url), Some(visual_url));
    API_CONFIG.with(|cfg| {
        let mut cfg = cfg.borrow_mut();
        if update.cbc_url.is_some() {
            cfg.cbc_url = update.cbc_url;
        }
        if update.visual_url.is_some() {
            cfg.visual_url = update.visual_url;
        }
    });
}

/// Snapshot of the active configuration.
pub fn current() -> ApiConfig {
    API_CONFIG.with(|cfg| cfg.borrow().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let cfg = ApiConfig::from_urls(Some("https://cbc.example/predict/"), Some(" https://eye.example "));
        assert_eq!(cfg.cbc_url().unwrap(), "https://cbc.example/predict");
        assert_eq!(cfg.visual_url().unwrap(), "https://eye.example");
        assert!(cfg.missing().is_empty());
    }

    #[test]
    fn blank_urls_are_missing() {
        let cfg = ApiConfig::from_urls(Some("   "), None);
        assert!(matches!(cfg.cbc_url(), Err(AppError::MissingEndpoint(CBC_ENV_VAR))));
        assert_eq!(cfg.missing(), vec![CBC_ENV_VAR, VISUAL_ENV_VAR]);
    }

    #[test]
    fn runtime_override_wins_over_build_env() {
        init_api_config_js("https://runtime.example/cbc", "");
        init_api_config();
        let cfg = current();
        assert_eq!(cfg.cbc_url().unwrap(), "https://runtime.example/cbc");
    }
}
