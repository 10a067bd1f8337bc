// Hash based routing between the home page and the two screening flows.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::messages::Message;
use crate::state::dispatch_global_message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Cbc,
    Visual,
}

impl Route {
    /// Unknown or empty hashes land on the home page.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let path = path.trim_end_matches('/');
        match path {
            "cbc-test" => Route::Cbc,
            "visual-test" => Route::Visual,
            _ => Route::Home,
        }
    }

    pub fn hash(&self) -> &'static str {
        match self {
            Route::Home => "#/",
            Route::Cbc => "#/cbc-test",
            Route::Visual => "#/visual-test",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Cbc => "CBC Analyzer",
            Route::Visual => "Visual Screening",
        }
    }
}

/// Route matching the page's current `location.hash`.
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|h| Route::from_hash(&h))
        .unwrap_or(Route::Home)
}

/// Dispatch `Message::Navigate` whenever the hash changes. Links in the pages
/// are plain `<a href="#/...">` so the browser history works as usual.
pub fn install_hash_listener() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;

    let on_hash_change = Closure::wrap(Box::new(move |_: web_sys::Event| {
        dispatch_global_message(Message::Navigate(current_route()));
    }) as Box<dyn FnMut(_)>);

    window.add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())?;
    on_hash_change.forget();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_hashes_resolve() {
        assert_eq!(Route::from_hash("#/cbc-test"), Route::Cbc);
        assert_eq!(Route::from_hash("#/visual-test/"), Route::Visual);
        assert_eq!(Route::from_hash("#visual-test"), Route::Visual);
    }

    #[test]
    fn unknown_hashes_go_home() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(Route::from_hash("#/admin"), Route::Home);
    }

    #[test]
    fn hash_round_trips() {
        for route in [Route::Home, Route::Cbc, Route::Visual] {
            assert_eq!(Route::from_hash(route.hash()), route);
        }
    }
}
