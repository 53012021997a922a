//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Failures are swallowed
//! and reported through `Option`/`bool` return values.

use wasm_bindgen::JsValue;
use web_sys::{PopStateEvent, Window};

use crate::config::APP_NAME;
use crate::core::{HistoryEntry, HistoryMode, HistoryUpdate};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Milliseconds since the epoch, for gesture timing.
#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Current `(pathname, search)` of the page URL.
pub fn location_parts() -> (String, String) {
    window()
        .map(|w| {
            let location = w.location();
            (
                location.pathname().unwrap_or_default(),
                location.search().unwrap_or_default(),
            )
        })
        .unwrap_or_default()
}

/// Write a history entry (push or replace) carrying the route as state.
///
/// Returns `true` if the browser accepted the entry.
pub fn write_history(update: &HistoryUpdate) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let Ok(history) = window.history() else {
        return false;
    };
    let state = serde_wasm_bindgen::to_value(&update.entry).unwrap_or(JsValue::NULL);

    let result = match update.mode {
        HistoryMode::Push => history.push_state_with_url(&state, "", Some(&update.url)),
        HistoryMode::Replace => history.replace_state_with_url(&state, "", Some(&update.url)),
    };
    result.is_ok()
}

/// Route stored in a popstate event, if it was written by [`write_history`].
pub fn read_history_state(event: &PopStateEvent) -> Option<HistoryEntry> {
    let state = event.state();
    if state.is_null() || state.is_undefined() {
        return None;
    }
    serde_wasm_bindgen::from_value(state).ok()
}

/// Set the document title, suffixed with the app name.
pub fn set_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if title == APP_NAME {
            document.set_title(title);
        } else {
            document.set_title(&format!("{} | {}", title, APP_NAME));
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::core::RouteStore;
    use crate::models::{Route, RouteParams};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_write_history_updates_location() {
        let mut params = RouteParams::new();
        params.insert("tab".to_string(), "send".to_string());
        let update = RouteStore::new(Route::Wallet, params).history_update();

        assert!(write_history(&update));
        assert_eq!(
            location_parts(),
            ("/wallet".to_string(), "?tab=send".to_string())
        );
    }

    #[wasm_bindgen_test]
    fn test_set_title() {
        set_title("Wallet");
        let title = window().and_then(|w| w.document()).map(|d| d.title());
        assert_eq!(title.as_deref(), Some("Wallet | TronWave"));

        set_title(APP_NAME);
        let title = window().and_then(|w| w.document()).map(|d| d.title());
        assert_eq!(title.as_deref(), Some(APP_NAME));
    }
}
