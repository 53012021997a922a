//! Native shell bridge (Capacitor `App` plugin).
//!
//! Inside the native shell `window.Capacitor.Plugins.App` exposes the
//! hardware back button and an exit action. In a plain browser the plugin is
//! absent and every call reports [`PlatformError::PluginUnavailable`], which
//! callers treat as a no-op.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::core::error::PlatformError;
use crate::utils::dom;

fn app_plugin() -> Result<JsValue, PlatformError> {
    let window = dom::window().ok_or(PlatformError::NoWindow)?;
    ["Capacitor", "Plugins", "App"]
        .iter()
        .try_fold(JsValue::from(window), |value, key| {
            Reflect::get(&value, &JsValue::from_str(key))
                .ok()
                .filter(|v| v.is_object())
        })
        .ok_or(PlatformError::PluginUnavailable)
}

fn plugin_method(plugin: &JsValue, name: &'static str) -> Result<Function, PlatformError> {
    Reflect::get(plugin, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or(PlatformError::CallFailed(name))
}

/// Registered hardware back button listener.
///
/// Keeps the JS callback alive until [`BackButtonListener::remove`].
pub struct BackButtonListener {
    callback: Closure<dyn FnMut()>,
    handle: JsValue,
}

impl BackButtonListener {
    /// Unregisters the listener, then releases the callback.
    pub fn remove(self) {
        let BackButtonListener { callback, handle } = self;
        match handle.dyn_into::<Promise>() {
            // Newer plugin versions resolve the handle asynchronously
            Ok(promise) => spawn_local(async move {
                if let Ok(resolved) = JsFuture::from(promise).await {
                    call_remove(&resolved);
                }
                drop(callback);
            }),
            Err(handle) => {
                call_remove(&handle);
                drop(callback);
            }
        }
    }
}

fn call_remove(handle: &JsValue) {
    if let Ok(remove) = plugin_method(handle, "remove") {
        let _ = remove.call0(handle);
    }
}

/// Subscribe to the hardware back button.
pub fn add_back_button_listener(
    callback: impl FnMut() + 'static,
) -> Result<BackButtonListener, PlatformError> {
    let app = app_plugin()?;
    let add_listener = plugin_method(&app, "addListener")?;

    let callback = Closure::<dyn FnMut()>::new(callback);
    let handle = add_listener
        .call2(&app, &"backButton".into(), callback.as_ref().unchecked_ref())
        .map_err(|_| PlatformError::CallFailed("addListener"))?;

    Ok(BackButtonListener { callback, handle })
}

/// Close the application (native shell only).
pub fn exit_app() -> Result<(), PlatformError> {
    let app = app_plugin()?;
    plugin_method(&app, "exitApp")?
        .call0(&app)
        .map(|_| ())
        .map_err(|_| PlatformError::CallFailed("exitApp"))
}
