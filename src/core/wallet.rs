//! TronLink wallet detection using web-sys.
//!
//! The wallet itself is an external collaborator: this module only reads the
//! injected `window.tronWeb` / `window.tronLink` objects through the Reflect
//! API to learn whether an account is connected.

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::core::error::WalletError;
use crate::models::WalletState;
use crate::utils::dom;

/// Read a nested property path, e.g. `["defaultAddress", "base58"]`.
fn get_path(root: &JsValue, path: &[&str]) -> Option<JsValue> {
    path.iter().try_fold(root.clone(), |value, key| {
        Reflect::get(&value, &JsValue::from_str(key))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    })
}

/// Get a wallet object injected by the TronLink extension.
fn get_injected(name: &str) -> Result<Object, WalletError> {
    let window = dom::window().ok_or(WalletError::NoWindow)?;
    Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(WalletError::NotInstalled)
}

/// Check if TronLink (or a compatible wallet) is installed
pub fn is_available() -> bool {
    get_injected("tronWeb").is_ok()
}

/// Currently connected base58 address, without prompting the user.
///
/// TronLink reports `false` instead of an address while locked.
pub fn get_account() -> Option<String> {
    let tron_web = get_injected("tronWeb").ok()?;
    get_path(&tron_web, &["defaultAddress", "base58"])?.as_string()
}

/// Full node host the wallet is pointed at.
pub fn get_node() -> Option<String> {
    let tron_web = get_injected("tronWeb").ok()?;
    get_path(&tron_web, &["fullNode", "host"])?.as_string()
}

/// Snapshot of the wallet connection.
pub fn current_state() -> WalletState {
    match get_account() {
        Some(address) => WalletState::Connected {
            address,
            node: get_node(),
        },
        None => WalletState::Disconnected,
    }
}

/// Request wallet connection (shows the TronLink popup)
pub async fn connect() -> Result<String, WalletError> {
    let tron_link = get_injected("tronLink")?;

    let args = Object::new();
    Reflect::set(&args, &"method".into(), &"tron_requestAccounts".into())
        .map_err(|_| WalletError::RequestCreationFailed)?;

    let request = Reflect::get(&tron_link, &"request".into())
        .map_err(|_| WalletError::RequestCreationFailed)?
        .dyn_into::<Function>()
        .map_err(|_| WalletError::RequestCreationFailed)?;

    let promise: Promise = request
        .call1(&tron_link, &args)
        .map_err(|_| WalletError::RequestCreationFailed)?
        .into();

    let response = JsFuture::from(promise)
        .await
        .map_err(|e| WalletError::RequestRejected(format!("{:?}", e)))?;

    // { code: 200 } on approval, 4001 on rejection
    let code = get_path(&response, &["code"]).and_then(|c| c.as_f64());
    if code.is_some_and(|c| c as i64 != 200) {
        let message = get_path(&response, &["message"])
            .and_then(|m| m.as_string())
            .unwrap_or_default();
        return Err(WalletError::RequestRejected(message));
    }

    get_account().ok_or(WalletError::NoAccount)
}
