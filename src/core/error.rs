//! Custom error types for the application.
//!
//! - [`NavigationError`] - Route store failures (misconfigured guard redirects)
//! - [`PlatformError`] - Native shell (Capacitor) bridge failures
//! - [`WalletError`] - TronLink connection and request errors

use thiserror::Error;

use crate::models::Route;

/// Navigation errors raised by the route store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The auth guard kept redirecting; `redirect_to` entries form a cycle.
    #[error("redirect limit of {hops} hops exceeded while navigating to '{route}'")]
    RedirectLimit { route: Route, hops: usize },
}

/// Errors from the native platform bridge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// Not running inside the Capacitor shell
    #[error("native app plugin not available")]
    PluginUnavailable,
    /// The plugin rejected a call
    #[error("native call '{0}' failed")]
    CallFailed(&'static str),
}

/// Wallet-related errors for TronLink integration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// TronLink extension not installed
    #[error("TronLink not installed. Please install the TronLink extension.")]
    NotInstalled,
    /// Failed to create request object
    #[error("failed to create wallet request")]
    RequestCreationFailed,
    /// Request to wallet was rejected by user
    #[error("wallet request rejected: {0}")]
    RequestRejected(String),
    /// No account returned from wallet
    #[error("no account returned from wallet")]
    NoAccount,
}
