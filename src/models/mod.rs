//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Route`], [`RouteConfig`], [`RouteParams`] - Navigable locations and their static config
//! - [`TransitionType`], [`TransitionConfig`], [`PageAnimation`] - Page transition descriptors
//! - [`DragSample`], [`DragState`], [`SwipeIntent`] - Swipe gesture values
//! - [`WalletState`] - TronLink connection state

mod gesture;
mod route;
mod transition;
mod wallet;

pub use gesture::{DragSample, DragState, SwipeIntent};
pub use route::{DEFAULT_REDIRECT, NAVIGATION_ORDER, Route, RouteConfig, RouteParams};
pub use transition::{
    PageAnimation, PageFrame, TransitionConfig, TransitionDirection, TransitionType,
};
pub use wallet::WalletState;
