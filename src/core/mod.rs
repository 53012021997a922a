//! Core navigation logic, independent of the DOM.
//!
//! This module provides:
//! - [`RouteStore`] navigation state machine and its [`history`] stack
//! - [`transition`] pure page-transition calculations
//! - [`SwipeController`] with its [`spring`] animator and [`GestureTracker`]
//! - [`wallet`] TronLink connection probe

pub mod error;
mod gesture;
pub mod history;
pub mod navigation;
pub mod spring;
mod swipe;
pub mod transition;
pub mod wallet;

pub use gesture::GestureTracker;
pub use navigation::{
    HardwareBack, HistoryEntry, HistoryMode, HistoryUpdate, NavigateOptions, NavigationOutcome,
    RouteStore,
};
pub use swipe::SwipeController;
