//! Utility modules for web and URL operations.
//!
//! Provides:
//! - [`dom`] - Browser window, history and title access
//! - [`platform`] - Capacitor hardware back button and app exit
//! - [`url`] - Route URL building and parsing

pub mod dom;
pub mod platform;
pub mod url;
