//! UI components built with Leptos.
//!
//! - [`router`] - Route store binding and page host (main entry point)
//! - [`swipe`] - Swipe gesture area
//! - [`nav`] - Header and tab bar
//! - [`pages`] - Per-route page content
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod nav;
pub mod pages;
pub mod router;
pub mod swipe;

pub use nav::NavBar;
pub use router::{AppRouter, RouterContext};
pub use swipe::SwipeContext;
