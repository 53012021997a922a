//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Route metadata lives next to [`Route`](crate::models::Route) itself.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, used as the document title fallback.
pub const APP_NAME: &str = "TronWave";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Navigation
// =============================================================================

/// Maximum number of routes kept in the navigation history stack.
pub const MAX_HISTORY: usize = 50;

/// Maximum number of guard redirects followed by a single `navigate` call.
///
/// A chain longer than this means the `redirect_to` table contains a cycle.
pub const MAX_REDIRECT_HOPS: usize = 5;

/// Page transition timing.
pub mod transition {
    /// Duration of every animated page transition in milliseconds.
    pub const DURATION_MS: u32 = 300;
}

// =============================================================================
// Swipe Gesture
// =============================================================================

/// Swipe gesture tuning.
pub mod swipe {
    /// Multiplier applied to drag movement toward a side with no target.
    pub const RUBBER_BAND_FACTOR: f64 = 0.2;

    /// Degrees of Y rotation per pixel of drag.
    pub const ROTATION_FACTOR: f64 = 0.05;

    /// Rotation clamp in degrees (applied symmetrically).
    pub const MAX_ROTATION_DEG: f64 = 10.0;

    /// Scale reduction per pixel of drag.
    pub const SCALE_FACTOR: f64 = 0.0005;

    /// Smallest scale a dragged page shrinks to.
    pub const MIN_SCALE: f64 = 0.95;

    /// Horizontal distance in pixels that commits a swipe.
    pub const DISTANCE_THRESHOLD: f64 = 80.0;

    /// Release velocity in px/ms that commits a swipe.
    pub const VELOCITY_THRESHOLD: f64 = 0.5;

    /// Spring frame interval in milliseconds.
    pub const FRAME_INTERVAL_MS: u32 = 16;
}

// =============================================================================
// Wallet Configuration
// =============================================================================

/// How often the TronLink account is polled, in milliseconds.
pub const WALLET_POLL_MS: u32 = 3000;

/// TRON base58 address display constants.
pub mod tron_address {
    /// Length of a full base58check TRON address.
    pub const FULL_LEN: usize = 34;
    /// Characters kept at the start of a shortened address.
    pub const PREFIX_LEN: usize = 6;
    /// Characters kept at the end of a shortened address.
    pub const SUFFIX_LEN: usize = 4;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder
/// - `Lucide` - Minimal, thin strokes (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

/// Media query that disables page transition animations.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
