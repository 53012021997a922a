//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::Route;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeftRight as Exchange, LuChevronLeft as Back, LuHouse as Home, LuLock as Lock,
        LuPalette as Textures, LuSearch as NotFound, LuSettings as Settings,
        LuSparkles as Showcase, LuWallet as Wallet,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowLeftRight as Exchange, BsChevronLeft as Back, BsGear as Settings,
        BsHouseFill as Home, BsLockFill as Lock, BsPalette as Textures, BsSearch as NotFound,
        BsStars as Showcase, BsWallet2 as Wallet,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(HOME, Home);
themed_icon!(SHOWCASE, Showcase);
themed_icon!(WALLET, Wallet);
themed_icon!(EXCHANGE, Exchange);
themed_icon!(TEXTURES, Textures);
themed_icon!(SETTINGS, Settings);
themed_icon!(NOT_FOUND, NotFound);
themed_icon!(BACK, Back);
themed_icon!(LOCK, Lock);

/// Navigation bar icon for a route.
pub const fn route_icon(route: Route) -> Icon {
    match route {
        Route::Home => HOME,
        Route::Showcase => SHOWCASE,
        Route::Wallet => WALLET,
        Route::Exchange => EXCHANGE,
        Route::Textures => TEXTURES,
        Route::Settings => SETTINGS,
        Route::NotFound => NOT_FOUND,
    }
}
