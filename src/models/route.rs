//! Route identifiers and their static configuration.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Query parameters attached to a route.
///
/// Ordering is irrelevant for equality; the map keeps query strings stable.
pub type RouteParams = BTreeMap<String, String>;

/// Navigable locations of the application.
///
/// URL format: `/` for [`Route::Home`], `/<slug>` for everything else
/// (e.g. `/wallet`, `/not-found`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Landing page (default route)
    #[default]
    Home,
    /// Feature showcase
    Showcase,
    /// Balance, send and receive
    Wallet,
    /// Token exchange
    Exchange,
    /// Texture gallery
    Textures,
    /// Preferences
    Settings,
    /// Fallback for unknown paths
    NotFound,
}

/// Routes in navigation depth order.
///
/// Moving to a later entry is "forward" (slide left), to an earlier one
/// "backward" (slide right). [`Route::NotFound`] has no depth.
pub const NAVIGATION_ORDER: [Route; 6] = [
    Route::Home,
    Route::Showcase,
    Route::Wallet,
    Route::Exchange,
    Route::Textures,
    Route::Settings,
];

/// Route used when a guarded route has no `redirect_to` of its own.
pub const DEFAULT_REDIRECT: Route = Route::Home;

/// Static per-route configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteConfig {
    /// Whether the route is only reachable with a connected wallet.
    pub requires_auth: bool,
    /// Fallback when the auth guard rejects the route.
    pub redirect_to: Option<Route>,
    /// Document title shown while the route is active.
    pub title: Option<&'static str>,
}

impl RouteConfig {
    const fn open(title: &'static str) -> Self {
        Self {
            requires_auth: false,
            redirect_to: None,
            title: Some(title),
        }
    }

    const fn guarded(title: &'static str, redirect_to: Option<Route>) -> Self {
        Self {
            requires_auth: true,
            redirect_to,
            title: Some(title),
        }
    }
}

impl Route {
    /// Every route, including [`Route::NotFound`].
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::Showcase,
        Route::Wallet,
        Route::Exchange,
        Route::Textures,
        Route::Settings,
        Route::NotFound,
    ];

    /// Slug used in URLs and history state.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Showcase => "showcase",
            Self::Wallet => "wallet",
            Self::Exchange => "exchange",
            Self::Textures => "textures",
            Self::Settings => "settings",
            Self::NotFound => "not-found",
        }
    }

    /// Look up a route by slug.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.slug() == slug)
    }

    /// Static configuration for this route.
    pub const fn config(self) -> RouteConfig {
        match self {
            Self::Home => RouteConfig::open("TronWave"),
            Self::Showcase => RouteConfig::open("Showcase"),
            Self::Wallet => RouteConfig::guarded("Wallet", Some(Route::Home)),
            Self::Exchange => RouteConfig::guarded("Exchange", Some(Route::Home)),
            Self::Textures => RouteConfig::open("Textures"),
            Self::Settings => RouteConfig::guarded("Settings", None),
            Self::NotFound => RouteConfig::open("Not Found"),
        }
    }

    /// Target of the auth guard redirect for this route.
    #[cfg(test)]
    pub fn redirect_target(self) -> Route {
        self.config().redirect_to.unwrap_or(DEFAULT_REDIRECT)
    }

    /// Position in [`NAVIGATION_ORDER`], if the route has a depth.
    pub fn depth(self) -> Option<usize> {
        NAVIGATION_ORDER.iter().position(|route| *route == self)
    }

    /// Neighbour one step shallower in the navigation order.
    pub fn previous(self) -> Option<Route> {
        let depth = self.depth()?;
        depth.checked_sub(1).map(|d| NAVIGATION_ORDER[d])
    }

    /// Neighbour one step deeper in the navigation order.
    pub fn next(self) -> Option<Route> {
        let depth = self.depth()?;
        NAVIGATION_ORDER.get(depth + 1).copied()
    }

    /// URL path for this route.
    pub fn path(self) -> String {
        match self {
            Self::Home => "/".to_string(),
            other => format!("/{}", other.slug()),
        }
    }

    /// Resolve a URL path.
    ///
    /// Empty paths map to [`Route::Home`]; unknown paths to [`Route::NotFound`].
    pub fn from_path(path: &str) -> Self {
        let slug = path.trim_matches('/');
        if slug.is_empty() {
            return Self::Home;
        }
        Self::from_slug(slug).unwrap_or(Self::NotFound)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/wallet"), Route::Wallet);
        assert_eq!(Route::from_path("/wallet/"), Route::Wallet);
        assert_eq!(Route::from_path("/not-found"), Route::NotFound);
        assert_eq!(Route::from_path("/nowhere"), Route::NotFound);
        assert_eq!(Route::from_path("/wallet/send"), Route::NotFound);
    }

    #[test]
    fn test_route_path() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Showcase.path(), "/showcase");
        assert_eq!(Route::NotFound.path(), "/not-found");
    }

    #[test]
    fn test_path_round_trip_for_every_route() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(&route.path()), route);
        }
    }

    #[test]
    fn test_guarded_routes() {
        assert!(Route::Wallet.config().requires_auth);
        assert!(Route::Exchange.config().requires_auth);
        assert!(!Route::Home.config().requires_auth);
        assert_eq!(Route::Wallet.redirect_target(), Route::Home);
        // No configured redirect falls back to the default
        assert_eq!(Route::Settings.config().redirect_to, None);
        assert_eq!(Route::Settings.redirect_target(), DEFAULT_REDIRECT);
    }

    #[test]
    fn test_depth_and_neighbours() {
        assert_eq!(Route::Home.depth(), Some(0));
        assert_eq!(Route::NotFound.depth(), None);
        assert_eq!(Route::Home.previous(), None);
        assert_eq!(Route::Home.next(), Some(Route::Showcase));
        assert_eq!(Route::Settings.next(), None);
        assert_eq!(Route::Wallet.previous(), Some(Route::Showcase));
        assert_eq!(Route::NotFound.next(), None);
    }

    #[test]
    fn test_serde_uses_slugs() {
        let json = serde_json::to_string(&Route::NotFound).unwrap();
        assert_eq!(json, "\"not-found\"");
        let route: Route = serde_json::from_str("\"wallet\"").unwrap();
        assert_eq!(route, Route::Wallet);
    }
}
