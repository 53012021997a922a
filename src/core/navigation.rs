//! Route store: the single source of truth for where the app is.
//!
//! [`RouteStore`] is a plain state machine. It never touches the browser or
//! schedules timers itself; operations return a [`NavigationOutcome`] and the
//! caller opens the transition window, later closing it with
//! [`RouteStore::complete_transition`]. Each window is tagged with a
//! generation number so a completion belonging to an older navigation cannot
//! end a newer one.

use serde::{Deserialize, Serialize};

use crate::config::{MAX_HISTORY, MAX_REDIRECT_HOPS};
use crate::core::error::NavigationError;
use crate::core::history::HistoryStack;
use crate::core::transition::get_transition_config;
use crate::models::{
    DEFAULT_REDIRECT, Route, RouteConfig, RouteParams, TransitionConfig, TransitionDirection,
};
use crate::utils::url::{build_url, parse_location};

// ============================================================================
// Operation types
// ============================================================================

/// Options for [`RouteStore::navigate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Overwrite the top history entry instead of pushing.
    pub replace: bool,
    /// Commit without opening a transition window.
    pub skip_animation: bool,
}

impl NavigateOptions {
    pub fn replace() -> Self {
        Self {
            replace: true,
            ..Self::default()
        }
    }
}

/// Result of a navigation operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Nothing changed.
    Unchanged,
    /// State changed without a transition window.
    Settled,
    /// State changed; call `complete_transition(generation)` after `duration_ms`.
    Transitioning { generation: u64, duration_ms: u32 },
}

impl NavigationOutcome {
    /// Whether observers need to be notified.
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Decision for the platform hardware back button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HardwareBack {
    /// History had somewhere to go back to.
    Navigated(NavigationOutcome),
    /// At the bottom of the stack: leave the app.
    Exit,
}

/// How a browser history entry is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}

/// State stored with each browser history entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub route: Route,
    #[serde(default)]
    pub params: RouteParams,
}

/// Browser synchronization for one committed route change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryUpdate {
    pub entry: HistoryEntry,
    pub url: String,
    pub mode: HistoryMode,
    pub title: Option<&'static str>,
}

// ============================================================================
// RouteStore
// ============================================================================

/// Navigation state and the operations allowed to change it.
#[derive(Clone, Debug)]
pub struct RouteStore {
    current_route: Route,
    previous_route: Option<Route>,
    params: RouteParams,
    is_authenticated: bool,
    is_transitioning: bool,
    transition_direction: TransitionDirection,
    history: HistoryStack,
    /// Tag of the most recent transition window.
    generation: u64,
    route_config: fn(Route) -> RouteConfig,
}

impl RouteStore {
    /// Creates a store positioned at `route` with a single-entry history.
    pub fn new(route: Route, params: RouteParams) -> Self {
        Self {
            current_route: route,
            previous_route: None,
            params,
            is_authenticated: false,
            is_transitioning: false,
            transition_direction: TransitionDirection::None,
            history: HistoryStack::seeded(route, MAX_HISTORY),
            generation: 0,
            route_config: Route::config,
        }
    }

    /// Creates a store from the browser location.
    ///
    /// Unknown paths land on [`Route::NotFound`], an empty path on the home route.
    pub fn from_location(path: &str, query: &str) -> Self {
        let (route, params) = parse_location(path, query);
        Self::new(route, params)
    }

    /// Replaces the static route table (used to exercise misconfigurations).
    #[cfg(test)]
    pub fn with_route_config(mut self, route_config: fn(Route) -> RouteConfig) -> Self {
        self.route_config = route_config;
        self
    }

    // ------------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------------

    pub fn current_route(&self) -> Route {
        self.current_route
    }

    pub fn previous_route(&self) -> Option<Route> {
        self.previous_route
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    pub fn transition_direction(&self) -> TransitionDirection {
        self.transition_direction
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// Transition between the previous and current route.
    pub fn transition_config(&self) -> TransitionConfig {
        get_transition_config(self.previous_route, self.current_route)
    }

    /// Whether the auth guard lets `route` through.
    pub fn can_access_route(&self, route: Route) -> bool {
        !(self.route_config)(route).requires_auth || self.is_authenticated
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Records the wallet connection state. Does not re-run the guard.
    pub fn set_authenticated(&mut self, value: bool) {
        self.is_authenticated = value;
    }

    /// Navigates to `route`, applying the auth guard.
    ///
    /// Navigating to the current route with equal params is a no-op. A
    /// rejected route redirects (replacing the top entry) to its configured
    /// `redirect_to`, or to the default route.
    pub fn navigate(
        &mut self,
        route: Route,
        params: RouteParams,
        options: NavigateOptions,
    ) -> Result<NavigationOutcome, NavigationError> {
        self.navigate_guarded(route, params, options, 0)
    }

    /// Shorthand for `navigate` with `replace: true`.
    pub fn replace(
        &mut self,
        route: Route,
        params: RouteParams,
    ) -> Result<NavigationOutcome, NavigationError> {
        self.navigate(route, params, NavigateOptions::replace())
    }

    fn navigate_guarded(
        &mut self,
        route: Route,
        params: RouteParams,
        options: NavigateOptions,
        hops: usize,
    ) -> Result<NavigationOutcome, NavigationError> {
        if route == self.current_route && params == self.params {
            return Ok(NavigationOutcome::Unchanged);
        }

        if !self.can_access_route(route) {
            if hops >= MAX_REDIRECT_HOPS {
                log::error!("redirect chain for '{}' exceeded {} hops", route, hops);
                return Err(NavigationError::RedirectLimit { route, hops });
            }
            let target = (self.route_config)(route)
                .redirect_to
                .unwrap_or(DEFAULT_REDIRECT);
            log::info!("'{}' requires a wallet, redirecting to '{}'", route, target);
            return self.navigate_guarded(
                target,
                RouteParams::new(),
                NavigateOptions::replace(),
                hops + 1,
            );
        }

        let direction = self.infer_direction(route);
        self.previous_route = Some(self.current_route);
        self.current_route = route;
        self.params = params;
        self.transition_direction = if options.skip_animation {
            TransitionDirection::None
        } else {
            direction
        };
        self.is_transitioning = !options.skip_animation;

        if options.replace {
            self.history.replace_top(route);
        } else {
            self.history.push(route);
        }

        log::debug!(
            "navigate {:?} -> {} ({:?}, depth {})",
            self.previous_route,
            route,
            self.transition_direction,
            self.history.len()
        );
        Ok(self.open_transition(options.skip_animation))
    }

    /// `Back` when `route` appears below the top of the history stack.
    fn infer_direction(&self, route: Route) -> TransitionDirection {
        match self.history.last_index_of(route) {
            Some(index) if index + 1 < self.history.len() => TransitionDirection::Back,
            _ => TransitionDirection::Forward,
        }
    }

    /// Pops the history stack. No-op at depth one.
    ///
    /// The auth guard is not re-run; params are cleared since history
    /// entries only record routes.
    pub fn back(&mut self) -> NavigationOutcome {
        if !self.can_go_back() {
            return NavigationOutcome::Unchanged;
        }
        self.history.pop();
        let Some(target) = self.history.top() else {
            return NavigationOutcome::Unchanged;
        };

        self.previous_route = Some(self.current_route);
        self.current_route = target;
        self.params = RouteParams::new();
        self.transition_direction = TransitionDirection::Back;
        self.is_transitioning = true;

        log::debug!("back {:?} -> {}", self.previous_route, target);
        self.open_transition(false)
    }

    /// Applies a browser back/forward navigation.
    ///
    /// The history stack is truncated to the last occurrence of `route`
    /// rather than growing a duplicate; a route not on the stack is pushed.
    pub fn restore(&mut self, route: Route, params: RouteParams) -> NavigationOutcome {
        if route == self.current_route {
            return NavigationOutcome::Unchanged;
        }

        self.previous_route = Some(self.current_route);
        self.current_route = route;
        self.params = params;
        self.transition_direction = TransitionDirection::Back;
        self.is_transitioning = true;

        match self.history.last_index_of(route) {
            Some(index) => self.history.truncate_after(index),
            None => self.history.push(route),
        }

        log::debug!("popstate {:?} -> {}", self.previous_route, route);
        self.open_transition(false)
    }

    /// Handles the platform back button.
    pub fn hardware_back(&mut self) -> HardwareBack {
        if self.can_go_back() {
            HardwareBack::Navigated(self.back())
        } else {
            HardwareBack::Exit
        }
    }

    /// Closes the transition window tagged `generation`.
    ///
    /// Returns `false` (and changes nothing) for stale or repeated completions.
    pub fn complete_transition(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.is_transitioning {
            return false;
        }
        self.is_transitioning = false;
        true
    }

    fn open_transition(&mut self, skip_animation: bool) -> NavigationOutcome {
        self.generation += 1;
        if skip_animation {
            NavigationOutcome::Settled
        } else {
            NavigationOutcome::Transitioning {
                generation: self.generation,
                duration_ms: self.transition_config().duration_ms,
            }
        }
    }

    // ------------------------------------------------------------------------
    // Browser synchronization
    // ------------------------------------------------------------------------

    /// Browser history write for the current snapshot.
    ///
    /// Back navigations overwrite the entry so they do not grow browser
    /// history; everything else pushes.
    pub fn history_update(&self) -> HistoryUpdate {
        let mode = match self.transition_direction {
            TransitionDirection::Back => HistoryMode::Replace,
            _ => HistoryMode::Push,
        };
        HistoryUpdate {
            entry: HistoryEntry {
                route: self.current_route,
                params: self.params.clone(),
            },
            url: build_url(self.current_route, &self.params),
            mode,
            title: (self.route_config)(self.current_route).title,
        }
    }
}

impl Default for RouteStore {
    fn default() -> Self {
        Self::new(Route::default(), RouteParams::new())
    }
}

// ============================================================================
// Tests
// ============================================================================
