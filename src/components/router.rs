//! Application router.
//!
//! Binds the framework-free [`RouteStore`] to Leptos and the browser.
//!
//! # Architecture
//!
//! - **One signal, one snapshot**: the store lives in a single `RwSignal`, so
//!   every multi-field navigation reaches observers as one notification
//! - **Transition windows**: each animated navigation schedules one
//!   `Timeout`; a newer navigation drops (cancels) the older timer, and the
//!   store ignores any completion whose generation is stale
//! - **Browser sync**: route changes are written to `history`, `popstate`
//!   events are applied with [`RouteStore::restore`]
//! - **Hardware back**: the Capacitor back button pops history or exits
//!
//! Lifecycle: [`RouterContext::new`] → [`RouterContext::setup`] →
//! [`RouterContext::dispose`].

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::PopStateEvent;

use crate::components::pages::Page;
use crate::components::swipe::{SwipeArea, SwipeContext};
use crate::config::{APP_NAME, REDUCED_MOTION_QUERY};
use crate::core::transition::{get_animation_config, route_distance};
use crate::core::error::NavigationError;
use crate::core::{
    HardwareBack, HistoryMode, NavigateOptions, NavigationOutcome, RouteStore,
};
use crate::models::{PageAnimation, PageFrame, Route, RouteParams, TransitionConfig};
use crate::utils::url::parse_location;
use crate::utils::{dom, platform};

stylance::import_crate_style!(css, "src/components/shell.module.css");

// ============================================================================
// Listeners
// ============================================================================

/// Browser and platform listeners attached by `setup`.
struct Listeners {
    popstate: Closure<dyn FnMut(web_sys::Event)>,
    back_button: Option<platform::BackButtonListener>,
    /// Browser history writer and the location memo it tracks.
    sync: Effect<LocalStorage>,
    location: Memo<(Route, RouteParams)>,
}

impl Listeners {
    fn remove(self) {
        self.sync.stop();
        self.location.dispose();
        if let Some(window) = dom::window() {
            let _ = window.remove_event_listener_with_callback(
                "popstate",
                self.popstate.as_ref().unchecked_ref(),
            );
        }
        if let Some(back_button) = self.back_button {
            back_button.remove();
        }
    }
}

// ============================================================================
// RouterContext
// ============================================================================

/// Reactive handle to the route store, provided at the root.
///
/// `Copy` like every other context in the app: all fields are arena handles.
#[derive(Clone, Copy)]
pub struct RouterContext {
    /// Route store snapshot. Read freely; mutate only through the methods below.
    pub store: RwSignal<RouteStore>,
    /// Timer closing the current transition window.
    pending: StoredValue<Option<Timeout>, LocalStorage>,
    /// Present between `setup` and `dispose`.
    listeners: StoredValue<Option<Listeners>, LocalStorage>,
    /// User asked the OS for reduced motion.
    reduced_motion: Signal<bool>,
}

impl RouterContext {
    /// Creates the store from the current browser location.
    ///
    /// Must be called inside a reactive owner (the root component).
    pub fn new() -> Self {
        let (path, query) = dom::location_parts();
        Self {
            store: RwSignal::new(RouteStore::from_location(&path, &query)),
            pending: StoredValue::new_local(None),
            listeners: StoredValue::new_local(None),
            reduced_motion: use_media_query(REDUCED_MOTION_QUERY.to_string()),
        }
    }

    // ------------------------------------------------------------------------
    // Read access (tracked)
    // ------------------------------------------------------------------------

    pub fn current_route(&self) -> Route {
        self.store.with(|s| s.current_route())
    }

    pub fn previous_route(&self) -> Option<Route> {
        self.store.with(|s| s.previous_route())
    }

    pub fn transition_config(&self) -> TransitionConfig {
        self.store.with(|s| s.transition_config())
    }

    pub fn is_transitioning(&self) -> bool {
        self.store.with(|s| s.is_transitioning())
    }

    pub fn can_go_back(&self) -> bool {
        self.store.with(|s| s.can_go_back())
    }

    pub fn can_access_route(&self, route: Route) -> bool {
        self.store.with(|s| s.can_access_route(route))
    }

    // ------------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------------

    /// Navigates to `route`. Guard failures redirect; redirect loops are logged.
    pub fn navigate(&self, route: Route, params: RouteParams, options: NavigateOptions) {
        self.commit(route, |store| store.navigate(route, params, options));
    }

    /// Navigates without params, animating unless reduced motion is on.
    pub fn go(&self, route: Route) {
        let options = NavigateOptions {
            skip_animation: self.reduced_motion.get_untracked(),
            ..NavigateOptions::default()
        };
        self.navigate(route, RouteParams::new(), options);
    }

    pub fn replace(&self, route: Route, params: RouteParams) {
        self.commit(route, |store| store.replace(route, params));
    }

    /// Runs a guarded store operation, notifying only on change.
    fn commit(
        &self,
        route: Route,
        op: impl FnOnce(&mut RouteStore) -> Result<NavigationOutcome, NavigationError>,
    ) {
        let mut result = Ok(NavigationOutcome::Unchanged);
        self.store.maybe_update(|store| {
            result = op(store);
            result.as_ref().is_ok_and(NavigationOutcome::changed)
        });
        match result {
            Ok(outcome) => self.schedule(outcome),
            Err(err) => log::error!("navigation to '{}' failed: {}", route, err),
        }
    }

    pub fn back(&self) {
        let mut outcome = NavigationOutcome::Unchanged;
        self.store.maybe_update(|store| {
            outcome = store.back();
            outcome.changed()
        });
        self.schedule(outcome);
    }

    /// Records wallet connection state. Does not re-navigate.
    pub fn set_authenticated(&self, value: bool) {
        self.store.maybe_update(|store| {
            let changed = store.is_authenticated() != value;
            store.set_authenticated(value);
            changed
        });
    }

    fn restore(&self, route: Route, params: RouteParams) {
        let mut outcome = NavigationOutcome::Unchanged;
        self.store.maybe_update(|store| {
            outcome = store.restore(route, params);
            outcome.changed()
        });
        self.schedule(outcome);
    }

    fn hardware_back(&self) {
        let mut decision = None;
        self.store.maybe_update(|store| {
            let back = store.hardware_back();
            decision = Some(back);
            matches!(back, HardwareBack::Navigated(outcome) if outcome.changed())
        });
        match decision {
            Some(HardwareBack::Navigated(outcome)) => self.schedule(outcome),
            Some(HardwareBack::Exit) => {
                if let Err(err) = platform::exit_app() {
                    log::warn!("exit requested but unavailable: {}", err);
                }
            }
            None => {}
        }
    }

    /// Opens (or cancels) the transition window for `outcome`.
    fn schedule(&self, outcome: NavigationOutcome) {
        match outcome {
            NavigationOutcome::Transitioning {
                generation,
                duration_ms,
            } => {
                let store = self.store;
                let timeout = Timeout::new(duration_ms, move || {
                    store.maybe_update(|s| s.complete_transition(generation));
                });
                // Replacing the old Timeout drops and cancels it
                self.pending.set_value(Some(timeout));
            }
            NavigationOutcome::Settled => self.pending.set_value(None),
            NavigationOutcome::Unchanged => {}
        }
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Attaches the popstate and hardware back listeners and starts
    /// browser-URL synchronization. Calling it again is a no-op.
    pub fn setup(&self) {
        if self.is_listening() {
            return;
        }

        let ctx = *self;
        let popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let entry = event
                .dyn_ref::<PopStateEvent>()
                .and_then(dom::read_history_state);
            let (route, params) = match entry {
                Some(entry) => (entry.route, entry.params),
                None => {
                    let (path, query) = dom::location_parts();
                    parse_location(&path, &query)
                }
            };
            ctx.restore(route, params);
        });
        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref());
        }

        let back_button = match platform::add_back_button_listener(move || ctx.hardware_back()) {
            Ok(listener) => Some(listener),
            Err(err) => {
                log::info!("hardware back button not available: {}", err);
                None
            }
        };

        let (sync, location) = self.sync_browser();
        self.listeners.set_value(Some(Listeners {
            popstate,
            back_button,
            sync,
            location,
        }));
    }

    /// Whether `setup` ran without a matching `dispose`.
    fn is_listening(&self) -> bool {
        self.listeners
            .try_with_value(Option::is_some)
            .unwrap_or(false)
    }

    /// Writes every committed `(route, params)` change to browser history.
    ///
    /// The first write replaces the entry so the initial URL is normalized
    /// without adding a history step.
    fn sync_browser(&self) -> (Effect<LocalStorage>, Memo<(Route, RouteParams)>) {
        let store = self.store;
        let location = Memo::new(move |_| {
            store.with(|s| (s.current_route(), s.params().clone()))
        });

        let sync = Effect::new(move |initialized: Option<bool>| {
            location.track();
            let mut update = store.with_untracked(RouteStore::history_update);
            if initialized.is_none() {
                update.mode = HistoryMode::Replace;
            }
            if !dom::write_history(&update) {
                log::warn!("failed to write history entry for {}", update.url);
            }
            dom::set_title(update.title.unwrap_or(APP_NAME));
            true
        });
        (sync, location)
    }

    /// Removes listeners and cancels the pending transition timer.
    /// Safe to call repeatedly.
    pub fn dispose(&self) {
        if let Some(Some(listeners)) = self.listeners.try_update_value(Option::take) {
            listeners.remove();
        }
        self.pending.try_set_value(None);
    }
}

// ============================================================================
// Page host
// ============================================================================

/// Inline style running a page from one keyframe to another.
fn keyframe_style(from: &PageFrame, to: &PageFrame, duration_ms: u32) -> String {
    format!(
        "--from-transform: {}; --from-opacity: {}; --to-transform: {}; --to-opacity: {}; animation-duration: {}ms;",
        from.transform(),
        from.opacity,
        to.transform(),
        to.opacity,
        duration_ms
    )
}

/// Main application router.
///
/// Renders the current page inside the swipe area. While a transition
/// window is open, the previous page is rendered on top of it running its
/// exit keyframes and the current page runs its entry keyframes.
#[component]
pub fn AppRouter() -> impl IntoView {
    let router = use_context::<RouterContext>().expect("RouterContext must be provided");
    let swipe = use_context::<SwipeContext>().expect("SwipeContext must be provided");

    let animation = Memo::new(move |_| {
        router.store.with(|s| {
            let kind = s.transition_config().kind;
            get_animation_config(kind, route_distance(s.previous_route(), s.current_route()))
        })
    });

    // A navigation mid-drag ends pointer tracking; RouteStore timers are untouched
    Effect::new(move |prev: Option<Route>| {
        let current = router.current_route();
        if prev.is_some_and(|p| p != current) && swipe.is_dragging_untracked() {
            swipe.cancel();
        }
        current
    });

    let page = move || {
        let current = router.current_route();
        let transitioning = router.is_transitioning();
        let duration = router.transition_config().duration_ms;
        let PageAnimation {
            initial,
            animate,
            exit,
        } = animation.get();

        let exiting = router
            .previous_route()
            .filter(|prev| transitioning && *prev != current)
            .map(|prev| {
                view! {
                    <div
                        class=format!("{} {}", css::page, css::pageExit)
                        style=keyframe_style(&PageFrame::IDENTITY, &exit, duration)
                        aria-hidden="true"
                    >
                        <Page route=prev />
                    </div>
                }
            });

        let entering_class = if transitioning {
            format!("{} {}", css::page, css::pageEnter)
        } else {
            css::page.to_string()
        };

        view! {
            <div class=entering_class style=keyframe_style(&initial, &animate, duration)>
                <Page route=current />
            </div>
            {exiting}
        }
    };

    view! {
        <main
            class=css::pageHost
            data-transition=move || router.transition_config().kind.as_str()
        >
            <SwipeArea>{page}</SwipeArea>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframe_style() {
        let to = PageFrame {
            x_percent: -30.0,
            scale: 0.92,
            rotate_y: 0.0,
            opacity: 0.5,
        };
        let style = keyframe_style(&PageFrame::IDENTITY, &to, 300);
        assert!(style.contains("--from-opacity: 1;"));
        assert!(style.contains("--to-transform: perspective(1200px) translateX(-30%) scale(0.92) rotateY(0deg);"));
        assert!(style.contains("--to-opacity: 0.5;"));
        assert!(style.ends_with("animation-duration: 300ms;"));
    }
}
