//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the
//! application-level lifecycle: router setup, wallet polling and teardown.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::components::{AppRouter, NavBar, RouterContext, SwipeContext};
use crate::config::WALLET_POLL_MS;
use crate::core::wallet;
use crate::models::WalletState;

stylance::import_crate_style!(css, "src/components/shell.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Router**: route store, browser history sync, hardware back
/// - **Swipe**: drag feedback and swipe-to-navigate
/// - **Wallet state**: TronLink connection, which drives the auth guard
///
/// This struct is `Copy` because every field is an arena handle.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub router: RouterContext,
    pub swipe: SwipeContext,
    /// Wallet connection state.
    pub wallet: RwSignal<WalletState>,
}

impl AppContext {
    /// Creates the context from the current browser location.
    pub fn new() -> Self {
        let router = RouterContext::new();
        Self {
            router,
            swipe: SwipeContext::new(router),
            wallet: RwSignal::new(WalletState::default()),
        }
    }

    /// Attaches listeners and starts background work. Idempotent.
    fn setup(&self) {
        self.router.setup();

        // Wallet state feeds the auth guard
        let router = self.router;
        let wallet_state = self.wallet;
        Effect::new(move |_| {
            router.set_authenticated(wallet_state.with(WalletState::is_connected));
        });
    }

    fn dispose(&self) {
        self.swipe.dispose();
        self.router.dispose();
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Polls TronLink so account switches and lock/unlock are picked up.
fn start_wallet_poll(wallet_state: RwSignal<WalletState>) -> Interval {
    let refresh = move || {
        if wallet_state.with_untracked(|w| matches!(w, WalletState::Connecting)) {
            return;
        }
        let state = wallet::current_state();
        wallet_state.maybe_update(|current| {
            if *current == state {
                return false;
            }
            log::debug!("wallet state: {}", state.display_name());
            *current = state;
            true
        });
    };
    refresh();
    Interval::new(WALLET_POLL_MS, refresh)
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext (and its router and swipe parts)
/// - Sets up browser and platform listeners, torn down on cleanup
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    provide_context(ctx.router);
    provide_context(ctx.swipe);

    ctx.setup();
    let poll = StoredValue::new_local(Some(start_wallet_poll(ctx.wallet)));

    on_cleanup(move || {
        poll.try_set_value(None);
        ctx.dispose();
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <section class=css::pageBody role="alert">
                    <h2>"Navigation failed"</h2>
                    <ul class=css::error>
                        {move || errors.with(|errors| {
                            errors
                                .iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect_view()
                        })}
                    </ul>
                    <button
                        class=css::primary
                        on:click=move |_| {
                            if let Some(window) = crate::utils::dom::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload"
                    </button>
                </section>
            }
        >
            <div class=css::app>
                <NavBar />
                <AppRouter />
            </div>
        </ErrorBoundary>
    }
}
