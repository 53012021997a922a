//! Route pages.
//!
//! Placeholder content for each route. The wallet page doubles as the
//! TronLink connect entry point.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::config::{APP_NAME, APP_VERSION};
use crate::core::wallet;
use crate::models::{NAVIGATION_ORDER, Route, WalletState};

stylance::import_crate_style!(css, "src/components/shell.module.css");

/// Renders the page for `route`.
#[component]
pub fn Page(route: Route) -> impl IntoView {
    match route {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::Wallet => view! { <WalletPage /> }.into_any(),
        Route::Settings => view! { <SettingsPage /> }.into_any(),
        Route::NotFound => view! { <NotFoundPage /> }.into_any(),
        other => view! { <PlaceholderPage route=other /> }.into_any(),
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <section class=css::pageBody>
            <h2>{APP_NAME}</h2>
            <p>"Swipe left or right to move between pages."</p>
            <Show when=move || !ctx.wallet.with(WalletState::is_connected)>
                <button class=css::primary on:click=move |_| ctx.router.go(Route::Wallet)>
                    "Open wallet"
                </button>
            </Show>
        </section>
    }
}

#[component]
fn WalletPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (error, set_error) = signal(None::<String>);

    let tab = move || {
        ctx.router
            .store
            .with(|s| s.params().get("tab").cloned())
            .unwrap_or_else(|| "overview".to_string())
    };

    let on_connect = move |_| {
        if !wallet::is_available() {
            set_error.set(Some("TronLink is not installed".to_string()));
            return;
        }
        ctx.wallet.set(WalletState::Connecting);
        set_error.set(None);
        spawn_local(async move {
            match wallet::connect().await {
                Ok(address) => {
                    log::info!("wallet connected: {}", address);
                    ctx.wallet.set(wallet::current_state());
                }
                Err(err) => {
                    log::warn!("wallet connection failed: {}", err);
                    ctx.wallet.set(WalletState::Disconnected);
                    set_error.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <section class=css::pageBody>
            <h2>"Wallet"</h2>
            <p class=css::muted>{move || format!("Tab: {}", tab())}</p>
            <p>{move || ctx.wallet.with(|w| w.display_name())}</p>
            <Show when=move || !ctx.wallet.with(WalletState::is_connected)>
                <button class=css::primary on:click=on_connect>
                    "Connect TronLink"
                </button>
            </Show>
            {move || error.get().map(|e| view! { <p class=css::error>{e}</p> })}
        </section>
    }
}

#[component]
fn SettingsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <section class=css::pageBody>
            <h2>"Settings"</h2>
            <p>{move || ctx.wallet.with(|w| w.display_name())}</p>
            <p class=css::muted>
                {move || ctx.wallet.with(|w| w.network_name()).unwrap_or("unknown network")}
            </p>
            <p class=css::muted>{format!("{} v{}", APP_NAME, APP_VERSION)}</p>
        </section>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <section class=css::pageBody>
            <h2>"Not Found"</h2>
            <p>"This page does not exist."</p>
            <button class=css::primary on:click=move |_| ctx.router.replace(Route::Home, Default::default())>
                "Go home"
            </button>
        </section>
    }
}

#[component]
fn PlaceholderPage(route: Route) -> impl IntoView {
    let title = route.config().title.unwrap_or(APP_NAME);

    view! {
        <section class=css::pageBody>
            <h2>{title}</h2>
            <p class=css::muted>{format!("{} / {}", route.depth().map_or(0, |d| d + 1), NAVIGATION_ORDER.len())}</p>
        </section>
    }
}
