//! Navigation bar.
//!
//! Top row: back button, page title and wallet badge. Bottom row: one tab
//! per route in the navigation order, with a lock on routes that need a
//! connected wallet.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::{NAVIGATION_ORDER, Route};

stylance::import_crate_style!(css, "src/components/shell.module.css");

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let router = ctx.router;

    let title = move || router.current_route().config().title.unwrap_or(APP_NAME);
    let wallet_label = move || ctx.wallet.with(|w| w.display_name());
    let network = move || ctx.wallet.with(|w| w.network_name());

    view! {
        <header class=css::header>
            <button
                class=css::backButton
                disabled=move || !router.can_go_back()
                on:click=move |_| router.back()
                aria-label="Back"
            >
                <Icon icon=ic::BACK />
            </button>
            <h1 class=css::title>{title}</h1>
            <span class=css::walletBadge>
                {wallet_label}
                {move || network().map(|n| view! { <span class=css::network>{n}</span> })}
            </span>
        </header>
        <nav class=css::tabBar>
            {NAVIGATION_ORDER.into_iter().map(|route| view! { <NavTab route=route /> }).collect_view()}
        </nav>
    }
}

#[component]
fn NavTab(route: Route) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let router = ctx.router;

    let tab_class = move || {
        if router.current_route() == route {
            format!("{} {}", css::tab, css::tabActive)
        } else {
            css::tab.to_string()
        }
    };

    view! {
        <button class=tab_class on:click=move |_| router.go(route) title=route.config().title.unwrap_or(APP_NAME)>
            <Icon icon=ic::route_icon(route) />
            <Show when=move || !router.can_access_route(route)>
                <span class=css::lock>
                    <Icon icon=ic::LOCK />
                </span>
            </Show>
        </button>
    }
}
