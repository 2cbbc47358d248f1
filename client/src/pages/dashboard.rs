//! Dashboard page. Only reachable through the protected route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth;
use crate::util::auth::LOGIN_ROUTE;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let state = auth.state;

    let greeting = move || {
        state.with(|s| {
            s.user
                .as_ref()
                .map_or_else(|| "Welcome".to_owned(), |u| format!("Welcome, {}", u.display_name()))
        })
    };

    let on_logout = move |_| {
        auth.logout();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(crate::net::api::logout());
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"ThreatDash"</h1>
                <span class="dashboard-header__user">{greeting}</span>
                <button class="dashboard-header__logout" on:click=on_logout>
                    "Log Out"
                </button>
            </header>
            <main class="dashboard-main">
                <p>"No threat feeds connected yet."</p>
            </main>
        </div>
    }
}
