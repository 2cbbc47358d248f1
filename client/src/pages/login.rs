//! Login page: email + password, then a short splash before the dashboard.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginRequest;
use crate::state::auth::use_auth;
use crate::util::auth::{DASHBOARD_ROUTE, SIGNUP_ROUTE, install_guest_redirect};

/// How long the post-login splash stays up. Cosmetic only; the session is
/// already stored when it appears.
pub const SPLASH_DELAY_MS: u32 = 2000;

/// Whether the guest redirect is suppressed. The catch-all view for unknown
/// paths renders the form as-is, and the splash owns navigation once shown.
#[must_use]
pub fn redirect_held(catch_all: bool, splash: bool) -> bool {
    catch_all || splash
}

/// `/login` (and `/`): signed-in visitors are sent to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <LoginView/> }
}

/// Rendered for any path without a route. Shows the login form without
/// redirecting, whatever the session state.
#[component]
pub fn UnknownPathPage() -> impl IntoView {
    view! { <LoginView catch_all=true/> }
}

#[component]
fn LoginView(#[prop(optional)] catch_all: bool) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let splash = RwSignal::new(false);

    install_guest_redirect(auth.state, move || redirect_held(catch_all, splash.get()), navigate.clone());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let req = LoginRequest { email: email.get_untracked().trim().to_owned(), password: password.get_untracked() };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        {
            let auth = auth.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&req).await {
                    Ok(resp) => {
                        // Raise the splash before the state flips so the guest
                        // redirect stays quiet until the delay elapses.
                        splash.set(true);
                        auth.set_auth(resp.access_token, resp.user);
                        gloo_timers::future::TimeoutFuture::new(SPLASH_DELAY_MS).await;
                        navigate(DASHBOARD_ROUTE, NavigateOptions::default());
                    }
                    Err(message) => {
                        log::info!("login rejected: {message}");
                        error.set(Some(message));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (req, &auth, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <Show when=move || splash.get()>
                <div class="splash">
                    <h1>"ThreatDash"</h1>
                    <p class="splash__subtitle">"Loading threat intelligence..."</p>
                </div>
            </Show>
            <div class="login-card" style:display=move || if splash.get() { "none" } else { "block" }>
                <h1>"ThreatDash"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Log In"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account? "
                    <a href=SIGNUP_ROUTE>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
