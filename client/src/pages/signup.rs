//! Signup page. A successful registration lands on `/login`; the user signs in
//! separately.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::SignupRequest;
use crate::state::auth::use_auth;
use crate::util::auth::{LOGIN_ROUTE, install_guest_redirect};

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    install_guest_redirect(auth.state, || false, navigate.clone());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let req = SignupRequest {
            first_name: first_name.get_untracked().trim().to_owned(),
            last_name: last_name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&req).await {
                    Ok(_) => navigate(LOGIN_ROUTE, NavigateOptions::default()),
                    Err(message) => {
                        error.set(Some(message));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (req, &navigate);
        }
    };

    let field = move |signal: RwSignal<String>, kind: &'static str, placeholder: &'static str| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"ThreatDash"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    {field(first_name, "text", "First name")}
                    {field(last_name, "text", "Last name")}
                    {field(email, "email", "you@example.com")}
                    {field(password, "password", "Password")}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href=LOGIN_ROUTE>"Log in"</a>
                </p>
            </div>
        </div>
    }
}
