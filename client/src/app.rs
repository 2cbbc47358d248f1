//! Root application component with routing and the auth context.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ProtectedRoute, Route, Router, Routes},
};

use crate::pages::dashboard::DashboardPage;
use crate::pages::login::{LoginPage, UnknownPathPage};
use crate::pages::signup::SignupPage;
use crate::state::auth::{AuthContext, AuthStorage, MemoryStorage};
use crate::util::auth::{LOGIN_ROUTE, can_enter_protected};

/// Browser `localStorage` when usable, otherwise a session that lasts until
/// the tab closes.
fn default_storage() -> Arc<dyn AuthStorage> {
    #[cfg(feature = "csr")]
    {
        if crate::state::auth::LocalStorage::available() {
            return Arc::new(crate::state::auth::LocalStorage);
        }
        log::warn!("localStorage unavailable; session will not survive reload");
    }
    Arc::new(MemoryStorage::new())
}

/// Root application component.
///
/// Loads the persisted session, provides it as `AuthContext`, and gates
/// `/dashboard` on token presence. Unknown paths render the login view
/// without redirecting.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new(default_storage());
    let state = auth.state;
    provide_context(auth);

    view! {
        <Title text="ThreatDash"/>

        <Router>
            <Routes fallback=|| view! { <UnknownPathPage/> }>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <ProtectedRoute
                    path=StaticSegment("dashboard")
                    condition=move || Some(state.with(can_enter_protected))
                    redirect_path=|| LOGIN_ROUTE
                    view=DashboardPage
                />
            </Routes>
        </Router>
    }
}
