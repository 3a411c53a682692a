//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::HttpBackend;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::state::session::SessionStore;
use crate::util::nav::Page;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Provides the session store and backend to every page, then sets up
/// client-side routing. `/` sends visitors to the login page.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    provide_context(SessionStore::new(BrowserStorage));
    provide_context(HttpBackend::new(config.api_base_url));

    view! {
        <Title text="Queryable Proxy"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=Page::Login.path()/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}
