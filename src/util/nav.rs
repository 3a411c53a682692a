//! Page identities and the navigation adapter.
//!
//! Core code decides *where* to go and calls a `Navigator`; only the
//! browser adapter below knows how navigation actually happens.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::time::Duration;

/// The three screens of the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Register,
    Dashboard,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// Navigation side effect behind a trait so flows and guards stay testable.
pub trait Navigator {
    fn go(&self, page: Page);
}

impl<F> Navigator for F
where
    F: Fn(Page),
{
    fn go(&self, page: Page) {
        self(page);
    }
}

/// A navigation scheduled by a finished flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub page: Page,
    pub delay: Duration,
}

impl Redirect {
    pub fn now(page: Page) -> Self {
        Self { page, delay: Duration::ZERO }
    }

    pub fn after(page: Page, delay: Duration) -> Self {
        Self { page, delay }
    }
}

/// Navigator backed by the Leptos router. Must be created inside a `<Router>`.
pub fn router_navigator() -> impl Navigator + Clone + 'static {
    let navigate = leptos_router::hooks::use_navigate();
    move |page: Page| {
        log::debug!("navigating to {}", page.path());
        navigate(page.path(), leptos_router::NavigateOptions { replace: true, ..Default::default() });
    }
}

/// Wait out the redirect delay (browser timer), then navigate.
pub async fn follow_redirect<N: Navigator>(redirect: Redirect, navigator: &N) {
    #[cfg(feature = "csr")]
    {
        if !redirect.delay.is_zero() {
            gloo_timers::future::sleep(redirect.delay).await;
        }
    }
    navigator.go(redirect.page);
}
