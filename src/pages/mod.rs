//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page runs the entry guard first, then wires its form signals to the
//! flow functions in `state`. Rendering details live in `components`.

pub mod dashboard;
pub mod login;
pub mod register;

use leptos::prelude::*;

use crate::net::api::HttpBackend;
use crate::state::session::SessionStore;
use crate::util::auth::{Entry, check_entry};
use crate::util::nav::{Page, router_navigator};
use crate::util::storage::BrowserStorage;

/// Session store provided by `App`.
pub(crate) type BrowserSessionStore = SessionStore<BrowserStorage>;

/// Shared services every page pulls from context.
pub(crate) fn page_services() -> (BrowserSessionStore, HttpBackend) {
    (expect_context::<BrowserSessionStore>(), expect_context::<HttpBackend>())
}

/// Run the entry guard for `page`. A redirect is performed once the page has
/// mounted; callers render nothing unless `Entry::should_render` holds.
pub(crate) fn run_entry_guard(store: &BrowserSessionStore, page: Page) -> Entry {
    let entry = check_entry(store, page);
    if !entry.should_render() {
        let navigator = router_navigator();
        let pending = entry.clone();
        Effect::new(move || pending.apply(&navigator));
    }
    entry
}
