//! Shared entry-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page runs the same guard on load: the dashboard requires a session,
//! the login and registration forms require its absence. The decision is a
//! pure function; pages apply it through a `Navigator`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::{Session, SessionStore};
use crate::util::nav::{Navigator, Page};
use crate::util::storage::KeyValueStorage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryDecision {
    Stay,
    RedirectTo(Page),
}

pub fn decide_entry(session: Option<&Session>, page: Page) -> EntryDecision {
    match (session, page) {
        (None, Page::Dashboard) => EntryDecision::RedirectTo(Page::Login),
        (Some(_), Page::Login | Page::Register) => EntryDecision::RedirectTo(Page::Dashboard),
        _ => EntryDecision::Stay,
    }
}

/// Result of running the guard against the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    /// Render the page; carries the session that was read, if any.
    Stay(Option<Session>),
    /// Render nothing and go elsewhere.
    Redirect(Page),
}

impl Entry {
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Stay(session) => session.as_ref(),
            Self::Redirect(_) => None,
        }
    }

    pub fn should_render(&self) -> bool {
        matches!(self, Self::Stay(_))
    }

    /// Perform the redirect, if any.
    pub fn apply<N: Navigator>(&self, navigator: &N) {
        if let Self::Redirect(target) = self {
            navigator.go(*target);
        }
    }
}

/// Read the store once and decide whether `page` may render.
pub fn check_entry<S: KeyValueStorage>(store: &SessionStore<S>, page: Page) -> Entry {
    let session = store.get();
    match decide_entry(session.as_ref(), page) {
        EntryDecision::Stay => Entry::Stay(session),
        EntryDecision::RedirectTo(target) => {
            log::debug!("entry guard: {} -> {}", page.path(), target.path());
            Entry::Redirect(target)
        }
    }
}
