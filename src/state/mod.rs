//! Client-side state and flow logic.
//!
//! DESIGN
//! ======
//! State is split by flow (`auth` for the login/registration forms,
//! `console` for the dashboard) over the shared `session` store, so pages
//! stay thin and every transition is testable without a browser.

pub mod auth;
pub mod console;
pub mod session;
