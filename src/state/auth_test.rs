use super::*;
use crate::net::fake::{Call, FakeBackend};
use crate::net::types::TokenResponse;
use crate::util::storage::MemoryStorage;
use futures::executor::block_on;

fn rejected(status: u16, detail: Option<&str>) -> ApiError {
    ApiError::Rejected { status, detail: detail.map(str::to_owned) }
}

fn token(value: &str) -> TokenResponse {
    TokenResponse { access_token: value.to_owned(), token_type: Some("bearer".to_owned()) }
}

// =============================================================
// AuthFormState
// =============================================================

#[test]
fn form_state_defaults_to_idle_without_alert() {
    let state = AuthFormState::default();
    assert_eq!(state.phase, FlowPhase::Idle);
    assert_eq!(state.alert, None);
    assert!(!state.is_busy());
}

#[test]
fn begin_clears_previous_alert() {
    let mut state = AuthFormState { phase: FlowPhase::Failed, alert: Some(UiAlert::danger("old")) };
    state.begin();
    assert_eq!(state.phase, FlowPhase::Submitting);
    assert_eq!(state.alert, None);
    assert!(state.is_busy());
}

#[test]
fn finish_applies_outcome_phase_and_alert() {
    let mut state = AuthFormState::default();
    state.begin();
    state.finish(&AuthOutcome { succeeded: false, alert: Some(UiAlert::danger("nope")), redirect: None });
    assert_eq!(state.phase, FlowPhase::Failed);
    assert_eq!(state.alert, Some(UiAlert::danger("nope")));
    assert!(!state.is_busy());

    state.begin();
    state.finish(&AuthOutcome { succeeded: true, alert: None, redirect: Some(Redirect::now(Page::Dashboard)) });
    assert_eq!(state.phase, FlowPhase::Succeeded);
    assert!(state.is_busy());
}

#[test]
fn alert_severity_maps_to_css_class() {
    assert_eq!(AlertSeverity::Success.css_class(), "alert-success");
    assert_eq!(AlertSeverity::Danger.css_class(), "alert-danger");
}

#[test]
fn credentials_debug_redacts_secrets() {
    let rendered = format!("{:?}", Credentials::registration("u@example.com", "hunter2", "hunter2"));
    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("u@example.com"));
}

// =============================================================
// Registration
// =============================================================

#[test]
fn mismatched_passwords_fail_without_network_call() {
    let backend = FakeBackend { register: Ok(()), ..Default::default() };
    let outcome = block_on(submit_registration(&backend, Credentials::registration("u@example.com", "a", "b")));

    assert!(!outcome.succeeded);
    assert_eq!(outcome.alert, Some(UiAlert::danger(PASSWORD_MISMATCH_MESSAGE)));
    assert_eq!(outcome.redirect, None);
    assert!(backend.calls().is_empty());
}

#[test]
fn validate_registration_accepts_matching_or_absent_confirmation() {
    assert!(validate_registration(&Credentials::registration("u", "pw", "pw")).is_ok());
    assert!(validate_registration(&Credentials::login("u", "pw")).is_ok());
}

#[test]
fn registration_success_redirects_to_login_after_delay() {
    let backend = FakeBackend { register: Ok(()), ..Default::default() };
    let outcome = block_on(submit_registration(&backend, Credentials::registration("u@example.com", "pw", "pw")));

    assert!(outcome.succeeded);
    assert_eq!(outcome.alert, Some(UiAlert::success(REGISTER_SUCCESS_MESSAGE)));
    assert_eq!(outcome.redirect, Some(Redirect::after(Page::Login, REGISTER_REDIRECT_DELAY)));
    assert_eq!(
        backend.calls(),
        vec![Call::Register { email: "u@example.com".to_owned(), password: "pw".to_owned() }]
    );
}

#[test]
fn registration_rejection_shows_server_detail() {
    let backend = FakeBackend { register: Err(rejected(500, Some("boom"))), ..Default::default() };
    let outcome = block_on(submit_registration(&backend, Credentials::registration("u", "pw", "pw")));
    assert!(!outcome.succeeded);
    assert_eq!(outcome.alert, Some(UiAlert::danger("boom")));
}

#[test]
fn registration_rejection_without_detail_uses_fallback() {
    let backend = FakeBackend { register: Err(rejected(500, None)), ..Default::default() };
    let outcome = block_on(submit_registration(&backend, Credentials::registration("u", "pw", "pw")));
    assert_eq!(outcome.alert, Some(UiAlert::danger(REGISTER_FAILED_MESSAGE)));
}

#[test]
fn registration_transport_failure_uses_generic_message() {
    let backend = FakeBackend::default();
    let outcome = block_on(submit_registration(&backend, Credentials::registration("u", "pw", "pw")));
    assert_eq!(outcome.alert, Some(UiAlert::danger(GENERIC_ERROR_MESSAGE)));
    assert_eq!(outcome.redirect, None);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_stores_token_with_entered_identity() {
    let backend = FakeBackend { login: Ok(token("tkn123")), ..Default::default() };
    let store = SessionStore::new(MemoryStorage::new());

    let outcome = block_on(submit_login(&backend, &store, Credentials::login("u@example.com", "pw")));

    assert!(outcome.succeeded);
    assert_eq!(outcome.alert, None);
    assert_eq!(outcome.redirect, Some(Redirect::now(Page::Dashboard)));
    assert_eq!(
        store.get(),
        Some(Session { token: "tkn123".to_owned(), identity: "u@example.com".to_owned() })
    );
    assert_eq!(
        backend.calls(),
        vec![Call::Login { username: "u@example.com".to_owned(), password: "pw".to_owned() }]
    );
}

#[test]
fn login_rejection_shows_detail_and_leaves_session_untouched() {
    let backend = FakeBackend {
        login: Err(rejected(401, Some("Incorrect username or password"))),
        ..Default::default()
    };
    let store = SessionStore::new(MemoryStorage::new());

    let outcome = block_on(submit_login(&backend, &store, Credentials::login("u@example.com", "bad")));

    assert!(!outcome.succeeded);
    assert_eq!(outcome.alert, Some(UiAlert::danger("Incorrect username or password")));
    assert_eq!(outcome.redirect, None);
    assert_eq!(store.get(), None);
}

#[test]
fn login_rejection_without_detail_uses_fallback() {
    let backend = FakeBackend { login: Err(rejected(500, None)), ..Default::default() };
    let store = SessionStore::new(MemoryStorage::new());
    let outcome = block_on(submit_login(&backend, &store, Credentials::login("u", "pw")));
    assert_eq!(outcome.alert, Some(UiAlert::danger(LOGIN_FAILED_MESSAGE)));
}

#[test]
fn login_transport_failure_keeps_existing_session() {
    let backend = FakeBackend::default();
    let store = SessionStore::new(MemoryStorage::new());
    let existing = Session { token: "old".to_owned(), identity: "a@example.com".to_owned() };
    store.set(&existing).expect("set");

    let outcome = block_on(submit_login(&backend, &store, Credentials::login("b@example.com", "pw")));

    assert_eq!(outcome.alert, Some(UiAlert::danger(GENERIC_ERROR_MESSAGE)));
    assert_eq!(store.get(), Some(existing));
}

#[cfg(not(feature = "csr"))]
#[test]
fn login_with_unavailable_storage_fails_generically() {
    let backend = FakeBackend { login: Ok(token("tkn")), ..Default::default() };
    let store = SessionStore::new(crate::util::storage::BrowserStorage);
    let outcome = block_on(submit_login(&backend, &store, Credentials::login("u", "pw")));

    assert!(!outcome.succeeded);
    assert_eq!(outcome.alert, Some(UiAlert::danger(GENERIC_ERROR_MESSAGE)));
    assert_eq!(outcome.redirect, None);
}
