//! Registration and login flows.
//!
//! DESIGN
//! ======
//! Both forms share one small state machine (`Idle -> Submitting ->
//! Succeeded | Failed`). The submit functions own the backend call and the
//! session write; they return an `AuthOutcome` which the page applies to its
//! `AuthFormState` and, on success, follows as a redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::REGISTER_REDIRECT_DELAY;
use crate::net::api::{ApiError, GENERIC_ERROR_MESSAGE, QueryBackend};
use crate::state::session::{Session, SessionStore};
use crate::util::nav::{Page, Redirect};
use crate::util::storage::KeyValueStorage;

pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match.";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful! Redirecting to login...";
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed. Please try again.";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertSeverity {
    Success,
    #[default]
    Danger,
}

impl AlertSeverity {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Danger => "alert-danger",
        }
    }
}

/// Transient message shown above a form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiAlert {
    pub message: String,
    pub severity: AlertSeverity,
}

impl UiAlert {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: AlertSeverity::Success }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: AlertSeverity::Danger }
    }
}

/// Form input for both flows. Consumed by the submit functions.
#[derive(Clone, Default)]
pub struct Credentials {
    pub identity: String,
    pub secret: String,
    pub secret_confirmation: Option<String>,
}

impl Credentials {
    pub fn login(identity: impl Into<String>, secret: impl Into<String>) -> Self {
        Self { identity: identity.into(), secret: secret.into(), secret_confirmation: None }
    }

    pub fn registration(
        identity: impl Into<String>,
        secret: impl Into<String>,
        confirmation: impl Into<String>,
    ) -> Self {
        Self { identity: identity.into(), secret: secret.into(), secret_confirmation: Some(confirmation.into()) }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("identity", &self.identity)
            .field("secret", &"<redacted>")
            .field("secret_confirmation", &self.secret_confirmation.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// What a finished submission asks the page to show and do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthOutcome {
    pub succeeded: bool,
    pub alert: Option<UiAlert>,
    pub redirect: Option<Redirect>,
}

impl AuthOutcome {
    fn failed(message: impl Into<String>) -> Self {
        Self { succeeded: false, alert: Some(UiAlert::danger(message)), redirect: None }
    }
}

/// Reactive state behind a login or registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub phase: FlowPhase,
    pub alert: Option<UiAlert>,
}

impl AuthFormState {
    /// Clear the previous alert and enter `Submitting`.
    pub fn begin(&mut self) {
        self.alert = None;
        self.phase = FlowPhase::Submitting;
    }

    pub fn finish(&mut self, outcome: &AuthOutcome) {
        self.phase = if outcome.succeeded { FlowPhase::Succeeded } else { FlowPhase::Failed };
        self.alert.clone_from(&outcome.alert);
    }

    /// The submit control stays disabled while a request is out and after
    /// success (a redirect is pending).
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, FlowPhase::Submitting | FlowPhase::Succeeded)
    }
}

/// Local check run before any registration request.
///
/// # Errors
///
/// Returns the failure outcome when the password confirmation differs.
pub fn validate_registration(credentials: &Credentials) -> Result<(), AuthOutcome> {
    match &credentials.secret_confirmation {
        Some(confirmation) if *confirmation != credentials.secret => {
            Err(AuthOutcome::failed(PASSWORD_MISMATCH_MESSAGE))
        }
        _ => Ok(()),
    }
}

fn failure_from(flow: &str, err: &ApiError, fallback: &str) -> AuthOutcome {
    if err.is_rejection() {
        log::warn!("{flow} rejected: {err}");
    } else {
        log::error!("{flow} failed: {err}");
    }
    AuthOutcome::failed(err.user_message(fallback))
}

/// Register a new account. No request is made if the passwords differ.
pub async fn submit_registration<B: QueryBackend>(backend: &B, credentials: Credentials) -> AuthOutcome {
    if let Err(outcome) = validate_registration(&credentials) {
        return outcome;
    }

    match backend.register(&credentials.identity, &credentials.secret).await {
        Ok(()) => {
            log::info!("registration succeeded for {}", credentials.identity);
            AuthOutcome {
                succeeded: true,
                alert: Some(UiAlert::success(REGISTER_SUCCESS_MESSAGE)),
                redirect: Some(Redirect::after(Page::Login, REGISTER_REDIRECT_DELAY)),
            }
        }
        Err(e) => failure_from("registration", &e, REGISTER_FAILED_MESSAGE),
    }
}

/// Exchange credentials for a token and store the session.
///
/// The stored identity is the one the user typed; the token response is not
/// assumed to echo it. On any failure the existing session is left alone.
pub async fn submit_login<B, S>(backend: &B, store: &SessionStore<S>, credentials: Credentials) -> AuthOutcome
where
    B: QueryBackend,
    S: KeyValueStorage,
{
    let token = match backend.login(&credentials.identity, &credentials.secret).await {
        Ok(resp) => resp.access_token,
        Err(e) => return failure_from("login", &e, LOGIN_FAILED_MESSAGE),
    };

    let session = Session { token, identity: credentials.identity };
    if let Err(e) = store.set(&session) {
        log::error!("login succeeded but session could not be stored: {e}");
        return AuthOutcome::failed(GENERIC_ERROR_MESSAGE);
    }

    log::info!("login succeeded for {}", session.identity);
    AuthOutcome { succeeded: true, alert: None, redirect: Some(Redirect::now(Page::Dashboard)) }
}
