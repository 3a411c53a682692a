//! REST calls to the query backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `ApiError::Transport`, since the endpoints
//! are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every response funnels through `decode_response` / `check_status`, which
//! turn (status, body) into a tagged `Result`. Flows then pick the visible
//! message with `ApiError::user_message`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{ErrorBody, LoginForm, QueryResponse, TokenResponse};

pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/token";
pub const QUERY_PATH: &str = "/query";

/// Shown for transport failures and undecodable responses.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx response; `detail` is the server's message when it sent one.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    /// 2xx response whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text to show the user, substituting `fallback` when the server gave none.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { detail: Some(detail), .. } => detail.clone(),
            Self::Rejected { detail: None, .. } => fallback.to_owned(),
            Self::Transport(_) | Self::Decode(_) => GENERIC_ERROR_MESSAGE.to_owned(),
        }
    }

    /// Whether this came back from the server rather than failing on the way.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// The three backend calls the console makes.
#[allow(async_fn_in_trait)]
pub trait QueryBackend {
    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails or is rejected.
    async fn register(&self, email: &str, password: &str) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails, is rejected, or carries no token.
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError>;

    /// # Errors
    ///
    /// Returns an `ApiError` if the request fails, is rejected, or the body is malformed.
    async fn query(&self, token: &str, query: &str) -> Result<QueryResponse, ApiError>;
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Extract a string `detail` from an error body, if there is one.
pub fn parse_error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.detail_text().map(str::to_owned)
}

/// Map a response to `Ok(())` on 2xx, ignoring the body.
///
/// # Errors
///
/// Returns `ApiError::Rejected` for any non-2xx status.
pub fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(ApiError::Rejected { status, detail: parse_error_detail(body) })
    }
}

/// Map a response to its typed 2xx body.
///
/// # Errors
///
/// Returns `ApiError::Rejected` for non-2xx statuses and `ApiError::Decode`
/// when a 2xx body does not match `T`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `application/x-www-form-urlencoded` body for the token endpoint.
///
/// # Errors
///
/// Returns `ApiError::Transport` if the form cannot be encoded.
pub fn login_form_body(username: &str, password: &str) -> Result<String, ApiError> {
    serde_urlencoded::to_string(LoginForm { username, password }).map_err(|e| ApiError::Transport(e.to_string()))
}

fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// `gloo-net` backend rooted at `base_url` (empty for same origin).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(feature = "csr")]
fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

/// Send a request and collect (status, body text). A body that cannot be
/// read is treated as empty so rejections still surface their status.
#[cfg(feature = "csr")]
async fn send(request: gloo_net::http::Request) -> Result<(u16, String), ApiError> {
    let resp = request.send().await.map_err(transport)?;
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Ok((status, body))
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Transport("not available outside the browser".to_owned())
}

impl QueryBackend for HttpBackend {
    async fn register(&self, email: &str, password: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let payload = super::types::RegisterRequest { email, password };
            let request = gloo_net::http::Request::post(&self.endpoint(REGISTER_PATH))
                .json(&payload)
                .map_err(transport)?;
            let (status, body) = send(request).await?;
            check_status(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.endpoint(REGISTER_PATH), email, password);
            Err(unavailable())
        }
    }

    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let form = login_form_body(username, password)?;
        #[cfg(feature = "csr")]
        {
            let request = gloo_net::http::Request::post(&self.endpoint(LOGIN_PATH))
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(form)
                .map_err(transport)?;
            let (status, body) = send(request).await?;
            decode_response(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.endpoint(LOGIN_PATH), form);
            Err(unavailable())
        }
    }

    async fn query(&self, token: &str, query: &str) -> Result<QueryResponse, ApiError> {
        let authorization = bearer_header(token);
        #[cfg(feature = "csr")]
        {
            let payload = super::types::QueryRequest { query };
            let request = gloo_net::http::Request::post(&self.endpoint(QUERY_PATH))
                .header("Authorization", &authorization)
                .json(&payload)
                .map_err(transport)?;
            let (status, body) = send(request).await?;
            decode_response(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.endpoint(QUERY_PATH), authorization, query);
            Err(unavailable())
        }
    }
}
