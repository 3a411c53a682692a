//! Scripted in-memory backend for flow tests.

use std::cell::RefCell;

use super::api::{ApiError, QueryBackend};
use super::types::{QueryResponse, TokenResponse};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Register { email: String, password: String },
    Login { username: String, password: String },
    Query { token: String, query: String },
}

pub(crate) struct FakeBackend {
    pub register: Result<(), ApiError>,
    pub login: Result<TokenResponse, ApiError>,
    pub query: Result<QueryResponse, ApiError>,
    pub calls: RefCell<Vec<Call>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        let unscripted = || ApiError::Transport("unscripted".to_owned());
        Self {
            register: Err(unscripted()),
            login: Err(unscripted()),
            query: Err(unscripted()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl QueryBackend for FakeBackend {
    async fn register(&self, email: &str, password: &str) -> Result<(), ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::Register { email: email.to_owned(), password: password.to_owned() });
        self.register.clone()
    }

    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::Login { username: username.to_owned(), password: password.to_owned() });
        self.login.clone()
    }

    async fn query(&self, token: &str, query: &str) -> Result<QueryResponse, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::Query { token: token.to_owned(), query: query.to_owned() });
        self.query.clone()
    }
}
