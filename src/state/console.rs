//! Dashboard query console: query submission, result model, logout.
//!
//! DESIGN
//! ======
//! `ConsoleState` is `Idle -> Loading -> Rendered | Failed`, plus the local
//! `Prompt` state for blank input. `run_query` always resolves to a terminal
//! state, so the page never keeps a stale "Loading" placeholder. Overlapping
//! submissions are not cancelled; the last response to arrive wins.
//!
//! Unauthorized responses are treated like any other rejection: the session
//! is kept and no re-login redirect happens.

#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;

use serde_json::Value;

use crate::net::api::QueryBackend;
use crate::net::types::{QueryResponse, Row};
use crate::state::session::{Session, SessionStore};
use crate::util::nav::{Navigator, Page};
use crate::util::storage::KeyValueStorage;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a query.";
pub const LOADING_MESSAGE: &str = "Loading results...";
pub const NO_RESULTS_MESSAGE: &str = "No results found.";
pub const QUERY_FAILED_MESSAGE: &str = "Failed to execute query.";

/// Tabular view of a result set, columns taken from the first row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// `None` for an empty result set. Later rows are projected onto the
    /// first row's columns: missing keys become empty cells, extra keys are
    /// dropped.
    pub fn from_rows(rows: &[Row]) -> Option<Self> {
        let columns: Vec<String> = rows.first()?.keys().cloned().collect();
        let rows = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| row.get(col).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();
        Some(Self { columns, rows })
    }
}

/// Display text for one cell.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Everything rendered for a successful query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    pub table: Option<ResultTable>,
    pub generated_query: String,
    /// Bound parameters, only when the backend reported a non-empty set.
    pub params: Option<String>,
}

impl From<QueryResponse> for ResultView {
    fn from(resp: QueryResponse) -> Self {
        let params = resp.params.filter(has_params).map(|p| p.to_string());
        Self { table: ResultTable::from_rows(&resp.data), generated_query: resp.sql, params }
    }
}

fn has_params(params: &Value) -> bool {
    match params {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConsoleState {
    #[default]
    Idle,
    /// Blank input was submitted; nothing was sent.
    Prompt,
    Loading,
    Rendered(ResultView),
    Failed(String),
}

impl ConsoleState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Gate for query submission.
///
/// # Errors
///
/// Returns `ConsoleState::Prompt` for empty or whitespace-only input.
pub fn check_query_input(input: &str) -> Result<(), ConsoleState> {
    if input.trim().is_empty() { Err(ConsoleState::Prompt) } else { Ok(()) }
}

/// Execute `input` with the session's bearer token.
///
/// The raw input is sent unmodified; the guard only looks at the trimmed form.
pub async fn run_query<B: QueryBackend>(backend: &B, session: &Session, input: &str) -> ConsoleState {
    if let Err(prompt) = check_query_input(input) {
        return prompt;
    }

    match backend.query(&session.token, input).await {
        Ok(resp) => {
            log::info!("query returned {} row(s)", resp.data.len());
            ConsoleState::Rendered(ResultView::from(resp))
        }
        Err(e) => {
            if e.is_rejection() {
                log::warn!("query rejected: {e}");
            } else {
                log::error!("query failed: {e}");
            }
            ConsoleState::Failed(e.user_message(QUERY_FAILED_MESSAGE))
        }
    }
}

/// Drop the session and return to login. Purely local; never fails.
pub fn logout<S: KeyValueStorage, N: Navigator>(store: &SessionStore<S>, navigator: &N) {
    store.clear();
    log::info!("logged out");
    navigator.go(Page::Login);
}
