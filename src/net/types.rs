//! Wire DTOs for the backend's auth and query endpoints.
//!
//! DESIGN
//! ======
//! Response types are lenient where the backend is loose (`data` may be null,
//! `detail` may be a validation array) so decoding is total and rendering
//! code never probes for fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// One result row. Key order follows the backend (`preserve_order`).
pub type Row = serde_json::Map<String, serde_json::Value>;

/// JSON body for `POST /auth/register`.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Form-encoded body for `POST /auth/token` (OAuth2 password form).
#[derive(Debug, Serialize)]
pub struct LoginForm<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// JSON body for `POST /query`.
#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QueryResponse {
    /// Result rows; `null` reads as empty.
    #[serde(default, deserialize_with = "deserialize_rows")]
    pub data: Vec<Row>,
    /// Generated SQL, shown verbatim.
    #[serde(default)]
    pub sql: String,
    /// Bound parameters for the generated SQL, if the backend reports them.
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// Error payload shared by every endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The `detail` field when it is a plain string.
    pub fn detail_text(&self) -> Option<&str> {
        self.detail.as_ref().and_then(serde_json::Value::as_str)
    }
}

fn deserialize_rows<'de, D>(deserializer: D) -> Result<Vec<Row>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Row>>::deserialize(deserializer)?.unwrap_or_default())
}
