//! Canned responses.

use axum::http::StatusCode;

use crate::config::ResponseConfig;

/// One immutable reply a route can serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubResponse {
    /// Status code written to the client.
    pub status: StatusCode,
    /// Reference to the file holding the body. `None` means an empty body.
    pub payload: Option<String>,
    /// Uppercased HTTP method, only meaningful on verb routes.
    pub verb: Option<String>,
    /// Identifier targeted by the set operation, only meaningful on variable routes.
    pub id: Option<String>,
}

impl StubResponse {
    pub fn from_config(config: &ResponseConfig) -> Self {
        // Validation rejects codes outside 100..=999 before we get here.
        let status =
            StatusCode::from_u16(config.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        Self {
            status,
            payload: config.payload.clone().filter(|p| !p.is_empty()),
            verb: config.verb.as_deref().map(str::to_ascii_uppercase),
            id: config.id.clone(),
        }
    }

    /// Returns true if this reply answers the given method (case-insensitive).
    pub fn answers(&self, method: &str) -> bool {
        self.verb
            .as_deref()
            .is_some_and(|verb| verb.eq_ignore_ascii_case(method))
    }
}

impl Default for StubResponse {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            payload: None,
            verb: None,
            id: None,
        }
    }
}
