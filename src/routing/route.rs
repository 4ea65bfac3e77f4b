//! Route response selection.
//!
//! # Selection Types
//! - Static: always the same reply
//! - Ordinal: walks the replies in order, then repeats the last one
//! - Variable: serves the reply under the cursor; only `set` moves it
//! - Verb: first reply whose verb matches the request method
//!
//! # Design Decisions
//! - The type string is parsed once at load time into [`Selection`]
//! - Selection never touches the payload; reading it is the caller's job
//! - An ordinal cursor advances when the reply is selected, even if the
//!   payload read that follows fails

use std::fmt;

use axum::http::Method;
use thiserror::Error;

use crate::config::RouteConfig;
use crate::routing::cursor::Cursor;
use crate::routing::response::StubResponse;

/// Response selection strategy named in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    Static,
    Ordinal,
    Variable,
    Verb,
}

impl RouteKind {
    /// Parse a configured type. Unrecognized values fall back to static.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "ordinal" => RouteKind::Ordinal,
            "variable" => RouteKind::Variable,
            "verb" => RouteKind::Verb,
            _ => RouteKind::Static,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKind::Static => "static",
            RouteKind::Ordinal => "ordinal",
            RouteKind::Variable => "variable",
            RouteKind::Verb => "verb",
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while selecting or targeting a reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no payloads specified for {0} endpoint")]
    NoPayloads(RouteKind),

    #[error("method not defined in config")]
    MethodNotDefined,

    #[error("invalid route type")]
    InvalidRouteType,

    #[error("id not found")]
    IdNotFound,
}

/// Type-specific replies and state.
#[derive(Debug)]
pub enum Selection {
    Static(StubResponse),
    Ordinal {
        responses: Vec<StubResponse>,
        cursor: Cursor,
    },
    Variable {
        responses: Vec<StubResponse>,
        cursor: Cursor,
    },
    Verb(Vec<StubResponse>),
}

/// A stubbed endpoint.
#[derive(Debug)]
pub struct Route {
    endpoint: String,
    name: Option<String>,
    selection: Selection,
}

impl Route {
    pub fn new(endpoint: impl Into<String>, name: Option<String>, selection: Selection) -> Self {
        Self {
            endpoint: endpoint.into(),
            name,
            selection,
        }
    }

    /// Compile a route from its configuration.
    pub fn from_config(config: &RouteConfig) -> Self {
        let kind = RouteKind::parse(config.kind.as_deref().unwrap_or_default());
        let responses = || {
            config
                .responses
                .iter()
                .map(StubResponse::from_config)
                .collect::<Vec<_>>()
        };

        let selection = match kind {
            RouteKind::Static => Selection::Static(
                config
                    .response
                    .as_ref()
                    .or(config.responses.first())
                    .map(StubResponse::from_config)
                    .unwrap_or_default(),
            ),
            RouteKind::Ordinal => Selection::Ordinal {
                responses: responses(),
                cursor: Cursor::new(),
            },
            RouteKind::Variable => Selection::Variable {
                responses: responses(),
                cursor: Cursor::new(),
            },
            RouteKind::Verb => Selection::Verb(responses()),
        };

        Self::new(config.endpoint.clone(), config.name.clone(), selection)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn kind(&self) -> RouteKind {
        match self.selection {
            Selection::Static(_) => RouteKind::Static,
            Selection::Ordinal { .. } => RouteKind::Ordinal,
            Selection::Variable { .. } => RouteKind::Variable,
            Selection::Verb(_) => RouteKind::Verb,
        }
    }

    /// Cursor position for ordinal and variable routes.
    pub fn cursor(&self) -> Option<usize> {
        match &self.selection {
            Selection::Ordinal { cursor, .. } | Selection::Variable { cursor, .. } => {
                Some(cursor.get())
            }
            Selection::Static(_) | Selection::Verb(_) => None,
        }
    }

    /// Pick the reply for a request with the given method.
    pub fn select(&self, method: &Method) -> Result<&StubResponse, RouteError> {
        match &self.selection {
            Selection::Static(response) => Ok(response),
            Selection::Ordinal { responses, cursor } => {
                let last = responses
                    .len()
                    .checked_sub(1)
                    .ok_or(RouteError::NoPayloads(RouteKind::Ordinal))?;
                Ok(&responses[cursor.advance_saturating(last)])
            }
            Selection::Variable { responses, cursor } => responses
                .get(cursor.get())
                .ok_or(RouteError::NoPayloads(RouteKind::Variable)),
            Selection::Verb(responses) => responses
                .iter()
                .find(|r| r.answers(method.as_str()))
                .ok_or(RouteError::MethodNotDefined),
        }
    }

    /// Rewind the cursor. No-op for static and verb routes.
    pub fn reset(&self) {
        if let Selection::Ordinal { cursor, .. } | Selection::Variable { cursor, .. } =
            &self.selection
        {
            cursor.reset();
        }
    }

    /// Point a variable route at the reply carrying `id`.
    pub fn set(&self, id: &str) -> Result<(), RouteError> {
        let Selection::Variable { responses, cursor } = &self.selection else {
            return Err(RouteError::InvalidRouteType);
        };

        let index = responses
            .iter()
            .position(|r| r.id.as_deref() == Some(id))
            .ok_or(RouteError::IdNotFound)?;
        cursor.set(index);
        Ok(())
    }
}
