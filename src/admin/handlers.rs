use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::error::DispatchError;
use crate::routing::RouteTable;

pub const STATUS_BODY: &str = "duty is functioning";

#[derive(Debug, Default)]
pub struct SetParams {
    pub name: Option<String>,
    pub id: Option<String>,
}

impl SetParams {
    /// Read `name` and `id` from a query string; the first occurrence of each wins.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "name" => &mut params.name,
                "id" => &mut params.id,
                _ => continue,
            };
            slot.get_or_insert_with(|| value.into_owned());
        }
        params
    }
}

/// Liveness check; ignores method and body.
pub fn status() -> Response {
    (StatusCode::OK, STATUS_BODY).into_response()
}

/// Rewind every route to its first reply.
pub fn reset(routes: &RouteTable) -> Response {
    tracing::debug!(routes = routes.len(), "resetting endpoints");
    routes.reset_all();
    StatusCode::OK.into_response()
}

/// Point the variable route named `name` at the reply with identifier `id`.
pub fn set(routes: &RouteTable, uri: &Uri) -> Result<Response, DispatchError> {
    let params = SetParams::from_query(uri.query().unwrap_or_default());

    let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
    let (Some(name), Some(id)) = (non_empty(params.name), non_empty(params.id)) else {
        return Err(DispatchError::MissingSetParams);
    };

    tracing::debug!(name = %name, id = %id, "setting endpoint");

    let route = routes
        .find_by_name(&name)
        .ok_or(DispatchError::UnknownRouteName)?;
    route.set(&id).map_err(DispatchError::SetFailed)?;

    Ok(StatusCode::OK.into_response())
}
