//! Request dispatch.
//!
//! Admin paths are checked first (status, reset, set), then the route table by
//! exact path. A matched route answers OPTIONS with the CORS preflight and
//! everything else with its selected reply.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::Method,
    response::{IntoResponse, Response},
};

use crate::admin::{handlers as admin, AdminOp};
use crate::error::DispatchError;
use crate::http::request::{decoded_path, RequestIdExt};
use crate::http::response::{cors_preflight, stub};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::Route;

/// Entry point for every request.
pub async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let start = Instant::now();
    let request_id = request.request_id().to_string();
    let method = request.method().clone();
    let path = decoded_path(request.uri()).into_owned();

    if let Some(op) = state.admin.match_path(&path) {
        let response = match op {
            AdminOp::Status => admin::status(),
            AdminOp::Reset => admin::reset(&state.routes),
            AdminOp::Set => admin::set(&state.routes, request.uri())
                .unwrap_or_else(|e| {
                    tracing::warn!(request_id = %request_id, error = %e, "Set failed");
                    e.into_response()
                }),
        };
        metrics::record_admin(op.as_str(), response.status().as_u16());
        return response;
    }

    let Some(route) = state.routes.lookup(&path) else {
        tracing::warn!(request_id = %request_id, path = %path, "Route not found");
        metrics::record_request(method.as_str(), 404, "none", start);
        return DispatchError::NotFound.into_response();
    };

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        kind = %route.kind(),
        "Dispatching request"
    );

    let response = match serve_route(&state, route, &method).await {
        Ok(response) => response,
        Err(e) => {
            match &e {
                DispatchError::Payload(p) => tracing::error!(
                    request_id = %request_id,
                    path = %path,
                    payload = %p.path.display(),
                    error = %p.source,
                    "Payload read failed"
                ),
                _ => tracing::warn!(request_id = %request_id, path = %path, error = %e, "Route failed"),
            }
            e.into_response()
        }
    };

    metrics::record_request(
        method.as_str(),
        response.status().as_u16(),
        route.kind().as_str(),
        start,
    );
    response
}

/// Answer a request on a matched route.
pub async fn serve_route(
    state: &AppState,
    route: &Route,
    method: &Method,
) -> Result<Response, DispatchError> {
    if method == Method::OPTIONS {
        tracing::debug!(path = %route.endpoint(), "Responding with cors headers for options request");
        return Ok(cors_preflight());
    }

    let selected = route.select(method)?;
    let body = state.payloads.resolve(selected).await?;
    Ok(stub(selected.status, body))
}
