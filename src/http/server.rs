//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the dispatch handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener and shut down gracefully

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::admin::AdminPaths;
use crate::config::DutyConfig;
use crate::http::handler::dispatch;
use crate::http::request::UuidRequestId;
use crate::routing::{PayloadResolver, RouteTable};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub payloads: Arc<PayloadResolver>,
    pub admin: Arc<AdminPaths>,
}

impl AppState {
    pub fn from_config(config: &DutyConfig) -> Self {
        Self {
            routes: Arc::new(RouteTable::from_config(&config.routes)),
            payloads: Arc::new(PayloadResolver::new(
                config.payload_root.as_ref().map(PathBuf::from),
            )),
            admin: Arc::new(AdminPaths::from_config(config)),
        }
    }
}

/// HTTP server for the stub endpoints.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: DutyConfig) -> Self {
        let state = AppState::from_config(&config);
        let router = Self::build_router(&config, state.clone());
        Self { router, state }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &DutyConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch))
            .route("/", any(dispatch))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// Router with state and middleware attached, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on the given listener until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.state.routes.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    fn fixture(name: &str) -> String {
        format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
    }

    fn server() -> HttpServer {
        let config = parse_config(&format!(
            r#"
            [[routes]]
            endpoint = "/v1/static"
            type = "static"
            response = {{ code = 200, payload = "{foo}" }}

            [[routes]]
            endpoint = "/v1/ordinal"
            type = "ordinal"
            responses = [
                {{ code = 200, payload = "{foo}" }},
                {{ code = 401, payload = "{unauthorized}" }},
            ]

            [[routes]]
            endpoint = "/v1/variable"
            name = "var"
            type = "variable"
            responses = [
                {{ id = "401", code = 401 }},
                {{ id = "404", code = 404 }},
            ]

            [[routes]]
            endpoint = "/v1/verb"
            type = "verb"
            responses = [
                {{ verb = "GET", code = 200, payload = "{foo}" }},
                {{ verb = "post", code = 201, payload = "{new_foo}" }},
            ]

            [[routes]]
            endpoint = "/v1/hello world"
            response = {{ code = 202 }}

            [[routes]]
            endpoint = "/v1/empty"
            type = "ordinal"

            [[routes]]
            endpoint = "/v1/broken"
            response = {{ code = 200, payload = "{missing}" }}
            "#,
            foo = fixture("foo.json"),
            unauthorized = fixture("unauthorized.json"),
            new_foo = fixture("new_foo.json"),
            missing = fixture("missing.json"),
        ))
        .unwrap();
        HttpServer::new(config)
    }

    async fn call(router: &Router, method: Method, uri: &str) -> (StatusCode, String) {
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_status() {
        let router = server().router();
        let (status, body) = call(&router, Method::GET, "/duty/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "duty is functioning");
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let router = server().router();
        let (status, body) = call(&router, Method::GET, "/v1/notanendpoint").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "path not found");

        let (status, _) = call(&router, Method::GET, "/v1/static/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_query_string_is_ignored_for_matching() {
        let router = server().router();
        let (status, body) = call(&router, Method::GET, "/v1/static?x=1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("here lies a foo"));
    }

    #[tokio::test]
    async fn test_ordinal_then_reset() {
        let router = server().router();
        let (first_status, first) = call(&router, Method::GET, "/v1/ordinal").await;
        let (second_status, second) = call(&router, Method::GET, "/v1/ordinal").await;
        let (third_status, third) = call(&router, Method::GET, "/v1/ordinal").await;
        assert_eq!(first_status, StatusCode::OK);
        assert!(first.contains("here lies a foo"));
        assert_eq!(second_status, StatusCode::UNAUTHORIZED);
        assert!(second.contains("unauthorized"));
        assert_eq!(third_status, StatusCode::UNAUTHORIZED);
        assert_eq!(second, third);

        let (status, body) = call(&router, Method::POST, "/duty/reset").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (_, again) = call(&router, Method::GET, "/v1/ordinal").await;
        assert_eq!(again, first);
    }

    #[tokio::test]
    async fn test_set_variable() {
        let router = server().router();
        let (status, _) = call(&router, Method::GET, "/v1/variable").await;
        assert_eq!(status.as_u16(), 401);

        let (status, _) = call(&router, Method::GET, "/duty/set?name=var&id=404").await;
        assert_eq!(status, StatusCode::OK);

        for _ in 0..3 {
            let (status, _) = call(&router, Method::GET, "/v1/variable").await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn test_set_failures() {
        let router = server().router();
        let (status, body) = call(&router, Method::GET, "/duty/set?name=var").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "name and id are required query params");

        let (status, body) = call(&router, Method::GET, "/duty/set?name=nope&id=1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "no route found");
    }

    #[tokio::test]
    async fn test_encoded_path_matches_route() {
        let router = server().router();
        let (status, _) = call(&router, Method::GET, "/v1/hello%20world").await;
        assert_eq!(status, StatusCode::ACCEPTED);

        let (status, _) = call(&router, Method::GET, "/v1/%73tatic").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = call(&router, Method::GET, "/duty/%73tatus").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "duty is functioning");
    }

    #[tokio::test]
    async fn test_set_with_repeated_params() {
        let router = server().router();
        let (status, _) = call(&router, Method::GET, "/duty/set?name=var&id=404&id=401").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = call(&router, Method::GET, "/v1/variable").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_verb() {
        let router = server().router();
        let (status, get) = call(&router, Method::GET, "/v1/verb").await;
        assert_eq!(status, StatusCode::OK);
        let (status, post) = call(&router, Method::POST, "/v1/verb").await;
        assert_eq!(status, StatusCode::CREATED);
        assert_ne!(get, post);
        assert!(post.contains("new foo"));

        let (status, body) = call(&router, Method::DELETE, "/v1/verb").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, "method not defined in config");
    }

    #[tokio::test]
    async fn test_options_on_every_kind() {
        let router = server().router();
        for path in ["/v1/static", "/v1/ordinal", "/v1/variable", "/v1/verb", "/v1/empty"] {
            let (status, body) = call(&router, Method::OPTIONS, path).await;
            assert_eq!(status, StatusCode::NO_CONTENT, "{path}");
            assert!(body.is_empty());
        }

        // OPTIONS must not advance the ordinal cursor.
        let (status, _) = call(&router, Method::GET, "/v1/ordinal").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_misconfigured_and_broken_payload() {
        let router = server().router();
        let (status, body) = call(&router, Method::GET, "/v1/empty").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "no payloads specified for ordinal endpoint");

        let (status, body) = call(&router, Method::GET, "/v1/broken").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.starts_with("failed to read payload: "));
    }

    #[tokio::test]
    async fn test_request_id_header() {
        let router = server().router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/duty/status")
                    .header("x-request-id", "fixed-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()["x-request-id"], "fixed-id");
    }
}
