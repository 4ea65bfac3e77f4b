//! Shared utilities for integration tests.
#![allow(dead_code)]

use std::net::SocketAddr;

use duty::config::parse_config;
use duty::{HttpServer, Shutdown};
use tokio::net::TcpListener;

/// Absolute path of a payload fixture.
pub fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// A stub server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Parse `config` and serve it until the returned server is dropped.
pub async fn start_server(config: &str) -> TestServer {
    let config = parse_config(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = HttpServer::new(config).run(listener, server_shutdown).await;
    });

    TestServer { addr, shutdown }
}

/// The route set most tests run against.
pub fn default_config() -> String {
    format!(
        r#"
        [[routes]]
        endpoint = "/v1/static"
        type = "static"
        response = {{ code = 200, payload = "{foo}" }}

        [[routes]]
        endpoint = "/v1/foo"
        response = {{ code = 200, payload = "{foo}" }}

        [[routes]]
        endpoint = "/v1/baz"
        response = {{ code = 401 }}

        [[routes]]
        endpoint = "/v1/biz"

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
            {{ id = "401", code = 401, payload = "{foo}" }},
            {{ id = "404", code = 404 }},
        ]

        [[routes]]
        endpoint = "/v1/verb"
        type = "verb"
        responses = [
            {{ verb = "GET", code = 200, payload = "{foo}" }},
            {{ verb = "POST", code = 201, payload = "{new_foo}" }},
        ]
        "#,
        foo = fixture("foo.json"),
        unauthorized = fixture("unauthorized.json"),
        new_foo = fixture("new_foo.json"),
    )
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
