//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the stub server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

pub const DEFAULT_STATUS_PATH: &str = "/duty/status";
pub const DEFAULT_RESET_PATH: &str = "/duty/reset";
pub const DEFAULT_SET_PATH: &str = "/duty/set";

/// Root configuration for the stub server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DutyConfig {
    /// Path of the liveness check.
    pub status: String,

    /// Path that rewinds every route cursor.
    pub reset: String,

    /// Path that points a named variable route at a response.
    pub set: String,

    /// Base directory for relative payload references.
    /// When unset, payloads resolve against the working directory.
    pub payload_root: Option<String>,

    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Stubbed endpoints.
    pub routes: Vec<RouteConfig>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for DutyConfig {
    fn default() -> Self {
        Self {
            status: DEFAULT_STATUS_PATH.to_string(),
            reset: DEFAULT_RESET_PATH.to_string(),
            set: DEFAULT_SET_PATH.to_string(),
            payload_root: None,
            listener: ListenerConfig::default(),
            routes: Vec::new(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:4567").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:4567".to_string(),
        }
    }
}

/// A single stubbed endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Exact request path this route answers.
    pub endpoint: String,

    /// Name used to target the route from the set operation.
    #[serde(default)]
    pub name: Option<String>,

    /// Selection type: static, ordinal, variable or verb.
    /// Absent or unrecognized values behave as static.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Response served by static routes.
    #[serde(default)]
    pub response: Option<ResponseConfig>,

    /// Ordered responses for ordinal, variable and verb routes.
    #[serde(default)]
    pub responses: Vec<ResponseConfig>,
}

/// A canned reply.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResponseConfig {
    /// HTTP status code (default: 200).
    #[serde(default = "default_code")]
    pub code: u16,

    /// Path of the file holding the body. Absent means no body.
    #[serde(default)]
    pub payload: Option<String>,

    /// HTTP method this reply answers on verb routes.
    #[serde(default)]
    pub verb: Option<String>,

    /// Identifier used by the set operation on variable routes.
    #[serde(default)]
    pub id: Option<String>,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            code: default_code(),
            payload: None,
            verb: None,
            id: None,
        }
    }
}

fn default_code() -> u16 {
    200
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
