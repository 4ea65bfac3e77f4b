//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (status codes, timeouts)
//! - Detect conflicting routes and report them as warnings
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Duplicate endpoints are warnings: the last definition wins
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::{DutyConfig, RouteConfig};
use crate::routing::RouteKind;

/// A problem that prevents the configuration from being served.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} has an empty endpoint")]
    EmptyEndpoint { index: usize },

    #[error("route {endpoint} has invalid status code {code}")]
    InvalidStatusCode { endpoint: String, code: u16 },

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

/// A suspicious but servable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationWarning {
    #[error("endpoint {endpoint} is defined more than once, the last definition wins")]
    DuplicateEndpoint { endpoint: String },

    #[error("route name {name} is used more than once, set targets the first")]
    DuplicateName { name: String },

    #[error("route {endpoint} has unrecognized type {kind:?}, treating it as static")]
    UnknownType { endpoint: String, kind: String },

    #[error("{kind} route {endpoint} has no responses")]
    NoResponses { endpoint: String, kind: RouteKind },

    #[error("endpoint {endpoint} is shadowed by an admin path")]
    ShadowedByAdmin { endpoint: String },

    #[error("verb route {endpoint} has a response without a verb")]
    MissingVerb { endpoint: String },

    #[error("endpoint {endpoint} does not start with '/' and can never match")]
    UnreachableEndpoint { endpoint: String },
}

/// Check the configuration for errors that make it unusable.
pub fn validate_config(config: &DutyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    for (index, route) in config.routes.iter().enumerate() {
        if route.endpoint.is_empty() {
            errors.push(ValidationError::EmptyEndpoint { index });
        }

        let codes = route
            .response
            .iter()
            .chain(route.responses.iter())
            .map(|r| r.code);
        for code in codes {
            if !(100..=999).contains(&code) {
                errors.push(ValidationError::InvalidStatusCode {
                    endpoint: route.endpoint.clone(),
                    code,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Collect warnings for configurations that are served but probably unintended.
pub fn collect_warnings(config: &DutyConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut endpoints = HashSet::new();
    let mut names = HashSet::new();
    let admin = [&config.status, &config.reset, &config.set];

    for route in &config.routes {
        if !endpoints.insert(route.endpoint.as_str()) {
            warnings.push(ValidationWarning::DuplicateEndpoint {
                endpoint: route.endpoint.clone(),
            });
        }

        if let Some(name) = &route.name {
            if !names.insert(name.as_str()) {
                warnings.push(ValidationWarning::DuplicateName { name: name.clone() });
            }
        }

        if admin.iter().any(|path| **path == route.endpoint) {
            warnings.push(ValidationWarning::ShadowedByAdmin {
                endpoint: route.endpoint.clone(),
            });
        }

        if !route.endpoint.is_empty() && !route.endpoint.starts_with('/') {
            warnings.push(ValidationWarning::UnreachableEndpoint {
                endpoint: route.endpoint.clone(),
            });
        }

        warnings.extend(route_warnings(route));
    }

    warnings
}

fn route_warnings(route: &RouteConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let raw = route.kind.as_deref().unwrap_or_default();
    let kind = RouteKind::parse(raw);

    if !raw.is_empty() && kind == RouteKind::Static && !raw.eq_ignore_ascii_case("static") {
        warnings.push(ValidationWarning::UnknownType {
            endpoint: route.endpoint.clone(),
            kind: raw.to_string(),
        });
    }

    if kind != RouteKind::Static && route.responses.is_empty() {
        warnings.push(ValidationWarning::NoResponses {
            endpoint: route.endpoint.clone(),
            kind,
        });
    }

    if kind == RouteKind::Verb && route.responses.iter().any(|r| r.verb.is_none()) {
        warnings.push(ValidationWarning::MissingVerb {
            endpoint: route.endpoint.clone(),
        });
    }

    warnings
}
