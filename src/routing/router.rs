//! Route table lookup.
//!
//! # Responsibilities
//! - Store compiled routes in configuration order
//! - Look up a route by exact request path
//! - Find set targets by name and rewind every cursor on reset
//!
//! # Design Decisions
//! - Immutable after construction; only cursors inside routes mutate
//! - Routes live in an arena, the path map stores indices into it
//! - A duplicated endpoint replaces the earlier route in place

use std::collections::HashMap;

use crate::config::RouteConfig;
use crate::routing::route::Route;

/// All stubbed endpoints, keyed by exact path.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
    by_path: HashMap<String, usize>,
}

impl RouteTable {
    /// Build the table from route configuration.
    pub fn from_config(configs: &[RouteConfig]) -> Self {
        let mut table = Self::default();
        for config in configs {
            table.insert(Route::from_config(config));
        }
        table
    }

    /// Register a route; an existing route on the same path is replaced.
    pub fn insert(&mut self, route: Route) {
        match self.by_path.get(route.endpoint()) {
            Some(&index) => {
                tracing::debug!(endpoint = %route.endpoint(), "Replacing duplicate route");
                self.routes[index] = route;
            }
            None => {
                self.by_path
                    .insert(route.endpoint().to_string(), self.routes.len());
                self.routes.push(route);
            }
        }
    }

    /// Exact-match lookup.
    pub fn lookup(&self, path: &str) -> Option<&Route> {
        self.by_path.get(path).map(|&index| &self.routes[index])
    }

    /// First route carrying the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name() == Some(name))
    }

    /// Rewind every route's cursor.
    pub fn reset_all(&self) {
        for route in &self.routes {
            route.reset();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
