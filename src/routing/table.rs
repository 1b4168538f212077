//! Route table construction and lookup.
//!
//! # Responsibilities
//! - Register path → resource pairs during startup
//! - Reject duplicate paths before any request is served
//! - Resolve a request path to its resource id, or report no match
//!
//! # Design Decisions
//! - Registration is fallible; lookup is not (absence is `None`, not an error)
//! - Lookup is a pure function of the table and the input path
//! - Resource ids are opaque here; the content store gives them meaning

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::schema::RouteConfig;

/// Opaque identifier naming a content document.
///
/// The routing layer never interprets the value; it only hands it to the
/// content store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Error raised while building a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Two registrations share a path. Silent overwrite would
    /// non-deterministically hide content, so this aborts startup.
    #[error("duplicate route path {path:?}")]
    DuplicateRoute { path: String },
}

/// Accumulates routes during startup.
///
/// This is the only way routes enter the system; once `build` runs, the
/// table never changes for the process lifetime.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: HashMap<String, ResourceId>,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a path → resource pair.
    ///
    /// Fails immediately if the path is already registered.
    pub fn register(
        &mut self,
        path: impl Into<String>,
        resource: impl Into<ResourceId>,
    ) -> Result<(), TableError> {
        let path = path.into();
        if self.routes.contains_key(&path) {
            return Err(TableError::DuplicateRoute { path });
        }
        self.routes.insert(path, resource.into());
        Ok(())
    }

    /// Freeze the accumulated routes into an immutable table.
    pub fn build(self) -> RouteTable {
        tracing::info!(route_count = self.routes.len(), "Route table loaded");
        RouteTable {
            routes: self.routes,
        }
    }
}

/// Immutable mapping from request path to content resource.
///
/// Read-only after construction, so it is shared across request tasks
/// behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<String, ResourceId>,
}

impl RouteTable {
    /// Build a table from configured route definitions.
    pub fn from_config(routes: &[RouteConfig]) -> Result<Self, TableError> {
        let mut builder = RouteTableBuilder::new();
        for route in routes {
            builder.register(route.path.clone(), route.resource.clone())?;
        }
        Ok(builder.build())
    }

    /// Resolve a path to its resource id.
    ///
    /// Exact match only. An unknown path is `None`; the HTTP layer turns
    /// that into a 404.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&ResourceId> {
        self.routes.get(path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate over all registered pairs (unspecified order).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResourceId)> {
        self.routes.iter().map(|(p, r)| (p.as_str(), r))
    }
}
