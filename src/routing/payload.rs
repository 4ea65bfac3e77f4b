//! Payload resolution.
//!
//! Responses name their body by reference so fixtures can live outside the
//! configuration. References are read on every request; nothing is cached.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::routing::response::StubResponse;

#[derive(Debug, Error)]
#[error("failed to read payload: {source}")]
pub struct PayloadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Reads payload files, resolving relative references against a root.
#[derive(Debug, Clone, Default)]
pub struct PayloadResolver {
    root: Option<PathBuf>,
}

impl PayloadResolver {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    /// Filesystem location for a reference.
    pub fn path_for(&self, reference: &str) -> PathBuf {
        let path = Path::new(reference);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Body for the response; empty when it carries no payload.
    pub async fn resolve(&self, response: &StubResponse) -> Result<Vec<u8>, PayloadError> {
        let Some(reference) = response.payload.as_deref() else {
            return Ok(Vec::new());
        };

        let path = self.path_for(reference);
        tokio::fs::read(&path)
            .await
            .map_err(|source| PayloadError { path, source })
    }
}
