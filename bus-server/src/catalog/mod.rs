//! The route catalog.
//!
//! Loaded once at startup from a JSON file and held read-only for the
//! lifetime of the process. There is no reload; a restart picks up
//! catalog changes.

mod error;
mod route;

pub use error::CatalogError;
pub use route::Route;

use std::path::Path;

/// The full set of known routes, in file order.
///
/// File order carries no meaning of its own, but it is preserved so the
/// matcher's first-seen tie-break is deterministic across runs.
#[derive(Debug, Clone)]
pub struct Catalog {
    routes: Vec<Route>,
}

impl Catalog {
    /// Load the catalog from a JSON file.
    ///
    /// The file must contain an array of route records; a record missing
    /// any required field aborts the whole load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let routes = serde_json::from_str(&contents)?;
        Ok(Self { routes })
    }

    /// Build a catalog directly from routes (for tests and tooling).
    pub fn from_routes(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The routes in catalog order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes in the catalog.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the catalog has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
