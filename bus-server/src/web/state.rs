//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::Catalog;

/// Shared application state.
///
/// The catalog is read-only for the process lifetime, so handlers can
/// share it without any locking.
#[derive(Clone)]
pub struct AppState {
    /// The route catalog loaded at startup.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
