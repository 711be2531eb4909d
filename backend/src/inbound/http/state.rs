//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the [`Storage`] port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::Storage;

/// Dependency bundle for HTTP handlers.
///
/// Holds the record store backend selected at startup; handlers never
/// learn which implementation they are talking to.
#[derive(Clone)]
pub struct HttpState {
    /// Record store selected at process startup.
    pub storage: Arc<dyn Storage>,
}

impl HttpState {
    /// Construct state around the selected record store.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}
