use std::sync::Arc;

use crate::config::Config;
use crate::store::{FieldsStore, PreferencesStore};

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Preferences Store seam. Postgres in production, in-memory in tests.
    pub preferences: Arc<dyn PreferencesStore>,
    /// Fields Store seam, read-only from this service's perspective.
    pub fields: Arc<dyn FieldsStore>,
}
