use std::path::Path;
use std::sync::Arc;

use hub_core::builtin_catalog;
use hub_core::model::{Catalog, CatalogDraft};
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::expanded_state::ExpandedState;
use crate::progress_tracker::ProgressTracker;

/// Load the catalog from a JSON file, or fall back to the built-in one.
///
/// # Errors
///
/// Returns `AppServicesError` if the file cannot be read or fails validation.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, AppServicesError> {
    let Some(path) = path else {
        return Ok(builtin_catalog());
    };
    let raw = std::fs::read_to_string(path).map_err(|source| AppServicesError::CatalogFile {
        path: path.display().to_string(),
        source,
    })?;
    let catalog = CatalogDraft::from_json(&raw)?.validate()?;
    tracing::info!(
        path = %path.display(),
        topics = catalog.topic_count(),
        "catalog loaded from file"
    );
    Ok(catalog)
}

/// Assembles the catalog and both storage namespaces for the app.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<Catalog>,
    storage: Storage,
}

impl AppServices {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, storage: Storage) -> Self {
        Self { catalog, storage }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        catalog: Arc<Catalog>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(catalog, storage))
    }

    #[must_use]
    pub fn in_memory(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, Storage::in_memory())
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Load a tracker over the persistent namespace.
    pub async fn progress_tracker(&self) -> ProgressTracker {
        ProgressTracker::load(self.catalog(), Arc::clone(&self.storage.persistent)).await
    }

    /// Restore the expanded cards from the session namespace.
    pub async fn expanded_state(&self) -> ExpandedState {
        ExpandedState::load(&self.catalog, Arc::clone(&self.storage.session)).await
    }
}
