//! Shared, hot-reloadable access to the current catalog snapshot.

use std::sync::{Arc, PoisonError, RwLock};

use perf_config::CatalogPaths;

use crate::{Catalog, CatalogError};

/// Holds the current [`Catalog`] behind an atomically swapped reference.
///
/// Readers take an `Arc` snapshot and release the lock immediately, so a reload never
/// waits on a running calculation and never exposes a half-built catalog.
#[derive(Debug, Default)]
pub struct CatalogHandle {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<Catalog> {
        // The guarded value is a plain pointer swap, so a poisoned lock still holds a
        // complete snapshot.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Install `catalog` as the current snapshot and return the previous one.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }

    /// Load and validate a new snapshot from `paths`, then install it.
    ///
    /// On error the current snapshot is left untouched.
    pub fn reload_from(&self, paths: &CatalogPaths) -> Result<(), CatalogError> {
        let catalog = Catalog::load(paths)?;
        self.replace(catalog);
        tracing::info!(
            aircraft = ?paths.aircraft,
            airports = ?paths.airports,
            "Reloaded performance catalog"
        );
        Ok(())
    }
}
