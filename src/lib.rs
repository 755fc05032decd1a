//! Flight performance engine for takeoff and landing planning.
//!
//! The member crates each own one layer: catalog records, the type resolver, the numeric
//! models, and the two calculators. This crate re-exports them and wires them together
//! behind [`PerformanceEngine`], whose three entry points are pure functions of the
//! current catalog snapshot and the calibration constants.

use std::path::Path;

pub use perf_catalog as catalog;
pub use perf_config as config;
pub use perf_core as primitives;
pub use perf_export as export;
pub use perf_landing as landing;
pub use perf_models as models;
pub use perf_resolver as resolver;
pub use perf_takeoff as takeoff;

pub use perf_catalog::{Catalog, CatalogError, CatalogHandle};
pub use perf_config::{Calibration, CatalogPaths, ConfigError};
pub use perf_landing::{LandingRequest, LandingResult};
pub use perf_models::DecelMode;
pub use perf_resolver::TypeResolver;
pub use perf_takeoff::{TakeoffRequest, TakeoffResult};

/// Errors raised while setting up an engine. Calculations themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Entry point bundling the catalog, the calibration constants, and the resolver chain.
#[derive(Debug)]
pub struct PerformanceEngine {
    catalog: CatalogHandle,
    calibration: Calibration,
    resolver: TypeResolver,
}

impl PerformanceEngine {
    pub fn new(catalog: Catalog, calibration: Calibration) -> Self {
        Self {
            catalog: CatalogHandle::new(catalog),
            calibration,
            resolver: TypeResolver::default(),
        }
    }

    /// Load the catalog below `catalog_root` and the calibration from `calibration`
    /// (defaults when `None`).
    pub fn load<P: AsRef<Path>>(
        catalog_root: P,
        calibration: Option<&Path>,
    ) -> Result<Self, EngineError> {
        let calibration = perf_config::load_calibration(calibration)?;
        let catalog = Catalog::load(&CatalogPaths::under(catalog_root))?;
        Ok(Self::new(catalog, calibration))
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Handle for swapping in a reloaded catalog.
    pub fn catalog(&self) -> &CatalogHandle {
        &self.catalog
    }

    /// Canonical catalog key for a simulator aircraft name, or `None` when no
    /// performance data exists for it.
    pub fn resolve_performance_type(&self, name: &str) -> Option<String> {
        let catalog = self.catalog.snapshot();
        self.resolver.resolve(&catalog, name).map(str::to_string)
    }

    /// Like [`Self::resolve_performance_type`], also naming the strategy that matched.
    pub fn resolve_with_trace(&self, name: &str) -> Option<(String, &'static str)> {
        let catalog = self.catalog.snapshot();
        self.resolver
            .resolve_with_trace(&catalog, name)
            .map(|resolution| (resolution.key.to_string(), resolution.strategy))
    }

    /// Takeoff speeds, thrust, and distances; `None` when an identifier does not resolve.
    pub fn compute_takeoff_performance(
        &self,
        aircraft: &str,
        airport: &str,
        runway: &str,
        intersection: Option<&str>,
        flap_setting: u8,
    ) -> Option<TakeoffResult> {
        let catalog = self.catalog.snapshot();
        perf_takeoff::compute_takeoff_performance(
            &catalog,
            &self.calibration,
            &TakeoffRequest {
                aircraft,
                airport,
                runway,
                intersection,
                flap_setting,
            },
        )
    }

    /// Landing speeds, thrust, and distances; `None` when an identifier does not resolve.
    pub fn compute_landing_performance(
        &self,
        aircraft: &str,
        airport: &str,
        runway: &str,
        flap_setting: u8,
        decel_mode: DecelMode,
    ) -> Option<LandingResult> {
        let catalog = self.catalog.snapshot();
        perf_landing::compute_landing_performance(
            &catalog,
            &self.calibration,
            &LandingRequest {
                aircraft,
                airport,
                runway,
                flap_setting,
                decel_mode,
            },
        )
    }
}

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
