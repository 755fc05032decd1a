//! Resolve free-form simulator aircraft names onto canonical performance catalog keys.
//!
//! Resolution is an ordered chain of strategies; the first one that produces a key wins.
//! The default chain is exact key, alias, variant-stripped alias, then family alias, so a
//! family name can never shadow a more specific alias.

use perf_catalog::Catalog;

mod strategy;
mod suffix;

pub use strategy::{AliasMatch, ExactKey, FamilyStripped, ResolutionStrategy, VariantStripped};
pub use suffix::{strip_numeric_submodel, strip_variant_marker};

/// Successful resolution and the strategy that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'c> {
    pub key: &'c str,
    pub strategy: &'static str,
}

/// Ordered resolution chain.
pub struct TypeResolver {
    strategies: Vec<Box<dyn ResolutionStrategy>>,
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self::with_strategies(vec![
            Box::new(ExactKey),
            Box::new(AliasMatch),
            Box::new(VariantStripped),
            Box::new(FamilyStripped),
        ])
    }
}

impl std::fmt::Debug for TypeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.strategies.iter().map(|s| s.name()))
            .finish()
    }
}

impl TypeResolver {
    pub fn with_strategies(strategies: Vec<Box<dyn ResolutionStrategy>>) -> Self {
        Self { strategies }
    }

    /// Canonical key for `name`, or `None` when no performance data exists for it.
    pub fn resolve<'c>(&self, catalog: &'c Catalog, name: &str) -> Option<&'c str> {
        self.resolve_with_trace(catalog, name)
            .map(|resolution| resolution.key)
    }

    /// Like [`TypeResolver::resolve`], also reporting which strategy matched.
    pub fn resolve_with_trace<'c>(
        &self,
        catalog: &'c Catalog,
        name: &str,
    ) -> Option<Resolution<'c>> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let resolution = self.strategies.iter().find_map(|strategy| {
            strategy.resolve(catalog, name).map(|key| Resolution {
                key,
                strategy: strategy.name(),
            })
        });
        match &resolution {
            Some(found) => {
                tracing::debug!(
                    aircraft = name,
                    key = found.key,
                    strategy = found.strategy,
                    "Resolved aircraft type"
                );
            }
            None => tracing::debug!(aircraft = name, "No performance data for aircraft type"),
        }
        resolution
    }
}

/// Resolve `name` with the default strategy chain.
pub fn resolve_performance_type(catalog: &Catalog, name: &str) -> Option<String> {
    TypeResolver::default()
        .resolve(catalog, name)
        .map(str::to_string)
}
