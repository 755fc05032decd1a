//! Individual resolution strategies.

use perf_catalog::Catalog;

use crate::suffix::{strip_numeric_submodel, strip_variant_marker};

/// One link in the resolution chain.
pub trait ResolutionStrategy: Send + Sync {
    /// Short label used in traces.
    fn name(&self) -> &'static str;

    /// Canonical key for `name`, if this strategy recognises it.
    fn resolve<'c>(&self, catalog: &'c Catalog, name: &str) -> Option<&'c str>;
}

/// Exact, case-sensitive match against a canonical key.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactKey;

impl ResolutionStrategy for ExactKey {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn resolve<'c>(&self, catalog: &'c Catalog, name: &str) -> Option<&'c str> {
        catalog.aircraft(name).map(|record| record.key.as_str())
    }
}

/// Case-insensitive match against the alias table.
#[derive(Debug, Clone, Copy, Default)]
pub struct AliasMatch;

impl ResolutionStrategy for AliasMatch {
    fn name(&self) -> &'static str {
        "alias"
    }

    fn resolve<'c>(&self, catalog: &'c Catalog, name: &str) -> Option<&'c str> {
        catalog.alias(name)
    }
}

/// Alias match after dropping a trailing variant marker (`A320neo` -> `A320`).
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantStripped;

impl ResolutionStrategy for VariantStripped {
    fn name(&self) -> &'static str {
        "variant"
    }

    fn resolve<'c>(&self, catalog: &'c Catalog, name: &str) -> Option<&'c str> {
        strip_variant_marker(name).and_then(|stem| catalog.alias(stem))
    }
}

/// Alias match on the family name left after dropping a numeric sub-model
/// (`B737-800` -> `B737`). Works on the variant-stripped form when there is one.
#[derive(Debug, Clone, Copy, Default)]
pub struct FamilyStripped;

impl ResolutionStrategy for FamilyStripped {
    fn name(&self) -> &'static str {
        "family"
    }

    fn resolve<'c>(&self, catalog: &'c Catalog, name: &str) -> Option<&'c str> {
        let base = strip_variant_marker(name).unwrap_or(name);
        strip_numeric_submodel(base).and_then(|family| catalog.alias(family))
    }
}
