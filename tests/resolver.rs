mod common;

use common::{alias, catalog, reference_aircraft, sample_catalog};
use flight_performance_calculator::resolver::{TypeResolver, resolve_performance_type};

#[test]
fn exact_keys_and_aliases_resolve() {
    let catalog = sample_catalog();
    let resolver = TypeResolver::default();

    assert_eq!(resolver.resolve(&catalog, "A320"), Some("A320"));
    assert_eq!(resolver.resolve(&catalog, "A20N"), Some("A320"));
    assert_eq!(resolver.resolve(&catalog, "boeing 737-800"), Some("B738"));
    assert_eq!(resolver.resolve(&catalog, "  c172  "), Some("C172"));
}

#[test]
fn suffix_stripping_falls_back_to_catalog_keys() {
    let catalog = sample_catalog();
    let resolver = TypeResolver::default();

    let variant = resolver
        .resolve_with_trace(&catalog, "A320neo")
        .expect("variant");
    assert_eq!(variant.key, "A320");
    assert_eq!(variant.strategy, "variant");

    let family = resolver
        .resolve_with_trace(&catalog, "B737-900")
        .expect("family");
    assert_eq!(family.key, "B738");
    assert_eq!(family.strategy, "family");

    let both = resolver
        .resolve_with_trace(&catalog, "B737-900ER")
        .expect("variant then family");
    assert_eq!(both.key, "B738");
    assert_eq!(both.strategy, "family");
}

#[test]
fn specific_alias_wins_over_family_name() {
    let catalog = catalog(
        vec![reference_aircraft("B738"), reference_aircraft("B737_700")],
        Vec::new(),
        vec![alias("B737", "B738"), alias("B737-700", "B737_700")],
    );
    let resolver = TypeResolver::default();

    let specific = resolver
        .resolve_with_trace(&catalog, "B737-700")
        .expect("specific");
    assert_eq!(specific.key, "B737_700");
    assert_eq!(specific.strategy, "alias");

    // the variant-stripped form still lands on the specific alias, not the family
    assert_eq!(resolver.resolve(&catalog, "B737-700BBJ"), Some("B737_700"));
    assert_eq!(resolver.resolve(&catalog, "B737-800"), Some("B738"));
}

#[test]
fn exact_key_is_tried_before_aliases() {
    let catalog = catalog(
        vec![reference_aircraft("MD11"), reference_aircraft("MD11F")],
        Vec::new(),
        vec![alias("MD-11 Freighter", "MD11F")],
    );
    let resolver = TypeResolver::default();

    let exact = resolver.resolve_with_trace(&catalog, "MD11F").expect("exact");
    assert_eq!((exact.key, exact.strategy), ("MD11F", "exact"));

    let folded = resolver.resolve_with_trace(&catalog, "md11f").expect("case-folded");
    assert_eq!((folded.key, folded.strategy), ("MD11F", "alias"));

    let named = resolver
        .resolve_with_trace(&catalog, "MD-11 Freighter")
        .expect("alias");
    assert_eq!((named.key, named.strategy), ("MD11F", "alias"));
}

#[test]
fn unknown_names_have_no_performance_data() {
    let catalog = sample_catalog();
    assert_eq!(resolve_performance_type(&catalog, "Concorde"), None);
    assert_eq!(resolve_performance_type(&catalog, "Q400-100"), None);
    assert_eq!(resolve_performance_type(&catalog, ""), None);
    assert_eq!(resolve_performance_type(&catalog, "   "), None);
}
