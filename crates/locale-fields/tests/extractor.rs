//! Integration tests for the memoizing field extractor.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use locale_fields::{
    ExplicitHierarchy, ExtractError, FieldExtractor, FieldSet, FieldSource, HierarchyError,
    HierarchyResolver, MemoryCatalog, SharedExtractor, SubtagHierarchy, build_extractor,
};
use serde_json::{Value, json};

fn fields(value: Value) -> FieldSet<Value> {
    serde_json::from_value(value).unwrap()
}

fn english_catalog() -> BTreeMap<String, FieldSet<Value>> {
    [
        ("en", json!({"a": 1, "b": 2})),
        ("en-GB", json!({"a": 1, "b": 3})),
        ("en-GB-oxendict", json!({"a": 1, "b": 3, "c": 4})),
        ("en-AU", json!({"a": 1, "b": 2})),
        ("fr", json!({"a": 5})),
    ]
    .into_iter()
    .map(|(locale, value)| (locale.to_string(), fields(value)))
    .collect()
}

#[derive(Debug, Clone, PartialEq)]
struct LoadFailed(String);

// =========================================================================
// Basic Extraction
// =========================================================================

#[test]
fn extract_returns_minimal_fields_for_chain() {
    let catalog = english_catalog();
    let mut extractor = build_extractor(
        |locale: &str| Ok::<_, LoadFailed>(catalog[locale].clone()),
        |locale: &str| Ok(catalog.contains_key(locale)),
        catalog.keys().cloned(),
    );

    let result = extractor.extract(["en-GB-oxendict"]).unwrap();

    assert_eq!(
        result,
        BTreeMap::from([
            ("en".to_string(), fields(json!({"a": 1, "b": 2}))),
            ("en-GB".to_string(), fields(json!({"b": 3}))),
            ("en-GB-oxendict".to_string(), fields(json!({"c": 4}))),
        ])
    );
}

#[test]
fn extract_omits_empty_field_sets() {
    let catalog = english_catalog();
    let mut extractor = build_extractor(
        |locale: &str| Ok::<_, LoadFailed>(catalog[locale].clone()),
        |locale: &str| Ok(catalog.contains_key(locale)),
        catalog.keys().cloned(),
    );

    // en-AU repeats en exactly, so its minimal field set is empty.
    let result = extractor.extract(["en-AU"]).unwrap();

    assert!(!result.contains_key("en-AU"));
    assert!(result.contains_key("en"));
    assert!(result.values().all(|f| !f.is_empty()));
    assert_eq!(extractor.cached("en-AU"), Some(&FieldSet::new()));
}

#[test]
fn extract_skips_locales_without_data() {
    let catalog = english_catalog();
    let mut extractor = build_extractor(
        |locale: &str| Ok::<_, LoadFailed>(catalog[locale].clone()),
        |locale: &str| Ok(catalog.contains_key(locale)),
        ["en", "en-GB", "de"],
    );

    let result = extractor.extract(["de", "en-GB"]).unwrap();

    assert!(!result.contains_key("de"));
    assert_eq!(extractor.cached("de"), None);
    assert!(result.contains_key("en-GB"));
}

#[test]
fn extract_restricts_chain_to_available_locales() {
    let catalog = english_catalog();
    let mut extractor = build_extractor(
        |locale: &str| Ok::<_, LoadFailed>(catalog[locale].clone()),
        |locale: &str| Ok(catalog.contains_key(locale)),
        ["en", "en-GB-oxendict"],
    );

    let result = extractor.extract(["en-GB-oxendict"]).unwrap();

    // en-GB is skipped, so oxendict is diffed against en directly.
    assert!(!result.contains_key("en-GB"));
    assert_eq!(result["en-GB-oxendict"], fields(json!({"b": 3, "c": 4})));
}

#[test]
fn extract_skips_unavailable_ancestor_without_data() {
    let catalog = english_catalog();
    let mut extractor = build_extractor(
        |locale: &str| Ok::<_, LoadFailed>(catalog[locale].clone()),
        |locale: &str| Ok(locale != "en" && catalog.contains_key(locale)),
        catalog.keys().cloned(),
    );

    let result = extractor.extract(["en-GB"]).unwrap();

    assert!(!result.contains_key("en"));
    assert_eq!(extractor.cached("en"), None);
    assert_eq!(result["en-GB"], fields(json!({"a": 1, "b": 3})));
}

#[test]
fn extract_with_empty_filtered_chain_caches_nothing() {
    let catalog = english_catalog();
    let mut extractor = build_extractor(
        |locale: &str| Ok::<_, LoadFailed>(catalog[locale].clone()),
        |locale: &str| Ok(catalog.contains_key(locale)),
        ["fr"],
    );

    let result = extractor.extract(["en-GB"]).unwrap();

    assert!(result.is_empty());
    assert_eq!(extractor.cached_locales().count(), 0);
}

#[test]
fn extract_of_empty_request_is_empty() {
    let catalog = english_catalog();
    let mut extractor = build_extractor(
        |locale: &str| Ok::<_, LoadFailed>(catalog[locale].clone()),
        |locale: &str| Ok(catalog.contains_key(locale)),
        catalog.keys().cloned(),
    );

    let result = extractor.extract(Vec::<String>::new()).unwrap();
    assert!(result.is_empty());
}

// =========================================================================
// Memoization
// =========================================================================

#[test]
fn loader_called_at_most_once_per_locale() {
    let catalog = english_catalog();
    let loads = RefCell::new(Vec::new());
    let mut extractor = build_extractor(
        |locale: &str| {
            loads.borrow_mut().push(locale.to_string());
            Ok::<_, LoadFailed>(catalog[locale].clone())
        },
        |locale: &str| Ok(catalog.contains_key(locale)),
        catalog.keys().cloned(),
    );

    extractor.extract(["en-GB", "en-AU"]).unwrap();
    extractor.extract(["en-GB-oxendict", "en-GB", "en"]).unwrap();
    extractor.extract(["en-GB-oxendict", "fr"]).unwrap();

    let mut loaded = loads.borrow().clone();
    loaded.sort();
    assert_eq!(
        loaded,
        vec!["en", "en-AU", "en-GB", "en-GB-oxendict", "fr"]
    );
}

#[test]
fn memoized_results_match_fresh_results() {
    let catalog = english_catalog();
    let source = |locale: &str| Ok::<_, LoadFailed>(catalog[locale].clone());
    let has_data = |locale: &str| Ok(catalog.contains_key(locale));

    let mut warm = build_extractor(source, has_data, catalog.keys().cloned());
    warm.extract(["en-GB"]).unwrap();
    let warm_result = warm.extract(["en-GB-oxendict"]).unwrap();

    let mut cold = build_extractor(source, has_data, catalog.keys().cloned());
    let cold_result = cold.extract(["en-GB-oxendict"]).unwrap();

    assert_eq!(warm_result, cold_result);
}

#[test]
fn repeated_request_returns_same_result() {
    let catalog = english_catalog();
    let mut extractor = build_extractor(
        |locale: &str| Ok::<_, LoadFailed>(catalog[locale].clone()),
        |locale: &str| Ok(catalog.contains_key(locale)),
        catalog.keys().cloned(),
    );

    let first = extractor.extract(["en-GB-oxendict"]).unwrap();
    let second = extractor.extract(["en-GB-oxendict"]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn result_covers_only_requested_chains() {
    let catalog = english_catalog();
    let mut extractor = build_extractor(
        |locale: &str| Ok::<_, LoadFailed>(catalog[locale].clone()),
        |locale: &str| Ok(catalog.contains_key(locale)),
        catalog.keys().cloned(),
    );

    extractor.extract(["fr"]).unwrap();
    let result = extractor.extract(["en-GB"]).unwrap();

    assert_eq!(result.keys().collect::<Vec<_>>(), vec!["en", "en-GB"]);
}

#[test]
fn cache_hit_does_not_resolve_again() {
    let catalog: MemoryCatalog<Value> = english_catalog().into_iter().collect();
    let resolutions = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&resolutions);

    let mut extractor = FieldExtractor::builder()
        .source(catalog)
        .available_locales(["en", "en-GB", "en-GB-oxendict"].map(String::from))
        .resolver(Box::new(move |locale: &str| {
            if counter.fetch_add(1, Ordering::SeqCst) > 0 {
                return Err(HierarchyError::Cycle {
                    chain: vec![locale.to_string()],
                });
            }
            SubtagHierarchy.resolve(locale)
        }))
        .build();

    let first = extractor.extract(["en-GB-oxendict"]).unwrap();
    // Every member of the chain is now cached, so none of these resolve.
    let second = extractor.extract(["en-GB-oxendict", "en-GB", "en"]).unwrap();

    assert_eq!(first, second);
    assert_eq!(extractor.extract(["en"]).unwrap().keys().collect::<Vec<_>>(), vec!["en"]);
    assert_eq!(resolutions.load(Ordering::SeqCst), 1);
}

#[test]
fn clear_cache_forces_reload() {
    let catalog = english_catalog();
    let loads = RefCell::new(0);
    let mut extractor = build_extractor(
        |locale: &str| {
            *loads.borrow_mut() += 1;
            Ok::<_, LoadFailed>(catalog[locale].clone())
        },
        |locale: &str| Ok(catalog.contains_key(locale)),
        catalog.keys().cloned(),
    );

    extractor.extract(["fr"]).unwrap();
    extractor.clear_cache();
    extractor.extract(["fr"]).unwrap();
    assert_eq!(*loads.borrow(), 2);
}

// =========================================================================
// Failures
// =========================================================================

#[test]
fn loader_error_propagates_unchanged() {
    let catalog = english_catalog();
    let mut extractor = build_extractor(
        |locale: &str| {
            if locale == "en-GB" {
                Err(LoadFailed(locale.to_string()))
            } else {
                Ok(catalog[locale].clone())
            }
        },
        |locale: &str| Ok(catalog.contains_key(locale)),
        catalog.keys().cloned(),
    );

    let err = extractor.extract(["en-GB-oxendict"]).unwrap_err();
    assert_eq!(err.source_error(), Some(&LoadFailed("en-GB".to_string())));
}

#[test]
fn predicate_error_propagates_unchanged() {
    let catalog = english_catalog();
    let mut extractor = build_extractor(
        |locale: &str| Ok(catalog[locale].clone()),
        |locale: &str| Err(LoadFailed(format!("catalog offline for {locale}"))),
        catalog.keys().cloned(),
    );

    let err = extractor.extract(["en"]).unwrap_err();
    assert!(matches!(err, ExtractError::Source(LoadFailed(ref msg)) if msg.contains("en")));
}

#[test]
fn failed_load_is_retried_on_next_call() {
    let catalog = english_catalog();
    let attempts = RefCell::new(0);
    let mut extractor = build_extractor(
        |locale: &str| {
            let mut attempts = attempts.borrow_mut();
            *attempts += 1;
            if *attempts == 1 {
                Err(LoadFailed(locale.to_string()))
            } else {
                Ok(catalog[locale].clone())
            }
        },
        |locale: &str| Ok(catalog.contains_key(locale)),
        catalog.keys().cloned(),
    );

    assert!(extractor.extract(["fr"]).is_err());
    assert_eq!(extractor.cached("fr"), None);

    let result = extractor.extract(["fr"]).unwrap();
    assert_eq!(result["fr"], fields(json!({"a": 5})));
}

#[test]
fn resolver_error_is_a_hierarchy_error() {
    let catalog: MemoryCatalog<Value> = english_catalog().into_iter().collect();
    let mut extractor = FieldExtractor::builder()
        .source(catalog)
        .available_locales(["en".to_string()])
        .resolver(Box::new(|locale: &str| {
            Err::<Vec<String>, _>(HierarchyError::Cycle {
                chain: vec![locale.to_string(), locale.to_string()],
            })
        }))
        .build();

    let err = extractor.extract(["en"]).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::Hierarchy(HierarchyError::Cycle { .. })
    ));
    assert_eq!(extractor.cached("en"), None);
}

// =========================================================================
// Opaque Identifiers
// =========================================================================

#[test]
fn extract_accepts_root_locale() {
    let root = fields(json!({"a": 1}));
    let mut extractor = build_extractor(
        |_: &str| Ok::<_, LoadFailed>(root.clone()),
        |_: &str| Ok(true),
        ["root"],
    );

    let result = extractor.extract(["root"]).unwrap();
    assert_eq!(result, BTreeMap::from([("root".to_string(), root.clone())]));
}

#[test]
fn extract_accepts_non_bcp47_identifiers() {
    let catalog: BTreeMap<String, FieldSet<Value>> = [
        ("legacy", json!({"a": 1, "b": 2})),
        ("legacy_Custom", json!({"a": 1, "b": 3})),
    ]
    .into_iter()
    .map(|(locale, value)| (locale.to_string(), fields(value)))
    .collect();
    let mut extractor = build_extractor(
        |locale: &str| Ok::<_, LoadFailed>(catalog[locale].clone()),
        |locale: &str| Ok(catalog.contains_key(locale)),
        catalog.keys().cloned(),
    );

    let result = extractor.extract(["legacy_Custom"]).unwrap();
    assert_eq!(result["legacy_Custom"], fields(json!({"b": 3})));
}

// =========================================================================
// Builder, Catalogs and Resolvers
// =========================================================================

#[test]
fn builder_with_memory_catalog() {
    let catalog: MemoryCatalog<Value> = english_catalog().into_iter().collect();
    let available: Vec<String> = catalog.locales().map(str::to_string).collect();

    let mut extractor = FieldExtractor::builder()
        .source(catalog)
        .available_locales(available)
        .build();

    let result = extractor.extract(["en-GB"]).unwrap();
    assert_eq!(result["en-GB"], fields(json!({"b": 3})));
    assert!(extractor.is_available("fr"));
    assert!(!extractor.is_available("de"));
    assert!(extractor.source().has_data("fr").unwrap());
}

#[test]
fn builder_with_explicit_resolver() {
    let catalog: MemoryCatalog<Value> = [
        ("en", json!({"date": "M/d/y", "currency": "USD"})),
        ("en-001", json!({"date": "d/M/y", "currency": "USD"})),
        ("en-150", json!({"date": "d/M/y", "currency": "EUR"})),
    ]
    .into_iter()
    .map(|(locale, value)| (locale, fields(value)))
    .collect();

    let resolver = ExplicitHierarchy::new()
        .with_parent("en-150", "en-001")
        .with_parent("en-001", "en");

    let mut extractor = FieldExtractor::builder()
        .source(catalog)
        .available_locales(["en", "en-001", "en-150"].map(String::from))
        .resolver(Box::new(resolver))
        .build();

    let result = extractor.extract(["en-150"]).unwrap();
    assert_eq!(result["en-001"], fields(json!({"date": "d/M/y"})));
    assert_eq!(result["en-150"], fields(json!({"currency": "EUR"})));
}

#[test]
fn builder_with_closure_resolver() {
    let catalog: MemoryCatalog<Value> = english_catalog().into_iter().collect();

    let mut extractor = FieldExtractor::builder()
        .source(catalog)
        .available_locales(["en", "fr"].map(String::from))
        .resolver(Box::new(|locale: &str| {
            Ok::<_, HierarchyError>(vec!["en".to_string(), locale.to_string()])
        }))
        .build();

    let result = extractor.extract(["fr"]).unwrap();
    assert_eq!(result["fr"], fields(json!({"a": 5})));
    assert!(!result["en"].is_empty());
}

// =========================================================================
// Shared Extractor
// =========================================================================

#[test]
fn shared_extractor_loads_each_locale_once_across_threads() {
    let catalog = english_catalog();
    let loads = Arc::new(Mutex::new(Vec::new()));

    let recorded = Arc::clone(&loads);
    let loader_catalog = catalog.clone();
    let predicate_catalog = catalog.clone();
    let extractor = Arc::new(SharedExtractor::new(build_extractor(
        move |locale: &str| {
            recorded.lock().unwrap().push(locale.to_string());
            Ok::<_, LoadFailed>(loader_catalog[locale].clone())
        },
        move |locale: &str| Ok(predicate_catalog.contains_key(locale)),
        catalog.keys().cloned(),
    )));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let extractor = Arc::clone(&extractor);
            thread::spawn(move || extractor.extract(["en-GB-oxendict", "en-AU"]).unwrap())
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    let mut loaded = loads.lock().unwrap().clone();
    loaded.sort();
    assert_eq!(loaded, vec!["en", "en-AU", "en-GB", "en-GB-oxendict"]);
}
