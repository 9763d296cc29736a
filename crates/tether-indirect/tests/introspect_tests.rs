//! Diagnostics description tests

mod common;

use common::{FakeContainer, counting_factory};
use std::collections::HashMap;
use std::sync::atomic::Ordering;
use tether_core::{DependencyValue, FreezeToken, Key, Provider, Scope};
use tether_indirect::IndirectProvider;

#[test]
fn test_unknown_key_has_no_description() {
    let provider = IndirectProvider::new(FreezeToken::new());
    assert!(provider.maybe_debug(&Key::new("unknown")).is_none());
}

#[test]
fn test_alias_description_names_source_and_target() {
    let container = FakeContainer::new();
    let mut provider = IndirectProvider::new(FreezeToken::new());

    let mut mapping = HashMap::new();
    mapping.insert(Key::new("alias"), Key::new("canonical"));
    provider.register_implicits(mapping, &container).unwrap();

    let debug = provider
        .maybe_debug(&Key::new("alias"))
        .expect("alias should be describable");
    assert!(debug.description.starts_with("Implicit:"));
    assert!(debug.description.contains("alias"));
    assert!(debug.description.contains("canonical"));
    assert_eq!(debug.scope, Some(Scope::Singleton));
    assert_eq!(debug.dependencies, vec![Key::new("canonical")]);
}

#[test]
fn test_describing_unresolved_implementation_does_not_memoize() {
    let mut container = FakeContainer::new();
    let target = Key::new("postgres");
    container.bind(target.clone(), DependencyValue::singleton(42u32));
    let mut provider = IndirectProvider::new(FreezeToken::new());

    let (factory, calls) = counting_factory(target.clone());
    let dependency = provider
        .register_implementation(Key::new("db"), factory, true, &container)
        .unwrap();
    let key = dependency.as_key();

    // The factory runs for display purposes only
    let debug = provider.maybe_debug(&key).expect("describable");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(provider.registry().alias_count(), 0);
    assert_eq!(debug.scope, Some(Scope::Singleton));
    assert_eq!(debug.dependencies, vec![target]);
    assert!(debug.description.contains("Permanent implementation"));

    // Resolution, by contrast, grows the alias map by one
    provider.provide(&key, &container).unwrap().unwrap();
    assert_eq!(provider.registry().alias_count(), 1);
}

#[test]
fn test_memoized_implementation_description_skips_factory() {
    let mut container = FakeContainer::new();
    let target = Key::new("postgres");
    container.bind(target.clone(), DependencyValue::singleton(42u32));
    let mut provider = IndirectProvider::new(FreezeToken::new());

    let (factory, calls) = counting_factory(target.clone());
    let dependency = provider
        .register_implementation(Key::new("db"), factory, true, &container)
        .unwrap();
    let key = dependency.as_key();
    provider.provide(&key, &container).unwrap().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let debug = provider.maybe_debug(&key).expect("describable");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(debug.dependencies, vec![target]);
    assert_eq!(debug.scope, Some(Scope::Singleton));
}

#[test]
fn test_non_permanent_description_is_scope_less() {
    let container = FakeContainer::new();
    let mut provider = IndirectProvider::new(FreezeToken::new());

    let (factory, _calls) = counting_factory(Key::new("postgres"));
    let dependency = provider
        .register_implementation(Key::new("db"), factory, false, &container)
        .unwrap();

    let debug = provider
        .maybe_debug(&dependency.as_key())
        .expect("describable");
    assert_eq!(debug.scope, None);
    assert!(debug.description.contains("Implementation"));
}
