//! Shared test doubles
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tether_core::{Container, DependencyValue, Key};
use tether_indirect::ImplementationFactory;

/// Container double backed by a fixed key -> value table
///
/// `exists` reports exactly the bound keys, which is enough for the
/// registration-time collision checks; `resolve` hands out clones of the
/// bound values.
#[derive(Default)]
pub struct FakeContainer {
    values: HashMap<Key, DependencyValue>,
}

impl FakeContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, key: Key, value: DependencyValue) {
        self.values.insert(key, value);
    }
}

impl Container for FakeContainer {
    fn exists(&self, key: &Key) -> bool {
        self.values.contains_key(key)
    }

    fn resolve(&self, key: &Key) -> Option<DependencyValue> {
        self.values.get(key).cloned()
    }
}

/// Factory that always yields `target` and counts its invocations
pub fn counting_factory(target: Key) -> (ImplementationFactory, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let factory = ImplementationFactory::new("choose_target", move || {
        seen.fetch_add(1, Ordering::SeqCst);
        target.clone()
    });
    (factory, calls)
}
