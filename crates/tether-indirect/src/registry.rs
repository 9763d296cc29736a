//! Link registry
//!
//! Owns the alias map, the implementation set, and all lifecycle-guard
//! logic. Administrative mutation runs single-writer (`&mut self`) before
//! the container freezes; the hot resolution path only reads, except for the
//! memoization write, which is a single atomic publish of one alias entry.

use crate::implementation::{ImplementationDependency, ImplementationFactory};
use dashmap::DashMap;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tether_core::{Container, Error, FreezeToken, Key, Result};
use tracing::debug;

/// Registry lifecycle, forward-only
///
/// `Frozen` is owned by the surrounding container and always wins over the
/// stored stage; the registry only records the `Open -> ImplicitsSet`
/// transition itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Accepting all registrations
    Open,
    /// Bulk alias registration has executed; it can never execute again
    ImplicitsSet,
    /// The container froze; no administrative mutation is accepted
    Frozen,
}

/// Alias map + implementation set with lifecycle guards
pub struct LinkRegistry {
    aliases: DashMap<Key, Key>,
    implementations: HashSet<ImplementationDependency>,
    stage: Stage,
    freeze: FreezeToken,
}

impl LinkRegistry {
    /// Create an empty registry observing the container's freeze token
    pub fn new(freeze: FreezeToken) -> Self {
        Self {
            aliases: DashMap::new(),
            implementations: HashSet::new(),
            stage: Stage::Open,
            freeze,
        }
    }

    /// Current lifecycle stage
    pub fn stage(&self) -> Stage {
        if self.freeze.is_frozen() {
            Stage::Frozen
        } else {
            self.stage
        }
    }

    fn ensure_mutable(&self, operation: &str) -> Result<()> {
        match self.stage() {
            Stage::Frozen => Err(Error::frozen(operation)),
            Stage::Open | Stage::ImplicitsSet => Ok(()),
        }
    }

    /// Whether this registry owns `key`
    ///
    /// True iff `key` is in the alias map or the implementation set.
    pub fn exists(&self, key: &Key) -> bool {
        self.aliases.contains_key(key)
            || key
                .downcast_ref::<ImplementationDependency>()
                .is_some_and(|dependency| self.implementations.contains(dependency))
    }

    /// Register the bulk alias mapping, at most once
    ///
    /// All-or-nothing: every key must be unowned container-wide before any
    /// pair is inserted. A second call always fails, even with an empty or
    /// identical mapping.
    pub fn register_implicits(
        &mut self,
        mapping: HashMap<Key, Key>,
        container: &dyn Container,
    ) -> Result<()> {
        self.ensure_mutable("register implicit aliases")?;
        if self.stage == Stage::ImplicitsSet {
            return Err(Error::ImplicitsAlreadyRegistered);
        }
        for key in mapping.keys() {
            if self.exists(key) || container.exists(key) {
                return Err(Error::duplicate_dependency(key.debug_repr()));
            }
        }

        let count = mapping.len();
        for (source, target) in mapping {
            self.aliases.insert(source, target);
        }
        self.stage = Stage::ImplicitsSet;
        debug!(count, "registered implicit aliases");
        Ok(())
    }

    /// Register an implementation choice for `interface`
    ///
    /// The returned value is the key future callers use to request the
    /// interface's current implementation.
    pub fn register_implementation(
        &mut self,
        interface: Key,
        factory: ImplementationFactory,
        permanent: bool,
        container: &dyn Container,
    ) -> Result<ImplementationDependency> {
        self.ensure_mutable("register an implementation")?;
        let dependency = ImplementationDependency::new(interface, factory, permanent);
        if self.implementations.contains(&dependency) {
            return Err(Error::duplicate_implementation(dependency.to_string()));
        }
        let key: Key = dependency.clone().into();
        if self.exists(&key) || container.exists(&key) {
            return Err(Error::duplicate_dependency(key.debug_repr()));
        }

        debug!(implementation = %dependency, permanent, "registered implementation");
        self.implementations.insert(dependency.clone());
        Ok(dependency)
    }

    /// Alias target for `key`, if one is bound
    pub fn target_of(&self, key: &Key) -> Option<Key> {
        self.aliases.get(key).map(|entry| entry.value().clone())
    }

    /// The implementation dependency behind `key`, if this registry holds it
    pub fn implementation_of<'a>(&self, key: &'a Key) -> Option<&'a ImplementationDependency> {
        let dependency = key.downcast_ref::<ImplementationDependency>()?;
        self.implementations
            .contains(dependency)
            .then_some(dependency)
    }

    /// Publish one memoized implementation choice
    ///
    /// Safe to run concurrently for the same key: factories backing
    /// permanent entries are pure, so redundant writes converge to the same
    /// value.
    pub(crate) fn memoize(&self, source: Key, target: Key) {
        debug!(
            source = %source.debug_repr(),
            target = %target.debug_repr(),
            "memoized implementation choice"
        );
        self.aliases.insert(source, target);
    }

    /// Independent copy for scope forking
    ///
    /// Entries are immutable, so sharing them is safe; subsequent mutations
    /// on either copy are invisible to the other. The freeze token stays
    /// shared - frozen-ness is container-owned and global.
    pub fn snapshot(&self) -> Self {
        Self {
            aliases: self.aliases.clone(),
            implementations: self.implementations.clone(),
            stage: self.stage,
            freeze: self.freeze.clone(),
        }
    }

    /// Number of alias entries, including memoized choices
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Number of registered implementation choices
    pub fn implementation_count(&self) -> usize {
        self.implementations.len()
    }
}

impl fmt::Debug for LinkRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkRegistry")
            .field("aliases", &self.aliases.len())
            .field("implementations", &self.implementations.len())
            .field("stage", &self.stage())
            .finish()
    }
}
