//! Indirect-resolution provider
//!
//! Resolves requests that must be redirected to another key before a value
//! can be produced: static aliases and implementation choices. The provider
//! either delegates resolution of the redirect target back to the container
//! or reports "not mine" so the container can try other providers.

use crate::implementation::{ImplementationDependency, ImplementationFactory};
use crate::introspect;
use crate::registry::LinkRegistry;
use std::collections::HashMap;
use std::fmt;
use tether_core::{
    Container, DependencyDebug, DependencyValue, Error, FreezeToken, Key, Provider, Result, Scope,
};
use tracing::trace;

/// Provider redirecting alias and implementation-choice requests
pub struct IndirectProvider {
    registry: LinkRegistry,
}

impl IndirectProvider {
    /// Create an empty provider observing the container's freeze token
    pub fn new(freeze: FreezeToken) -> Self {
        Self {
            registry: LinkRegistry::new(freeze),
        }
    }

    /// The underlying registry, for lifecycle inspection and diagnostics
    pub fn registry(&self) -> &LinkRegistry {
        &self.registry
    }

    /// Register the bulk alias mapping, at most once
    pub fn register_implicits(
        &mut self,
        mapping: HashMap<Key, Key>,
        container: &dyn Container,
    ) -> Result<()> {
        self.registry.register_implicits(mapping, container)
    }

    /// Register an implementation choice for `interface`
    ///
    /// Returns the key future callers use to request the interface's current
    /// implementation.
    pub fn register_implementation(
        &mut self,
        interface: Key,
        factory: ImplementationFactory,
        permanent: bool,
        container: &dyn Container,
    ) -> Result<ImplementationDependency> {
        self.registry
            .register_implementation(interface, factory, permanent, container)
    }
}

impl Provider for IndirectProvider {
    fn exists(&self, key: &Key) -> bool {
        self.registry.exists(key)
    }

    fn provide(&self, key: &Key, container: &dyn Container) -> Result<Option<DependencyValue>> {
        if let Some(target) = self.registry.target_of(key) {
            trace!(
                key = %key.debug_repr(),
                target = %target.debug_repr(),
                "resolving alias"
            );
            let value = container
                .resolve(&target)
                .ok_or_else(|| Error::dependency_not_found(target.debug_repr()))?;
            // The alias binding itself is immutable once set, so the outcome
            // is cacheable regardless of the target's own scope.
            return Ok(Some(value.with_scope(Some(Scope::Singleton))));
        }

        if let Some(dependency) = self.registry.implementation_of(key) {
            let target = dependency.factory().call();
            trace!(
                key = %key.debug_repr(),
                target = %target.debug_repr(),
                "resolving implementation choice"
            );
            let value = container
                .resolve(&target)
                .ok_or_else(|| Error::dependency_not_found(target.debug_repr()))?;
            if dependency.is_permanent() {
                self.registry.memoize(key.clone(), target);
                return Ok(Some(value.with_scope(Some(Scope::Singleton))));
            }
            return Ok(Some(value.with_scope(None)));
        }

        Ok(None)
    }

    fn maybe_debug(&self, key: &Key) -> Option<DependencyDebug> {
        introspect::describe(&self.registry, key)
    }

    fn fork(&self) -> Box<dyn Provider> {
        Box::new(Self {
            registry: self.registry.snapshot(),
        })
    }
}

impl fmt::Debug for IndirectProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndirectProvider")
            .field("implementations", &self.registry.implementation_count())
            .field("aliases", &self.registry.alias_count())
            .finish()
    }
}
