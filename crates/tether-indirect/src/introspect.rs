//! Resolution introspection
//!
//! Produces side-effect-light descriptions of how a key would resolve, for
//! diagnostics. May invoke a factory purely to display what would be
//! resolved, but never writes to the alias map.

use crate::registry::LinkRegistry;
use tether_core::{DependencyDebug, Key, Scope};

/// Describe how `key` would resolve through this registry
pub(crate) fn describe(registry: &LinkRegistry, key: &Key) -> Option<DependencyDebug> {
    if let Some(dependency) = registry.implementation_of(key) {
        // Memoized choices sit in the alias map; unresolved ones invoke the
        // factory for display only, without memoizing.
        let target = match registry.target_of(key) {
            Some(target) => target,
            None => dependency.factory().call(),
        };
        return Some(DependencyDebug {
            description: key.debug_repr(),
            scope: dependency.is_permanent().then_some(Scope::Singleton),
            dependencies: vec![target],
        });
    }

    let target = registry.target_of(key)?;
    Some(DependencyDebug {
        description: format!(
            "Implicit: {} -> {}",
            key.debug_repr(),
            target.debug_repr()
        ),
        scope: Some(Scope::Singleton),
        dependencies: vec![target],
    })
}
