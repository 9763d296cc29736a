//! Resolved dependency values and scope tokens

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Scope token attached to a resolved value
///
/// Only the permanent-singleton scope exists at this layer; scope-less
/// (per-call) outcomes carry `None` instead of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The value is fixed for the container's lifetime
    Singleton,
}

/// Type-erased produced value
pub type Instance = Arc<dyn Any + Send + Sync>;

/// A resolved dependency: the produced instance plus its caching policy
///
/// `scope.is_some()` is the cacheable flag: the container may memoize the
/// outcome for the rest of its lifetime. `None` means the value must be
/// produced again on every request.
#[derive(Clone)]
pub struct DependencyValue {
    instance: Instance,
    scope: Option<Scope>,
}

impl DependencyValue {
    /// Create a value with an explicit scope
    pub fn new(instance: Instance, scope: Option<Scope>) -> Self {
        Self { instance, scope }
    }

    /// Create a permanently cached value
    pub fn singleton<T: Any + Send + Sync>(value: T) -> Self {
        Self::new(Arc::new(value), Some(Scope::Singleton))
    }

    /// Create a per-call value
    pub fn transient<T: Any + Send + Sync>(value: T) -> Self {
        Self::new(Arc::new(value), None)
    }

    /// The produced instance
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Borrow the instance if it is a `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.instance.downcast_ref()
    }

    /// The scope token, if any
    pub fn scope(&self) -> Option<Scope> {
        self.scope
    }

    /// Whether the container may cache this outcome
    pub fn is_cacheable(&self) -> bool {
        self.scope.is_some()
    }

    /// Same instance with a different caching policy
    pub fn with_scope(self, scope: Option<Scope>) -> Self {
        Self {
            instance: self.instance,
            scope,
        }
    }
}

impl fmt::Debug for DependencyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependencyValue")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
