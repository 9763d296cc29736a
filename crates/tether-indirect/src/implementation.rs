//! Implementation dependencies
//!
//! An [`ImplementationDependency`] is an immutable value that is itself
//! usable as a dependency key, meaning "the current implementation of
//! interface I, chosen by factory F, cached permanently or not". Its hash is
//! computed once at construction and never recomputed.

use std::any::Any;
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;
use tether_core::{Key, KeyIdentity};

/// Zero-argument factory choosing the concrete implementation of an interface
///
/// Closures have no structural equality, so factories compare by allocation
/// identity: clones of one factory are equal, two factories built from
/// identical closures are not. Factories backing permanent implementations
/// must be pure - the same factory always yields the same target.
#[derive(Clone)]
pub struct ImplementationFactory {
    func: Arc<dyn Fn() -> Key + Send + Sync>,
    repr: Arc<str>,
}

impl ImplementationFactory {
    /// Create a factory from a closure and its diagnostics label
    pub fn new<F>(repr: impl Into<String>, func: F) -> Self
    where
        F: Fn() -> Key + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            repr: repr.into().into(),
        }
    }

    /// Invoke the factory, producing the concrete target key
    pub fn call(&self) -> Key {
        (self.func)()
    }

    fn addr(&self) -> usize {
        Arc::as_ptr(&self.func) as *const () as usize
    }
}

impl PartialEq for ImplementationFactory {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl Eq for ImplementationFactory {}

impl Hash for ImplementationFactory {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.addr());
    }
}

impl fmt::Display for ImplementationFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

impl fmt::Debug for ImplementationFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ImplementationFactory")
            .field(&self.repr)
            .finish()
    }
}

/// Key requesting the current implementation of an interface
///
/// Equality is an identity fast path followed by structural equality of
/// (interface, factory); the `permanent` flag does not participate. The hash
/// is precomputed from (interface, factory) at construction.
#[derive(Clone)]
pub struct ImplementationDependency {
    interface: Key,
    factory: ImplementationFactory,
    permanent: bool,
    hash: u64,
}

impl ImplementationDependency {
    /// Create an implementation dependency, precomputing its hash
    pub fn new(interface: Key, factory: ImplementationFactory, permanent: bool) -> Self {
        let mut hasher = DefaultHasher::new();
        interface.hash(&mut hasher);
        factory.hash(&mut hasher);
        let hash = hasher.finish();

        Self {
            interface,
            factory,
            permanent,
            hash,
        }
    }

    /// The interface this key requests an implementation of
    pub fn interface(&self) -> &Key {
        &self.interface
    }

    /// The factory choosing the concrete implementation
    pub fn factory(&self) -> &ImplementationFactory {
        &self.factory
    }

    /// Whether the choice, once computed, is fixed for the container's lifetime
    pub fn is_permanent(&self) -> bool {
        self.permanent
    }

    /// This dependency as a request key
    pub fn as_key(&self) -> Key {
        Key::from_identity(Arc::new(self.clone()))
    }
}

impl PartialEq for ImplementationDependency {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
            && self.interface == other.interface
            && self.factory == other.factory
    }
}

impl Eq for ImplementationDependency {}

impl Hash for ImplementationDependency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl KeyIdentity for ImplementationDependency {
    fn dyn_eq(&self, other: &dyn KeyIdentity) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    fn dyn_hash(&self, state: &mut dyn Hasher) {
        state.write_u64(self.hash);
    }

    fn debug_repr(&self) -> String {
        if self.permanent {
            format!("Permanent implementation: {self}")
        } else {
            format!("Implementation: {self}")
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl From<ImplementationDependency> for Key {
    fn from(dependency: ImplementationDependency) -> Self {
        Key::from_identity(Arc::new(dependency))
    }
}

impl fmt::Display for ImplementationDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.interface.debug_repr(), self.factory)
    }
}

impl fmt::Debug for ImplementationDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Implementation({self})")
    }
}
