//! Dependency keys
//!
//! A dependency key is an opaque identity with an explicit hash and equality
//! contract. Any value type with `Eq + Hash + Debug` can serve as a key; key
//! types with expensive identity (e.g. a provider's own dependency value
//! types) can implement [`KeyIdentity`] directly and store a precomputed
//! hash instead of recomputing it.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Identity contract for dependency keys
///
/// Object-safe hash + equality + diagnostics representation. Implementations
/// must keep the usual law: `dyn_eq` implies identical `dyn_hash` output.
pub trait KeyIdentity: Send + Sync + 'static {
    /// Equality against another key identity
    fn dyn_eq(&self, other: &dyn KeyIdentity) -> bool;

    /// Feed this identity into a hasher
    fn dyn_hash(&self, state: &mut dyn Hasher);

    /// Human-readable label used only by diagnostics
    fn debug_repr(&self) -> String;

    /// Downcast support for the underlying value
    fn as_any(&self) -> &dyn Any;
}

/// Adapter giving any ordinary value the [`KeyIdentity`] contract
struct ValueKey<T>(T);

impl<T> KeyIdentity for ValueKey<T>
where
    T: Eq + Hash + fmt::Debug + Send + Sync + 'static,
{
    fn dyn_eq(&self, other: &dyn KeyIdentity) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self.0 == *other)
    }

    fn dyn_hash(&self, mut state: &mut dyn Hasher) {
        self.0.hash(&mut state);
    }

    fn debug_repr(&self) -> String {
        format!("{:?}", self.0)
    }

    fn as_any(&self) -> &dyn Any {
        &self.0
    }
}

/// Opaque dependency key
///
/// Cheap to clone and usable directly as a hash-map key. Equality takes an
/// identity fast path (same allocation) before falling back to the
/// [`KeyIdentity`] contract.
#[derive(Clone)]
pub struct Key(Arc<dyn KeyIdentity>);

impl Key {
    /// Wrap an ordinary value as a dependency key
    pub fn new<T>(value: T) -> Self
    where
        T: Eq + Hash + fmt::Debug + Send + Sync + 'static,
    {
        Self(Arc::new(ValueKey(value)))
    }

    /// Wrap a value that implements [`KeyIdentity`] itself
    pub fn from_identity(identity: Arc<dyn KeyIdentity>) -> Self {
        Self(identity)
    }

    /// Borrow the underlying value if it is a `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    /// Diagnostics label for this key
    pub fn debug_repr(&self) -> String {
        self.0.debug_repr()
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.dyn_eq(other.0.as_ref())
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.dyn_hash(state);
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.debug_repr())
    }
}
