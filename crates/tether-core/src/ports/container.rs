//! Container Port
//!
//! What a resolution provider consumes from the surrounding multi-provider
//! container: the global key-existence check used before every registration,
//! the container's own `resolve` used to complete delegation, and the
//! externally owned freeze flag.

use crate::key::Key;
use crate::value::DependencyValue;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// The surrounding container, as seen by one provider
///
/// The container orchestrates every provider; a single provider only ever
/// needs these two operations from it.
pub trait Container: Send + Sync {
    /// Whether any provider in the container already owns `key`
    fn exists(&self, key: &Key) -> bool;

    /// Resolve `key` through the whole container
    ///
    /// Returns `None` when no provider owns the key.
    fn resolve(&self, key: &Key) -> Option<DependencyValue>;
}

/// One-way frozen flag, owned by the surrounding container
///
/// The container freezes itself once configuration ends; providers observe
/// the token before every administrative mutation. The transition is
/// one-way: once frozen, always frozen. Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct FreezeToken(Arc<AtomicBool>);

impl FreezeToken {
    /// Create a token in the unfrozen state
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the container as frozen
    pub fn freeze(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether the container has frozen
    pub fn is_frozen(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
