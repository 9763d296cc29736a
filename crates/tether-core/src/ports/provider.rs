//! Provider Port
//!
//! The uniform contract every resolution provider exposes to the container:
//! ownership checks, hot-path resolution, diagnostics, and scope forking.

use crate::error::Result;
use crate::key::Key;
use crate::ports::container::Container;
use crate::value::{DependencyValue, Scope};
use std::fmt;

/// Side-effect-light description of how a key would resolve
///
/// Produced for diagnostics only, never on the hot path.
#[derive(Debug, Clone)]
pub struct DependencyDebug {
    /// Human-readable label for the key
    pub description: String,
    /// Scope the outcome would carry
    pub scope: Option<Scope>,
    /// Keys this one declares a dependency on
    pub dependencies: Vec<Key>,
}

/// A resolution provider inside the container
///
/// The container consults each provider in turn; a provider that does not
/// own a key reports `None` from [`Provider::provide`] so the container can
/// try the next one.
pub trait Provider: Send + Sync + fmt::Debug {
    /// Whether this provider owns `key`
    ///
    /// Pure and side-effect free.
    fn exists(&self, key: &Key) -> bool;

    /// Hot-path resolution
    ///
    /// `Ok(None)` means "not mine"; `Ok(Some(..))` is a completed resolution
    /// carrying the caching policy; `Err` is raised when a target this
    /// provider promised is absent container-wide.
    fn provide(&self, key: &Key, container: &dyn Container) -> Result<Option<DependencyValue>>;

    /// Describe how `key` would resolve, for diagnostics
    ///
    /// Returns `None` for unknown keys. May invoke user factories for
    /// display purposes but must not mutate provider state.
    fn maybe_debug(&self, key: &Key) -> Option<DependencyDebug>;

    /// Independent snapshot of this provider's state
    ///
    /// Used when the container forks an isolated scope; the copy and the
    /// original share no further mutable state.
    fn fork(&self) -> Box<dyn Provider>;
}
