//! Indirect-resolution provider for the tether dependency-injection runtime
//!
//! This crate implements the provider that handles *indirect* dependency
//! requests - requests that must be redirected to another key before a value
//! can be produced. Two redirection kinds exist:
//!
//! - **Static aliases**: key A always means "resolve key B instead",
//!   registered once in bulk via
//!   [`IndirectProvider::register_implicits`].
//! - **Implementation choices**: an [`ImplementationDependency`] key means
//!   "resolve the currently chosen concrete implementation of interface I",
//!   chosen at resolution time by a caller-supplied
//!   [`ImplementationFactory`] and, when permanent, memoized forever.
//!
//! The provider implements the uniform [`tether_core::Provider`] contract;
//! administrative registration runs before the container freezes, while the
//! hot resolution path may run concurrently across requesting threads.

pub mod implementation;
mod introspect;
pub mod provider;
pub mod registry;

pub use implementation::{ImplementationDependency, ImplementationFactory};
pub use provider::IndirectProvider;
pub use registry::{LinkRegistry, Stage};
