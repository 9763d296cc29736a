//! Port Interfaces
//!
//! Defines the boundary contracts between the container and its resolution
//! providers. Ports follow the Dependency Inversion Principle: this contract
//! layer defines interfaces, provider crates implement them.
//!
//! ## Organization
//!
//! - **container** - what providers consume from the surrounding container
//!   (global existence checks, delegated resolution, the freeze flag)
//! - **provider** - the uniform contract every resolution provider exposes

/// Contracts consumed from the surrounding container
pub mod container;
/// The uniform per-provider contract
pub mod provider;

// Re-export commonly used port traits for convenience
pub use container::{Container, FreezeToken};
pub use provider::{DependencyDebug, Provider};
