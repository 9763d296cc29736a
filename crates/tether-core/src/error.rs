//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the tether runtime
///
/// Two families exist: configuration errors raised synchronously at
/// registration time, and not-found errors raised during resolution when a
/// promised target is absent container-wide. Not-found errors always
/// propagate to the original caller; a missing dependency is a configuration
/// defect, not a transient fault.
#[derive(Error, Debug)]
pub enum Error {
    /// Mutation attempted after the container froze the registry
    #[error("Frozen registry: cannot {operation}")]
    Frozen {
        /// The mutation that was attempted
        operation: String,
    },

    /// Implicit aliases have already been registered once
    #[error("Implicit aliases have already been registered once")]
    ImplicitsAlreadyRegistered,

    /// A key is already owned by a provider in the container
    #[error("Duplicate dependency: {key}")]
    DuplicateDependency {
        /// Representation of the colliding key
        key: String,
    },

    /// An equal (interface, factory) pair is already registered
    #[error("Duplicate implementation: {implementation}")]
    DuplicateImplementation {
        /// Representation of the colliding implementation
        implementation: String,
    },

    /// A promised alias or implementation target does not exist anywhere
    #[error("Dependency not found: {target}")]
    DependencyNotFound {
        /// Representation of the missing target
        target: String,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a frozen-registry error
    pub fn frozen<S: Into<String>>(operation: S) -> Self {
        Self::Frozen {
            operation: operation.into(),
        }
    }

    /// Create a duplicate dependency error
    pub fn duplicate_dependency<S: Into<String>>(key: S) -> Self {
        Self::DuplicateDependency { key: key.into() }
    }

    /// Create a duplicate implementation error
    pub fn duplicate_implementation<S: Into<String>>(implementation: S) -> Self {
        Self::DuplicateImplementation {
            implementation: implementation.into(),
        }
    }
}

// Resolution error creation methods
impl Error {
    /// Create a not-found error naming the missing target
    pub fn dependency_not_found<S: Into<String>>(target: S) -> Self {
        Self::DependencyNotFound {
            target: target.into(),
        }
    }
}
