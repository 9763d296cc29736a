//! Core contracts for the tether dependency-injection runtime
//!
//! This crate defines the boundary types every tether provider and the
//! surrounding container agree on:
//!
//! - **Keys** ([`Key`], [`KeyIdentity`]) - opaque identities used to request
//!   values, with an explicit hash/equality/debug-representation contract so
//!   arbitrary value types can serve as keys.
//! - **Values** ([`DependencyValue`], [`Scope`]) - a produced instance plus
//!   the scope token that tells the container whether the outcome may be
//!   cached.
//! - **Ports** ([`Container`], [`Provider`], [`FreezeToken`]) - the contracts
//!   between the container and its resolution providers, following the
//!   Dependency Inversion Principle: the contract layer defines interfaces,
//!   provider crates implement them.
//! - **Errors** ([`Error`], [`Result`]) - configuration and resolution error
//!   taxonomy shared by all providers.
//!
//! No provider logic lives here; see the provider crates (e.g.
//! `tether-indirect`) for implementations.

pub mod error;
pub mod key;
pub mod ports;
pub mod value;

pub use error::{Error, Result};
pub use key::{Key, KeyIdentity};
pub use ports::{Container, DependencyDebug, FreezeToken, Provider};
pub use value::{DependencyValue, Instance, Scope};
