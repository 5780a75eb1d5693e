//! regiongen-shapes - Generators and field tables of the game builder project
//!
//! Each module builds one [`MarkerRegistry`](regiongen_core::MarkerRegistry):
//! - [`actor`]: actor component, persistence, networking and script accessors
//! - [`stage`]: replicated stage settings
//! - [`remote`]: polite-request wrappers for the remote script API
//! - [`native`]: host delegate caches
//!
//! [`Project`] validates the tables in [`tables`] and hands out registries
//! by name.

pub mod actor;
mod expand;
pub mod native;
mod project;
pub mod remote;
pub mod stage;
pub mod tables;

#[cfg(test)]
mod test_support;

pub use project::{Project, REGISTRY_NAMES};
pub use remote::RemoteFunction;
