//! kubectl operations
//!
//! Typed parameters ([`params`]), the pure token builders ([`args`]), the
//! per-operation metadata and planning ([`operation`]), and the name-keyed
//! table callers dispatch through ([`catalog`]).

pub mod args;
pub mod catalog;
pub mod operation;
pub mod params;

pub use catalog::{CatalogEntry, OperationCatalog};
pub use operation::{KubectlOperation, OperationPlan};
pub use params::{PatchType, SortBy};
