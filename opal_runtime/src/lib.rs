//! Interpreter-side runtime model for the Opal boundary.
//!
//! This crate provides:
//! - Exception type ids and the builtin hierarchy (type_id)
//! - Exception type registry with user-type registration (registry)
//! - Exception instances and raise outcomes (ExceptionValue, Raised)
//! - The callback seam the boundary adapter invokes (Callback)

pub mod callable;
pub mod exceptions;
pub mod raise;

// Re-export commonly used items
pub use callable::{CallOutcome, Callback};
pub use exceptions::{
    Ancestry, ExcTypeId, ExcTypeRegistry, ExceptionValue, RegistryError, global_exc_registry,
};
pub use raise::Raised;
