//! Exception model: type identifiers, the type registry, and instances.

pub mod registry;
pub mod type_id;
pub mod value;

pub use registry::{
    Ancestry, ExcTypeRegistry, RegistryError, RegistryResult, global_exc_registry,
};
pub use type_id::{BUILTIN_EXC_TYPES, ExcTypeId};
pub use value::ExceptionValue;
