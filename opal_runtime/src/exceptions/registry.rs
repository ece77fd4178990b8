//! Exception type registry.
//!
//! Maps `ExcTypeId` to name and parent, seeded with the builtin hierarchy.
//! User types are registered dynamically and participate in subclass
//! queries exactly like builtins, which keeps classification total over
//! an open-ended hierarchy.

use super::type_id::{BUILTIN_EXC_TYPES, ExcTypeId};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU16, Ordering};

/// Ancestry chain buffer; the builtin hierarchy is at most 5 deep, user
/// chains rarely deeper.
pub type Ancestry = SmallVec<[ExcTypeId; 8]>;

// =============================================================================
// Errors
// =============================================================================

/// Registration failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A type with this name already exists.
    DuplicateName { name: String },
    /// The requested parent id is not registered.
    UnknownParent { parent: ExcTypeId },
    /// The id space is exhausted.
    Exhausted,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateName { name } => {
                write!(f, "exception type '{}' is already registered", name)
            }
            RegistryError::UnknownParent { parent } => {
                write!(f, "unknown parent exception type id {}", parent.raw())
            }
            RegistryError::Exhausted => f.write_str("exception type id space exhausted"),
        }
    }
}

impl std::error::Error for RegistryError {}

pub type RegistryResult<T> = Result<T, RegistryError>;

// =============================================================================
// Registry
// =============================================================================

struct ExcTypeInfo {
    name: Arc<str>,
    parent: Option<ExcTypeId>,
}

struct RegistryInner {
    types: FxHashMap<ExcTypeId, ExcTypeInfo>,
    by_name: FxHashMap<Arc<str>, ExcTypeId>,
}

/// Registry of exception types.
///
/// Builtins are seeded by [`ExcTypeRegistry::with_builtins`]; user types
/// get ids from `FIRST_USER` upward. Parents must be registered before
/// their children, so every parent chain terminates at a root.
pub struct ExcTypeRegistry {
    inner: RwLock<RegistryInner>,
    next_id: AtomicU16,
}

impl ExcTypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RegistryInner {
                types: FxHashMap::default(),
                by_name: FxHashMap::default(),
            }),
            next_id: AtomicU16::new(ExcTypeId::FIRST_USER),
        }
    }

    /// Create a registry seeded with the builtin hierarchy.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        {
            let mut inner = registry.inner.write();
            for (id, name, parent) in BUILTIN_EXC_TYPES {
                let name: Arc<str> = Arc::from(*name);
                inner.types.insert(
                    *id,
                    ExcTypeInfo {
                        name: name.clone(),
                        parent: *parent,
                    },
                );
                inner.by_name.insert(name, *id);
            }
        }
        registry
    }

    /// Register a user-defined exception type under an existing parent.
    pub fn register_user_type(&self, name: &str, parent: ExcTypeId) -> RegistryResult<ExcTypeId> {
        let mut inner = self.inner.write();
        if !inner.types.contains_key(&parent) {
            return Err(RegistryError::UnknownParent { parent });
        }
        if inner.by_name.contains_key(name) {
            return Err(RegistryError::DuplicateName {
                name: name.to_string(),
            });
        }
        let raw = self.next_id.fetch_add(1, Ordering::Relaxed);
        if raw == u16::MAX {
            // Leave the counter saturated rather than wrapping into
            // builtin ids.
            self.next_id.store(u16::MAX, Ordering::Relaxed);
            return Err(RegistryError::Exhausted);
        }
        let id = ExcTypeId(raw);
        let name: Arc<str> = Arc::from(name);
        inner.types.insert(
            id,
            ExcTypeInfo {
                name: name.clone(),
                parent: Some(parent),
            },
        );
        inner.by_name.insert(name, id);
        Ok(id)
    }

    /// Look up a type id by name.
    pub fn lookup(&self, name: &str) -> Option<ExcTypeId> {
        let inner = self.inner.read();
        inner.by_name.get(name).copied()
    }

    /// The type's canonical name.
    pub fn name(&self, id: ExcTypeId) -> Option<Arc<str>> {
        let inner = self.inner.read();
        inner.types.get(&id).map(|info| info.name.clone())
    }

    /// The type's parent; `None` for roots and unregistered ids.
    pub fn parent(&self, id: ExcTypeId) -> Option<ExcTypeId> {
        let inner = self.inner.read();
        inner.types.get(&id).and_then(|info| info.parent)
    }

    /// Whether the id is registered.
    #[inline]
    pub fn contains(&self, id: ExcTypeId) -> bool {
        let inner = self.inner.read();
        inner.types.contains_key(&id)
    }

    /// True when `child` is `ancestor` or derives from it.
    pub fn is_subclass_of(&self, child: ExcTypeId, ancestor: ExcTypeId) -> bool {
        if child == ancestor {
            return true;
        }
        let inner = self.inner.read();
        let mut current = child;
        while let Some(info) = inner.types.get(&current) {
            match info.parent {
                Some(parent) if parent == ancestor => return true,
                Some(parent) => current = parent,
                None => return false,
            }
        }
        false
    }

    /// The chain `[id, parent, .., root]`, self first.
    ///
    /// Unregistered ids yield just themselves; matching then degrades to
    /// exact-id comparison.
    pub fn ancestry(&self, id: ExcTypeId) -> Ancestry {
        let inner = self.inner.read();
        let mut chain = Ancestry::new();
        chain.push(id);
        let mut current = id;
        while let Some(info) = inner.types.get(&current) {
            match info.parent {
                Some(parent) => {
                    chain.push(parent);
                    current = parent;
                }
                None => break,
            }
        }
        chain
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        let inner = self.inner.read();
        inner.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ExcTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Global Registry Access
// =============================================================================

use std::sync::OnceLock;

/// Global exception type registry singleton.
static GLOBAL_EXC_REGISTRY: OnceLock<ExcTypeRegistry> = OnceLock::new();

/// Get the global exception type registry, seeded with builtins.
pub fn global_exc_registry() -> &'static ExcTypeRegistry {
    GLOBAL_EXC_REGISTRY.get_or_init(ExcTypeRegistry::with_builtins)
}

// =============================================================================
// Tests
// =============================================================================
