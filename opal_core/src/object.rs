//! Reference-counted object handles.
//!
//! `ObjRef` is the RAII handle for objects that cross the native boundary:
//! cloning acquires a reference, dropping releases it, and the live count
//! is observable for leak checks. Identity is pointer identity; two
//! structurally equal lists are still distinct objects.

use crate::value::Value;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Object Payloads
// =============================================================================

/// Payload of a heap object.
#[derive(Debug)]
pub enum ObjectData {
    List(Vec<Value>),
    Tuple(Box<[Value]>),
}

impl ObjectData {
    /// Interpreter-level type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            ObjectData::List(_) => "list",
            ObjectData::Tuple(_) => "tuple",
        }
    }

    /// Element slice, for either payload.
    pub fn items(&self) -> &[Value] {
        match self {
            ObjectData::List(items) => items,
            ObjectData::Tuple(items) => items,
        }
    }
}

// =============================================================================
// ObjRef
// =============================================================================

/// Shared handle to a heap object.
///
/// Equality is identity: `a == b` iff both handles refer to the same
/// object. `refcount()` reports the number of live handles, including
/// this one.
#[derive(Debug, Clone)]
pub struct ObjRef(Arc<ObjectData>);

impl ObjRef {
    /// Allocate a list object.
    pub fn new_list(items: Vec<Value>) -> ObjRef {
        ObjRef(Arc::new(ObjectData::List(items)))
    }

    /// Allocate a tuple object.
    pub fn new_tuple(items: Vec<Value>) -> ObjRef {
        ObjRef(Arc::new(ObjectData::Tuple(items.into_boxed_slice())))
    }

    /// The object's payload.
    #[inline]
    pub fn data(&self) -> &ObjectData {
        &self.0
    }

    /// Interpreter-level type name (`"list"`, `"tuple"`).
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.items().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.items().is_empty()
    }

    /// True when both handles refer to the same object.
    #[inline]
    pub fn ptr_eq(&self, other: &ObjRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Live handle count, this one included.
    #[inline]
    pub fn refcount(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl PartialEq for ObjRef {
    /// Identity, not structural equality.
    fn eq(&self, other: &ObjRef) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Display for ObjRef {
    /// Interpreter container rendering: `[1, 2, 3, 4]`, `(1, 2)`, `(1,)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data() {
            ObjectData::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_repr(f)?;
                }
                f.write_str("]")
            }
            ObjectData::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_repr(f)?;
                }
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn int_list(values: &[i64]) -> ObjRef {
        ObjRef::new_list(values.iter().map(|&v| Value::Int(v)).collect())
    }

    // =========================================================================
    // Identity Tests
    // =========================================================================

    #[test]
    fn test_clone_preserves_identity() {
        let obj = int_list(&[1, 2, 3]);
        let copy = obj.clone();
        assert!(obj.ptr_eq(&copy));
        assert_eq!(obj, copy);
    }

    #[test]
    fn test_distinct_objects_not_identical() {
        let a = int_list(&[1, 2, 3]);
        let b = int_list(&[1, 2, 3]);
        assert!(!a.ptr_eq(&b));
        assert_ne!(a, b);
    }

    // =========================================================================
    // Refcount Tests
    // =========================================================================

    #[test]
    fn test_refcount_acquire_release() {
        let obj = int_list(&[1]);
        assert_eq!(obj.refcount(), 1);

        let held = obj.clone();
        assert_eq!(obj.refcount(), 2);

        drop(held);
        assert_eq!(obj.refcount(), 1);
    }

    #[test]
    fn test_refcount_stable_across_reads() {
        let obj = int_list(&[1, 2]);
        let before = obj.refcount();
        let _ = obj.len();
        let _ = obj.type_name();
        let _ = obj.to_string();
        assert_eq!(obj.refcount(), before);
    }

    // =========================================================================
    // Rendering Tests
    // =========================================================================

    #[test]
    fn test_display_list() {
        assert_eq!(int_list(&[1, 2, 3, 4]).to_string(), "[1, 2, 3, 4]");
        assert_eq!(int_list(&[]).to_string(), "[]");
    }

    #[test]
    fn test_display_tuple() {
        let pair = ObjRef::new_tuple(vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(pair.to_string(), "(1, 2)");

        let single = ObjRef::new_tuple(vec![Value::Int(1)]);
        assert_eq!(single.to_string(), "(1,)");

        let empty = ObjRef::new_tuple(vec![]);
        assert_eq!(empty.to_string(), "()");
    }

    #[test]
    fn test_display_nested_str_items_quoted() {
        let obj = ObjRef::new_list(vec![Value::Int(1), Value::str("a")]);
        assert_eq!(obj.to_string(), "[1, 'a']");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(int_list(&[]).type_name(), "list");
        assert_eq!(ObjRef::new_tuple(vec![]).type_name(), "tuple");
    }

    #[test]
    fn test_len() {
        let obj = int_list(&[1, 2, 3]);
        assert_eq!(obj.len(), 3);
        assert!(!obj.is_empty());
        assert!(int_list(&[]).is_empty());
    }
}
