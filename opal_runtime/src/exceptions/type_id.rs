//! Exception type identifiers and the builtin hierarchy.
//!
//! Every exception type is identified by a dense `ExcTypeId`. Builtin ids
//! are fixed at compile time; user types are allocated past `FIRST_USER`
//! by the registry. The builtin hierarchy mirrors the host interpreter's:
//!
//! ```text
//! BaseException
//! ├── SystemExit
//! ├── KeyboardInterrupt
//! ├── GeneratorExit
//! └── Exception
//!     ├── StopIteration
//!     ├── ArithmeticError ── ZeroDivisionError, OverflowError, FloatingPointError
//!     ├── AssertionError
//!     ├── AttributeError
//!     ├── BufferError
//!     ├── EOFError
//!     ├── ImportError ── ModuleNotFoundError
//!     ├── LookupError ── IndexError, KeyError
//!     ├── MemoryError
//!     ├── NameError ── UnboundLocalError
//!     ├── OSError ── FileNotFoundError, FileExistsError, PermissionError, TimeoutError
//!     ├── ReferenceError
//!     ├── RuntimeError ── NotImplementedError, RecursionError
//!     ├── SyntaxError ── IndentationError ── TabError
//!     ├── SystemError
//!     ├── TypeError
//!     └── ValueError ── UnicodeError ── UnicodeDecodeError, UnicodeEncodeError
//! ```

// =============================================================================
// ExcTypeId
// =============================================================================

/// Identifier of an exception type.
///
/// Builtin ids are dense starting at 0; user-registered ids start at
/// `FIRST_USER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ExcTypeId(pub u16);

impl ExcTypeId {
    pub const BASE_EXCEPTION: ExcTypeId = ExcTypeId(0);
    pub const SYSTEM_EXIT: ExcTypeId = ExcTypeId(1);
    pub const KEYBOARD_INTERRUPT: ExcTypeId = ExcTypeId(2);
    pub const GENERATOR_EXIT: ExcTypeId = ExcTypeId(3);
    pub const EXCEPTION: ExcTypeId = ExcTypeId(4);
    pub const STOP_ITERATION: ExcTypeId = ExcTypeId(5);
    pub const ARITHMETIC_ERROR: ExcTypeId = ExcTypeId(6);
    pub const ZERO_DIVISION_ERROR: ExcTypeId = ExcTypeId(7);
    pub const OVERFLOW_ERROR: ExcTypeId = ExcTypeId(8);
    pub const FLOATING_POINT_ERROR: ExcTypeId = ExcTypeId(9);
    pub const ASSERTION_ERROR: ExcTypeId = ExcTypeId(10);
    pub const ATTRIBUTE_ERROR: ExcTypeId = ExcTypeId(11);
    pub const BUFFER_ERROR: ExcTypeId = ExcTypeId(12);
    pub const EOF_ERROR: ExcTypeId = ExcTypeId(13);
    pub const IMPORT_ERROR: ExcTypeId = ExcTypeId(14);
    pub const MODULE_NOT_FOUND_ERROR: ExcTypeId = ExcTypeId(15);
    pub const LOOKUP_ERROR: ExcTypeId = ExcTypeId(16);
    pub const INDEX_ERROR: ExcTypeId = ExcTypeId(17);
    pub const KEY_ERROR: ExcTypeId = ExcTypeId(18);
    pub const MEMORY_ERROR: ExcTypeId = ExcTypeId(19);
    pub const NAME_ERROR: ExcTypeId = ExcTypeId(20);
    pub const UNBOUND_LOCAL_ERROR: ExcTypeId = ExcTypeId(21);
    pub const OS_ERROR: ExcTypeId = ExcTypeId(22);
    pub const FILE_NOT_FOUND_ERROR: ExcTypeId = ExcTypeId(23);
    pub const FILE_EXISTS_ERROR: ExcTypeId = ExcTypeId(24);
    pub const PERMISSION_ERROR: ExcTypeId = ExcTypeId(25);
    pub const TIMEOUT_ERROR: ExcTypeId = ExcTypeId(26);
    pub const REFERENCE_ERROR: ExcTypeId = ExcTypeId(27);
    pub const RUNTIME_ERROR: ExcTypeId = ExcTypeId(28);
    pub const NOT_IMPLEMENTED_ERROR: ExcTypeId = ExcTypeId(29);
    pub const RECURSION_ERROR: ExcTypeId = ExcTypeId(30);
    pub const SYNTAX_ERROR: ExcTypeId = ExcTypeId(31);
    pub const INDENTATION_ERROR: ExcTypeId = ExcTypeId(32);
    pub const TAB_ERROR: ExcTypeId = ExcTypeId(33);
    pub const SYSTEM_ERROR: ExcTypeId = ExcTypeId(34);
    pub const TYPE_ERROR: ExcTypeId = ExcTypeId(35);
    pub const VALUE_ERROR: ExcTypeId = ExcTypeId(36);
    pub const UNICODE_ERROR: ExcTypeId = ExcTypeId(37);
    pub const UNICODE_DECODE_ERROR: ExcTypeId = ExcTypeId(38);
    pub const UNICODE_ENCODE_ERROR: ExcTypeId = ExcTypeId(39);

    /// First id available for user-registered types.
    pub const FIRST_USER: u16 = 256;

    /// The raw id.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// True for ids in the builtin range.
    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.0 < ExcTypeId::FIRST_USER
    }
}

// =============================================================================
// Builtin Table
// =============================================================================

/// Builtin exception types: (id, name, parent).
///
/// Seeded into the registry at startup. Parents precede children so a
/// single forward pass can validate the table.
pub static BUILTIN_EXC_TYPES: &[(ExcTypeId, &str, Option<ExcTypeId>)] = &[
    (ExcTypeId::BASE_EXCEPTION, "BaseException", None),
    (
        ExcTypeId::SYSTEM_EXIT,
        "SystemExit",
        Some(ExcTypeId::BASE_EXCEPTION),
    ),
    (
        ExcTypeId::KEYBOARD_INTERRUPT,
        "KeyboardInterrupt",
        Some(ExcTypeId::BASE_EXCEPTION),
    ),
    (
        ExcTypeId::GENERATOR_EXIT,
        "GeneratorExit",
        Some(ExcTypeId::BASE_EXCEPTION),
    ),
    (
        ExcTypeId::EXCEPTION,
        "Exception",
        Some(ExcTypeId::BASE_EXCEPTION),
    ),
    (
        ExcTypeId::STOP_ITERATION,
        "StopIteration",
        Some(ExcTypeId::EXCEPTION),
    ),
    (
        ExcTypeId::ARITHMETIC_ERROR,
        "ArithmeticError",
        Some(ExcTypeId::EXCEPTION),
    ),
    (
        ExcTypeId::ZERO_DIVISION_ERROR,
        "ZeroDivisionError",
        Some(ExcTypeId::ARITHMETIC_ERROR),
    ),
    (
        ExcTypeId::OVERFLOW_ERROR,
        "OverflowError",
        Some(ExcTypeId::ARITHMETIC_ERROR),
    ),
    (
        ExcTypeId::FLOATING_POINT_ERROR,
        "FloatingPointError",
        Some(ExcTypeId::ARITHMETIC_ERROR),
    ),
    (
        ExcTypeId::ASSERTION_ERROR,
        "AssertionError",
        Some(ExcTypeId::EXCEPTION),
    ),
    (
        ExcTypeId::ATTRIBUTE_ERROR,
        "AttributeError",
        Some(ExcTypeId::EXCEPTION),
    ),
    (
        ExcTypeId::BUFFER_ERROR,
        "BufferError",
        Some(ExcTypeId::EXCEPTION),
    ),
    (ExcTypeId::EOF_ERROR, "EOFError", Some(ExcTypeId::EXCEPTION)),
    (
        ExcTypeId::IMPORT_ERROR,
        "ImportError",
        Some(ExcTypeId::EXCEPTION),
    ),
    (
        ExcTypeId::MODULE_NOT_FOUND_ERROR,
        "ModuleNotFoundError",
        Some(ExcTypeId::IMPORT_ERROR),
    ),
    (
        ExcTypeId::LOOKUP_ERROR,
        "LookupError",
        Some(ExcTypeId::EXCEPTION),
    ),
    (
        ExcTypeId::INDEX_ERROR,
        "IndexError",
        Some(ExcTypeId::LOOKUP_ERROR),
    ),
    (
        ExcTypeId::KEY_ERROR,
        "KeyError",
        Some(ExcTypeId::LOOKUP_ERROR),
    ),
    (
        ExcTypeId::MEMORY_ERROR,
        "MemoryError",
        Some(ExcTypeId::EXCEPTION),
    ),
    (
        ExcTypeId::NAME_ERROR,
        "NameError",
        Some(ExcTypeId::EXCEPTION),
    ),
    (
        ExcTypeId::UNBOUND_LOCAL_ERROR,
        "UnboundLocalError",
        Some(ExcTypeId::NAME_ERROR),
    ),
    (ExcTypeId::OS_ERROR, "OSError", Some(ExcTypeId::EXCEPTION)),
    (
        ExcTypeId::FILE_NOT_FOUND_ERROR,
        "FileNotFoundError",
        Some(ExcTypeId::OS_ERROR),
    ),
    (
        ExcTypeId::FILE_EXISTS_ERROR,
        "FileExistsError",
        Some(ExcTypeId::OS_ERROR),
    ),
    (
        ExcTypeId::PERMISSION_ERROR,
        "PermissionError",
        Some(ExcTypeId::OS_ERROR),
    ),
    (
        ExcTypeId::TIMEOUT_ERROR,
        "TimeoutError",
        Some(ExcTypeId::OS_ERROR),
    ),
    (
        ExcTypeId::REFERENCE_ERROR,
        "ReferenceError",
        Some(ExcTypeId::EXCEPTION),
    ),
    (
        ExcTypeId::RUNTIME_ERROR,
        "RuntimeError",
        Some(ExcTypeId::EXCEPTION),
    ),
    (
        ExcTypeId::NOT_IMPLEMENTED_ERROR,
        "NotImplementedError",
        Some(ExcTypeId::RUNTIME_ERROR),
    ),
    (
        ExcTypeId::RECURSION_ERROR,
        "RecursionError",
        Some(ExcTypeId::RUNTIME_ERROR),
    ),
    (
        ExcTypeId::SYNTAX_ERROR,
        "SyntaxError",
        Some(ExcTypeId::EXCEPTION),
    ),
    (
        ExcTypeId::INDENTATION_ERROR,
        "IndentationError",
        Some(ExcTypeId::SYNTAX_ERROR),
    ),
    (
        ExcTypeId::TAB_ERROR,
        "TabError",
        Some(ExcTypeId::INDENTATION_ERROR),
    ),
    (
        ExcTypeId::SYSTEM_ERROR,
        "SystemError",
        Some(ExcTypeId::EXCEPTION),
    ),
    (
        ExcTypeId::TYPE_ERROR,
        "TypeError",
        Some(ExcTypeId::EXCEPTION),
    ),
    (
        ExcTypeId::VALUE_ERROR,
        "ValueError",
        Some(ExcTypeId::EXCEPTION),
    ),
    (
        ExcTypeId::UNICODE_ERROR,
        "UnicodeError",
        Some(ExcTypeId::VALUE_ERROR),
    ),
    (
        ExcTypeId::UNICODE_DECODE_ERROR,
        "UnicodeDecodeError",
        Some(ExcTypeId::UNICODE_ERROR),
    ),
    (
        ExcTypeId::UNICODE_ENCODE_ERROR,
        "UnicodeEncodeError",
        Some(ExcTypeId::UNICODE_ERROR),
    ),
];

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_dense() {
        for (index, (id, _, _)) in BUILTIN_EXC_TYPES.iter().enumerate() {
            assert_eq!(id.raw() as usize, index);
        }
    }

    #[test]
    fn test_parents_precede_children() {
        for (id, name, parent) in BUILTIN_EXC_TYPES {
            if let Some(parent) = parent {
                assert!(parent.raw() < id.raw(), "parent of {name} must come first");
            }
        }
    }

    #[test]
    fn test_only_root_is_parentless() {
        let roots: Vec<&str> = BUILTIN_EXC_TYPES
            .iter()
            .filter(|(_, _, parent)| parent.is_none())
            .map(|(_, name, _)| *name)
            .collect();
        assert_eq!(roots, vec!["BaseException"]);
    }

    #[test]
    fn test_no_duplicate_names() {
        let mut names: Vec<&str> = BUILTIN_EXC_TYPES.iter().map(|(_, name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTIN_EXC_TYPES.len());
    }

    #[test]
    fn test_builtin_range() {
        for (id, _, _) in BUILTIN_EXC_TYPES {
            assert!(id.is_builtin());
        }
        assert!(!ExcTypeId(ExcTypeId::FIRST_USER).is_builtin());
    }
}
