//! Exception instance values.
//!
//! An `ExceptionValue` is what a callback raises: the runtime type plus
//! the rendered message. Type names resolve through the global registry,
//! so user-registered types display like builtins.

use super::registry::global_exc_registry;
use super::type_id::ExcTypeId;
use std::fmt;
use std::sync::Arc;

/// Exception instance: runtime type and optional message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionValue {
    /// Exception type ID.
    pub exception_type_id: ExcTypeId,
    /// Exception message (primary argument). `None` for bare raises.
    pub message: Option<Arc<str>>,
}

impl ExceptionValue {
    /// Create a new exception with type ID and optional message.
    #[inline]
    pub fn new(type_id: ExcTypeId, message: Option<Arc<str>>) -> Self {
        Self {
            exception_type_id: type_id,
            message,
        }
    }

    /// Create an exception carrying a message.
    pub fn with_message(type_id: ExcTypeId, message: impl Into<Arc<str>>) -> Self {
        Self::new(type_id, Some(message.into()))
    }

    /// Create a message-less exception (a bare raise).
    pub fn bare(type_id: ExcTypeId) -> Self {
        Self::new(type_id, None)
    }

    /// Get the message.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Get the exception type name from the global registry.
    pub fn type_name(&self) -> Arc<str> {
        global_exc_registry()
            .name(self.exception_type_id)
            .unwrap_or_else(|| Arc::from("<unknown>"))
    }

    /// Check if this is a subclass of another exception type.
    #[inline]
    pub fn is_subclass_of(&self, base: ExcTypeId) -> bool {
        global_exc_registry().is_subclass_of(self.exception_type_id, base)
    }
}

impl fmt::Display for ExceptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(msg) = &self.message {
            write!(f, "{}: {}", self.type_name(), msg)
        } else {
            write!(f, "{}", self.type_name())
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
