//! Raise outcomes crossing the boundary.

use crate::exceptions::{ExcTypeId, ExceptionValue};
use opal_core::Status;
use std::fmt;
use std::sync::Arc;

/// What a failed callback raised.
///
/// `Passthrough` carries an error that was already a `Status` before it
/// was raised; translation must return it verbatim instead of
/// re-deriving a code from an exception type.
#[derive(Debug, Clone, PartialEq)]
pub enum Raised {
    /// An interpreter exception instance.
    Exception(ExceptionValue),
    /// A pre-built status error re-raised across the boundary.
    Passthrough(Status),
}

impl Raised {
    /// Raise an exception with a message.
    pub fn exception(type_id: ExcTypeId, message: impl Into<Arc<str>>) -> Raised {
        Raised::Exception(ExceptionValue::with_message(type_id, message))
    }

    /// Raise a message-less exception.
    pub fn bare(type_id: ExcTypeId) -> Raised {
        Raised::Exception(ExceptionValue::bare(type_id))
    }
}

impl From<ExceptionValue> for Raised {
    fn from(value: ExceptionValue) -> Raised {
        Raised::Exception(value)
    }
}

impl From<Status> for Raised {
    fn from(status: Status) -> Raised {
        Raised::Passthrough(status)
    }
}

impl fmt::Display for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Raised::Exception(exc) => write!(f, "{}", exc),
            Raised::Passthrough(status) => write!(f, "{}", status),
        }
    }
}

impl std::error::Error for Raised {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exception_constructor() {
        let raised = Raised::exception(ExcTypeId::KEY_ERROR, "missing");
        assert_eq!(raised.to_string(), "KeyError: missing");
    }

    #[test]
    fn test_bare_constructor() {
        let raised = Raised::bare(ExcTypeId::MEMORY_ERROR);
        assert_eq!(raised.to_string(), "MemoryError");
    }

    #[test]
    fn test_from_status() {
        let raised = Raised::from(Status::already_exists("dup"));
        assert_eq!(
            raised,
            Raised::Passthrough(Status::already_exists("dup"))
        );
        assert_eq!(raised.to_string(), "ALREADY_EXISTS: dup");
    }
}
