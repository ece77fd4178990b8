//! Strict-mode unboxing of returned values.
//!
//! When the declared contract is a concrete native type, the returned
//! value must coerce to it. A failed coercion produces a `CastError`,
//! rendered as INVALID_ARGUMENT with one of two wordings (see
//! [`CastErrorStyle`]): only the code and the presence of source/target
//! type descriptions are contractual, the exact phrasing is
//! configuration.

use crate::config::CastErrorStyle;
use opal_core::{Status, Value};
use std::fmt;

/// A returned value that does not satisfy the declared native contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastError {
    /// Interpreter-level type of the value actually returned.
    actual_type: &'static str,
    /// Native target type the contract declares.
    native_type: &'static str,
    /// Short name used by the binding-level wording.
    expected_short: &'static str,
}

impl CastError {
    pub fn new(
        value: &Value,
        native_type: &'static str,
        expected_short: &'static str,
    ) -> CastError {
        CastError {
            actual_type: value.type_name(),
            native_type,
            expected_short,
        }
    }

    /// Render the message in the given style.
    pub fn render(&self, style: CastErrorStyle) -> String {
        match style {
            CastErrorStyle::Cast => format!(
                "Unable to cast Opal instance of type '{}' to native type '{}'",
                self.actual_type, self.native_type
            ),
            CastErrorStyle::TypeCheck => {
                format!("TypeError: expecting {}", self.expected_short)
            }
        }
    }

    /// The INVALID_ARGUMENT status for this failure.
    pub fn to_status(&self, style: CastErrorStyle) -> Status {
        Status::invalid_argument(self.render(style))
    }
}

impl fmt::Display for CastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(CastErrorStyle::Cast))
    }
}

impl std::error::Error for CastError {}

/// Coerce a returned value to the int contract.
///
/// Bool coerces too: the interpreter's bool is an int subtype.
pub fn coerce_int(value: &Value) -> Result<i64, CastError> {
    match value {
        Value::Int(i) => Ok(*i),
        Value::Bool(b) => Ok(*b as i64),
        other => Err(CastError::new(other, "StatusOr<i64>", "int")),
    }
}

// =============================================================================
// Tests
// =============================================================================
