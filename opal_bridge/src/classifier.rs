//! Exception classification.
//!
//! Turns a raised exception into a canonical `Status`. The rule table is
//! checked in order; a raised type matches a rule when it is, or derives
//! from, the rule's type. Anything unmatched falls through to `UNKNOWN`,
//! which keeps the mapping total over user-registered types.
//!
//! | exception           | status code        |
//! |---------------------|--------------------|
//! | MemoryError         | RESOURCE_EXHAUSTED |
//! | NotImplementedError | UNIMPLEMENTED      |
//! | KeyboardInterrupt   | ABORTED            |
//! | SystemError         | INTERNAL           |
//! | SyntaxError         | INTERNAL           |
//! | TypeError           | INVALID_ARGUMENT   |
//! | ValueError          | OUT_OF_RANGE       |
//! | LookupError         | NOT_FOUND          |
//! | AssertionError      | UNKNOWN            |
//! | anything else       | UNKNOWN            |
//!
//! Subclasses inherit their nearest mapped ancestor's code: KeyError is
//! NOT_FOUND via LookupError, TabError is INTERNAL via SyntaxError.
//! NotImplementedError precedes the table's default so it maps to
//! UNIMPLEMENTED even though its parent RuntimeError does not appear.

use opal_core::{Status, StatusCode};
use opal_runtime::exceptions::{ExcTypeId, global_exc_registry};
use opal_runtime::raise::Raised;
use std::sync::Arc;

/// Classification rules, evaluated in order; first match wins.
pub static CLASSIFY_RULES: &[(ExcTypeId, StatusCode)] = &[
    (ExcTypeId::MEMORY_ERROR, StatusCode::ResourceExhausted),
    (ExcTypeId::NOT_IMPLEMENTED_ERROR, StatusCode::Unimplemented),
    (ExcTypeId::KEYBOARD_INTERRUPT, StatusCode::Aborted),
    (ExcTypeId::SYSTEM_ERROR, StatusCode::Internal),
    (ExcTypeId::SYNTAX_ERROR, StatusCode::Internal),
    (ExcTypeId::TYPE_ERROR, StatusCode::InvalidArgument),
    (ExcTypeId::VALUE_ERROR, StatusCode::OutOfRange),
    (ExcTypeId::LOOKUP_ERROR, StatusCode::NotFound),
    (ExcTypeId::ASSERTION_ERROR, StatusCode::Unknown),
];

/// Classify a raise outcome.
///
/// Pre-built statuses pass through verbatim, code and message untouched,
/// OK included.
pub fn classify(raised: &Raised) -> Status {
    match raised {
        Raised::Exception(exc) => {
            classify_exception(exc.exception_type_id, exc.message().unwrap_or(""))
        }
        Raised::Passthrough(status) => status.clone(),
    }
}

/// Classify an exception type and message into a `Status`.
///
/// Pure and deterministic: equal inputs yield equal statuses. The
/// message is always `"<TypeName>: <message>"`; the separator is emitted
/// even for an empty message, so a bare raise renders as `"TypeName: "`.
pub fn classify_exception(type_id: ExcTypeId, message: &str) -> Status {
    let registry = global_exc_registry();
    let ancestry = registry.ancestry(type_id);
    let code = CLASSIFY_RULES
        .iter()
        .find(|(rule_type, _)| ancestry.contains(rule_type))
        .map_or(StatusCode::Unknown, |(_, code)| *code);
    let name = registry
        .name(type_id)
        .unwrap_or_else(|| Arc::from("<unknown>"));
    Status::new(code, format!("{}: {}", name, message))
}

// =============================================================================
// Tests
// =============================================================================
