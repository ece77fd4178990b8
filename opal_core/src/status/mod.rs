//! Canonical status codes and the `Status` error value.
//!
//! `Status` is the currency of the native boundary: every callback outcome
//! is eventually expressed as one. It carries a canonical code (one of the
//! seventeen RPC codes, wire values 0..=16) plus a human-readable message.
//! The raw integer code is preserved even when it falls outside the
//! canonical range; `code()` canonicalizes such values to `Unknown` while
//! `raw_code()` returns what was stored.

pub mod status_or;

pub use status_or::StatusOr;

use std::fmt;
use std::sync::Arc;

// =============================================================================
// StatusCode
// =============================================================================

/// Canonical status codes.
///
/// Discriminants match the RPC wire values. `Ok` is reserved for success;
/// a translation produces exactly one non-OK code per failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum StatusCode {
    Ok = 0,
    Cancelled = 1,
    Unknown = 2,
    InvalidArgument = 3,
    DeadlineExceeded = 4,
    NotFound = 5,
    AlreadyExists = 6,
    PermissionDenied = 7,
    ResourceExhausted = 8,
    FailedPrecondition = 9,
    Aborted = 10,
    OutOfRange = 11,
    Unimplemented = 12,
    Internal = 13,
    Unavailable = 14,
    DataLoss = 15,
    Unauthenticated = 16,
}

impl StatusCode {
    /// Canonical screaming-snake name, as rendered in status strings.
    pub const fn name(self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Cancelled => "CANCELLED",
            StatusCode::Unknown => "UNKNOWN",
            StatusCode::InvalidArgument => "INVALID_ARGUMENT",
            StatusCode::DeadlineExceeded => "DEADLINE_EXCEEDED",
            StatusCode::NotFound => "NOT_FOUND",
            StatusCode::AlreadyExists => "ALREADY_EXISTS",
            StatusCode::PermissionDenied => "PERMISSION_DENIED",
            StatusCode::ResourceExhausted => "RESOURCE_EXHAUSTED",
            StatusCode::FailedPrecondition => "FAILED_PRECONDITION",
            StatusCode::Aborted => "ABORTED",
            StatusCode::OutOfRange => "OUT_OF_RANGE",
            StatusCode::Unimplemented => "UNIMPLEMENTED",
            StatusCode::Internal => "INTERNAL",
            StatusCode::Unavailable => "UNAVAILABLE",
            StatusCode::DataLoss => "DATA_LOSS",
            StatusCode::Unauthenticated => "UNAUTHENTICATED",
        }
    }

    /// Decode a raw integer code. Returns `None` outside 0..=16.
    pub const fn from_raw(raw: i32) -> Option<StatusCode> {
        match raw {
            0 => Some(StatusCode::Ok),
            1 => Some(StatusCode::Cancelled),
            2 => Some(StatusCode::Unknown),
            3 => Some(StatusCode::InvalidArgument),
            4 => Some(StatusCode::DeadlineExceeded),
            5 => Some(StatusCode::NotFound),
            6 => Some(StatusCode::AlreadyExists),
            7 => Some(StatusCode::PermissionDenied),
            8 => Some(StatusCode::ResourceExhausted),
            9 => Some(StatusCode::FailedPrecondition),
            10 => Some(StatusCode::Aborted),
            11 => Some(StatusCode::OutOfRange),
            12 => Some(StatusCode::Unimplemented),
            13 => Some(StatusCode::Internal),
            14 => Some(StatusCode::Unavailable),
            15 => Some(StatusCode::DataLoss),
            16 => Some(StatusCode::Unauthenticated),
            _ => None,
        }
    }

    /// The wire value.
    #[inline]
    pub const fn raw(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Status
// =============================================================================

/// An immutable (code, message) pair describing a boundary outcome.
///
/// Constructing an OK status discards any message; OK carries no text.
/// Messages are stored as shared slices so cloning a `Status` (e.g. when a
/// pre-built error is carried through a raise) never copies the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Status {
    raw_code: i32,
    message: Option<Arc<str>>,
}

impl Status {
    /// Success.
    #[inline]
    pub fn ok() -> Status {
        Status {
            raw_code: StatusCode::Ok.raw(),
            message: None,
        }
    }

    /// Build a status from a canonical code and message.
    pub fn new(code: StatusCode, message: impl Into<Arc<str>>) -> Status {
        Status::from_raw_code(code.raw(), message)
    }

    /// Build a status from an arbitrary integer code.
    ///
    /// Out-of-range codes are stored as-is: `raw_code()` returns them
    /// unchanged while `code()` reports `Unknown`. A raw code of 0 is OK
    /// and discards the message.
    pub fn from_raw_code(raw_code: i32, message: impl Into<Arc<str>>) -> Status {
        if raw_code == StatusCode::Ok.raw() {
            return Status::ok();
        }
        let message: Arc<str> = message.into();
        Status {
            raw_code,
            message: if message.is_empty() {
                None
            } else {
                Some(message)
            },
        }
    }

    /// The canonical code. Out-of-range raw codes report `Unknown`.
    #[inline]
    pub fn code(&self) -> StatusCode {
        StatusCode::from_raw(self.raw_code).unwrap_or(StatusCode::Unknown)
    }

    /// The stored integer code, canonical or not.
    #[inline]
    pub fn raw_code(&self) -> i32 {
        self.raw_code
    }

    /// The message text; empty for OK and message-less errors.
    #[inline]
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.raw_code == StatusCode::Ok.raw()
    }

    // -------------------------------------------------------------------------
    // Named constructors for the codes the boundary produces
    // -------------------------------------------------------------------------

    pub fn unknown(message: impl Into<Arc<str>>) -> Status {
        Status::new(StatusCode::Unknown, message)
    }

    pub fn invalid_argument(message: impl Into<Arc<str>>) -> Status {
        Status::new(StatusCode::InvalidArgument, message)
    }

    pub fn not_found(message: impl Into<Arc<str>>) -> Status {
        Status::new(StatusCode::NotFound, message)
    }

    pub fn already_exists(message: impl Into<Arc<str>>) -> Status {
        Status::new(StatusCode::AlreadyExists, message)
    }

    pub fn resource_exhausted(message: impl Into<Arc<str>>) -> Status {
        Status::new(StatusCode::ResourceExhausted, message)
    }

    pub fn aborted(message: impl Into<Arc<str>>) -> Status {
        Status::new(StatusCode::Aborted, message)
    }

    pub fn out_of_range(message: impl Into<Arc<str>>) -> Status {
        Status::new(StatusCode::OutOfRange, message)
    }

    pub fn unimplemented(message: impl Into<Arc<str>>) -> Status {
        Status::new(StatusCode::Unimplemented, message)
    }

    pub fn internal(message: impl Into<Arc<str>>) -> Status {
        Status::new(StatusCode::Internal, message)
    }
}

impl fmt::Display for Status {
    /// `"OK"`, `"<CODE>"` for message-less errors, `"<CODE>: <message>"`
    /// otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return f.write_str("OK");
        }
        match self.message() {
            "" => f.write_str(self.code().name()),
            msg => write!(f, "{}: {}", self.code().name(), msg),
        }
    }
}

impl std::error::Error for Status {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // StatusCode Tests
    // =========================================================================

    #[test]
    fn test_code_wire_values() {
        assert_eq!(StatusCode::Ok.raw(), 0);
        assert_eq!(StatusCode::Unknown.raw(), 2);
        assert_eq!(StatusCode::InvalidArgument.raw(), 3);
        assert_eq!(StatusCode::NotFound.raw(), 5);
        assert_eq!(StatusCode::ResourceExhausted.raw(), 8);
        assert_eq!(StatusCode::Aborted.raw(), 10);
        assert_eq!(StatusCode::OutOfRange.raw(), 11);
        assert_eq!(StatusCode::Unimplemented.raw(), 12);
        assert_eq!(StatusCode::Internal.raw(), 13);
        assert_eq!(StatusCode::Unauthenticated.raw(), 16);
    }

    #[test]
    fn test_from_raw_round_trip() {
        for raw in 0..=16 {
            let code = StatusCode::from_raw(raw).unwrap();
            assert_eq!(code.raw(), raw);
        }
    }

    #[test]
    fn test_from_raw_out_of_range() {
        assert_eq!(StatusCode::from_raw(-1), None);
        assert_eq!(StatusCode::from_raw(17), None);
        assert_eq!(StatusCode::from_raw(42), None);
    }

    #[test]
    fn test_code_names() {
        assert_eq!(StatusCode::Ok.name(), "OK");
        assert_eq!(StatusCode::InvalidArgument.name(), "INVALID_ARGUMENT");
        assert_eq!(StatusCode::ResourceExhausted.name(), "RESOURCE_EXHAUSTED");
        assert_eq!(StatusCode::Unimplemented.name(), "UNIMPLEMENTED");
        assert_eq!(StatusCode::DataLoss.name(), "DATA_LOSS");
    }

    // =========================================================================
    // Status Construction Tests
    // =========================================================================

    #[test]
    fn test_ok_status() {
        let status = Status::ok();
        assert!(status.is_ok());
        assert_eq!(status.code(), StatusCode::Ok);
        assert_eq!(status.message(), "");
    }

    #[test]
    fn test_ok_discards_message() {
        let status = Status::new(StatusCode::Ok, "ignored");
        assert!(status.is_ok());
        assert_eq!(status.message(), "");
        assert_eq!(status, Status::ok());
    }

    #[test]
    fn test_error_status() {
        let status = Status::new(StatusCode::NotFound, "no such key");
        assert!(!status.is_ok());
        assert_eq!(status.code(), StatusCode::NotFound);
        assert_eq!(status.message(), "no such key");
    }

    #[test]
    fn test_named_constructors() {
        assert_eq!(
            Status::invalid_argument("bad").code(),
            StatusCode::InvalidArgument
        );
        assert_eq!(Status::not_found("gone").code(), StatusCode::NotFound);
        assert_eq!(Status::aborted("stop").code(), StatusCode::Aborted);
        assert_eq!(Status::internal("bug").code(), StatusCode::Internal);
        assert_eq!(Status::unknown("?").code(), StatusCode::Unknown);
        assert_eq!(
            Status::already_exists("dup").code(),
            StatusCode::AlreadyExists
        );
        assert_eq!(
            Status::resource_exhausted("oom").code(),
            StatusCode::ResourceExhausted
        );
        assert_eq!(Status::out_of_range("big").code(), StatusCode::OutOfRange);
        assert_eq!(
            Status::unimplemented("todo").code(),
            StatusCode::Unimplemented
        );
    }

    // =========================================================================
    // Raw Code Tests
    // =========================================================================

    #[test]
    fn test_raw_code_in_range() {
        let status = Status::from_raw_code(5, "missing");
        assert_eq!(status.code(), StatusCode::NotFound);
        assert_eq!(status.raw_code(), 5);
    }

    #[test]
    fn test_raw_code_out_of_range_preserved() {
        let status = Status::from_raw_code(42, "odd");
        assert_eq!(status.code(), StatusCode::Unknown);
        assert_eq!(status.raw_code(), 42);
        assert_eq!(status.message(), "odd");
    }

    #[test]
    fn test_raw_code_negative() {
        let status = Status::from_raw_code(-3, "negative");
        assert_eq!(status.code(), StatusCode::Unknown);
        assert_eq!(status.raw_code(), -3);
    }

    #[test]
    fn test_raw_code_zero_is_ok() {
        let status = Status::from_raw_code(0, "ignored");
        assert!(status.is_ok());
        assert_eq!(status.message(), "");
    }

    // =========================================================================
    // Rendering Tests
    // =========================================================================

    #[test]
    fn test_display_ok() {
        assert_eq!(Status::ok().to_string(), "OK");
    }

    #[test]
    fn test_display_code_and_message() {
        let status = Status::already_exists("Something went wrong, again.");
        assert_eq!(
            status.to_string(),
            "ALREADY_EXISTS: Something went wrong, again."
        );
    }

    #[test]
    fn test_display_message_less_error() {
        let status = Status::new(StatusCode::Aborted, "");
        assert_eq!(status.to_string(), "ABORTED");
    }

    #[test]
    fn test_display_out_of_range_raw_code() {
        let status = Status::from_raw_code(99, "strange");
        assert_eq!(status.to_string(), "UNKNOWN: strange");
    }

    // =========================================================================
    // Equality Tests
    // =========================================================================

    #[test]
    fn test_equality_code_and_message() {
        let a = Status::not_found("x");
        let b = Status::not_found("x");
        let c = Status::not_found("y");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Status::aborted("x"));
    }

    #[test]
    fn test_empty_message_normalized() {
        let a = Status::new(StatusCode::Internal, "");
        let b = Status::new(StatusCode::Internal, String::new());
        assert_eq!(a, b);
        assert_eq!(a.message(), "");
    }
}
