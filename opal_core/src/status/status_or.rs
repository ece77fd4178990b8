//! `StatusOr<T>`: either a value (implicit OK) or a non-OK status.

use super::{Status, StatusCode};
use std::fmt;

/// A value of `T` or the non-OK `Status` explaining its absence.
///
/// The two states are mutually exclusive: a present value always means OK,
/// and a stored status is never OK. Converting an OK `Status` into a
/// `StatusOr` is a caller bug with no value to return; it degrades to an
/// `Internal` error rather than panicking.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusOr<T> {
    inner: Result<T, Status>,
}

impl<T> StatusOr<T> {
    /// Wrap a value (OK).
    #[inline]
    pub fn new(value: T) -> StatusOr<T> {
        StatusOr { inner: Ok(value) }
    }

    /// Wrap a non-OK status.
    pub fn from_status(status: Status) -> StatusOr<T> {
        let status = if status.is_ok() {
            Status::new(
                StatusCode::Internal,
                "OK status carries no value for StatusOr",
            )
        } else {
            status
        };
        StatusOr { inner: Err(status) }
    }

    /// True when a value is present.
    #[inline]
    pub fn ok(&self) -> bool {
        self.inner.is_ok()
    }

    /// The status: `Status::ok()` when a value is present, the stored
    /// error otherwise.
    pub fn status(&self) -> Status {
        match &self.inner {
            Ok(_) => Status::ok(),
            Err(status) => status.clone(),
        }
    }

    /// The value, if present.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.inner.as_ref().ok()
    }

    /// Unwrap into a plain `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, Status> {
        self.inner
    }
}

impl<T> From<Status> for StatusOr<T> {
    fn from(status: Status) -> StatusOr<T> {
        StatusOr::from_status(status)
    }
}

impl<T: fmt::Display> fmt::Display for StatusOr<T> {
    /// The value's rendering when present, the status rendering otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(value) => write!(f, "{}", value),
            Err(status) => write!(f, "{}", status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_present() {
        let result = StatusOr::new(5_i64);
        assert!(result.ok());
        assert_eq!(result.value(), Some(&5));
        assert!(result.status().is_ok());
    }

    #[test]
    fn test_error_present() {
        let result: StatusOr<i64> = StatusOr::from_status(Status::not_found("missing"));
        assert!(!result.ok());
        assert_eq!(result.value(), None);
        assert_eq!(result.status(), Status::not_found("missing"));
    }

    #[test]
    fn test_ok_status_degrades_to_internal() {
        let result: StatusOr<i64> = StatusOr::from_status(Status::ok());
        assert!(!result.ok());
        assert_eq!(result.status().code(), StatusCode::Internal);
    }

    #[test]
    fn test_into_result() {
        let ok: StatusOr<i64> = StatusOr::new(7);
        assert_eq!(ok.into_result(), Ok(7));

        let err: StatusOr<i64> = Status::aborted("stop").into();
        assert_eq!(err.into_result(), Err(Status::aborted("stop")));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(StatusOr::new(5_i64).to_string(), "5");
    }

    #[test]
    fn test_display_status() {
        let result: StatusOr<i64> = Status::out_of_range("ValueError: Msg.").into();
        assert_eq!(result.to_string(), "OUT_OF_RANGE: ValueError: Msg.");
    }
}
