//! Boundary adapter: orchestrates one callback invocation.
//!
//! Each operation runs the same per-invocation machine and always
//! terminates in a translated result; the adapter itself never raises
//! and never panics on callback outcomes.
//!
//! ```text
//! ┌──────┐    ┌──────────┐    ┌───────────┐    ┌────────────┐
//! │ Idle │ ─► │ Invoking │ ─► │ Succeeded │ ─► │ Translated │
//! └──────┘    └──────────┘    └───────────┘    └────────────┘
//!                   │                ▲  contract check / coercion
//!                   ▼                │
//!             ┌────────┐      classifier
//!             │ Raised │ ───────────┘
//!             └────────┘
//! ```
//!
//! The success path differs per declared contract:
//! - status return: the value is discarded (releasing any object
//!   reference it held) and OK is produced
//! - int return: strict mode unboxes (bool included); dynamic mode
//!   passes any value through as OK
//! - object return: the reference moves into the result unchanged, so
//!   identity and refcount are preserved; no mode rejects it

use crate::classifier;
use crate::coerce;
use crate::config::{BridgeConfig, CoercionMode};
use opal_core::{Status, StatusOr, Value};
use opal_runtime::callable::Callback;

/// Adapter for calling host callbacks with status-shaped returns.
#[derive(Debug, Clone, Default)]
pub struct BoundaryAdapter {
    config: BridgeConfig,
}

impl BoundaryAdapter {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    /// Adapter with strict unboxing.
    pub fn strict() -> Self {
        Self::new(BridgeConfig::strict())
    }

    /// Adapter with dynamic pass-through.
    pub fn dynamic() -> Self {
        Self::new(BridgeConfig::dynamic())
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Invoke a callback under the void contract.
    ///
    /// Normal completion is OK regardless of the returned value, which
    /// is dropped here.
    pub fn call_with_status_return<C>(&self, callback: &mut C) -> Status
    where
        C: Callback + ?Sized,
    {
        match callback.invoke() {
            Ok(_) => Status::ok(),
            Err(raised) => classifier::classify(&raised),
        }
    }

    /// Invoke a callback under the int contract.
    pub fn call_with_status_or_int_return<C>(&self, callback: &mut C) -> StatusOr<Value>
    where
        C: Callback + ?Sized,
    {
        let value = match callback.invoke() {
            Ok(value) => value,
            Err(raised) => return StatusOr::from_status(classifier::classify(&raised)),
        };
        match self.config.mode {
            CoercionMode::Strict => match coerce::coerce_int(&value) {
                Ok(unboxed) => StatusOr::new(Value::Int(unboxed)),
                Err(cast) => {
                    StatusOr::from_status(cast.to_status(self.config.cast_error_style))
                }
            },
            CoercionMode::Dynamic => StatusOr::new(value),
        }
    }

    /// Invoke a callback under the opaque object contract.
    ///
    /// No type check in any mode. The callback's reference moves into
    /// the result; the receiver releases it by dropping the `StatusOr`.
    pub fn call_with_status_or_object_return<C>(&self, callback: &mut C) -> StatusOr<Value>
    where
        C: Callback + ?Sized,
    {
        match callback.invoke() {
            Ok(value) => StatusOr::new(value),
            Err(raised) => StatusOr::from_status(classifier::classify(&raised)),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
