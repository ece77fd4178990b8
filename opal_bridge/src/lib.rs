//! Status bridge for the Opal native boundary.
//!
//! This crate provides:
//! - Exception classification into canonical statuses (classifier)
//! - The boundary adapter invoking callbacks under a declared contract
//! - Strict-mode unboxing and cast error rendering (coerce)
//! - Bridge configuration: coercion mode and cast wording (config)
//!
//! Control flow: caller → adapter → callback; a raise routes through the
//! classifier, a returned value through the contract check, and either
//! way the caller gets a `Status` or `StatusOr` value.

pub mod adapter;
pub mod classifier;
pub mod coerce;
pub mod config;

// Re-export commonly used items
pub use adapter::BoundaryAdapter;
pub use classifier::{CLASSIFY_RULES, classify, classify_exception};
pub use coerce::{CastError, coerce_int};
pub use config::{BridgeConfig, CastErrorStyle, CoercionMode};
