//! Core value and status types for Opal.
//!
//! This crate provides:
//! - Status model (StatusCode, Status, StatusOr) used at the native boundary
//! - Dynamic boundary values (Value)
//! - Reference-counted object handles (ObjRef) with observable identity

pub mod object;
pub mod status;
pub mod value;

// Re-export commonly used items
pub use object::{ObjRef, ObjectData};
pub use status::{Status, StatusCode, StatusOr};
pub use value::Value;
