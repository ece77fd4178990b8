//! Callback invocation seam.
//!
//! The boundary adapter never invokes interpreter code directly; it goes
//! through `Callback`. Host closures implement it for free, and stateful
//! callables (captured objects, counters) implement it by hand. Adapters
//! are generic over the trait, so dispatch stays static.

use crate::raise::Raised;
use opal_core::Value;

/// Outcome of one callback invocation: the returned value, or what the
/// callback raised.
pub type CallOutcome = Result<Value, Raised>;

/// A host callable invocable across the boundary.
pub trait Callback {
    fn invoke(&mut self) -> CallOutcome;
}

impl<F> Callback for F
where
    F: FnMut() -> CallOutcome,
{
    #[inline]
    fn invoke(&mut self) -> CallOutcome {
        self()
    }
}
