//! Callables used to configure filters.
//!
//! Synchronous and asynchronous functions are both accepted,
//! and are stored behind the same asynchronous interface.

mod transform;
pub use transform::*;

mod predicate;
pub use predicate::*;

mod seconds;
pub use seconds::*;
