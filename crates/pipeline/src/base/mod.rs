//! Interfaces for defining sources, filters, and jobs

mod errors;
pub use errors::*;

mod data;
pub use data::*;

mod source;
pub use source::*;

mod filter;
pub use filter::*;

mod job;
pub use job::*;
