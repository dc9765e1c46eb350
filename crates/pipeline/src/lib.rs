//! Sequential jobs, groups of jobs, and lazy source-to-filter pipelines.

pub mod base;
pub mod helpers;
pub mod pipeline;

mod group;
pub use group::*;

mod worksheet;
pub use worksheet::*;

#[cfg(test)]
mod testutil;
