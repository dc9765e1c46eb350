//! Composing a source and its filters into one stream

mod stages;
pub use stages::*;

mod job;
pub use job::*;
