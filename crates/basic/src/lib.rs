//! The built-in source and filter catalogue

pub mod filters;
pub mod sources;

#[cfg(test)]
mod testutil;
