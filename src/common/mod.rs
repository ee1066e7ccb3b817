//! Shared error and benchmarking utilities

pub mod bench;
pub mod errors;
