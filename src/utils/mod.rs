//! Shared utilities.
//!
//! - [`errors`]: handler error type and its HTTP rendering

pub mod errors;
