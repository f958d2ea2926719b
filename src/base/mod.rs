//! Base types and error handling.
//!
//! Provides the foundational error type shared by the whole crate:
//! - [`StreamError`]: everything a send or a client lifecycle call can fail with

pub mod error;

pub use error::StreamError;
