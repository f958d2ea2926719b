//! Protocol-level message model.
//!
//! A UPnP message is the request or response at the application protocol
//! level, independent of its HTTP encoding: an operation (method + target, or
//! status + reason), a header collection, and an optional body.

pub mod body;
pub mod charset;
pub mod headers;
pub mod operation;
pub mod stream;

// Re-exports for convenience
pub use body::MessageBody;
pub use headers::HeaderCollection;
pub use operation::{RequestOperation, ResponseOperation};
pub use stream::{RequestMessage, ResponseMessage};
