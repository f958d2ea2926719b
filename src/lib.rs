//! # upnpnet
//!
//! A UPnP-over-HTTP stream client library for Rust.
//!
//! `upnpnet` performs one request/response exchange per call against a remote
//! UPnP device or control point: it translates a protocol-level request
//! message (method, target URI, header set, optional body) into an HTTP
//! request, executes it over a pooled transport engine, and translates the
//! HTTP response back into a protocol-level response message.
//!
//! ## Features
//!
//! - **Message model**: ordered, multi-valued, case-insensitive header
//!   collections plus text/binary bodies with charset-aware encoding
//! - **Default header injection**: a `User-Agent` derived from the configured
//!   template and the message's UPnP protocol version
//! - **Typed failures**: transport faults, timeouts, cancellation, and
//!   response classification problems are all distinguishable errors, never
//!   an absent result
//! - **Shared client**: any number of concurrent sends against one client,
//!   with no locking added around individual exchanges
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use upnpnet::client::{StreamClient, StreamClientConfig};
//! use upnpnet::message::RequestMessage;
//! use http::Method;
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = StreamClient::new(StreamClientConfig::default()).unwrap();
//!     let target = Url::parse("http://10.0.0.5:1400/status").unwrap();
//!     let request = RequestMessage::new(Method::GET, target);
//!     let response = client.send_request(&request).await.unwrap();
//!     println!("Status: {}", response.status());
//!     client.stop();
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Core error definitions
//! - [`message`] - Request/response messages, headers, and bodies
//! - [`client`] - The stream client, its configuration, and the wire mapping

pub mod base;
pub mod client;
pub mod message;
