//! The stream client: one request/response exchange per call.
//!
//! A [`StreamClient`] owns the transport engine's lifecycle and performs the
//! translation between protocol-level messages and the wire. The life of a
//! client is `new()` (engine started) → any number of concurrent
//! [`send_request`] calls → one [`stop`]. Construction failure means no
//! client value exists and no sends are possible; sends after [`stop`] fail
//! fast.
//!
//! [`send_request`]: StreamClient::send_request
//! [`stop`]: StreamClient::stop

pub mod config;
mod engine;
mod wire;

// Re-exports for convenience
pub use config::{StreamClientConfig, StreamClientConfigBuilder, UserAgent};

use crate::base::error::StreamError;
use crate::message::stream::{RequestMessage, ResponseMessage};
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

/// A shared UPnP stream client.
///
/// One instance is meant to serve many concurrent callers; all state is
/// read-only after construction except the stop flag, and no locking is
/// added around individual sends; connection reuse is the engine's
/// concern.
pub struct StreamClient {
    config: StreamClientConfig,
    engine: engine::HttpEngine,
    stopped: AtomicBool,
    shutdown: Notify,
}

impl StreamClient {
    /// Start the engine and return a ready client. An engine that cannot be
    /// initialized surfaces [`StreamError::FailedToStart`] here and the
    /// client never exists.
    pub fn new(config: StreamClientConfig) -> Result<Self, StreamError> {
        tracing::debug!(timeout = ?config.timeout(), "starting stream client engine");
        let engine = engine::HttpEngine::start(config.timeout())?;
        Ok(Self {
            config,
            engine,
            stopped: AtomicBool::new(false),
            shutdown: Notify::new(),
        })
    }

    /// The settings this client was constructed with.
    pub fn configuration(&self) -> &StreamClientConfig {
        &self.config
    }

    /// Perform one complete exchange: build the wire request from `message`,
    /// await the response within the configured timeout, and classify it
    /// into a [`ResponseMessage`].
    ///
    /// The await on the network exchange is the only suspension point. It
    /// resolves to exactly one of: a complete response, a typed failure
    /// ([`StreamError::Transport`], [`StreamError::Timeout`]), or
    /// [`StreamError::Cancelled`] when [`stop`] interrupts the send.
    /// Failure is never reported as an absent response.
    ///
    /// [`stop`]: StreamClient::stop
    pub async fn send_request(
        &self,
        message: &RequestMessage,
    ) -> Result<ResponseMessage, StreamError> {
        if self.stopped.load(Ordering::Acquire) {
            return Err(StreamError::Stopped);
        }

        let request = wire::build_request(&self.config, message)?;
        tracing::debug!(
            method = %message.operation().method(),
            target = %message.operation().target(),
            "sending stream request"
        );

        let (parts, bytes) = tokio::select! {
            outcome = tokio::time::timeout(self.config.timeout(), self.perform(request)) => {
                match outcome {
                    Ok(result) => result?,
                    Err(_) => {
                        tracing::debug!(timeout = ?self.config.timeout(), "stream request expired");
                        return Err(StreamError::Timeout(self.config.timeout()));
                    }
                }
            }
            _ = self.shutdown.notified() => {
                tracing::debug!("stream request cancelled by shutdown");
                return Err(StreamError::Cancelled);
            }
        };

        let response = wire::classify_response(parts, bytes)?;
        tracing::debug!(status = response.status().as_u16(), "received stream response");
        Ok(response)
    }

    /// Exchange the request and drain the response body. A send is atomic
    /// from the caller's point of view, so the body is read in full before
    /// classification.
    async fn perform(
        &self,
        request: http::Request<Full<Bytes>>,
    ) -> Result<(http::response::Parts, Bytes), StreamError> {
        let response = self.engine.exchange(request).await?;
        let (parts, body) = response.into_parts();
        let bytes = body
            .collect()
            .await
            .map_err(StreamError::transport)?
            .to_bytes();
        Ok((parts, bytes))
    }

    /// Enter the terminal state. Idempotent: the second and later calls are
    /// no-ops. In-flight sends are woken and resolve as
    /// [`StreamError::Cancelled`] (best effort; callers wanting clean
    /// completion must drain their sends first); subsequent sends fail with
    /// [`StreamError::Stopped`]. Pooled engine resources are released when
    /// the client drops. Never fails: there is no corrective action a
    /// caller could take at teardown time.
    pub fn stop(&self) {
        if self.stopped.swap(true, Ordering::AcqRel) {
            return;
        }
        tracing::debug!("stopping stream client");
        self.shutdown.notify_waiters();
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}
