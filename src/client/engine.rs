//! The transport engine boundary.
//!
//! Everything below the message model is delegated to hyper's pooled legacy
//! client: connection establishment, keep-alive, and HTTP/1.1 framing. This
//! module consumes it strictly as "send a request, get a response or an
//! error" and owns the translation of engine faults into [`StreamError`].

use crate::base::error::StreamError;
use bytes::Bytes;
use http::Request;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use std::time::Duration;

/// Added to the configured request timeout when deriving engine-level
/// timeouts. The stream client enforces its own deadline, and the engine's
/// must sit strictly behind it so the engine never expires a request first.
pub(crate) const TIMEOUT_SAFETY_MARGIN: Duration = Duration::from_secs(5);

/// Handle to the started engine. Pooled connections and their driver tasks
/// are released when the handle drops.
pub(crate) struct HttpEngine {
    client: Client<HttpConnector, Full<Bytes>>,
}

impl HttpEngine {
    /// Start the engine with timeouts derived from the configured request
    /// timeout. Fails when no tokio runtime is available to drive
    /// connections.
    pub(crate) fn start(request_timeout: Duration) -> Result<Self, StreamError> {
        tokio::runtime::Handle::try_current()
            .map_err(|e| StreamError::FailedToStart(e.to_string()))?;

        let engine_timeout = request_timeout + TIMEOUT_SAFETY_MARGIN;
        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(engine_timeout));

        let client = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(engine_timeout)
            .build(connector);

        Ok(Self { client })
    }

    /// One request/response exchange. Connection-level failures of any kind
    /// surface as [`StreamError::Transport`].
    pub(crate) async fn exchange(
        &self,
        request: Request<Full<Bytes>>,
    ) -> Result<http::Response<Incoming>, StreamError> {
        self.client
            .request(request)
            .await
            .map_err(StreamError::transport)
    }
}
