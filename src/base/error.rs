use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by the stream client.
///
/// Every failure of a send is typed; a send never reports failure by
/// returning an absent response. The variants fall into five groups:
/// construction (`FailedToStart`, `InvalidConfig`), local request validation
/// (`MalformedRequest`), transport (`Transport`, `Timeout`), cancellation
/// (`Cancelled`, `Stopped`), and response classification
/// (`UnrecognizedStatus`, `Encoding`, `InvalidContentType`).
#[derive(Debug, Error)]
pub enum StreamError {
    /// The HTTP engine could not be initialized. Fatal to the client
    /// instance; no sends are possible.
    #[error("could not start HTTP engine: {0}")]
    FailedToStart(String),

    /// Configuration validation rejected a value at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The request message cannot be represented on the wire. Detected
    /// before any network activity.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// The engine failed the exchange: connection refused or reset, name
    /// resolution failure, or an I/O fault mid-exchange.
    #[error("transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// No complete response arrived within the configured timeout.
    #[error("no response within {0:?}")]
    Timeout(Duration),

    /// The send was interrupted by [`StreamClient::stop`] while in flight.
    ///
    /// [`StreamClient::stop`]: crate::client::StreamClient::stop
    #[error("send cancelled by client shutdown")]
    Cancelled,

    /// The response carried a status code with no entry in the standard
    /// status table.
    #[error("unrecognized response status code {0}")]
    UnrecognizedStatus(u16),

    /// The response body could not be decoded under its declared charset.
    #[error("response body undecodable as charset {charset:?}")]
    Encoding { charset: String },

    /// The response carried a content-type value that does not parse as a
    /// mime type.
    #[error("unparseable content-type {0:?}")]
    InvalidContentType(String),

    /// A send was attempted after [`StreamClient::stop`].
    ///
    /// [`StreamClient::stop`]: crate::client::StreamClient::stop
    #[error("client already stopped")]
    Stopped,
}

impl StreamError {
    /// Wrap an engine-level failure.
    pub(crate) fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        StreamError::Transport(Box::new(err))
    }

    /// True for failures of the network exchange itself, which a caller may
    /// choose to retry.
    pub fn is_transport(&self) -> bool {
        matches!(self, StreamError::Transport(_) | StreamError::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_predicate() {
        let err = StreamError::transport(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "refused",
        ));
        assert!(err.is_transport());
        assert!(StreamError::Timeout(Duration::from_secs(30)).is_transport());
        assert!(!StreamError::Cancelled.is_transport());
        assert!(!StreamError::UnrecognizedStatus(599).is_transport());
    }

    #[test]
    fn test_display_carries_context() {
        let err = StreamError::MalformedRequest("binary body without a content-type".into());
        assert!(err.to_string().contains("binary body"));

        let err = StreamError::Encoding {
            charset: "utf-16".into(),
        };
        assert!(err.to_string().contains("utf-16"));
    }
}
