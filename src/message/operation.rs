use crate::base::error::StreamError;
use http::{Method, StatusCode};
use url::Url;

/// The operation line of a request message: method, absolute target URI, and
/// the UPnP protocol version the message speaks (UDA 1.0 unless raised).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOperation {
    method: Method,
    target: Url,
    protocol_major: u8,
    protocol_minor: u8,
}

impl RequestOperation {
    /// A new operation speaking UDA 1.0. `Url` values are absolute by
    /// construction, so no further target validation is needed here.
    pub fn new(method: Method, target: Url) -> Self {
        Self {
            method,
            target,
            protocol_major: 1,
            protocol_minor: 0,
        }
    }

    pub fn with_protocol_version(mut self, major: u8, minor: u8) -> Self {
        self.protocol_major = major;
        self.protocol_minor = minor;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn target(&self) -> &Url {
        &self.target
    }

    pub fn protocol_version(&self) -> (u8, u8) {
        (self.protocol_major, self.protocol_minor)
    }
}

/// The status line of a response message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseOperation {
    status: StatusCode,
    reason: String,
}

impl ResponseOperation {
    /// Build from a bare status code, deriving the reason phrase from the
    /// standard status table. A code without a table entry is an
    /// [`StreamError::UnrecognizedStatus`] classification failure, never a
    /// silently defaulted phrase.
    pub fn from_status(code: u16) -> Result<Self, StreamError> {
        let status =
            StatusCode::from_u16(code).map_err(|_| StreamError::UnrecognizedStatus(code))?;
        let reason = status
            .canonical_reason()
            .ok_or(StreamError::UnrecognizedStatus(code))?;
        Ok(Self {
            status,
            reason: reason.to_owned(),
        })
    }

    /// Build with a caller-supplied reason phrase. The code must still be a
    /// valid HTTP status.
    pub fn with_reason(code: u16, reason: impl Into<String>) -> Result<Self, StreamError> {
        let status =
            StatusCode::from_u16(code).map_err(|_| StreamError::UnrecognizedStatus(code))?;
        Ok(Self {
            status,
            reason: reason.into(),
        })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_operation_defaults_to_uda_1_0() {
        let target = Url::parse("http://10.0.0.5:1400/status").unwrap();
        let op = RequestOperation::new(Method::GET, target);
        assert_eq!(op.method(), &Method::GET);
        assert_eq!(op.protocol_version(), (1, 0));
    }

    #[test]
    fn test_request_operation_protocol_version() {
        let target = Url::parse("http://10.0.0.5:1400/control").unwrap();
        let op = RequestOperation::new(Method::POST, target).with_protocol_version(1, 1);
        assert_eq!(op.protocol_version(), (1, 1));
    }

    #[test]
    fn test_response_operation_from_status_table() {
        let op = ResponseOperation::from_status(200).unwrap();
        assert_eq!(op.status(), StatusCode::OK);
        assert_eq!(op.reason(), "OK");

        let op = ResponseOperation::from_status(412).unwrap();
        assert_eq!(op.reason(), "Precondition Failed");
    }

    #[test]
    fn test_response_operation_unknown_code_fails() {
        // 599 parses as a status code but has no table entry.
        assert!(matches!(
            ResponseOperation::from_status(599),
            Err(StreamError::UnrecognizedStatus(599))
        ));
        assert!(matches!(
            ResponseOperation::from_status(42),
            Err(StreamError::UnrecognizedStatus(42))
        ));
    }

    #[test]
    fn test_response_operation_with_reason() {
        let op = ResponseOperation::with_reason(500, "Action Failed").unwrap();
        assert_eq!(op.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(op.reason(), "Action Failed");
    }
}
