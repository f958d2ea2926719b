use crate::message::body::MessageBody;
use crate::message::headers::HeaderCollection;
use crate::message::operation::{RequestOperation, ResponseOperation};
use http::{header, Method, StatusCode};
use mime::Mime;
use url::Url;

/// A protocol-level request: one operation, a header collection, and an
/// optional body. Handed to the stream client by reference for exactly one
/// send; the client never mutates it.
#[derive(Debug, Clone)]
pub struct RequestMessage {
    operation: RequestOperation,
    headers: HeaderCollection,
    body: MessageBody,
}

impl RequestMessage {
    pub fn new(method: Method, target: Url) -> Self {
        Self::from_operation(RequestOperation::new(method, target))
    }

    pub fn from_operation(operation: RequestOperation) -> Self {
        Self {
            operation,
            headers: HeaderCollection::new(),
            body: MessageBody::Absent,
        }
    }

    /// Append a header, keeping any values already added under the name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(name, value);
        self
    }

    pub fn with_body(mut self, body: MessageBody) -> Self {
        self.body = body;
        self
    }

    pub fn operation(&self) -> &RequestOperation {
        &self.operation
    }

    pub fn headers(&self) -> &HeaderCollection {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderCollection {
        &mut self.headers
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    /// The explicit content-type header, parsed. `None` when absent or not a
    /// parseable mime type; the wire mapping applies its own strict checks.
    pub fn content_type(&self) -> Option<Mime> {
        parse_content_type(&self.headers)
    }
}

/// A protocol-level response, built by the stream client from the wire
/// exchange. Ownership transfers fully to the caller.
#[derive(Debug, Clone)]
pub struct ResponseMessage {
    operation: ResponseOperation,
    headers: HeaderCollection,
    body: MessageBody,
}

impl ResponseMessage {
    pub(crate) fn new(
        operation: ResponseOperation,
        headers: HeaderCollection,
        body: MessageBody,
    ) -> Self {
        Self {
            operation,
            headers,
            body,
        }
    }

    pub fn operation(&self) -> &ResponseOperation {
        &self.operation
    }

    pub fn status(&self) -> StatusCode {
        self.operation.status()
    }

    pub fn reason(&self) -> &str {
        self.operation.reason()
    }

    pub fn headers(&self) -> &HeaderCollection {
        &self.headers
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    /// Consume the message, keeping only the body.
    pub fn into_body(self) -> MessageBody {
        self.body
    }

    /// The declared content-type, parsed. `None` when the response carried
    /// none or the value does not parse.
    pub fn content_type(&self) -> Option<Mime> {
        parse_content_type(&self.headers)
    }
}

fn parse_content_type(headers: &HeaderCollection) -> Option<Mime> {
    headers
        .get_first(header::CONTENT_TYPE)
        .and_then(|value| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::operation::ResponseOperation;

    fn target() -> Url {
        Url::parse("http://10.0.0.5:1400/MediaRenderer/AVTransport/Control").unwrap()
    }

    #[test]
    fn test_request_message_builder_chain() {
        let message = RequestMessage::new(Method::POST, target())
            .with_header("SOAPACTION", "\"urn:schemas-upnp-org:service:AVTransport:1#Play\"")
            .with_body(MessageBody::text("<s:Envelope/>"));

        assert_eq!(message.operation().method(), &Method::POST);
        assert!(message.headers().contains("soapaction"));
        assert_eq!(message.body().as_text(), Some("<s:Envelope/>"));
    }

    #[test]
    fn test_request_message_content_type_parsed() {
        let message = RequestMessage::new(Method::POST, target())
            .with_header("Content-Type", "text/xml; charset=\"utf-8\"");

        let mime = message.content_type().unwrap();
        assert_eq!(mime.type_(), mime::TEXT);
        assert_eq!(mime.subtype(), mime::XML);
        assert_eq!(mime.get_param(mime::CHARSET).unwrap().as_str(), "utf-8");
    }

    #[test]
    fn test_request_message_content_type_absent() {
        let message = RequestMessage::new(Method::GET, target());
        assert!(message.content_type().is_none());
    }

    #[test]
    fn test_response_message_accessors() {
        let mut headers = HeaderCollection::new();
        headers.add("Server", "Linux UPnP/1.0 Sonos/57.3");

        let response = ResponseMessage::new(
            ResponseOperation::from_status(200).unwrap(),
            headers,
            MessageBody::text("<ok/>"),
        );

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.reason(), "OK");
        assert!(response.headers().contains("server"));
        assert_eq!(response.into_body().as_text(), Some("<ok/>"));
    }
}
