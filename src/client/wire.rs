//! Message ⇄ wire translation.
//!
//! [`build_request`] turns a protocol-level request message into the HTTP
//! request handed to the engine: default user-agent injection, verbatim
//! header copy, and content-type driven body encoding. [`classify_response`]
//! performs the reverse for the engine's response: status table lookup,
//! verbatim header copy, and content-type driven body decoding. Everything
//! here is synchronous and local; network faults cannot occur on these paths.

use crate::base::error::StreamError;
use crate::client::config::StreamClientConfig;
use crate::message::body::MessageBody;
use crate::message::charset::Charset;
use crate::message::headers::HeaderCollection;
use crate::message::operation::ResponseOperation;
use crate::message::stream::{RequestMessage, ResponseMessage};
use bytes::Bytes;
use http::{header, HeaderMap, HeaderName, HeaderValue, Request};
use http_body_util::Full;
use mime::Mime;

/// Content type assumed for a text body when the message declares none.
pub(crate) const DEFAULT_CONTENT_TYPE: &str = "text/xml; charset=\"utf-8\"";

const DEFAULT_CHARSET: &str = "utf-8";

/// Build the wire request: target and method from the operation, headers
/// copied verbatim after the default user-agent rule, body encoded per its
/// variant. Fails only with [`StreamError::MalformedRequest`]; nothing here
/// touches the network.
pub(crate) fn build_request(
    config: &StreamClientConfig,
    message: &RequestMessage,
) -> Result<Request<Full<Bytes>>, StreamError> {
    let operation = message.operation();
    let mut headers = HeaderMap::new();

    // Default user agent, only when the caller has not set one.
    if !message.headers().contains(header::USER_AGENT) {
        let (major, minor) = operation.protocol_version();
        let agent = config.user_agent().value(major, minor);
        tracing::debug!(agent = %agent, "injecting default user agent");
        headers.insert(header::USER_AGENT, header_value(&agent)?);
    }

    // Caller headers verbatim, including duplicates, preserving per-name
    // order.
    for (name, values) in message.headers().entries() {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            StreamError::MalformedRequest(format!("invalid header name {name:?}"))
        })?;
        for value in values {
            headers.append(header_name.clone(), header_value(value)?);
        }
    }

    let payload = match message.body() {
        MessageBody::Absent => Bytes::new(),
        MessageBody::Text { content, charset } => {
            let declared = request_content_type(&headers)?;
            let content_type = match declared {
                Some(content_type) => content_type,
                None => {
                    headers.insert(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static(DEFAULT_CONTENT_TYPE),
                    );
                    default_content_type()
                }
            };

            let label = charset
                .clone()
                .or_else(|| charset_label(&content_type))
                .unwrap_or_else(|| DEFAULT_CHARSET.to_owned());
            let charset = Charset::resolve(&label).ok_or_else(|| {
                StreamError::MalformedRequest(format!("unsupported request charset {label:?}"))
            })?;
            let encoded = charset.encode(content).ok_or_else(|| {
                StreamError::MalformedRequest(format!(
                    "body not representable in charset {label:?}"
                ))
            })?;

            headers.insert(header::CONTENT_LENGTH, HeaderValue::from(encoded.len()));
            encoded
        }
        MessageBody::Binary(content) => {
            if !headers.contains_key(header::CONTENT_TYPE) {
                return Err(StreamError::MalformedRequest(
                    "binary body requires an explicit content-type header".into(),
                ));
            }
            headers.insert(header::CONTENT_LENGTH, HeaderValue::from(content.len()));
            content.clone()
        }
    };

    let mut request = Request::builder()
        .method(operation.method().clone())
        .uri(operation.target().as_str())
        .body(Full::new(payload))
        .map_err(|e| StreamError::MalformedRequest(e.to_string()))?;
    *request.headers_mut() = headers;

    Ok(request)
}

/// Classify the wire response into a protocol-level message. Status codes
/// outside the standard table, unparseable content types, and undecodable
/// text bodies are surfaced, never silently defaulted.
pub(crate) fn classify_response(
    parts: http::response::Parts,
    bytes: Bytes,
) -> Result<ResponseMessage, StreamError> {
    let operation = ResponseOperation::from_status(parts.status.as_u16())?;
    let headers = HeaderCollection::from_header_map(&parts.headers);

    let body = if bytes.is_empty() {
        MessageBody::Absent
    } else {
        match response_content_type(&parts.headers)? {
            Some(content_type) if !is_textual(&content_type) => MessageBody::Binary(bytes),
            content_type => {
                // Missing or textual media type: decode to text.
                let declared = content_type.as_ref().and_then(charset_label);
                let label = declared
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CHARSET.to_owned());
                let charset = Charset::resolve(&label).ok_or_else(|| StreamError::Encoding {
                    charset: label.clone(),
                })?;
                let content = charset
                    .decode(&bytes)
                    .ok_or(StreamError::Encoding { charset: label })?;
                MessageBody::Text {
                    content,
                    charset: declared,
                }
            }
        }
    };

    Ok(ResponseMessage::new(operation, headers, body))
}

/// The charset parameter of a content type, unquoted.
fn charset_label(content_type: &Mime) -> Option<String> {
    content_type
        .get_param(mime::CHARSET)
        .map(|name| name.as_str().trim_matches('"').to_owned())
}

fn header_value(value: &str) -> Result<HeaderValue, StreamError> {
    HeaderValue::from_str(value)
        .map_err(|_| StreamError::MalformedRequest(format!("invalid header value {value:?}")))
}

fn default_content_type() -> Mime {
    DEFAULT_CONTENT_TYPE
        .parse()
        .expect("default content type literal")
}

fn request_content_type(headers: &HeaderMap) -> Result<Option<Mime>, StreamError> {
    match headers.get(header::CONTENT_TYPE) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .ok()
            .and_then(|text| text.parse::<Mime>().ok())
            .map(Some)
            .ok_or_else(|| {
                StreamError::MalformedRequest("unparseable content-type header".into())
            }),
    }
}

fn response_content_type(headers: &HeaderMap) -> Result<Option<Mime>, StreamError> {
    match headers.get(header::CONTENT_TYPE) {
        None => Ok(None),
        Some(value) => {
            let text = String::from_utf8_lossy(value.as_bytes()).into_owned();
            match text.parse::<Mime>() {
                Ok(content_type) => Ok(Some(content_type)),
                Err(_) => Err(StreamError::InvalidContentType(text)),
            }
        }
    }
}

/// A body is treated as text when its media type is `text/*` or an XML
/// vocabulary (`application/xml`, `application/soap+xml`, ...).
fn is_textual(content_type: &Mime) -> bool {
    content_type.type_() == mime::TEXT
        || content_type.subtype() == mime::XML
        || content_type.suffix() == Some(mime::XML)
}
