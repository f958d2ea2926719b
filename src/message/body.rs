use bytes::Bytes;

/// The entity body of a UPnP message.
///
/// Text bodies carry their own charset (`None` means UTF-8); the governing
/// mime type lives in the message's `Content-Type` header, with
/// `text/xml; charset="utf-8"` as the fallback for text when the caller set
/// none. A binary body has no fallback: sending one without an explicit
/// content-type header is rejected before any network activity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MessageBody {
    /// No entity body. No content-type or content-length goes on the wire.
    #[default]
    Absent,
    /// A textual body, encoded for the wire with `charset` (UTF-8 if `None`).
    Text {
        content: String,
        charset: Option<String>,
    },
    /// An opaque byte body, passed through unmodified.
    Binary(Bytes),
}

impl MessageBody {
    /// A text body with the default UTF-8 charset.
    pub fn text(content: impl Into<String>) -> Self {
        MessageBody::Text {
            content: content.into(),
            charset: None,
        }
    }

    /// A text body with an explicit charset label, e.g. `"iso-8859-1"`.
    pub fn text_with_charset(content: impl Into<String>, charset: impl Into<String>) -> Self {
        MessageBody::Text {
            content: content.into(),
            charset: Some(charset.into()),
        }
    }

    /// A binary body.
    pub fn binary(content: impl Into<Bytes>) -> Self {
        MessageBody::Binary(content.into())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, MessageBody::Absent)
    }

    /// Whether the message carries an entity body at all.
    pub fn has_content(&self) -> bool {
        !self.is_absent()
    }

    /// The textual content, if this is a text body.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageBody::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    /// The raw bytes, if this is a binary body.
    pub fn as_binary(&self) -> Option<&Bytes> {
        match self {
            MessageBody::Binary(content) => Some(content),
            _ => None,
        }
    }
}
