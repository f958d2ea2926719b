//! Character set conversion for text bodies.
//!
//! UPnP devices declare charsets through content-type parameters; in practice
//! the fleet speaks UTF-8 with occasional US-ASCII and ISO-8859-1 holdouts.
//! Labels outside this set resolve to `None` and the caller decides whether
//! that is a malformed request or a classification failure.

use bytes::Bytes;

/// A supported character set, resolved from an IANA label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Utf8,
    UsAscii,
    Latin1,
}

impl Charset {
    /// Resolve a charset label, case-insensitively, including the common
    /// aliases. Surrounding quotes from a content-type parameter are
    /// tolerated. Unknown labels yield `None`.
    pub fn resolve(label: &str) -> Option<Self> {
        match label.trim().trim_matches('"').to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Some(Charset::Utf8),
            "us-ascii" | "ascii" | "ansi_x3.4-1968" => Some(Charset::UsAscii),
            "iso-8859-1" | "iso8859-1" | "latin1" | "l1" => Some(Charset::Latin1),
            _ => None,
        }
    }

    /// Encode a string into this charset. `None` when the string contains
    /// characters the charset cannot represent.
    pub fn encode(&self, content: &str) -> Option<Bytes> {
        match self {
            Charset::Utf8 => Some(Bytes::copy_from_slice(content.as_bytes())),
            Charset::UsAscii => content
                .is_ascii()
                .then(|| Bytes::copy_from_slice(content.as_bytes())),
            Charset::Latin1 => {
                let mut encoded = Vec::with_capacity(content.len());
                for ch in content.chars() {
                    let code = u32::from(ch);
                    if code > 0xFF {
                        return None;
                    }
                    encoded.push(code as u8);
                }
                Some(Bytes::from(encoded))
            }
        }
    }

    /// Decode bytes under this charset. `None` when the bytes are not valid
    /// for it.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Charset::Utf8 => String::from_utf8(bytes.to_vec()).ok(),
            Charset::UsAscii => bytes
                .is_ascii()
                .then(|| String::from_utf8_lossy(bytes).into_owned()),
            // Every byte is a valid ISO-8859-1 code point.
            Charset::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}
