use http::HeaderMap;

/// An ordered, multi-valued header collection.
///
/// Names compare case-insensitively per HTTP convention; the casing of the
/// first addition is preserved for the wire. Each name maps to the ordered
/// list of its values, and names iterate in order of first occurrence. A name
/// with no values is absent, never present-but-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderCollection {
    entries: Vec<(String, Vec<String>)>,
}

impl HeaderCollection {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a value, preserving any prior values for the same name.
    /// Nothing removes or overwrites existing values implicitly.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        if let Some((_, values)) = self
            .entries
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(&name))
        {
            values.push(value);
        } else {
            self.entries.push((name, vec![value]));
        }
    }

    /// Case-insensitive membership test. Accepts a raw name or a canonical
    /// identifier such as [`http::header::USER_AGENT`].
    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        self.entries
            .iter()
            .any(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    /// All values for a name, in addition order.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&[String]> {
        let name = name.as_ref();
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, values)| values.as_slice())
    }

    /// The first value added for a name.
    pub fn get_first(&self, name: impl AsRef<str>) -> Option<&str> {
        self.get(name).and_then(|values| values.first()).map(String::as_str)
    }

    /// Iterate `(name, values)` pairs in order of first occurrence.
    /// The iterator borrows the collection; call again to restart.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a collection from a wire-level header map, one entry per
    /// `(name, value)` pair, duplicates and received order preserved.
    pub fn from_header_map(map: &HeaderMap) -> Self {
        let mut collection = Self::new();
        for (name, value) in map {
            collection.add(
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header;

    #[test]
    fn test_add_and_get() {
        let mut headers = HeaderCollection::new();
        headers.add("Content-Type", "text/xml");
        assert_eq!(headers.get_first("Content-Type"), Some("text/xml"));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let mut headers = HeaderCollection::new();
        headers.add("SOAPACTION", "\"urn:schemas-upnp-org:service:AVTransport:1#Play\"");
        assert!(headers.contains("soapaction"));
        assert!(headers.contains("SoapAction"));
        assert!(headers.get("soapaction").is_some());
    }

    #[test]
    fn test_canonical_identifier_lookup() {
        let mut headers = HeaderCollection::new();
        headers.add("User-Agent", "Sonos/1.0");
        assert!(headers.contains(header::USER_AGENT));
        assert_eq!(headers.get_first(header::USER_AGENT), Some("Sonos/1.0"));
    }

    #[test]
    fn test_add_appends_preserving_prior_values() {
        let mut headers = HeaderCollection::new();
        headers.add("X-Upnp", "one");
        headers.add("x-upnp", "two");
        headers.add("X-UPNP", "three");

        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get("X-Upnp").unwrap(),
            &["one".to_string(), "two".to_string(), "three".to_string()]
        );
    }

    #[test]
    fn test_entries_in_first_occurrence_order() {
        let mut headers = HeaderCollection::new();
        headers.add("Host", "10.0.0.5:1400");
        headers.add("Connection", "close");
        headers.add("host", "ignored-for-order");

        let names: Vec<_> = headers.entries().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Host", "Connection"]);
    }

    #[test]
    fn test_entries_restartable() {
        let mut headers = HeaderCollection::new();
        headers.add("A", "1");
        headers.add("B", "2");

        assert_eq!(headers.entries().count(), 2);
        assert_eq!(headers.entries().count(), 2);
    }

    #[test]
    fn test_first_casing_preserved() {
        let mut headers = HeaderCollection::new();
        headers.add("CALLBACK", "<http://10.0.0.9/events>");
        headers.add("callback", "<http://10.0.0.10/events>");

        let (name, values) = headers.entries().next().unwrap();
        assert_eq!(name, "CALLBACK");
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_from_header_map_preserves_duplicates() {
        let mut map = HeaderMap::new();
        map.append("x-upnp", "a".parse().unwrap());
        map.append("x-upnp", "b".parse().unwrap());
        map.append("server", "Linux UPnP/1.0".parse().unwrap());

        let headers = HeaderCollection::from_header_map(&map);
        assert_eq!(headers.get("x-upnp").unwrap(), &["a", "b"]);
        assert_eq!(headers.get_first("server"), Some("Linux UPnP/1.0"));
    }

    #[test]
    fn test_default_is_empty() {
        let headers = HeaderCollection::default();
        assert!(headers.is_empty());
        assert!(!headers.contains("Any"));
        assert_eq!(headers.entries().count(), 0);
    }
}
