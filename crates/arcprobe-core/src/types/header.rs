//! Archive-level metadata.

use std::collections::BTreeMap;

/// Key/value metadata describing the archive as a whole.
///
/// Populated from the header block of the detailed listing (`Path`, `Type`,
/// `Physical Size`, `Encrypted`, ...). Keys are unique; a repeated key keeps
/// the last value seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    fields: BTreeMap<String, String>,
}

impl Header {
    /// Creates an empty header.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: &str, value: &str) {
        self.fields.insert(key.to_string(), value.to_string());
    }

    /// Returns the value recorded for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Number of recorded keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the underlying map.
    #[must_use]
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut header = Header::new();
        header.insert("Type", "zip");
        header.insert("Type", "7z");
        assert_eq!(header.get("Type"), Some("7z"));
        assert_eq!(header.len(), 1);
    }

    #[test]
    fn test_empty_header() {
        let header = Header::new();
        assert!(header.is_empty());
        assert_eq!(header.get("Type"), None);
        assert_eq!(header.iter().count(), 0);
    }
}
