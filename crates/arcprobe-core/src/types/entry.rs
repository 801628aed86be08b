//! Per-member metadata.

use std::collections::BTreeMap;

/// Key/value metadata for one archive member.
///
/// Built from one blank-line terminated stanza of the detailed listing. The
/// raw fields are always available through [`Entry::get`]; the typed
/// accessors cover the keys 7-Zip prints for every format.
///
/// # Examples
///
/// ```
/// use arcprobe_core::parse_detailed_listing;
///
/// let output = "--\nType = zip\n\n----------\nPath = a.txt\nSize = 12\nEncrypted = -\n\n";
/// let listing = parse_detailed_listing(output).unwrap();
/// let entry = &listing.entries().unwrap()[0];
/// assert_eq!(entry.path(), Some("a.txt"));
/// assert_eq!(entry.size(), Some(12));
/// assert!(!entry.is_encrypted());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    fields: BTreeMap<String, String>,
}

impl Entry {
    /// Creates an entry with no fields.
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

    /// Member path inside the archive.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.get("Path")
    }

    /// Uncompressed size in bytes.
    #[must_use]
    pub fn size(&self) -> Option<u64> {
        self.number("Size")
    }

    /// Compressed size in bytes. 7-Zip leaves it blank for members of a
    /// solid block after the first.
    #[must_use]
    pub fn packed_size(&self) -> Option<u64> {
        self.number("Packed Size")
    }

    /// CRC as printed by the tool (upper-case hex).
    #[must_use]
    pub fn crc(&self) -> Option<&str> {
        self.get("CRC").filter(|crc| !crc.is_empty())
    }

    /// Modification time as printed by the tool.
    #[must_use]
    pub fn modified(&self) -> Option<&str> {
        self.get("Modified").filter(|m| !m.is_empty())
    }

    /// Returns `true` if the member's data is encrypted (`Encrypted = +`).
    #[must_use]
    pub fn is_encrypted(&self) -> bool {
        self.get("Encrypted") == Some("+")
    }

    /// Returns `true` for directory members.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.get("Folder") == Some("+")
            || self
                .get("Attributes")
                .is_some_and(|attrs| attrs.starts_with('D'))
    }

    fn number(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(fields: &[(&str, &str)]) -> Entry {
        let mut entry = Entry::new();
        for (k, v) in fields {
            entry.insert(k, v);
        }
        entry
    }

    #[test]
    fn test_typed_accessors() {
        let e = entry(&[
            ("Path", "docs/readme.txt"),
            ("Size", "1024"),
            ("Packed Size", "300"),
            ("CRC", "3610A686"),
            ("Modified", "2024-01-02 03:04:05"),
            ("Encrypted", "+"),
        ]);
        assert_eq!(e.path(), Some("docs/readme.txt"));
        assert_eq!(e.size(), Some(1024));
        assert_eq!(e.packed_size(), Some(300));
        assert_eq!(e.crc(), Some("3610A686"));
        assert_eq!(e.modified(), Some("2024-01-02 03:04:05"));
        assert!(e.is_encrypted());
        assert!(!e.is_dir());
    }

    #[test]
    fn test_blank_values() {
        let e = entry(&[("Packed Size", ""), ("CRC", ""), ("Size", "abc")]);
        assert_eq!(e.packed_size(), None);
        assert_eq!(e.crc(), None);
        assert_eq!(e.size(), None);
        assert!(!e.is_encrypted());
    }

    #[test]
    fn test_directory_detection() {
        assert!(entry(&[("Folder", "+")]).is_dir());
        assert!(entry(&[("Attributes", "D drwxr-xr-x")]).is_dir());
        assert!(!entry(&[("Folder", "-"), ("Attributes", "A")]).is_dir());
    }
}
