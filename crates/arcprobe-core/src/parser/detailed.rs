//! Parser for the detailed (`l -slt`) listing.
//!
//! The listing has three sections: a banner preamble ended by `--`, an
//! archive header of `Key = Value` lines ended by `----------`, and one
//! blank-line terminated stanza per member:
//!
//! ```text
//! 7-Zip (z) 23.01 (x64) : Copyright (c) 1999-2023 Igor Pavlov : 2023-06-20
//!
//! Scanning the drive for archives:
//! 1 file, 1234 bytes (2 KiB)
//!
//! Listing archive: docs.zip
//!
//! --
//! Path = docs.zip
//! Type = zip
//! Physical Size = 1234
//!
//! ----------
//! Path = readme.txt
//! Folder = -
//! Size = 120
//! Encrypted = -
//!
//! ```

use std::mem;

use log::debug;

use crate::ArchiveError;
use crate::Result;
use crate::parser::cursor::Block;
use crate::parser::cursor::BlockCursor;
use crate::parser::kv::split_entry_line;
use crate::parser::kv::split_header_line;
use crate::parser::lines::split_lines;
use crate::types::Entry;
use crate::types::Header;

/// Prefix of error lines printed by 7-Zip.
pub const ERROR_MARKER: &str = "ERROR:";

/// Text identifying the "cannot open encrypted archive" error.
pub const ENCRYPTED_ARCHIVE_MARKER: &str = "encrypted archive";

/// Archive type reported for archives whose headers are encrypted.
pub const ENCRYPTED_ARCHIVE_TYPE: &str = "encrypted archive";

/// Line ending the preamble.
pub const PREAMBLE_END: &str = "--";

/// Line ending the archive header of the detailed listing.
pub const HEADER_END: &str = "----------";

const TYPE_PREFIX: &str = "Type = ";
const ENCRYPTED_PREFIX: &str = "Encrypted = ";
const MISSING_TYPE: &str = "no archive type reported";
const MISSING_HEADER: &str = "no archive header in listing";

/// Metadata recovered from a readable listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveMetadata {
    /// Archive format as named by 7-Zip (`zip`, `7z`, `Rar5`, ...).
    pub archive_type: String,
    /// Whether the archive or any member is encrypted.
    pub encrypted: bool,
    /// Archive-level properties.
    pub header: Header,
    /// Members in listing order.
    pub entries: Vec<Entry>,
}

/// Outcome of parsing a detailed listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailedListing {
    /// The archive headers are encrypted; nothing can be listed without the
    /// password.
    EncryptedArchive,
    /// The listing was readable.
    Listed(ArchiveMetadata),
}

impl DetailedListing {
    /// Archive type, `"encrypted archive"` for the encrypted case.
    #[must_use]
    pub fn archive_type(&self) -> &str {
        match self {
            Self::EncryptedArchive => ENCRYPTED_ARCHIVE_TYPE,
            Self::Listed(meta) => &meta.archive_type,
        }
    }

    /// Returns `true` if encrypted content was detected.
    #[must_use]
    pub fn is_encrypted(&self) -> bool {
        match self {
            Self::EncryptedArchive => true,
            Self::Listed(meta) => meta.encrypted,
        }
    }

    /// Listed members, `None` for the encrypted case.
    #[must_use]
    pub fn entries(&self) -> Option<&[Entry]> {
        match self {
            Self::EncryptedArchive => None,
            Self::Listed(meta) => Some(&meta.entries),
        }
    }
}

/// Returns `true` if the preamble of `output` reports that the archive
/// cannot be opened because it is encrypted.
#[must_use]
pub fn reports_encrypted_archive(output: &str) -> bool {
    split_lines(output)
        .into_iter()
        .take_while(|line| *line != PREAMBLE_END)
        .any(is_encrypted_archive_error)
}

fn is_encrypted_archive_error(line: &str) -> bool {
    line.starts_with(ERROR_MARKER) && line.contains(ENCRYPTED_ARCHIVE_MARKER)
}

/// Parses the output of `l -slt`.
///
/// # Errors
///
/// Returns [`ArchiveError::Format`] when the preamble carries an `ERROR:`
/// line other than the encrypted-archive one (the error holds that line), or
/// when the header has no `Type`.
///
/// # Examples
///
/// ```
/// use arcprobe_core::DetailedListing;
/// use arcprobe_core::parse_detailed_listing;
///
/// let output = "ERROR: secret.7z : Can not open encrypted archive. Wrong password?\n";
/// let listing = parse_detailed_listing(output).unwrap();
/// assert_eq!(listing, DetailedListing::EncryptedArchive);
/// ```
pub fn parse_detailed_listing(output: &str) -> Result<DetailedListing> {
    let mut cursor = BlockCursor::new();
    let mut meta = ArchiveMetadata::default();
    let mut entry = Entry::new();

    for line in split_lines(output) {
        match cursor.block() {
            Block::Preamble => {
                if line.starts_with(ERROR_MARKER) {
                    if line.contains(ENCRYPTED_ARCHIVE_MARKER) {
                        debug!("archive headers are encrypted: {line}");
                        return Ok(DetailedListing::EncryptedArchive);
                    }
                    return Err(ArchiveError::Format(line.to_string()));
                }
                if line == PREAMBLE_END {
                    cursor.advance();
                }
            }
            Block::Header => {
                if line.is_empty() {
                    continue;
                }
                if let Some(archive_type) = line.strip_prefix(TYPE_PREFIX) {
                    meta.archive_type = archive_type.to_string();
                }
                if line.starts_with(ENCRYPTED_PREFIX) {
                    meta.encrypted = line.ends_with('+');
                }
                if line == HEADER_END {
                    if meta.archive_type.is_empty() {
                        return Err(ArchiveError::Format(MISSING_TYPE.to_string()));
                    }
                    cursor.advance();
                } else if let Some((key, value)) = split_header_line(line) {
                    meta.header.insert(key, value);
                }
            }
            Block::Entries => {
                if line.is_empty() {
                    if !entry.is_empty() {
                        meta.entries.push(mem::take(&mut entry));
                    }
                    continue;
                }
                if line.starts_with(ENCRYPTED_PREFIX) && line.ends_with('+') {
                    meta.encrypted = true;
                }
                if let Some((key, value)) = split_entry_line(line) {
                    entry.insert(key, value);
                }
            }
        }
    }

    // Output cut off before the stanza's blank line.
    if !entry.is_empty() {
        meta.entries.push(entry);
    }

    match cursor.block() {
        Block::Preamble => Err(ArchiveError::Format(MISSING_HEADER.to_string())),
        Block::Header if meta.archive_type.is_empty() => {
            Err(ArchiveError::Format(MISSING_TYPE.to_string()))
        }
        _ => Ok(DetailedListing::Listed(meta)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const BANNER: &str = "\n7-Zip (z) 23.01 (x64) : Copyright (c) 1999-2023 Igor Pavlov : 2023-06-20\n\
                          \nScanning the drive for archives:\n1 file, 320 bytes (1 KiB)\n\
                          \nListing archive: archive.zip\n\n";

    fn listing(body: &str) -> String {
        format!("{BANNER}{body}")
    }

    fn listed(output: &str) -> ArchiveMetadata {
        match parse_detailed_listing(output).unwrap() {
            DetailedListing::Listed(meta) => meta,
            DetailedListing::EncryptedArchive => panic!("unexpected encrypted sentinel"),
        }
    }

    #[test]
    fn test_two_stanzas() {
        let output = listing(
            "--\nPath = archive.zip\nType = Zip\nEncrypted = -\n\n----------\n\
             Path = a.txt\nSize = 5\nCRC = 3610A686\n\n\
             Path = b.txt\nSize = 7\nCRC = 0F3E2C1A\n\n",
        );
        let meta = listed(&output);
        assert_eq!(meta.archive_type, "Zip");
        assert!(!meta.encrypted);
        assert_eq!(meta.header.get("Type"), Some("Zip"));
        assert_eq!(meta.header.get("Encrypted"), Some("-"));
        assert_eq!(meta.header.get("Path"), Some("archive.zip"));
        assert_eq!(meta.entries.len(), 2);
        assert_eq!(meta.entries[0].path(), Some("a.txt"));
        assert_eq!(meta.entries[1].get("CRC"), Some("0F3E2C1A"));
    }

    #[test]
    fn test_encrypted_sentinel() {
        let output =
            listing("ERROR: archive.7z : Can not open encrypted archive. Wrong password?\n");
        let parsed = parse_detailed_listing(&output).unwrap();
        assert_eq!(parsed, DetailedListing::EncryptedArchive);
        assert_eq!(parsed.archive_type(), "encrypted archive");
        assert!(parsed.is_encrypted());
        assert!(parsed.entries().is_none());
    }

    #[test]
    fn test_other_error_line_is_format_error() {
        let output = listing("ERROR: archive.7z: Unsupported Method\n");
        let err = parse_detailed_listing(&output).unwrap_err();
        match err {
            ArchiveError::Format(line) => {
                assert_eq!(line, "ERROR: archive.7z: Unsupported Method");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_type_is_format_error() {
        let output = listing("--\nPath = archive.zip\n\n----------\nPath = a.txt\n\n");
        let err = parse_detailed_listing(&output).unwrap_err();
        assert!(err.is_format_error());
        assert!(err.to_string().contains("no archive type"));
    }

    #[test]
    fn test_missing_delimiters_is_format_error() {
        let err = parse_detailed_listing(BANNER).unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn test_header_without_entries() {
        let meta = listed(&listing("--\nPath = empty.zip\nType = zip\n\n"));
        assert_eq!(meta.archive_type, "zip");
        assert!(meta.entries.is_empty());
    }

    #[test]
    fn test_entry_encryption_marks_archive() {
        let output = listing(
            "--\nType = 7z\n\n----------\nPath = plain.txt\nEncrypted = -\n\n\
             Path = secret.txt\nEncrypted = +\n\n",
        );
        let meta = listed(&output);
        assert!(meta.encrypted);
        assert!(!meta.entries[0].is_encrypted());
        assert!(meta.entries[1].is_encrypted());
    }

    #[test]
    fn test_header_encrypted_flag() {
        let meta = listed(&listing("--\nType = 7z\nEncrypted = +\n----------\n"));
        assert!(meta.encrypted);
    }

    #[test]
    fn test_colon_header_lines_are_recorded() {
        let meta = listed(&listing(
            "--\nType = zip\nComment: nightly build\n----------\n",
        ));
        assert_eq!(meta.header.get("Comment"), Some("nightly build"));
    }

    #[test]
    fn test_repeated_blank_lines_do_not_add_entries() {
        let output = listing("--\nType = zip\n----------\nPath = a\n\n\n\nPath = b\n\n\n");
        assert_eq!(listed(&output).entries.len(), 2);
    }

    #[test]
    fn test_unterminated_last_stanza_is_kept() {
        let output = listing("--\nType = zip\n----------\nPath = a\n\nPath = b\nSize = 1");
        let meta = listed(&output);
        assert_eq!(meta.entries.len(), 2);
        assert_eq!(meta.entries[1].size(), Some(1));
    }

    #[test]
    fn test_error_after_preamble_is_not_inspected() {
        let output = listing("--\nType = zip\n----------\nPath = a\n\nERROR: trailing junk\n");
        assert_eq!(listed(&output).entries.len(), 1);
    }

    #[test]
    fn test_reports_encrypted_archive() {
        assert!(reports_encrypted_archive(&listing(
            "ERROR: x.7z : Can not open encrypted archive. Wrong password?\n"
        )));
        assert!(!reports_encrypted_archive(&listing(
            "ERROR: x.7z : Unsupported Method\n"
        )));
        assert!(!reports_encrypted_archive(
            "--\nType = 7z\n----------\nERROR: encrypted archive\n"
        ));
    }
}
