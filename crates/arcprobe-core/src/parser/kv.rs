//! Key/value splitting for listing lines.

/// Separator used by the detailed (`-slt`) listing.
pub const DETAILED_SEPARATOR: &str = " = ";

/// Separator used by the header of the simple listing.
pub const SIMPLE_SEPARATOR: &str = ": ";

/// Splits a header line into key and value.
///
/// Tries `" = "` first and falls back to `": "`. Returns `None` when the line
/// has neither separator.
///
/// # Examples
///
/// ```
/// use arcprobe_core::parser::kv::split_header_line;
///
/// assert_eq!(split_header_line("Type = zip"), Some(("Type", "zip")));
/// assert_eq!(split_header_line("Path: a.zip"), Some(("Path", "a.zip")));
/// assert_eq!(split_header_line("Scanning the drive"), None);
/// ```
#[must_use]
pub fn split_header_line(line: &str) -> Option<(&str, &str)> {
    line.split_once(DETAILED_SEPARATOR)
        .or_else(|| line.split_once(SIMPLE_SEPARATOR))
}

/// Splits an entry line into key and value. Only `" = "` is recognized.
#[must_use]
pub fn split_entry_line(line: &str) -> Option<(&str, &str)> {
    line.split_once(DETAILED_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_separator_wins() {
        assert_eq!(
            split_header_line("Comment = a = b"),
            Some(("Comment", "a = b"))
        );
    }

    #[test]
    fn test_detailed_separator_preferred() {
        assert_eq!(
            split_header_line("Modified = 2024-01-01 10:00: 00"),
            Some(("Modified", "2024-01-01 10:00: 00"))
        );
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(split_entry_line("CRC = "), Some(("CRC", "")));
    }

    #[test]
    fn test_entry_ignores_colon_separator() {
        assert_eq!(split_entry_line("Warning: unexpected end"), None);
        assert_eq!(split_entry_line("Path=a"), None);
    }
}
