//! Parser for the simple (`l`) listing, kept as display text.

use crate::ArchiveError;
use crate::Result;
use crate::parser::cursor::Block;
use crate::parser::cursor::BlockCursor;
use crate::parser::detailed::ERROR_MARKER;
use crate::parser::detailed::PREAMBLE_END;
use crate::parser::lines::split_lines;

/// Extracts the human-readable part of the `l` output.
///
/// The banner before `--` is dropped. Everything after it, the archive
/// properties and the file table, is returned verbatim with one `\n` per
/// line.
///
/// # Errors
///
/// Returns [`ArchiveError::Format`] with the offending line if the preamble
/// carries an `ERROR:` line.
///
/// # Examples
///
/// ```
/// use arcprobe_core::parse_listing_text;
///
/// let output = "7-Zip banner\n\n--\nPath = a.zip\nType = zip\n\n   Date      Time    Attr\n";
/// let text = parse_listing_text(output).unwrap();
/// assert_eq!(text, "Path = a.zip\nType = zip\n\n   Date      Time    Attr\n");
/// ```
pub fn parse_listing_text(output: &str) -> Result<String> {
    let mut cursor = BlockCursor::new();
    let mut text = String::new();

    for line in split_lines(output) {
        match cursor.block() {
            Block::Preamble => {
                if line.starts_with(ERROR_MARKER) {
                    return Err(ArchiveError::Format(line.to_string()));
                }
                if line == PREAMBLE_END {
                    cursor.advance();
                }
            }
            Block::Header => {
                text.push_str(line);
                text.push('\n');
                if line.is_empty() {
                    cursor.advance();
                }
            }
            Block::Entries => {
                text.push_str(line);
                text.push('\n');
            }
        }
    }

    Ok(text)
}
