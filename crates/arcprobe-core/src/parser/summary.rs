//! Trailing summary printed after a test or extraction.

use crate::engine::SUCCESS_LINE;
use crate::parser::lines::split_lines;

/// Counters from the block 7-Zip prints after `Everything is Ok`.
///
/// ```text
/// Everything is Ok
///
/// Folders: 1
/// Files: 3
/// Size:       1234
/// Compressed: 980
/// ```
///
/// 7-Zip omits lines that do not apply (a single-file archive has no
/// `Files:` line), so every counter is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationSummary {
    /// Number of folders processed.
    pub folders: Option<u64>,
    /// Number of files processed.
    pub files: Option<u64>,
    /// Total uncompressed size in bytes.
    pub size: Option<u64>,
    /// Size of the archive in bytes.
    pub compressed: Option<u64>,
}

impl OperationSummary {
    /// Scans the lines following the success line of `output`.
    ///
    /// Returns an empty summary if the success line is absent.
    #[must_use]
    pub fn scan(output: &str) -> Self {
        let mut summary = Self::default();

        let trailing = split_lines(output)
            .into_iter()
            .skip_while(|line| *line != SUCCESS_LINE)
            .skip(1);

        for line in trailing {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let Ok(value) = value.trim().parse::<u64>() else {
                continue;
            };
            match key.trim() {
                "Folders" => summary.folders = Some(value),
                "Files" => summary.files = Some(value),
                "Size" => summary.size = Some(value),
                "Compressed" => summary.compressed = Some(value),
                _ => {}
            }
        }

        summary
    }
}
