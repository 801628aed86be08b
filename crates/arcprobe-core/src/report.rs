//! Extraction operation reporting.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use crate::parser::OperationSummary;

/// Report of a confirmed extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Directory the archive was extracted into.
    pub destination: PathBuf,

    /// Whether a non-empty password was passed to the tool.
    pub used_password: bool,

    /// Counters printed by the tool after `Everything is Ok`.
    pub summary: OperationSummary,

    /// Wall-clock duration of the tool invocation.
    pub duration: Duration,

    /// Combined output of the extraction command.
    pub output: String,
}

impl ExtractionReport {
    /// Creates an empty report for `destination`.
    #[must_use]
    pub fn new(destination: impl AsRef<Path>) -> Self {
        Self {
            destination: destination.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Number of files extracted, when the tool reported it.
    ///
    /// A single-file archive prints no `Files:` line; a summary with a size
    /// but no file count therefore counts as one file.
    #[must_use]
    pub fn files_extracted(&self) -> Option<u64> {
        self.summary
            .files
            .or_else(|| self.summary.size.map(|_| 1))
    }

    /// Number of folders created, zero when the tool printed none.
    #[must_use]
    pub fn folders_created(&self) -> u64 {
        self.summary.folders.unwrap_or(0)
    }

    /// Total uncompressed bytes written, when reported.
    #[must_use]
    pub fn bytes_written(&self) -> Option<u64> {
        self.summary.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report() {
        let report = ExtractionReport::new("/tmp/out");
        assert_eq!(report.destination, PathBuf::from("/tmp/out"));
        assert!(!report.used_password);
        assert_eq!(report.files_extracted(), None);
        assert_eq!(report.folders_created(), 0);
    }

    #[test]
    fn test_single_file_summary_counts_one_file() {
        let mut report = ExtractionReport::new("out");
        report.summary.size = Some(12);
        assert_eq!(report.files_extracted(), Some(1));
        assert_eq!(report.bytes_written(), Some(12));
    }

    #[test]
    fn test_reported_file_count() {
        let mut report = ExtractionReport::new("out");
        report.summary = OperationSummary {
            folders: Some(2),
            files: Some(5),
            size: Some(100),
            compressed: Some(80),
        };
        assert_eq!(report.files_extracted(), Some(5));
        assert_eq!(report.folders_created(), 2);
    }
}
