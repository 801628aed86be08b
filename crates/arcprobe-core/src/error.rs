//! Error types for archive inspection and extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while driving the 7-Zip tool.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The tool binary could not be started, or its output could not be
    /// collected.
    #[error("failed to launch {}: {source}", program.display())]
    Launch {
        /// Program that was invoked.
        program: PathBuf,
        /// Underlying spawn or pipe error.
        #[source]
        source: std::io::Error,
    },

    /// The tool ran but exited abnormally where that always means failure.
    #[error("{}", describe_exit(*code))]
    Execution {
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
        /// Combined output of the failed invocation.
        output: String,
    },

    /// The tool reported a condition the parser recognizes as unsupported.
    #[error("unsupported archive: {0}")]
    Format(String),

    /// Extraction ran but never confirmed success.
    #[error("extraction failed")]
    Extraction {
        /// Combined output of the extraction command.
        output: String,
    },
}

fn describe_exit(code: Option<i32>) -> String {
    code.map_or_else(
        || "archive tool terminated by signal".to_string(),
        |code| format!("archive tool exited with status {code}"),
    )
}

impl ArchiveError {
    /// Returns the raw tool output carried by this error, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcprobe_core::ArchiveError;
    ///
    /// let err = ArchiveError::Extraction {
    ///     output: "ERROR: Data Error".to_string(),
    /// };
    /// assert_eq!(err.diagnostics(), Some("ERROR: Data Error"));
    ///
    /// let err = ArchiveError::Format("no archive type reported".to_string());
    /// assert_eq!(err.diagnostics(), None);
    /// ```
    #[must_use]
    pub fn diagnostics(&self) -> Option<&str> {
        match self {
            Self::Execution { output, .. } | Self::Extraction { output } => Some(output),
            _ => None,
        }
    }

    /// Returns `true` if the tool's output could not be accepted as an archive
    /// listing.
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Returns `true` if retrying with different inputs may succeed.
    ///
    /// A failed extraction can be retried with another password or
    /// destination. A missing binary or an unsupported archive cannot.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Extraction { .. } | Self::Execution { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_error_display() {
        let err = ArchiveError::Execution {
            code: Some(2),
            output: "boom".into(),
        };
        assert_eq!(err.to_string(), "archive tool exited with status 2");

        let err = ArchiveError::Execution {
            code: None,
            output: String::new(),
        };
        assert!(err.to_string().contains("signal"));
    }

    #[test]
    fn test_format_error_carries_line() {
        let err = ArchiveError::Format("ERROR: archive.7z: Unsupported Method".into());
        assert!(err.is_format_error());
        assert!(err.to_string().contains("Unsupported Method"));
        assert_eq!(err.diagnostics(), None);
    }

    #[test]
    fn test_launch_error_source_chain() {
        use std::error::Error;

        let err = ArchiveError::Launch {
            program: PathBuf::from("7zz"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("7zz"));
        assert!(err.source().is_some());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_diagnostics() {
        let err = ArchiveError::Execution {
            code: Some(2),
            output: "full output".into(),
        };
        assert_eq!(err.diagnostics(), Some("full output"));
        assert!(err.is_recoverable());

        let err = ArchiveError::Extraction {
            output: "no confirmation".into(),
        };
        assert_eq!(err.diagnostics(), Some("no confirmation"));
        assert!(!err.is_format_error());
    }
}
