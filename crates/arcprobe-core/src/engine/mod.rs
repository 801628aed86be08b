//! Access to the external archive engine.
//!
//! Everything that understands real archive formats lives in the 7-Zip
//! binary. This module models it as the [`ArchiveEngine`] capability: each
//! operation takes structured arguments and hands back the exit status and
//! captured output of one invocation. Parsing happens elsewhere, against
//! [`EngineOutput`] only, so tests can substitute a scripted engine.

pub mod sevenzip;

use std::path::Path;
use std::process::ExitStatus;

use crate::Result;
use crate::parser::lines::split_lines;

pub use sevenzip::SevenZip;

/// Success confirmation printed by 7-Zip after a test or extraction.
pub const SUCCESS_LINE: &str = "Everything is Ok";

/// Exit status and buffered output of one engine invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    /// Whether the process exited successfully.
    pub success: bool,
    /// Standard output and standard error, in the order they were written.
    pub output: String,
}

impl EngineOutput {
    /// Output of an invocation that exited with status zero.
    #[must_use]
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            success: true,
            output: output.into(),
        }
    }

    /// Output of an invocation that exited with the given non-zero status.
    #[must_use]
    pub fn failed(code: i32, output: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            success: false,
            output: output.into(),
        }
    }

    /// Returns the captured output split into lines.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        split_lines(&self.output)
    }

    /// Returns `true` if some output line equals [`SUCCESS_LINE`].
    #[must_use]
    pub fn confirms_success(&self) -> bool {
        self.lines().contains(&SUCCESS_LINE)
    }

    /// Builds the output of a finished process from its exit status and the
    /// bytes read from its shared stdout/stderr pipe. Invalid UTF-8 is
    /// replaced.
    #[must_use]
    pub fn from_status(status: ExitStatus, combined: &[u8]) -> Self {
        Self {
            code: status.code(),
            success: status.success(),
            output: String::from_utf8_lossy(combined).into_owned(),
        }
    }
}

/// The operations this crate needs from an archive engine.
///
/// A password is always passed; the empty string means "no password" and
/// still suppresses the engine's interactive prompt.
pub trait ArchiveEngine {
    /// Runs the key/value ("technical") listing of `archive`.
    fn list_detailed(&self, archive: &Path, password: &str) -> Result<EngineOutput>;

    /// Runs the human-readable table listing of `archive`.
    fn list_simple(&self, archive: &Path, password: &str) -> Result<EngineOutput>;

    /// Runs an integrity test of `archive` with `password`.
    fn test(&self, archive: &Path, password: &str) -> Result<EngineOutput>;

    /// Extracts `archive` into `destination`, overwriting existing files.
    fn extract(&self, archive: &Path, destination: &Path, password: &str) -> Result<EngineOutput>;
}
