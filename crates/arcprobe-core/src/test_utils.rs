//! Test utilities: a scripted engine and captured 7-Zip output samples.
//!
//! [`ScriptedEngine`] answers each engine operation with a canned
//! [`EngineOutput`] and records the calls it receives, so archive workflows
//! can be tested without a 7-Zip binary.

use std::cell::RefCell;
use std::path::Path;
use std::path::PathBuf;

use crate::ArchiveError;
use crate::Result;
use crate::engine::ArchiveEngine;
use crate::engine::EngineOutput;

/// Captured output of `7zz` 23.01 for the sample archives used in tests.
pub mod fixtures {
    /// `l -slt` of a zip with one folder and two files.
    pub const ZIP_DETAILED: &str = include_str!("../tests/fixtures/zip_detailed.txt");
    /// `l` of the same zip.
    pub const ZIP_SIMPLE: &str = include_str!("../tests/fixtures/zip_simple.txt");
    /// `l -slt` of a 7z archive with encrypted headers (exit status 2).
    pub const ENCRYPTED_HEADERS_DETAILED: &str =
        include_str!("../tests/fixtures/encrypted_headers_detailed.txt");
    /// `l -slt` of a zip whose members are encrypted.
    pub const ENCRYPTED_ENTRIES_DETAILED: &str =
        include_str!("../tests/fixtures/encrypted_entries_detailed.txt");
    /// `l` of the same zip.
    pub const ENCRYPTED_ENTRIES_SIMPLE: &str =
        include_str!("../tests/fixtures/encrypted_entries_simple.txt");
    /// `l -slt` of a file 7-Zip cannot open (exit status 2).
    pub const NOT_AN_ARCHIVE: &str = include_str!("../tests/fixtures/not_an_archive.txt");
    /// `t` with the right password.
    pub const TEST_OK: &str = include_str!("../tests/fixtures/test_ok.txt");
    /// `t` with a wrong password (exit status 2).
    pub const TEST_WRONG_PASSWORD: &str =
        include_str!("../tests/fixtures/test_wrong_password.txt");
    /// `x` of the plain zip.
    pub const EXTRACT_OK: &str = include_str!("../tests/fixtures/extract_ok.txt");
    /// `x` with a wrong password (exit status 2).
    pub const EXTRACT_WRONG_PASSWORD: &str =
        include_str!("../tests/fixtures/extract_wrong_password.txt");
}

/// One recorded engine call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineCall {
    /// `"list_detailed"`, `"list_simple"`, `"test"` or `"extract"`.
    pub operation: &'static str,
    /// Archive path passed to the engine.
    pub archive: PathBuf,
    /// Password passed to the engine.
    pub password: String,
    /// Destination, for extractions.
    pub destination: Option<PathBuf>,
}

/// Engine answering from canned outputs.
///
/// An operation without a scripted output fails as if the binary were
/// missing. When [`ScriptedEngine::with_password`] is set, `test` answers
/// with [`fixtures::TEST_OK`] for that password and
/// [`fixtures::TEST_WRONG_PASSWORD`] (exit 2) for any other.
///
/// # Examples
///
/// ```
/// use arcprobe_core::Archive;
/// use arcprobe_core::EngineOutput;
/// use arcprobe_core::test_utils::ScriptedEngine;
/// use arcprobe_core::test_utils::fixtures;
///
/// let engine = ScriptedEngine::new()
///     .with_detailed(EngineOutput::ok(fixtures::ZIP_DETAILED))
///     .with_simple(EngineOutput::ok(fixtures::ZIP_SIMPLE));
/// let archive = Archive::open_with(engine, "docs.zip", None).unwrap();
/// assert_eq!(archive.archive_type(), "zip");
/// ```
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    detailed: Option<EngineOutput>,
    simple: Option<EngineOutput>,
    test: Option<EngineOutput>,
    extract: Option<EngineOutput>,
    password: Option<String>,
    calls: RefCell<Vec<EngineCall>>,
}

impl ScriptedEngine {
    /// Creates an engine with nothing scripted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the detailed listing.
    #[must_use]
    pub fn with_detailed(mut self, output: EngineOutput) -> Self {
        self.detailed = Some(output);
        self
    }

    /// Scripts the simple listing.
    #[must_use]
    pub fn with_simple(mut self, output: EngineOutput) -> Self {
        self.simple = Some(output);
        self
    }

    /// Scripts the integrity test.
    #[must_use]
    pub fn with_test(mut self, output: EngineOutput) -> Self {
        self.test = Some(output);
        self
    }

    /// Scripts the extraction.
    #[must_use]
    pub fn with_extract(mut self, output: EngineOutput) -> Self {
        self.extract = Some(output);
        self
    }

    /// Makes `test` accept exactly `password`.
    #[must_use]
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = Some(password.to_string());
        self
    }

    /// Returns the calls received so far.
    #[must_use]
    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.borrow().clone()
    }

    fn answer(
        &self,
        operation: &'static str,
        archive: &Path,
        password: &str,
        destination: Option<&Path>,
        scripted: Option<&EngineOutput>,
    ) -> Result<EngineOutput> {
        self.calls.borrow_mut().push(EngineCall {
            operation,
            archive: archive.to_path_buf(),
            password: password.to_string(),
            destination: destination.map(Path::to_path_buf),
        });
        scripted.cloned().ok_or_else(|| ArchiveError::Launch {
            program: PathBuf::from("7zz"),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no scripted output for {operation}"),
            ),
        })
    }
}

impl ArchiveEngine for ScriptedEngine {
    fn list_detailed(&self, archive: &Path, password: &str) -> Result<EngineOutput> {
        self.answer("list_detailed", archive, password, None, self.detailed.as_ref())
    }

    fn list_simple(&self, archive: &Path, password: &str) -> Result<EngineOutput> {
        self.answer("list_simple", archive, password, None, self.simple.as_ref())
    }

    fn test(&self, archive: &Path, password: &str) -> Result<EngineOutput> {
        let by_password = self.password.as_ref().map(|expected| {
            if expected == password {
                EngineOutput::ok(fixtures::TEST_OK)
            } else {
                EngineOutput::failed(2, fixtures::TEST_WRONG_PASSWORD)
            }
        });
        let scripted = by_password.as_ref().or(self.test.as_ref());
        self.answer("test", archive, password, None, scripted)
    }

    fn extract(&self, archive: &Path, destination: &Path, password: &str) -> Result<EngineOutput> {
        self.answer(
            "extract",
            archive,
            password,
            Some(destination),
            self.extract.as_ref(),
        )
    }
}
