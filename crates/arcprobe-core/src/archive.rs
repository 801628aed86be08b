//! Archive handle and builder.

use std::path::Path;
use std::path::PathBuf;

use log::debug;
use log::warn;

use crate::EngineConfig;
use crate::ExtractionReport;
use crate::Result;
use crate::engine::ArchiveEngine;
use crate::engine::SevenZip;
use crate::extraction::extract_with_engine;
use crate::inspection::PasswordCheck;
use crate::inspection::interpret_test_output;
use crate::inspection::list_archive;
use crate::parser::DetailedListing;
use crate::parser::detailed::ENCRYPTED_ARCHIVE_TYPE;
use crate::types::Entry;
use crate::types::Header;

/// An opened archive: its listing plus the engine used to test and extract.
///
/// Opening runs the detailed listing and, when the archive is readable, the
/// simple listing. After that the metadata is read-only. Password tests and
/// extractions take `&mut self` because they record the accepted password
/// and the output of failed runs.
///
/// If the archive headers are encrypted and no password was given, opening
/// still succeeds: [`Archive::archive_type`] is `"encrypted archive"`,
/// [`Archive::is_encrypted`] is `true`, and header, entries and listing are
/// empty.
///
/// # Examples
///
/// ```no_run
/// use arcprobe_core::Archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut archive = Archive::open("docs.zip")?;
/// println!("{} ({} entries)", archive.archive_type(), archive.entries().len());
/// println!("{}", archive.listing());
///
/// if let Err(err) = archive.extract_to("/tmp/docs") {
///     eprintln!("{err}");
///     eprintln!("{}", archive.diagnostics().unwrap_or_default());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Archive<E = SevenZip> {
    path: PathBuf,
    archive_type: String,
    encrypted: bool,
    header: Header,
    entries: Vec<Entry>,
    listing: String,
    password: Option<String>,
    diagnostics: Option<String>,
    engine: E,
}

impl Archive<SevenZip> {
    /// Opens an archive with the default `7zz` binary and no password.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot be started, exits abnormally, or
    /// reports the file as unsupported.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(SevenZip::default(), path, None)
    }

    /// Opens an archive whose headers may be encrypted.
    ///
    /// The password is passed to both listing passes, so a correct password
    /// yields the full header, entries and listing.
    ///
    /// # Errors
    ///
    /// Same as [`Archive::open`].
    pub fn open_with_password<P: AsRef<Path>>(path: P, password: &str) -> Result<Self> {
        Self::open_with(SevenZip::default(), path, Some(password))
    }
}

impl<E: ArchiveEngine> Archive<E> {
    /// Opens an archive through `engine`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ArchiveError::Execution`] with the tool output when a
    /// listing exits abnormally, [`crate::ArchiveError::Format`] for an
    /// unsupported archive or a header without type, and
    /// [`crate::ArchiveError::Launch`] when the tool cannot be started.
    pub fn open_with<P: AsRef<Path>>(engine: E, path: P, password: Option<&str>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let listing = list_archive(&engine, &path, password.unwrap_or_default())?;

        let mut archive = Self {
            path,
            archive_type: String::new(),
            encrypted: false,
            header: Header::new(),
            entries: Vec::new(),
            listing: listing.text,
            password: None,
            diagnostics: None,
            engine,
        };

        match listing.detailed {
            DetailedListing::EncryptedArchive => {
                archive.archive_type = ENCRYPTED_ARCHIVE_TYPE.to_string();
                archive.encrypted = true;
            }
            DetailedListing::Listed(meta) => {
                archive.archive_type = meta.archive_type;
                archive.encrypted = meta.encrypted;
                archive.header = meta.header;
                archive.entries = meta.entries;
            }
        }

        debug!(
            "opened {} as {:?} (encrypted: {}, {} entries)",
            archive.path.display(),
            archive.archive_type,
            archive.encrypted,
            archive.entries.len()
        );
        Ok(archive)
    }

    /// Path of the archive file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Archive type reported by the tool.
    #[must_use]
    pub fn archive_type(&self) -> &str {
        &self.archive_type
    }

    /// Returns `true` if the headers or any member are encrypted.
    #[must_use]
    pub fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    /// Archive-level properties.
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Members in listing order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Human-readable table printed by the simple listing.
    #[must_use]
    pub fn listing(&self) -> &str {
        &self.listing
    }

    /// Password accepted by the last successful [`Archive::test_password`].
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Raw tool output of the last failed password test or extraction.
    #[must_use]
    pub fn diagnostics(&self) -> Option<&str> {
        self.diagnostics.as_deref()
    }

    /// Returns the engine.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Tests `candidate` and reports why it was or was not accepted.
    ///
    /// Nothing is run unless the archive type is known and the archive is
    /// encrypted. An accepted password is kept for [`Archive::extract_to`].
    pub fn check_password(&mut self, candidate: &str) -> PasswordCheck {
        if self.archive_type.is_empty() || !self.encrypted {
            return PasswordCheck::NotApplicable;
        }

        let output = match self.engine.test(&self.path, candidate) {
            Ok(output) => output,
            Err(err) => {
                warn!("password test of {} failed: {err}", self.path.display());
                return PasswordCheck::Rejected;
            }
        };

        let verdict = interpret_test_output(&output);
        if verdict.is_accepted() {
            self.password = Some(candidate.to_string());
        } else {
            self.diagnostics = Some(output.output);
        }
        debug!("password test of {}: {verdict}", self.path.display());
        verdict
    }

    /// Returns `true` only if the archive is encrypted and the tool confirmed
    /// `candidate`. Every failure, including a tool that cannot be started,
    /// yields `false`.
    pub fn test_password(&mut self, candidate: &str) -> bool {
        self.check_password(candidate).is_accepted()
    }

    /// Extracts into `destination` with the password accepted by
    /// [`Archive::test_password`], or with no password.
    ///
    /// # Errors
    ///
    /// See [`Archive::extract_with_password`].
    pub fn extract_to<P: AsRef<Path>>(&mut self, destination: P) -> Result<ExtractionReport> {
        let password = self.password.clone().unwrap_or_default();
        self.extract_with_password(destination, &password)
    }

    /// Extracts into `destination` with `password` (empty means none),
    /// overwriting existing files.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ArchiveError::Extraction`] with the full tool output
    /// when the tool does not confirm success; the same output is kept as
    /// [`Archive::diagnostics`]. Returns [`crate::ArchiveError::Launch`] when
    /// the tool cannot be started.
    pub fn extract_with_password<P: AsRef<Path>>(
        &mut self,
        destination: P,
        password: &str,
    ) -> Result<ExtractionReport> {
        let result =
            extract_with_engine(&self.engine, &self.path, destination.as_ref(), password);
        if let Err(err) = &result
            && let Some(output) = err.diagnostics()
        {
            self.diagnostics = Some(output.to_string());
        }
        result
    }
}

/// Builder for opening an archive with a configured 7-Zip binary.
///
/// # Examples
///
/// ```no_run
/// use arcprobe_core::ArchiveBuilder;
/// use arcprobe_core::EngineConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let archive = ArchiveBuilder::new()
///     .archive("secret.7z")
///     .password("hunter2")
///     .config(EngineConfig::new("/usr/local/bin/7zz"))
///     .open()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ArchiveBuilder {
    archive_path: Option<PathBuf>,
    password: Option<String>,
    config: Option<EngineConfig>,
}

impl ArchiveBuilder {
    /// Creates a new `ArchiveBuilder`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the archive file path.
    #[must_use]
    pub fn archive<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.archive_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the password passed to the listing commands.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the engine configuration. Defaults to [`EngineConfig::from_env`].
    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Opens the archive.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ArchiveError::Format`] if no archive path was set,
    /// otherwise the errors of [`Archive::open_with`].
    pub fn open(self) -> Result<Archive> {
        let archive_path = self
            .archive_path
            .ok_or_else(|| crate::ArchiveError::Format("archive path not set".to_string()))?;
        let config = self.config.unwrap_or_else(EngineConfig::from_env);

        Archive::open_with(
            SevenZip::new(config),
            archive_path,
            self.password.as_deref(),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ArchiveError;
    use crate::engine::EngineOutput;
    use crate::test_utils::ScriptedEngine;
    use crate::test_utils::fixtures;

    fn plain_zip() -> ScriptedEngine {
        ScriptedEngine::new()
            .with_detailed(EngineOutput::ok(fixtures::ZIP_DETAILED))
            .with_simple(EngineOutput::ok(fixtures::ZIP_SIMPLE))
    }

    fn encrypted_headers() -> ScriptedEngine {
        ScriptedEngine::new()
            .with_detailed(EngineOutput::failed(2, fixtures::ENCRYPTED_HEADERS_DETAILED))
    }

    #[test]
    fn test_open_plain_zip() {
        let archive = Archive::open_with(plain_zip(), "docs.zip", None).unwrap();
        assert_eq!(archive.path(), Path::new("docs.zip"));
        assert_eq!(archive.archive_type(), "zip");
        assert!(!archive.is_encrypted());
        assert_eq!(archive.header().get("Physical Size"), Some("516"));
        assert_eq!(archive.entries().len(), 3);
        assert!(archive.entries()[0].is_dir());
        assert!(archive.listing().contains("2 files, 1 folders"));
        assert_eq!(archive.password(), None);
        assert_eq!(archive.diagnostics(), None);
    }

    #[test]
    fn test_open_encrypted_headers() {
        let archive = Archive::open_with(encrypted_headers(), "secret.7z", None).unwrap();
        assert_eq!(archive.archive_type(), "encrypted archive");
        assert!(archive.is_encrypted());
        assert!(archive.header().is_empty());
        assert!(archive.entries().is_empty());
        assert!(archive.listing().is_empty());
    }

    #[test]
    fn test_password_not_tested_for_plain_archive() {
        let engine = plain_zip().with_password("pw");
        let mut archive = Archive::open_with(engine, "docs.zip", None).unwrap();
        assert_eq!(archive.check_password("pw"), PasswordCheck::NotApplicable);
        assert!(!archive.test_password("pw"));
        assert!(archive.engine().calls().iter().all(|c| c.operation != "test"));
    }

    #[test]
    fn test_accepted_password_is_kept() {
        let engine = encrypted_headers().with_password("hunter2");
        let mut archive = Archive::open_with(engine, "secret.7z", None).unwrap();

        assert!(!archive.test_password("wrong"));
        assert_eq!(archive.password(), None);
        assert!(archive.diagnostics().unwrap().contains("Wrong password"));

        assert!(archive.test_password("hunter2"));
        assert_eq!(archive.password(), Some("hunter2"));
    }

    #[test]
    fn test_launch_failure_collapses_to_false() {
        let mut archive = Archive::open_with(encrypted_headers(), "secret.7z", None).unwrap();
        assert_eq!(archive.check_password("pw"), PasswordCheck::Rejected);
        assert!(!archive.test_password("pw"));
    }

    #[test]
    fn test_extract_to_reuses_accepted_password() {
        let engine = encrypted_headers()
            .with_password("hunter2")
            .with_extract(EngineOutput::ok(fixtures::EXTRACT_OK));
        let mut archive = Archive::open_with(engine, "secret.7z", None).unwrap();
        assert!(archive.test_password("hunter2"));

        let report = archive.extract_to("out").unwrap();
        assert!(report.used_password);

        let calls = archive.engine().calls();
        let extract = calls.iter().find(|c| c.operation == "extract").unwrap();
        assert_eq!(extract.password, "hunter2");
    }

    #[test]
    fn test_failed_extraction_keeps_diagnostics() {
        let engine =
            plain_zip().with_extract(EngineOutput::failed(2, fixtures::EXTRACT_WRONG_PASSWORD));
        let mut archive = Archive::open_with(engine, "docs.zip", None).unwrap();

        let err = archive.extract_with_password("out", "bad").unwrap_err();
        assert!(matches!(err, ArchiveError::Extraction { .. }));
        assert_eq!(archive.diagnostics(), Some(fixtures::EXTRACT_WRONG_PASSWORD));
    }

    #[test]
    fn test_builder_missing_path() {
        let result = ArchiveBuilder::new().password("pw").open();
        assert!(result.unwrap_err().is_format_error());
    }

    #[test]
    fn test_builder_fields() {
        let builder = ArchiveBuilder::new()
            .archive("a.7z")
            .password("pw")
            .config(EngineConfig::new("7z"));
        assert_eq!(builder.archive_path.as_deref(), Some(Path::new("a.7z")));
        assert_eq!(builder.password.as_deref(), Some("pw"));
        assert_eq!(builder.config, Some(EngineConfig::new("7z")));
    }
}
