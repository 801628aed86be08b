//! High-level one-shot functions.

use std::path::Path;

use crate::Archive;
use crate::EngineConfig;
use crate::ExtractionReport;
use crate::Result;
use crate::engine::SevenZip;
use crate::extraction::extract_with_engine;

/// Opens an archive with the given engine configuration.
///
/// # Arguments
///
/// * `archive_path` - Path to the archive file
/// * `password` - Password for archives with encrypted headers, if known
/// * `config` - Which 7-Zip binary to run
///
/// # Errors
///
/// Returns an error if:
/// - The 7-Zip binary cannot be started
/// - The listing exits abnormally
/// - The file is not an archive 7-Zip supports
///
/// # Examples
///
/// ```no_run
/// use arcprobe_core::EngineConfig;
/// use arcprobe_core::open_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let archive = open_archive("archive.zip", None, &EngineConfig::default())?;
/// for entry in archive.entries() {
///     println!("{}", entry.path().unwrap_or("?"));
/// }
/// # Ok(())
/// # }
/// ```
pub fn open_archive<P: AsRef<Path>>(
    archive_path: P,
    password: Option<&str>,
    config: &EngineConfig,
) -> Result<Archive> {
    Archive::open_with(SevenZip::new(config.clone()), archive_path, password)
}

/// Extracts an archive without listing it first.
///
/// Existing files in `output_dir` are overwritten. An empty password means
/// "no password".
///
/// # Errors
///
/// Returns [`crate::ArchiveError::Extraction`] carrying the tool output when
/// 7-Zip does not confirm success, or [`crate::ArchiveError::Launch`] when
/// it cannot be started.
///
/// # Examples
///
/// ```no_run
/// use arcprobe_core::EngineConfig;
/// use arcprobe_core::extract_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = extract_archive("archive.7z", "/tmp/output", "", &EngineConfig::default())?;
/// println!("Extracted {:?} files", report.files_extracted());
/// # Ok(())
/// # }
/// ```
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    output_dir: Q,
    password: &str,
    config: &EngineConfig,
) -> Result<ExtractionReport> {
    let engine = SevenZip::new(config.clone());
    extract_with_engine(
        &engine,
        archive_path.as_ref(),
        output_dir.as_ref(),
        password,
    )
}
