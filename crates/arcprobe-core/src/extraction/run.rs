//! Core extraction driver.

use std::path::Path;
use std::time::Instant;

use log::warn;

use crate::ArchiveError;
use crate::ExtractionReport;
use crate::Result;
use crate::engine::ArchiveEngine;
use crate::parser::OperationSummary;

/// Extracts `archive` into `destination` with `password`.
///
/// Existing files are overwritten. Success is decided solely by the
/// `Everything is Ok` line: the exit status is not consulted, and the whole
/// output is scanned even after a non-zero exit. An empty password means "no
/// password".
///
/// # Errors
///
/// Returns [`ArchiveError::Extraction`] carrying the full tool output when
/// success is not confirmed, and [`ArchiveError::Launch`] when the tool
/// cannot be started.
pub fn extract_with_engine<E: ArchiveEngine + ?Sized>(
    engine: &E,
    archive: &Path,
    destination: &Path,
    password: &str,
) -> Result<ExtractionReport> {
    let started = Instant::now();
    let output = engine.extract(archive, destination, password)?;
    let duration = started.elapsed();

    if !output.confirms_success() {
        warn!(
            "extraction of {} into {} was not confirmed (exit {:?})",
            archive.display(),
            destination.display(),
            output.code
        );
        return Err(ArchiveError::Extraction {
            output: output.output,
        });
    }

    let mut report = ExtractionReport::new(destination);
    report.used_password = !password.is_empty();
    report.summary = OperationSummary::scan(&output.output);
    report.duration = duration;
    report.output = output.output;
    Ok(report)
}
