//! Archive listing through the engine.

use std::path::Path;

use log::debug;

use crate::ArchiveError;
use crate::Result;
use crate::engine::ArchiveEngine;
use crate::engine::EngineOutput;
use crate::parser::DetailedListing;
use crate::parser::detailed::reports_encrypted_archive;
use crate::parser::parse_detailed_listing;
use crate::parser::parse_listing_text;

/// Structured and display listings of one archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveListing {
    /// Parsed detailed listing.
    pub detailed: DetailedListing,
    /// Table text from the simple listing. Empty for the encrypted case.
    pub text: String,
}

/// Lists an archive: detailed listing first, then the simple listing for
/// display.
///
/// The simple listing is skipped when the archive turns out to have
/// encrypted headers.
///
/// # Errors
///
/// Returns [`ArchiveError::Execution`] carrying the tool output when either
/// listing exits abnormally, [`ArchiveError::Format`] when the output is
/// recognized as unsupported, and [`ArchiveError::Launch`] when the tool
/// cannot be started.
///
/// # Examples
///
/// ```no_run
/// use arcprobe_core::SevenZip;
/// use arcprobe_core::list_archive;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let listing = list_archive(&SevenZip::default(), Path::new("archive.zip"), "")?;
/// println!("{}", listing.text);
/// # Ok(())
/// # }
/// ```
pub fn list_archive<E: ArchiveEngine + ?Sized>(
    engine: &E,
    archive: &Path,
    password: &str,
) -> Result<ArchiveListing> {
    let detailed_output = engine.list_detailed(archive, password)?;

    // 7-Zip exits with status 2 when it cannot open an encrypted archive.
    if !detailed_output.success {
        if reports_encrypted_archive(&detailed_output.output) {
            debug!("{} has encrypted headers", archive.display());
            return Ok(ArchiveListing {
                detailed: DetailedListing::EncryptedArchive,
                text: String::new(),
            });
        }
        return Err(execution_error(detailed_output));
    }

    let detailed = parse_detailed_listing(&detailed_output.output)?;
    if detailed == DetailedListing::EncryptedArchive {
        return Ok(ArchiveListing {
            detailed,
            text: String::new(),
        });
    }

    let simple_output = engine.list_simple(archive, password)?;
    if !simple_output.success {
        return Err(execution_error(simple_output));
    }
    let text = parse_listing_text(&simple_output.output)?;

    Ok(ArchiveListing { detailed, text })
}

fn execution_error(output: EngineOutput) -> ArchiveError {
    ArchiveError::Execution {
        code: output.code,
        output: output.output,
    }
}
