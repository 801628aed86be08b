//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use arcprobe_core::Archive;
use arcprobe_core::ExtractionReport;
use arcprobe_core::PasswordCheck;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

type Properties<'a> = &'a BTreeMap<String, String>;

#[derive(Serialize)]
struct ArchiveOutput<'a> {
    archive: String,
    archive_type: &'a str,
    encrypted: bool,
    header: Properties<'a>,
    entries: Vec<Properties<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    listing: Option<&'a str>,
}

impl<'a> ArchiveOutput<'a> {
    fn new(archive: &'a Archive, listing: bool) -> Self {
        Self {
            archive: archive.path().display().to_string(),
            archive_type: archive.archive_type(),
            encrypted: archive.is_encrypted(),
            header: archive.header().as_map(),
            entries: archive.entries().iter().map(|e| e.as_map()).collect(),
            listing: listing.then(|| archive.listing()),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }

    fn verdict(check: PasswordCheck) -> &'static str {
        match check {
            PasswordCheck::Accepted => "accepted",
            PasswordCheck::WrongPassword => "wrong_password",
            PasswordCheck::Rejected => "rejected",
            PasswordCheck::NotApplicable => "not_applicable",
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_listing(&self, archive: &Archive, _long: bool, _human_readable: bool) -> Result<()> {
        let output = JsonOutput::success("list", ArchiveOutput::new(archive, true));
        Self::output(&output)
    }

    fn format_info(&self, archive: &Archive) -> Result<()> {
        let output = JsonOutput::success("info", ArchiveOutput::new(archive, false));
        Self::output(&output)
    }

    fn format_password_check(&self, archive: &Path, check: PasswordCheck) -> Result<()> {
        #[derive(Serialize)]
        struct PasswordOutput {
            archive: String,
            verdict: &'static str,
            accepted: bool,
        }

        let data = PasswordOutput {
            archive: archive.display().to_string(),
            verdict: Self::verdict(check),
            accepted: check.is_accepted(),
        };

        let output = JsonOutput::success("test", data);
        Self::output(&output)
    }

    fn format_extraction_result(&self, archive: &Path, report: &ExtractionReport) -> Result<()> {
        #[derive(Serialize)]
        struct ExtractionOutput {
            archive: String,
            destination: String,
            files_extracted: Option<u64>,
            directories_created: u64,
            bytes_written: Option<u64>,
            compressed_size: Option<u64>,
            used_password: bool,
            duration_ms: u128,
        }

        let data = ExtractionOutput {
            archive: archive.display().to_string(),
            destination: report.destination.display().to_string(),
            files_extracted: report.files_extracted(),
            directories_created: report.folders_created(),
            bytes_written: report.bytes_written(),
            compressed_size: report.summary.compressed,
            used_password: report.used_password,
            duration_ms: report.duration.as_millis(),
        };

        let output = JsonOutput::success("extract", data);
        Self::output(&output)
    }

    fn format_error(&self, operation: &str, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error(operation, format!("{error:?}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}
