//! Output formatter trait for CLI results.

use anyhow::Result;
use arcprobe_core::Archive;
use arcprobe_core::ExtractionReport;
use arcprobe_core::PasswordCheck;
use serde::Serialize;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the listing of an opened archive
    fn format_listing(&self, archive: &Archive, long: bool, human_readable: bool) -> Result<()>;

    /// Format archive properties and member metadata
    fn format_info(&self, archive: &Archive) -> Result<()>;

    /// Format the verdict of a password test
    fn format_password_check(&self, archive: &Path, check: PasswordCheck) -> Result<()>;

    /// Format extraction result
    fn format_extraction_result(&self, archive: &Path, report: &ExtractionReport) -> Result<()>;

    /// Format the error that ended `operation`
    fn format_error(&self, operation: &str, error: &anyhow::Error);

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> JsonOutput<()> {
        JsonOutput {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
