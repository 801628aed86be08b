//! Error conversion utilities for CLI.
//!
//! Converts arcprobe-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use arcprobe_core::ArchiveError;
use std::path::Path;

const WRONG_PASSWORD: &str = "Wrong password";

/// Converts `ArchiveError` to user-friendly anyhow error with context
pub fn convert_archive_error(err: ArchiveError, archive: &Path) -> anyhow::Error {
    match err {
        ArchiveError::Launch { program, source } => {
            anyhow!(
                "Could not run '{}': {}\n\
                 HINT: Install 7-Zip, or point --sevenzip (or ARCPROBE_7Z) at the 7zz binary.",
                program.display(),
                source
            )
        }
        ArchiveError::Execution { ref output, .. } => {
            anyhow!(
                "7-Zip could not read '{}' ({})\n{}\
                 HINT: The file may not be an archive, or it may be damaged.",
                archive.display(),
                err,
                tool_errors(output)
            )
        }
        ArchiveError::Format(reason) => {
            anyhow!(
                "Unsupported archive '{}': {}\n\
                 HINT: 7-Zip does not recognize this file as an archive it can list.",
                archive.display(),
                reason
            )
        }
        ArchiveError::Extraction { output } => {
            let hint = if output.contains(WRONG_PASSWORD) {
                "HINT: The password is wrong. Check it with `arcprobe test`."
            } else {
                "HINT: If the archive is encrypted, pass the password with --password."
            };
            anyhow!(
                "Extraction of '{}' failed\n{}{}",
                archive.display(),
                tool_errors(&output),
                hint
            )
        }
    }
}

/// Adds context to a generic error about archive operations
pub fn add_archive_context<T>(
    result: Result<T, ArchiveError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, archive))
}

/// `ERROR:` lines of the tool output, or its last non-blank line when it
/// printed none. Each line is newline-terminated.
fn tool_errors(output: &str) -> String {
    let errors: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with("ERROR:"))
        .collect();

    let lines = if errors.is_empty() {
        output
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .into_iter()
            .collect()
    } else {
        errors
    };

    lines.iter().map(|line| format!("  {line}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_convert_launch_error() {
        let err = ArchiveError::Launch {
            program: PathBuf::from("7zz"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let converted = convert_archive_error(err, Path::new("a.7z"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("Could not run '7zz'"));
        assert!(msg.contains("--sevenzip"));
    }

    #[test]
    fn test_convert_execution_error_keeps_tool_errors() {
        let err = ArchiveError::Execution {
            code: Some(2),
            output: "Scanning\nERROR: photo.jpg : Can not open the file as archive\n\nErrors: 1\n"
                .to_string(),
        };
        let converted = convert_archive_error(err, Path::new("photo.jpg"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("exited with status 2"));
        assert!(msg.contains("  ERROR: photo.jpg : Can not open the file as archive\n"));
        assert!(!msg.contains("Errors: 1"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_format_error() {
        let err = ArchiveError::Format("ERROR: a.7z: Unsupported Method".to_string());
        let converted = convert_archive_error(err, Path::new("a.7z"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("Unsupported archive 'a.7z'"));
        assert!(msg.contains("Unsupported Method"));
    }

    #[test]
    fn test_convert_wrong_password_extraction() {
        let err = ArchiveError::Extraction {
            output: "ERROR: Wrong password : notes.txt\n\nSub items Errors: 1\n".to_string(),
        };
        let converted = convert_archive_error(err, Path::new("secret.7z"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("ERROR: Wrong password : notes.txt"));
        assert!(msg.contains("arcprobe test"));
    }

    #[test]
    fn test_tool_errors_falls_back_to_last_line() {
        assert_eq!(tool_errors("a\nCan't open\n\n"), "  Can't open\n");
        assert_eq!(tool_errors(""), "");
    }
}
