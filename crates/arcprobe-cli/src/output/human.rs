//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use arcprobe_core::Archive;
use arcprobe_core::Entry;
use arcprobe_core::ExtractionReport;
use arcprobe_core::PasswordCheck;
use console::Term;
use console::style;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: u64) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }

    fn yes_no(flag: bool) -> &'static str {
        if flag { "yes" } else { "no" }
    }

    fn success_line(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }

    fn entry_line(entry: &Entry, human_readable: bool) -> String {
        let type_char = if entry.is_dir() { "d" } else { "-" };
        let lock_char = if entry.is_encrypted() { "*" } else { " " };
        let size_str = match entry.size() {
            Some(size) if human_readable => Self::format_size(size),
            Some(size) => size.to_string(),
            None => "-".to_string(),
        };

        format!(
            "{type_char}{lock_char} {:>12}  {:<19}  {}",
            size_str,
            entry.modified().map_or("", |m| m.split('.').next().unwrap_or(m)),
            entry.path().unwrap_or("?")
        )
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_listing(&self, archive: &Archive, long: bool, human_readable: bool) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if archive.entries().is_empty() && archive.listing().is_empty() && archive.is_encrypted() {
            self.format_warning("archive headers are encrypted; pass --password to list members");
            return Ok(());
        }

        if !long {
            for line in archive.listing().lines() {
                let _ = self.term.write_line(line);
            }
            return Ok(());
        }

        let mut files = 0_u64;
        let mut total_size = 0_u64;
        for entry in archive.entries() {
            let _ = self
                .term
                .write_line(&Self::entry_line(entry, human_readable));
            if !entry.is_dir() {
                files += 1;
                total_size += entry.size().unwrap_or(0);
            }
        }

        let _ = self.term.write_line("");
        let _ = self.term.write_line(&format!(
            "Total: {} files, {}",
            Self::format_number(files),
            Self::format_size(total_size)
        ));

        Ok(())
    }

    fn format_info(&self, archive: &Archive) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let _ = self
            .term
            .write_line(&format!("Archive: {}", archive.path().display()));
        let _ = self
            .term
            .write_line(&format!("  Type:       {}", archive.archive_type()));
        let _ = self.term.write_line(&format!(
            "  Encrypted:  {}",
            Self::yes_no(archive.is_encrypted())
        ));
        let _ = self.term.write_line(&format!(
            "  Members:    {}",
            Self::format_number(archive.entries().len() as u64)
        ));

        if !archive.header().is_empty() {
            let _ = self.term.write_line("");
            let _ = self.term.write_line("Properties:");
            for (key, value) in archive.header().iter() {
                let _ = self.term.write_line(&format!("  {key} = {value}"));
            }
        }

        if self.verbose {
            for entry in archive.entries() {
                let _ = self.term.write_line("");
                for (key, value) in entry.iter() {
                    let _ = self.term.write_line(&format!("  {key} = {value}"));
                }
            }
        }

        Ok(())
    }

    fn format_password_check(&self, archive: &Path, check: PasswordCheck) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        match check {
            PasswordCheck::Accepted => {
                self.success_line(&format!("Password accepted for {}", archive.display()));
            }
            PasswordCheck::NotApplicable => {
                self.format_warning(&format!(
                    "{} is not encrypted; nothing to test",
                    archive.display()
                ));
            }
            PasswordCheck::WrongPassword | PasswordCheck::Rejected => {}
        }

        Ok(())
    }

    fn format_extraction_result(&self, archive: &Path, report: &ExtractionReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.success_line("Extraction complete");

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Archive: {}", archive.display()));
        }
        let _ = self.term.write_line(&format!(
            "  Destination: {}",
            report.destination.display()
        ));
        if let Some(files) = report.files_extracted() {
            let _ = self.term.write_line(&format!(
                "  Files extracted: {}",
                Self::format_number(files)
            ));
        }
        let _ = self
            .term
            .write_line(&format!("  Directories: {}", report.folders_created()));
        if let Some(bytes) = report.bytes_written() {
            let _ = self
                .term
                .write_line(&format!("  Total size: {}", Self::format_size(bytes)));
        }

        if self.verbose {
            let _ = self.term.write_line(&format!(
                "  Password: {}",
                Self::yes_no(report.used_password)
            ));
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", report.duration));
        }

        Ok(())
    }

    fn format_error(&self, _operation: &str, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("WARNING: {message}"));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use arcprobe_core::DetailedListing;
    use arcprobe_core::parse_detailed_listing;

    fn entries(body: &str) -> Vec<Entry> {
        let output = format!("--\nPath = a.zip\nType = zip\n\n----------\n{body}");
        match parse_detailed_listing(&output).unwrap() {
            DetailedListing::Listed(meta) => meta.entries,
            DetailedListing::EncryptedArchive => panic!("unexpected encrypted sentinel"),
        }
    }

    #[test]
    fn test_format_size() {
        assert_eq!(HumanFormatter::format_size(0), "0 B");
        assert_eq!(HumanFormatter::format_size(1023), "1023 B");
        assert_eq!(HumanFormatter::format_size(1536), "1.5 KB");
        assert_eq!(HumanFormatter::format_size(2 * 1024 * 1024), "2.0 MB");
        assert_eq!(HumanFormatter::format_size(1536 * 1024 * 1024), "1.5 GB");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(HumanFormatter::format_number(0), "0");
        assert_eq!(HumanFormatter::format_number(999), "999");
        assert_eq!(HumanFormatter::format_number(1234), "1,234");
        assert_eq!(HumanFormatter::format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn test_entry_line_file() {
        let entries = entries(
            "Path = docs/readme.txt\nSize = 2048\nModified = 2024-03-01 09:15:10.0000000\n\
             Encrypted = +\n\n",
        );
        let line = HumanFormatter::entry_line(&entries[0], true);
        assert!(line.starts_with("-* "));
        assert!(line.contains("2.0 KB"));
        assert!(line.contains("2024-03-01 09:15:10  docs/readme.txt"));
    }

    #[test]
    fn test_entry_line_directory_without_size() {
        let entries = entries("Path = docs\nFolder = +\n\n");
        let line = HumanFormatter::entry_line(&entries[0], false);
        assert!(line.starts_with("d  "));
        assert!(line.contains(" - "));
        assert!(line.ends_with("docs"));
    }
}
