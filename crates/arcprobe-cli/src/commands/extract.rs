//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliSpinner;
use anyhow::Context;
use anyhow::Result;
use arcprobe_core::EngineConfig;
use arcprobe_core::extract_archive;
use std::env;

pub fn execute(
    args: &ExtractArgs,
    config: &EngineConfig,
    formatter: &dyn OutputFormatter,
    silent: bool,
) -> Result<()> {
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };
    let password = args.password.as_deref().unwrap_or_default();

    // Spinner only on a terminal and only when output is meant for humans
    let spinner = (!silent && CliSpinner::should_show())
        .then(|| CliSpinner::new(&format!("Extracting {}", args.archive.display())));

    let result = extract_archive(&args.archive, &output_dir, password, config);
    drop(spinner);

    let report = add_archive_context(result, &args.archive)?;
    formatter.format_extraction_result(&args.archive, &report)?;

    Ok(())
}
