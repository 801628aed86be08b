//! List command implementation

use crate::cli::ListArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use arcprobe_core::EngineConfig;
use arcprobe_core::open_archive;

pub fn execute(
    args: &ListArgs,
    config: &EngineConfig,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let archive = add_archive_context(
        open_archive(&args.archive, args.password.as_deref(), config),
        &args.archive,
    )?;

    formatter.format_listing(&archive, args.long, args.human_readable)
}
