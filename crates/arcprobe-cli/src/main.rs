//! arcprobe CLI - Command-line utility for inspecting, testing and
//! extracting archives through 7-Zip.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use anyhow::Result;
use arcprobe_core::EngineConfig;
use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match run(&cli, &*formatter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            formatter.format_error(cli.command.name(), &err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &cli::Cli, formatter: &dyn output::OutputFormatter) -> Result<()> {
    let config = EngineConfig::new(&cli.sevenzip);
    log::debug!("using 7-Zip binary {}", config.program.display());

    match &cli.command {
        cli::Commands::List(args) => commands::list::execute(args, &config, formatter),
        cli::Commands::Info(args) => commands::info::execute(args, &config, formatter),
        cli::Commands::Test(args) => commands::test::execute(args, &config, formatter),
        cli::Commands::Extract(args) => {
            commands::extract::execute(args, &config, formatter, cli.quiet || cli.json)
        }
        cli::Commands::Completion(args) => {
            commands::completion::execute(args.shell);
            Ok(())
        }
    }
}

/// Routes `log` records to stderr. `RUST_LOG` overrides the flag-derived level.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
