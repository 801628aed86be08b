//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arcprobe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// 7-Zip binary to run
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "ARCPROBE_7Z",
        default_value = arcprobe_core::config::DEFAULT_PROGRAM
    )]
    pub sevenzip: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List archive contents
    List(ListArgs),
    /// Show archive properties and member metadata
    Info(InfoArgs),
    /// Test a password against an encrypted archive
    Test(TestArgs),
    /// Extract archive contents
    Extract(ExtractArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

impl Commands {
    /// Operation name reported in JSON output.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::Info(_) => "info",
            Self::Test(_) => "test",
            Self::Extract(_) => "extract",
            Self::Completion(_) => "completion",
        }
    }
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Password for archives with encrypted headers
    #[arg(short, long)]
    pub password: Option<String>,

    /// Show one line per member instead of the 7-Zip table
    #[arg(short, long)]
    pub long: bool,

    /// Show sizes in human-readable format
    #[arg(short = 'H', long, requires = "long")]
    pub human_readable: bool,
}

#[derive(clap::Args)]
pub struct InfoArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Password for archives with encrypted headers
    #[arg(short, long)]
    pub password: Option<String>,
}

#[derive(clap::Args)]
pub struct TestArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Password to test
    #[arg(value_name = "PASSWORD")]
    pub password: String,
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Output directory (default: current directory)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Password for encrypted archives
    #[arg(short, long)]
    pub password: Option<String>,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
