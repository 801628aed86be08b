//! Process-backed engine running the 7-Zip command-line binary.

use std::ffi::OsStr;
use std::ffi::OsString;
use std::io;
use std::io::Read;
use std::path::Path;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;

use log::debug;

use crate::ArchiveError;
use crate::EngineConfig;
use crate::Result;
use crate::engine::ArchiveEngine;
use crate::engine::EngineOutput;

/// Runs the configured 7-Zip binary and captures its output.
///
/// # Examples
///
/// ```no_run
/// use arcprobe_core::ArchiveEngine;
/// use arcprobe_core::EngineConfig;
/// use arcprobe_core::SevenZip;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let engine = SevenZip::new(EngineConfig::new("7z"));
/// let out = engine.list_detailed(Path::new("archive.zip"), "")?;
/// println!("{}", out.output);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SevenZip {
    config: EngineConfig,
}

impl SevenZip {
    /// Creates an engine for the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn run(&self, args: &[OsString]) -> Result<EngineOutput> {
        let program = &self.config.program;
        debug!("running {} {}", program.display(), redacted(args));

        let (status, combined) =
            run_combined(program, args).map_err(|source| ArchiveError::Launch {
                program: program.clone(),
                source,
            })?;

        let output = EngineOutput::from_status(status, &combined);
        debug!(
            "{} exited with {:?} ({} bytes of output)",
            program.display(),
            output.code,
            output.output.len()
        );
        Ok(output)
    }
}

/// Runs `program` with stdout and stderr sharing one pipe, so the captured
/// bytes keep the order the tool wrote them in.
fn run_combined(program: &Path, args: &[OsString]) -> io::Result<(ExitStatus, Vec<u8>)> {
    let (mut reader, writer) = io::pipe()?;

    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(writer.try_clone()?)
        .stderr(writer);
    let mut child = command.spawn()?;
    // The command still owns both write ends; the read below only sees EOF
    // once they are closed.
    drop(command);

    let mut combined = Vec::new();
    let read = reader.read_to_end(&mut combined);
    let status = child.wait()?;
    read?;
    Ok((status, combined))
}

impl ArchiveEngine for SevenZip {
    fn list_detailed(&self, archive: &Path, password: &str) -> Result<EngineOutput> {
        self.run(&detailed_listing_args(archive, password))
    }

    fn list_simple(&self, archive: &Path, password: &str) -> Result<EngineOutput> {
        self.run(&simple_listing_args(archive, password))
    }

    fn test(&self, archive: &Path, password: &str) -> Result<EngineOutput> {
        self.run(&test_args(archive, password))
    }

    fn extract(&self, archive: &Path, destination: &Path, password: &str) -> Result<EngineOutput> {
        self.run(&extract_args(archive, destination, password))
    }
}

fn password_switch(password: &str) -> OsString {
    OsString::from(format!("-p{password}"))
}

/// `l -slt -p<password> <archive>`
fn detailed_listing_args(archive: &Path, password: &str) -> Vec<OsString> {
    vec![
        "l".into(),
        "-slt".into(),
        password_switch(password),
        archive.into(),
    ]
}

/// `l -p<password> <archive>`
fn simple_listing_args(archive: &Path, password: &str) -> Vec<OsString> {
    vec!["l".into(), password_switch(password), archive.into()]
}

/// `t -bd -p<password> <archive>`
fn test_args(archive: &Path, password: &str) -> Vec<OsString> {
    vec![
        "t".into(),
        "-bd".into(),
        password_switch(password),
        archive.into(),
    ]
}

/// `x -aoa -bd -p<password> -o<destination> <archive>`
fn extract_args(archive: &Path, destination: &Path, password: &str) -> Vec<OsString> {
    let mut output_switch = OsString::from("-o");
    output_switch.push(destination);
    vec![
        "x".into(),
        "-aoa".into(),
        "-bd".into(),
        password_switch(password),
        output_switch,
        archive.into(),
    ]
}

fn redacted(args: &[OsString]) -> String {
    args.iter()
        .map(|arg| match arg.to_str() {
            Some(s) if s.starts_with("-p") && s.len() > 2 => "-p***".to_string(),
            _ => OsStr::to_string_lossy(arg).into_owned(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
