//! Archive inspection and extraction through the 7-Zip command-line tool.
//!
//! `arcprobe-core` runs the 7-Zip binary (`7zz` by default) and turns its
//! text output into structured records: the archive type, whether anything
//! is encrypted, archive-level properties and per-member metadata. On top of
//! that it can test a password and extract the archive. No archive format is
//! parsed here; 7-Zip does all of that.
//!
//! # Examples
//!
//! ```no_run
//! use arcprobe_core::Archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut archive = Archive::open("archive.7z")?;
//! println!("type: {}", archive.archive_type());
//!
//! if archive.is_encrypted() && !archive.test_password("hunter2") {
//!     eprintln!("wrong password");
//!     return Ok(());
//! }
//!
//! let report = archive.extract_to("/output/dir")?;
//! println!("Extracted {:?} files", report.files_extracted());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod config;
pub mod engine;
pub mod error;
pub mod extraction;
pub mod inspection;
pub mod parser;
pub mod report;
pub mod test_utils;
pub mod types;

// Re-export main API types
pub use api::extract_archive;
pub use api::open_archive;
pub use archive::Archive;
pub use archive::ArchiveBuilder;
pub use config::EngineConfig;
pub use engine::ArchiveEngine;
pub use engine::EngineOutput;
pub use engine::SevenZip;
pub use error::ArchiveError;
pub use error::Result;
pub use inspection::ArchiveListing;
pub use inspection::PasswordCheck;
pub use inspection::interpret_test_output;
pub use inspection::list_archive;
pub use parser::ArchiveMetadata;
pub use parser::DetailedListing;
pub use parser::OperationSummary;
pub use parser::parse_detailed_listing;
pub use parser::parse_listing_text;
pub use report::ExtractionReport;

// Re-export types module for easier access
pub use types::Entry;
pub use types::Header;
