//! Archive inspection without extraction.
//!
//! Listing and password testing both run the tool and interpret its output;
//! nothing is written to disk.
//!
//! # Examples
//!
//! ```no_run
//! use arcprobe_core::Archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut archive = Archive::open("secret.7z")?;
//! if archive.is_encrypted() && archive.test_password("hunter2") {
//!     println!("password accepted");
//! }
//! # Ok(())
//! # }
//! ```

pub mod list;
pub mod verify;

pub use list::ArchiveListing;
pub use list::list_archive;
pub use verify::PasswordCheck;
pub use verify::interpret_test_output;
