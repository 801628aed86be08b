//! Metadata records produced by the listing parser.

pub mod entry;
pub mod header;

pub use entry::Entry;
pub use header::Header;
