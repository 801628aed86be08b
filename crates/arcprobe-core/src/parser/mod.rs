//! Parsers for the text printed by 7-Zip.
//!
//! Each parser works on buffered output only and never runs the tool, so
//! they can be tested against captured samples.

pub mod cursor;
pub mod detailed;
pub mod kv;
pub mod lines;
pub mod simple;
pub mod summary;

pub use detailed::ArchiveMetadata;
pub use detailed::DetailedListing;
pub use detailed::parse_detailed_listing;
pub use simple::parse_listing_text;
pub use summary::OperationSummary;
