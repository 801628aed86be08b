//! Extraction through the engine.

pub mod run;

pub use run::extract_with_engine;
