//! # Input/Output for varco.
//!
//! Readers and writers for the flat-file formats around the calling core:
//! Magic-BLAST tabular alignment output (`.mbo`, gzip'd or not), the
//! variant-interval table, the per-dataset zygosity report, and the
//! co-occurrence edge list. Everything in here is line-oriented text;
//! the parsing rules (which rows are skipped, which are errors) are the
//! interesting part and are documented per function.

pub mod consts;
pub mod error;
pub mod intervals;
pub mod mbo;
pub mod report;

// re-expose core functions
pub use consts::*;
pub use error::*;
pub use intervals::*;
pub use mbo::*;
pub use report::*;
