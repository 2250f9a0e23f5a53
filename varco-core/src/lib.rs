//! # Core models for varco.
//!
//! This crate holds the data types shared across the varco workspace:
//! alignment records parsed from Magic-BLAST tabular output, variant
//! interval lookups, read-evidence tallies and per-dataset zygosity call
//! sets. It also provides a couple of small file utilities (transparent
//! gzip reading, extension stripping) used by the io and calling crates.
//!
//! All types here are plain data: parsing lives in `varco-io` and the
//! calling logic lives in `varco-calling`.

pub mod models;
pub mod utils;

pub use models::{AlignmentRecord, DatasetCalls, Tally, VariantInterval, VariantIntervalMap, ZygosityCall};
