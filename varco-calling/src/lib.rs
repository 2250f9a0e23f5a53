//! Variant calling over read alignments.
//!
//! For each SRA dataset, every aligned read is tested for whether it
//! supports the reference allele across a variant's interval
//! ([`containment`]); the per-variant tallies are collapsed into discrete
//! zygosity calls ([`zygosity`]); and datasets are fanned out across a
//! bounded rayon worker set ([`pipeline`]) using an even index-range
//! partitioner with a disjoint-map merge ([`partition`]). Thresholds live
//! in [`config::CallingConfig`] and can be loaded from YAML.
//!
//! The merged result is identical for every worker count: workers own
//! disjoint partitions, share no mutable state, and are joined before the
//! merge.

pub mod config;
pub mod consts;
pub mod containment;
pub mod errors;
pub mod partition;
pub mod pipeline;
pub mod zygosity;

// re-exports
pub use self::config::CallingConfig;
pub use self::containment::{supports_reference, Containment};
pub use self::errors::CallingError;
pub use self::partition::{merge_maps, partition};
pub use self::pipeline::call_datasets;
pub use self::zygosity::{call_dataset, call_zygosity};
