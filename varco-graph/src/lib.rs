//! Variant co-occurrence graph.
//!
//! Variants are vertices; two variants share an edge if some SRA dataset
//! calls both of them, and the edge weight is the number of datasets that
//! do. Zygosity does not enter the weighting: a heterozygous and a
//! homozygous call count the same.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use varco_core::models::DatasetCalls;
//! use varco_graph::CoOccurrenceGraph;
//!
//! let mut calls = HashMap::new();
//! calls.insert(
//!     "SRR1".to_string(),
//!     DatasetCalls {
//!         heterozygous: vec!["rs1".to_string()],
//!         homozygous: vec!["rs2".to_string()],
//!         skipped_records: 0,
//!     },
//! );
//!
//! let graph = CoOccurrenceGraph::build(&calls);
//! assert_eq!(graph.weight("rs1", "rs2"), Some(1));
//! assert_eq!(graph.weight("rs2", "rs1"), Some(1));
//! ```

use std::collections::{BTreeSet, HashMap};

use varco_core::models::DatasetCalls;

///
/// Undirected weighted graph over variant identifiers, stored as a
/// symmetric adjacency map. Variants that never co-occur with another
/// variant are not materialized at all.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoOccurrenceGraph {
    adjacency: HashMap<String, HashMap<String, u32>>,
}

impl CoOccurrenceGraph {
    ///
    /// Build the graph from per-dataset call sets.
    ///
    /// For each dataset, the called variants (any non-absent zygosity)
    /// form a set; every unordered pair of distinct members gets its edge
    /// weight incremented by one. Pairs are drawn from a set, so
    /// self-edges cannot arise.
    ///
    pub fn build(calls: &HashMap<String, DatasetCalls>) -> Self {
        let mut graph = CoOccurrenceGraph::default();

        for dataset_calls in calls.values() {
            let variants: BTreeSet<&String> = dataset_calls.called_variants().collect();
            let variants: Vec<&String> = variants.into_iter().collect();

            for (index, a) in variants.iter().enumerate() {
                for b in &variants[index + 1..] {
                    graph.record_co_occurrence(a, b);
                }
            }
        }

        graph
    }

    fn record_co_occurrence(&mut self, a: &str, b: &str) {
        debug_assert_ne!(a, b);
        *self
            .adjacency
            .entry(a.to_string())
            .or_default()
            .entry(b.to_string())
            .or_insert(0) += 1;
        *self
            .adjacency
            .entry(b.to_string())
            .or_default()
            .entry(a.to_string())
            .or_insert(0) += 1;
    }

    /// Edge weight between two variants, if the edge exists. Symmetric.
    pub fn weight(&self, a: &str, b: &str) -> Option<u32> {
        self.adjacency.get(a)?.get(b).copied()
    }

    pub fn neighbors(&self, variant: &str) -> Option<&HashMap<String, u32>> {
        self.adjacency.get(variant)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum::<usize>() / 2
    }

    ///
    /// The graph as a deterministic edge list: one `(a, b, weight)` per
    /// undirected edge with `a < b`, sorted. This is the shape the edge
    /// list writer and the tests consume.
    ///
    pub fn sorted_edges(&self) -> Vec<(String, String, u32)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (a, neighbors) in &self.adjacency {
            for (b, weight) in neighbors {
                if a < b {
                    edges.push((a.clone(), b.clone(), *weight));
                }
            }
        }
        edges.sort();
        edges
    }
}
