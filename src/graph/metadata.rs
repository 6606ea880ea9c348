//! Graph-level metadata attached to a finished tree.

use serde::Serialize;

/// Summary record computed once per tree, after construction finishes.
///
/// `model_id` is sequential and persisted across runs through the run
/// counters; `num_nodes` counts the nodes of this tree only, so
/// `num_intermediate_nodes + num_leaf_nodes + 1 == num_nodes` always
/// holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeMetadata {
    pub model_id: u64,
    /// ISO-8601 local date of generation.
    pub creation_date: String,
    pub num_nodes: u64,
    /// Always 1: a tree has exactly one top event.
    pub num_top_nodes: u64,
    pub num_intermediate_nodes: u64,
    pub num_leaf_nodes: u64,
    pub num_and_gates: u64,
    pub num_or_gates: u64,
}
