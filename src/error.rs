//! Defines the error types for the generator.
use crate::graph::NodeId;
use thiserror::Error;

/// All failure modes of the generator and its collaborators.
///
/// Configuration problems are detected up front, before any node is
/// created; I/O problems can only come from the counter file and the
/// export boundary.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("min_children must be at least 1 (got {0})")]
    MinChildrenTooSmall(u32),
    #[error("min_children ({min}) exceeds max_num_children ({max})")]
    ChildRangeInverted { min: u32, max: u32 },
    #[error("num_graphs must be at least 1")]
    NoGraphsRequested,
    #[error("probability_exponent must be at least 1 (got {0})")]
    ExponentTooSmall(i32),
    #[error("edge references unknown node {0}")]
    UnknownNode(NodeId),
    #[error("graph has no metadata; finalize it before exporting")]
    Unfinalized,
    #[error("failed to serialize model {model_id}")]
    Serialize {
        model_id: u64,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
